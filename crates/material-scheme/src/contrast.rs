//! WCAG contrast ratios expressed in tones.
//!
//! Tone is L*, so the relative luminance behind a ratio can be recovered from
//! the tone alone and the answer holds for every hue and chroma.

use crate::utils::{lstar_from_y, y_from_lstar};

/// Contrast ratio of two tones, 1.0 to 21.0.
pub fn ratio_of_tones(tone_a: f64, tone_b: f64) -> f64 {
    let tone_a = tone_a.clamp(0.0, 100.0);
    let tone_b = tone_b.clamp(0.0, 100.0);
    ratio_of_ys(y_from_lstar(tone_a), y_from_lstar(tone_b))
}

fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let lighter = y1.max(y2);
    let darker = if lighter == y2 { y1 } else { y2 };
    (lighter + 5.0) / (darker + 5.0)
}

/// A tone at least `ratio` lighter than `tone`, or `None` when that would
/// exceed 100.
pub fn lighter(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }

    let dark_y = y_from_lstar(tone);
    let light_y = ratio * (dark_y + 5.0) - 5.0;
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > 0.04 {
        return None;
    }

    // Small nudge so that rounding on the way to sRGB does not drop the
    // result below the requested ratio.
    let value = lstar_from_y(light_y) + 0.4;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// A tone at least `ratio` darker than `tone`, or `None` when that would go
/// below 0.
pub fn darker(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }

    let light_y = y_from_lstar(tone);
    let dark_y = ((light_y + 5.0) / ratio) - 5.0;
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > 0.04 {
        return None;
    }

    let value = lstar_from_y(dark_y) - 0.4;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// Like [`lighter`], falling back to white.
pub fn lighter_unsafe(tone: f64, ratio: f64) -> f64 {
    lighter(tone, ratio).unwrap_or(100.0)
}

/// Like [`darker`], falling back to black.
pub fn darker_unsafe(tone: f64, ratio: f64) -> f64 {
    darker(tone, ratio).unwrap_or(0.0)
}
