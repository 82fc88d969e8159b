//! Contrast machinery for roles whose tone depends on the contrast level.
//!
//! A role with a contrast rule names the role it sits on, a [`ContrastCurve`]
//! giving the ratio it must reach at each contrast level, and optionally a
//! [`ToneDeltaPair`] tying it to a sibling role.

use serde::{Deserialize, Serialize};

use crate::contrast::{darker_unsafe, lighter_unsafe, ratio_of_tones};
use crate::utils::lerp;
use crate::{Error, Result};

/// Contrast levels a scheme can be resolved at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContrastLevel {
    #[default]
    Standard,
    High,
}

impl ContrastLevel {
    pub fn value(self) -> f64 {
        match self {
            ContrastLevel::Standard => 0.0,
            ContrastLevel::High => 1.0,
        }
    }
}

impl TryFrom<f64> for ContrastLevel {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if value == 0.0 {
            Ok(ContrastLevel::Standard)
        } else if value == 1.0 {
            Ok(ContrastLevel::High)
        } else {
            Err(Error::Domain {
                what: "contrast level",
                range: "0 or 1",
                value,
            })
        }
    }
}

/// Required contrast ratio at contrast levels -1, 0, 0.5 and 1, linearly
/// interpolated in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCurve {
    low: f64,
    normal: f64,
    medium: f64,
    high: f64,
}

impl ContrastCurve {
    pub const fn new(low: f64, normal: f64, medium: f64, high: f64) -> Self {
        Self {
            low,
            normal,
            medium,
            high,
        }
    }

    pub fn get(&self, contrast_level: f64) -> f64 {
        if contrast_level <= -1.0 {
            self.low
        } else if contrast_level < 0.0 {
            lerp(self.low, self.normal, contrast_level + 1.0)
        } else if contrast_level < 0.5 {
            lerp(self.normal, self.medium, contrast_level / 0.5)
        } else if contrast_level < 1.0 {
            lerp(self.medium, self.high, (contrast_level - 0.5) / 0.5)
        } else {
            self.high
        }
    }
}

/// Keeps two roles on the same background at least `delta` tones apart,
/// with `nearer` closer to the background's tone than `farther`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneDeltaPair<R> {
    pub nearer: R,
    pub farther: R,
    pub delta: f64,
    pub stay_together: bool,
}

/// Inputs for solving one side of a [`ToneDeltaPair`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairTones {
    pub background: f64,
    pub nearer_initial: f64,
    pub nearer_ratio: f64,
    pub farther_initial: f64,
    pub farther_ratio: f64,
}

/// Whether text on a background of this tone should be light.
pub fn tone_prefers_light_foreground(tone: f64) -> bool {
    tone.round() < 60.0
}

/// The tone closest to reaching `ratio` against `bg_tone`, preferring the
/// polarity that suits the background.
pub fn foreground_tone(bg_tone: f64, ratio: f64) -> f64 {
    let lighter_tone = lighter_unsafe(bg_tone, ratio);
    let darker_tone = darker_unsafe(bg_tone, ratio);
    let lighter_ratio = ratio_of_tones(lighter_tone, bg_tone);
    let darker_ratio = ratio_of_tones(darker_tone, bg_tone);

    if tone_prefers_light_foreground(bg_tone) {
        let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
            && lighter_ratio < ratio
            && darker_ratio < ratio;
        if lighter_ratio >= ratio || lighter_ratio >= darker_ratio || negligible_difference {
            lighter_tone
        } else {
            darker_tone
        }
    } else if darker_ratio >= ratio || darker_ratio >= lighter_ratio {
        darker_tone
    } else {
        lighter_tone
    }
}

/// Moves `tone` until it reaches `ratio` against `bg_tone`, leaving it alone
/// when it already does. Background roles additionally skip the 50..60 band,
/// where neither light nor dark content reads well.
pub fn contrasting_tone(tone: f64, bg_tone: f64, ratio: f64, is_background: bool) -> f64 {
    let mut answer = tone;
    if ratio_of_tones(bg_tone, answer) < ratio {
        answer = foreground_tone(bg_tone, ratio);
    }

    if is_background && (50.0..60.0).contains(&answer) {
        answer = if ratio_of_tones(49.0, bg_tone) >= ratio {
            49.0
        } else {
            60.0
        };
    }

    answer
}

/// Solves both tones of a pair; returns `(nearer, farther)`.
pub fn solve_pair(tones: PairTones, delta: f64, stay_together: bool, is_dark: bool) -> (f64, f64) {
    let expansion_dir = if is_dark { 1.0 } else { -1.0 };

    let mut n_tone = if ratio_of_tones(tones.background, tones.nearer_initial) >= tones.nearer_ratio
    {
        tones.nearer_initial
    } else {
        foreground_tone(tones.background, tones.nearer_ratio)
    };
    let mut f_tone =
        if ratio_of_tones(tones.background, tones.farther_initial) >= tones.farther_ratio {
            tones.farther_initial
        } else {
            foreground_tone(tones.background, tones.farther_ratio)
        };

    if (f_tone - n_tone) * expansion_dir < delta {
        f_tone = (n_tone + delta * expansion_dir).clamp(0.0, 100.0);
        if (f_tone - n_tone) * expansion_dir < delta {
            n_tone = (f_tone - delta * expansion_dir).clamp(0.0, 100.0);
        }
    }

    let in_avoided_band = |tone: f64| (50.0..60.0).contains(&tone);

    if in_avoided_band(n_tone) || (stay_together && in_avoided_band(f_tone)) {
        if expansion_dir > 0.0 {
            n_tone = 60.0;
            f_tone = f_tone.max(n_tone + delta * expansion_dir);
        } else {
            n_tone = 49.0;
            f_tone = f_tone.min(n_tone + delta * expansion_dir);
        }
    } else if in_avoided_band(f_tone) {
        f_tone = if expansion_dir > 0.0 { 60.0 } else { 49.0 };
    }

    (n_tone, f_tone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_level_accepts_only_zero_and_one() {
        assert_eq!(ContrastLevel::try_from(0.0).unwrap(), ContrastLevel::Standard);
        assert_eq!(ContrastLevel::try_from(1.0).unwrap(), ContrastLevel::High);
        for bad in [0.5, -1.0, 2.0, f64::NAN] {
            assert!(matches!(
                ContrastLevel::try_from(bad),
                Err(Error::Domain {
                    what: "contrast level",
                    ..
                })
            ));
        }
    }

    #[test]
    fn curve_interpolates_between_levels() {
        let curve = ContrastCurve::new(3.0, 4.5, 7.0, 7.0);
        assert_eq!(curve.get(-2.0), 3.0);
        assert_eq!(curve.get(-0.5), 3.75);
        assert_eq!(curve.get(0.0), 4.5);
        assert_eq!(curve.get(0.25), 5.75);
        assert_eq!(curve.get(1.0), 7.0);
    }

    #[test]
    fn foreground_tone_picks_polarity_from_background() {
        let on_dark = foreground_tone(20.0, 4.5);
        assert!(on_dark > 20.0);
        assert!(ratio_of_tones(20.0, on_dark) >= 4.5);

        let on_light = foreground_tone(90.0, 4.5);
        assert!(on_light < 90.0);
        assert!(ratio_of_tones(90.0, on_light) >= 4.5);
    }

    #[test]
    fn contrasting_tone_keeps_good_enough_tones() {
        assert_eq!(contrasting_tone(10.0, 90.0, 4.5, false), 10.0);
        let moved = contrasting_tone(40.0, 87.0, 7.0, true);
        assert!(moved < 40.0);
        assert!(ratio_of_tones(87.0, moved) >= 7.0);
    }

    #[test]
    fn pair_keeps_its_delta() {
        let tones = PairTones {
            background: 87.0,
            nearer_initial: 90.0,
            nearer_ratio: 4.5,
            farther_initial: 40.0,
            farther_ratio: 7.0,
        };
        let (nearer, farther) = solve_pair(tones, 10.0, false, false);
        assert!(nearer - farther >= 10.0, "{nearer} {farther}");
        assert!(ratio_of_tones(87.0, farther) >= 7.0);
        assert!(!(50.0..60.0).contains(&nearer));
    }

    #[test]
    fn pair_in_dark_expands_upwards() {
        let tones = PairTones {
            background: 24.0,
            nearer_initial: 30.0,
            nearer_ratio: 4.5,
            farther_initial: 80.0,
            farther_ratio: 7.0,
        };
        let (nearer, farther) = solve_pair(tones, 10.0, false, true);
        assert!(farther - nearer >= 10.0, "{nearer} {farther}");
        assert!(nearer >= 60.0 || nearer < 50.0);
    }

    #[test]
    fn light_foreground_threshold() {
        assert!(tone_prefers_light_foreground(59.4));
        assert!(!tone_prefers_light_foreground(59.6));
    }
}
