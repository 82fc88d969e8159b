//! HCT, the hue / chroma / tone color space.
//!
//! Hue and chroma are CAM16's, tone is CIE L*. Tone alone decides contrast
//! between two colors, which is what makes tonal palettes work: any two
//! colors 40 tones apart meet a 3:1 contrast ratio, 50 apart meet 4.5:1.

use std::fmt;

use palette::Srgb;

use crate::cam16::Cam16;
use crate::utils::{lstar_from_srgb, sanitize_degrees, srgb_from_lstar, to_hex};
use crate::{Error, Result};

const CHROMA_SEARCH_ENDPOINT: f64 = 0.4;
const DE_MAX: f64 = 1.0;
const DL_MAX: f64 = 0.2;
const LIGHTNESS_SEARCH_ENDPOINT: f64 = 0.01;

/// A color in HCT, always backed by the concrete sRGB color it resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    rgb: Srgb<u8>,
}

impl Hct {
    /// Finds the sRGB color closest to the requested hue, chroma and tone.
    ///
    /// Tone is honored first, then hue. When the chroma is out of gamut for
    /// that hue and tone, the most chromatic in-gamut color is returned, so
    /// the resulting [`Hct::chroma`] may be lower than requested.
    pub fn from_hct(hue: f64, chroma: f64, tone: f64) -> Hct {
        Hct::from_rgb(solve_to_rgb(hue, chroma, tone))
    }

    pub fn from_rgb(rgb: Srgb<u8>) -> Hct {
        let cam = Cam16::from_srgb(rgb);
        Hct {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: lstar_from_srgb(rgb),
            rgb,
        }
    }

    /// Parses `#RRGGBB` or `RRGGBB`, case-insensitively.
    pub fn from_hex(hex: &str) -> Result<Hct> {
        parse_hex(hex).map(Hct::from_rgb)
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    pub fn tone(&self) -> f64 {
        self.tone
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        to_hex(self.rgb)
    }
}

impl fmt::Display for Hct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (H{:.1} C{:.1} T{:.1})",
            self.to_hex(),
            self.hue,
            self.chroma,
            self.tone
        )
    }
}

pub fn parse_hex(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(hex.to_string()));
    }

    let value =
        u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidColor(hex.to_string()))?;

    Ok(Srgb::new(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}

fn solve_to_rgb(hue: f64, chroma: f64, lstar: f64) -> Srgb<u8> {
    if chroma < 1.0 || lstar.round() <= 0.0 || lstar.round() >= 100.0 {
        return srgb_from_lstar(lstar);
    }

    let hue = sanitize_degrees(hue);

    let mut high = chroma;
    let mut mid = chroma;
    let mut low: f64 = 0.0;
    let mut first_loop = true;
    let mut answer = None;

    while (low - high).abs() >= CHROMA_SEARCH_ENDPOINT {
        let candidate = find_by_j(hue, mid, lstar);

        if first_loop {
            if let Some(rgb) = candidate {
                return rgb;
            }
            first_loop = false;
            mid = low + (high - low) / 2.0;
            continue;
        }

        match candidate {
            None => high = mid,
            Some(rgb) => {
                answer = Some(rgb);
                low = mid;
            }
        }

        mid = low + (high - low) / 2.0;
    }

    answer.unwrap_or_else(|| srgb_from_lstar(lstar))
}

/// Binary search over CAM16 J for an in-gamut color with the requested hue
/// and chroma whose L* lands within `DL_MAX` of `lstar`.
fn find_by_j(hue: f64, chroma: f64, lstar: f64) -> Option<Srgb<u8>> {
    let mut low: f64 = 0.0;
    let mut high: f64 = 100.0;
    let mut best_dl = f64::MAX;
    let mut best_de = f64::MAX;
    let mut best = None;

    while (low - high).abs() > LIGHTNESS_SEARCH_ENDPOINT {
        let mid = low + (high - low) / 2.0;
        let clipped = Cam16::from_jch(mid, chroma, hue).to_srgb();
        let clipped_lstar = lstar_from_srgb(clipped);
        let d_l = (lstar - clipped_lstar).abs();

        if d_l < DL_MAX {
            let cam_clipped = Cam16::from_srgb(clipped);
            let d_e =
                cam_clipped.distance(&Cam16::from_jch(cam_clipped.j, cam_clipped.chroma, hue));
            if d_e <= DE_MAX && d_e <= best_de {
                best_dl = d_l;
                best_de = d_e;
                best = Some(clipped);
            }
        }

        if best_dl == 0.0 && best_de == 0.0 {
            break;
        }

        if clipped_lstar < lstar {
            low = mid;
        } else {
            high = mid;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        let with = Hct::from_hex("#6750A4").unwrap();
        let without = Hct::from_hex("6750a4").unwrap();
        assert_eq!(with, without);
        assert_eq!(with.to_hex(), "#6750a4");
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["red", "#12345", "#GGGGGG", "", "#", "#1234567", "12 456", "#fff"] {
            match Hct::from_hex(input) {
                Err(Error::InvalidColor(value)) => assert_eq!(value, input),
                other => panic!("expected InvalidColor for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_color_message_names_the_value() {
        let err = Hct::from_hex("#GGGGGG").unwrap_err();
        assert!(err.to_string().contains("#GGGGGG"), "{err}");
    }

    #[test]
    fn baseline_purple_matches_known_coordinates() {
        let hct = Hct::from_hex("#6750A4").unwrap();
        assert!((hct.hue() - 299.0).abs() < 1.0, "hue = {}", hct.hue());
        assert!((hct.chroma() - 47.9).abs() < 1.5, "chroma = {}", hct.chroma());
        assert!((hct.tone() - 40.0).abs() < 0.5, "tone = {}", hct.tone());
    }

    #[test]
    fn black_and_white() {
        let black = Hct::from_hex("#000000").unwrap();
        assert!(black.tone().abs() < 0.01);
        assert!(black.chroma() < 0.01);

        let white = Hct::from_hex("#ffffff").unwrap();
        assert!((white.tone() - 100.0).abs() < 0.01);

        assert_eq!(Hct::from_hct(120.0, 40.0, 0.0).to_hex(), "#000000");
        assert_eq!(Hct::from_hct(120.0, 40.0, 100.0).to_hex(), "#ffffff");
    }

    #[test]
    fn zero_chroma_gives_gray_of_that_tone() {
        let gray = Hct::from_hct(200.0, 0.0, 50.0);
        let rgb = gray.rgb();
        assert_eq!(rgb.red, rgb.green);
        assert_eq!(rgb.green, rgb.blue);
        assert!((gray.tone() - 50.0).abs() < 0.5);
    }

    #[test]
    fn round_trip_is_within_one_step_and_idempotent() {
        for hex in ["#6750a4", "#b3261e", "#006a6a", "#7d5260", "#1f1f1f", "#e8def8"] {
            let seed = Hct::from_hex(hex).unwrap();
            let once = Hct::from_hct(seed.hue(), seed.chroma(), seed.tone());
            let twice = Hct::from_hct(once.hue(), once.chroma(), once.tone());

            let a = seed.rgb();
            let b = once.rgb();
            for (x, y) in [(a.red, b.red), (a.green, b.green), (a.blue, b.blue)] {
                assert!(x.abs_diff(y) <= 2, "{hex} -> {}", once.to_hex());
            }
            assert!((once.tone() - seed.tone()).abs() < 0.5);
            assert_eq!(
                Hct::from_hct(twice.hue(), twice.chroma(), twice.tone()).to_hex(),
                twice.to_hex()
            );
        }
    }

    #[test]
    fn out_of_gamut_chroma_is_reduced_not_rejected() {
        let hct = Hct::from_hct(282.0, 200.0, 50.0);
        assert!(hct.chroma() < 200.0);
        assert!((hct.tone() - 50.0).abs() < 1.0, "tone = {}", hct.tone());
        assert!((hct.hue() - 282.0).abs() < 3.0, "hue = {}", hct.hue());
    }

    #[test]
    fn saturated_requests_keep_tone_and_hue_around_the_wheel() {
        for hue in (0..360).step_by(30) {
            let hct = Hct::from_hct(hue as f64, 150.0, 60.0);
            let hue_delta = (hct.hue() - hue as f64).abs();
            let hue_delta = hue_delta.min(360.0 - hue_delta);

            assert!(hct.chroma() < 150.0, "{hct}");
            assert!((hct.tone() - 60.0).abs() < 0.5, "{hct}");
            assert!(hue_delta < 2.5, "{hue} -> {hct}");
        }
    }
}
