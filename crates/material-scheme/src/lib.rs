//! Material 3 color schemes derived from seed colors.
//!
//! Colors are handled in HCT (CAM16 hue and chroma, CIE L* tone), so that
//! tonal palettes keep a consistent perceived hue and every tone has a
//! predictable contrast against every other tone.

use thiserror::Error;

pub mod cam16;
pub mod contrast;
pub mod dislike;
pub mod dynamic;
pub mod hct;
pub mod palettes;
pub mod scheme;
pub mod temperature;
pub mod theme;
pub mod tones;
pub mod utils;

pub use dynamic::ContrastLevel;
pub use hct::Hct;
pub use palettes::{resolve_palette_set, ColorPaletteSet, PaletteKind, PaletteSeeds, TonalPalette};
pub use scheme::{resolve_scheme, resolve_scheme_with, ResolvedScheme, Role};
pub use theme::{recompute, Mode, SeedColor, SeedColors, ThemeOutput, ThemeState};
pub use tones::enumerate_tones;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Cannot parse the color `{0}`. Expected a hex color such as #6750A4 or 6750a4")]
    InvalidColor(String),
    #[error("{what} must be within {range}, got {value}")]
    Domain {
        what: &'static str,
        range: &'static str,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn baseline_seed_end_to_end() {
        let seeds = PaletteSeeds::from_primary(Hct::from_hex("#6750A4").unwrap());
        let set = resolve_palette_set(&seeds);

        let light = resolve_scheme(&set, false, 0.0).unwrap();
        let dark = resolve_scheme(&set, true, 0.0).unwrap();

        assert_eq!(light.get(Role::Primary), set.primary.tone(40.0).unwrap());
        assert_eq!(dark.get(Role::Primary), set.primary.tone(80.0).unwrap());
        assert_eq!(light.palettes().primary.hue(), dark.palettes().primary.hue());
        assert_eq!(light.palettes().primary.chroma(), dark.palettes().primary.chroma());
    }

    #[test]
    fn errors_describe_the_input() {
        let err = Hct::from_hex("#zzzzzz").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot parse the color `#zzzzzz`. Expected a hex color such as #6750A4 or 6750a4"
        );

        let palette = TonalPalette::from_hue_and_chroma(0.0, 0.0);
        let err = palette.tone(101.0).unwrap_err();
        assert_eq!(err.to_string(), "tone must be within 0..=100, got 101");
    }
}
