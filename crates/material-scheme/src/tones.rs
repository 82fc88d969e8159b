//! Discrete tone ramps for presenting palettes.

use once_cell::sync::Lazy;

use crate::palettes::{PaletteKind, TonalPalette};
use crate::Hct;

/// Tones listed for every palette.
pub const STANDARD_TONES: [u8; 16] = [0, 10, 20, 25, 30, 35, 40, 50, 60, 70, 80, 90, 95, 98, 99, 100];

/// Extra tones the surface roles draw from, listed for the neutral palette only.
pub const NEUTRAL_EXTRA_TONES: [u8; 10] = [4, 6, 12, 17, 22, 24, 87, 92, 94, 96];

static NEUTRAL_TONES: Lazy<Vec<u8>> = Lazy::new(|| {
    let mut tones: Vec<u8> = STANDARD_TONES
        .iter()
        .chain(NEUTRAL_EXTRA_TONES.iter())
        .copied()
        .collect();
    tones.sort_unstable();
    tones.dedup();
    tones
});

/// The tones listed for a palette of `kind`, ascending.
pub fn tones_for(kind: PaletteKind) -> &'static [u8] {
    match kind {
        PaletteKind::Neutral => NEUTRAL_TONES.as_slice(),
        _ => &STANDARD_TONES[..],
    }
}

/// `(tone, color)` for every listed tone of `palette`, ascending.
pub fn enumerate_tones(palette: &TonalPalette, kind: PaletteKind) -> Vec<(u8, Hct)> {
    tones_for(kind)
        .iter()
        .map(|&tone| (tone, palette.at(tone as f64)))
        .collect()
}
