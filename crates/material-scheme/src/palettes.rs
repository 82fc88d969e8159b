use serde::{Deserialize, Serialize};

use crate::dislike::fix_if_disliked;
use crate::temperature::TemperatureCache;
use crate::{Error, Hct, Result};

/// Hue and chroma of the system error palette, used whenever the caller
/// does not seed one.
pub const DEFAULT_ERROR_HUE: f64 = 25.0;
pub const DEFAULT_ERROR_CHROMA: f64 = 84.0;

/// Every tone of a single hue and chroma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    key_color: Hct,
}

impl TonalPalette {
    /// Palette with the hue and chroma of `hct`, keyed on `hct` itself.
    pub fn from_hct(hct: Hct) -> Self {
        Self {
            hue: hct.hue(),
            chroma: hct.chroma(),
            key_color: hct,
        }
    }

    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self {
            hue,
            chroma,
            key_color: key_color(hue, chroma),
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    pub fn key_color(&self) -> Hct {
        self.key_color
    }

    /// The palette's color at `tone`, which must lie in `0.0..=100.0`.
    pub fn tone(&self, tone: f64) -> Result<Hct> {
        if !(0.0..=100.0).contains(&tone) {
            return Err(Error::Domain {
                what: "tone",
                range: "0..=100",
                value: tone,
            });
        }
        Ok(self.at(tone))
    }

    /// Unchecked variant of [`TonalPalette::tone`] for tones computed
    /// in-crate, clamped into range.
    pub(crate) fn at(&self, tone: f64) -> Hct {
        Hct::from_hct(self.hue, self.chroma, tone.clamp(0.0, 100.0))
    }
}

/// The color of this hue whose tone is closest to 50 while still reaching
/// the requested chroma.
fn key_color(hue: f64, chroma: f64) -> Hct {
    let start_tone = 50.0;
    let mut smallest = Hct::from_hct(hue, chroma, start_tone);
    let mut smallest_delta = (smallest.chroma() - chroma).abs();

    let mut delta = 1.0;
    while delta < 50.0 {
        if chroma.round() == smallest.chroma().round() {
            return smallest;
        }

        for tone in [start_tone + delta, start_tone - delta] {
            let candidate = Hct::from_hct(hue, chroma, tone);
            let candidate_delta = (candidate.chroma() - chroma).abs();
            if candidate_delta < smallest_delta {
                smallest_delta = candidate_delta;
                smallest = candidate;
            }
        }

        delta += 1.0;
    }

    smallest
}

/// Names the six palettes of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteKind {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 6] = [
        PaletteKind::Primary,
        PaletteKind::Secondary,
        PaletteKind::Tertiary,
        PaletteKind::Neutral,
        PaletteKind::NeutralVariant,
        PaletteKind::Error,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::Primary => "primary",
            PaletteKind::Secondary => "secondary",
            PaletteKind::Tertiary => "tertiary",
            PaletteKind::Neutral => "neutral",
            PaletteKind::NeutralVariant => "neutralVariant",
            PaletteKind::Error => "error",
        }
    }

    /// Kebab-case name, as used in CSS custom properties.
    pub fn css_name(self) -> &'static str {
        match self {
            PaletteKind::NeutralVariant => "neutral-variant",
            other => other.name(),
        }
    }
}

/// The six palettes a scheme is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPaletteSet {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

impl ColorPaletteSet {
    /// A set from the five seeded palettes plus the system error palette.
    pub fn with_default_error(
        primary: TonalPalette,
        secondary: TonalPalette,
        tertiary: TonalPalette,
        neutral: TonalPalette,
        neutral_variant: TonalPalette,
    ) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
            neutral,
            neutral_variant,
            error: TonalPalette::from_hue_and_chroma(DEFAULT_ERROR_HUE, DEFAULT_ERROR_CHROMA),
        }
    }

    pub fn get(&self, kind: PaletteKind) -> &TonalPalette {
        match kind {
            PaletteKind::Primary => &self.primary,
            PaletteKind::Secondary => &self.secondary,
            PaletteKind::Tertiary => &self.tertiary,
            PaletteKind::Neutral => &self.neutral,
            PaletteKind::NeutralVariant => &self.neutral_variant,
            PaletteKind::Error => &self.error,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaletteKind, &TonalPalette)> {
        PaletteKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Seeds already converted to HCT. Only `primary` is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteSeeds {
    pub primary: Hct,
    pub secondary: Option<Hct>,
    pub tertiary: Option<Hct>,
    pub neutral: Option<Hct>,
    pub neutral_variant: Option<Hct>,
    pub error: Option<Hct>,
}

impl PaletteSeeds {
    pub fn from_primary(primary: Hct) -> Self {
        Self {
            primary,
            secondary: None,
            tertiary: None,
            neutral: None,
            neutral_variant: None,
            error: None,
        }
    }
}

/// Builds the palette set for `seeds`, deriving every missing palette from
/// the primary seed. A provided seed is always used as is.
pub fn resolve_palette_set(seeds: &PaletteSeeds) -> ColorPaletteSet {
    let source = seeds.primary;
    let primary = TonalPalette::from_hct(source);

    let secondary = seeds.secondary.map(TonalPalette::from_hct).unwrap_or_else(|| {
        TonalPalette::from_hue_and_chroma(
            source.hue(),
            (source.chroma() - 32.0).max(source.chroma() * 0.5),
        )
    });

    let tertiary = seeds.tertiary.map(TonalPalette::from_hct).unwrap_or_else(|| {
        let analogous = TemperatureCache::new(source).analogous(3, 6);
        TonalPalette::from_hct(fix_if_disliked(analogous[2]))
    });

    let neutral = seeds.neutral.map(TonalPalette::from_hct).unwrap_or_else(|| {
        TonalPalette::from_hue_and_chroma(source.hue(), source.chroma() / 8.0)
    });

    let neutral_variant = seeds
        .neutral_variant
        .map(TonalPalette::from_hct)
        .unwrap_or_else(|| {
            TonalPalette::from_hue_and_chroma(source.hue(), source.chroma() / 8.0 + 4.0)
        });

    let provisional =
        ColorPaletteSet::with_default_error(primary, secondary, tertiary, neutral, neutral_variant);
    let error = seeds
        .error
        .map(TonalPalette::from_hct)
        .unwrap_or(provisional.error);

    tracing::debug!(
        primary = %source,
        secondary_seeded = seeds.secondary.is_some(),
        tertiary_seeded = seeds.tertiary.is_some(),
        neutral_seeded = seeds.neutral.is_some(),
        neutral_variant_seeded = seeds.neutral_variant.is_some(),
        error_seeded = seeds.error.is_some(),
        "resolved palette set"
    );

    ColorPaletteSet { error, ..provisional }
}
