//! The caller-facing side of the engine: validated seeds, the mode switch
//! and the serializable output of one recomputation.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::dynamic::ContrastLevel;
use crate::hct::parse_hex;
use crate::palettes::{resolve_palette_set, PaletteSeeds};
use crate::scheme::{resolve_scheme_with, ResolvedScheme};
use crate::tones::enumerate_tones;
use crate::utils::to_hex;
use crate::{Hct, Result};

/// Seed used when the caller has not picked a primary color.
pub const DEFAULT_PRIMARY: &str = "#6750A4";

/// Which scheme the caller wants to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl Mode {
    /// Darkness and contrast level for this mode. `prefers_dark` only
    /// matters in high-contrast mode.
    pub fn resolve(self, prefers_dark: bool) -> (bool, ContrastLevel) {
        match self {
            Mode::Light => (false, ContrastLevel::Standard),
            Mode::Dark => (true, ContrastLevel::Standard),
            Mode::HighContrast => (prefers_dark, ContrastLevel::High),
        }
    }

    /// The mode after a light/dark toggle. High contrast falls back to light.
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark | Mode::HighContrast => Mode::Light,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
            Mode::HighContrast => "highContrast",
        };
        f.write_str(name)
    }
}

/// A hex seed color that is known to parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedColor(Srgb<u8>);

impl SeedColor {
    /// Parses `#rrggbb` or `rrggbb`, ignoring surrounding whitespace.
    pub fn parse(hex: &str) -> Result<Self> {
        parse_hex(hex.trim()).map(SeedColor)
    }

    pub fn rgb(&self) -> Srgb<u8> {
        self.0
    }

    pub fn hct(&self) -> Hct {
        Hct::from_rgb(self.0)
    }

    pub fn to_hex(&self) -> String {
        to_hex(self.0)
    }
}

impl fmt::Display for SeedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The caller's seed colors. Only `primary` is required; an absent seed is
/// derived from the primary one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedColors {
    pub primary: SeedColor,
    pub secondary: Option<SeedColor>,
    pub tertiary: Option<SeedColor>,
    pub neutral: Option<SeedColor>,
    pub neutral_variant: Option<SeedColor>,
    pub error: Option<SeedColor>,
}

impl SeedColors {
    pub fn from_primary(primary: SeedColor) -> Self {
        Self {
            primary,
            secondary: None,
            tertiary: None,
            neutral: None,
            neutral_variant: None,
            error: None,
        }
    }

    pub fn palette_seeds(&self) -> PaletteSeeds {
        let hct = |seed: Option<SeedColor>| seed.map(|s| s.hct());
        PaletteSeeds {
            primary: self.primary.hct(),
            secondary: hct(self.secondary),
            tertiary: hct(self.tertiary),
            neutral: hct(self.neutral),
            neutral_variant: hct(self.neutral_variant),
            error: hct(self.error),
        }
    }
}

impl Default for SeedColors {
    fn default() -> Self {
        SeedColors::from_primary(default_primary())
    }
}

fn default_primary() -> SeedColor {
    SeedColor(Srgb::new(0x67, 0x50, 0xa4))
}

/// Parses an optional seed, treating an empty string as absent.
fn optional_seed(hex: Option<&str>) -> Result<Option<SeedColor>> {
    match hex.map(str::trim) {
        None | Some("") => Ok(None),
        Some(hex) => SeedColor::parse(hex).map(Some),
    }
}

/// Everything a caller keeps between recomputations.
///
/// Setters validate before storing, so a rejected value leaves the previous
/// one in place. The last accepted write wins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThemeState {
    seeds: SeedColors,
    mode: Mode,
    prefers_dark: bool,
}

impl ThemeState {
    pub fn new(seeds: SeedColors, mode: Mode, prefers_dark: bool) -> Self {
        Self {
            seeds,
            mode,
            prefers_dark,
        }
    }

    pub fn seeds(&self) -> &SeedColors {
        &self.seeds
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    pub fn set_primary(&mut self, hex: &str) -> Result<()> {
        self.seeds.primary = SeedColor::parse(hex)?;
        Ok(())
    }

    pub fn set_secondary(&mut self, hex: Option<&str>) -> Result<()> {
        self.seeds.secondary = optional_seed(hex)?;
        Ok(())
    }

    pub fn set_tertiary(&mut self, hex: Option<&str>) -> Result<()> {
        self.seeds.tertiary = optional_seed(hex)?;
        Ok(())
    }

    pub fn set_neutral(&mut self, hex: Option<&str>) -> Result<()> {
        self.seeds.neutral = optional_seed(hex)?;
        Ok(())
    }

    pub fn set_neutral_variant(&mut self, hex: Option<&str>) -> Result<()> {
        self.seeds.neutral_variant = optional_seed(hex)?;
        Ok(())
    }

    pub fn set_error(&mut self, hex: Option<&str>) -> Result<()> {
        self.seeds.error = optional_seed(hex)?;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_prefers_dark(&mut self, prefers_dark: bool) {
        self.prefers_dark = prefers_dark;
    }

    /// Runs the engine on the current state.
    pub fn resolve(&self) -> ThemeOutput {
        recompute(&self.seeds, self.mode, self.prefers_dark)
    }
}

/// The result of one recomputation, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOutput {
    pub mode: Mode,
    pub is_dark: bool,
    pub high_contrast: bool,
    /// Role name to `#rrggbb`, in role declaration order.
    pub roles: IndexMap<&'static str, String>,
    /// Palette name to its tone ramp.
    pub palettes: IndexMap<&'static str, BTreeMap<u8, String>>,
    #[serde(skip)]
    pub scheme: ResolvedScheme,
}

/// Builds the palettes and resolves the scheme for one input snapshot.
pub fn recompute(seeds: &SeedColors, mode: Mode, prefers_dark: bool) -> ThemeOutput {
    let (is_dark, contrast) = mode.resolve(prefers_dark);
    let set = resolve_palette_set(&seeds.palette_seeds());
    let scheme = resolve_scheme_with(&set, is_dark, contrast);

    let palettes: IndexMap<&'static str, BTreeMap<u8, String>> = set
        .iter()
        .map(|(kind, palette)| {
            let ramp: BTreeMap<u8, String> = enumerate_tones(palette, kind)
                .into_iter()
                .map(|(tone, hct)| (tone, hct.to_hex()))
                .collect();
            (kind.name(), ramp)
        })
        .collect();

    tracing::debug!(%mode, is_dark, primary = %seeds.primary, "recomputed theme");

    ThemeOutput {
        mode,
        is_dark,
        high_contrast: contrast == ContrastLevel::High,
        roles: scheme.to_hex_map(),
        palettes,
        scheme,
    }
}
