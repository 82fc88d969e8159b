//! The `theme.yaml` file and command line overrides on top of it.

use std::path::Path;

use material_scheme::{Mode, ThemeState};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const THEME_FILE_NAME: &str = "theme.yaml";

/// Theme inputs as written in `theme.yaml`. Every field is optional; a
/// missing primary falls back to the baseline seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub neutral: Option<String>,
    pub neutral_variant: Option<String>,
    pub error: Option<String>,
    pub mode: Option<Mode>,
    pub prefers_dark: Option<bool>,
}

impl ThemeConfig {
    pub fn parse(input: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if input.trim().is_empty() {
            return Ok(ThemeConfig::default());
        }
        serde_yaml::from_str(input)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = ThemeConfig::parse(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded theme config");

        Ok(config)
    }

    /// Loads `path` when given, otherwise `theme.yaml` in `working_dir` if
    /// there is one.
    pub fn discover(path: Option<&Path>, working_dir: &Path) -> Result<Self> {
        match path {
            Some(path) => ThemeConfig::load(path),
            None => {
                let default_path = working_dir.join(THEME_FILE_NAME);
                if default_path.is_file() {
                    ThemeConfig::load(&default_path)
                } else {
                    Ok(ThemeConfig::default())
                }
            }
        }
    }

    /// Fields set in `overrides` replace the ones in `self`.
    pub fn overlay(self, overrides: ThemeConfig) -> ThemeConfig {
        ThemeConfig {
            primary: overrides.primary.or(self.primary),
            secondary: overrides.secondary.or(self.secondary),
            tertiary: overrides.tertiary.or(self.tertiary),
            neutral: overrides.neutral.or(self.neutral),
            neutral_variant: overrides.neutral_variant.or(self.neutral_variant),
            error: overrides.error.or(self.error),
            mode: overrides.mode.or(self.mode),
            prefers_dark: overrides.prefers_dark.or(self.prefers_dark),
        }
    }

    /// Validates every seed and builds the state the commands render.
    pub fn into_state(self) -> Result<ThemeState> {
        let mut state = ThemeState::default();

        if let Some(primary) = self.primary.as_deref().filter(|p| !p.trim().is_empty()) {
            state.set_primary(primary)?;
        }
        state.set_secondary(self.secondary.as_deref())?;
        state.set_tertiary(self.tertiary.as_deref())?;
        state.set_neutral(self.neutral.as_deref())?;
        state.set_neutral_variant(self.neutral_variant.as_deref())?;
        state.set_error(self.error.as_deref())?;
        state.set_mode(self.mode.unwrap_or_default());
        state.set_prefers_dark(self.prefers_dark.unwrap_or(false));

        Ok(state)
    }
}
