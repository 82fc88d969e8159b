use std::path::PathBuf;

use thiserror::Error;

pub mod commands {
    pub mod css;
    pub mod init;
    pub mod json;
    pub mod scheme;
    pub mod tones;
}

pub mod config;
mod render;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Scheme(#[from] material_scheme::Error),
    #[error("Invalid theme file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Could not serialize the theme: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    General(String),
}
