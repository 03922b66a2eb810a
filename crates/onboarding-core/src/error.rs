use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building an [`OnboardingConfig`](crate::OnboardingConfig)
/// from external data. Flow operations themselves never fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}
