//! CLI error types.

use rustcn_config::ConfigError;
use rustcn_site::{RenderError, SectionError, ValidationError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Section(#[from] SectionError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}
