//! CLI error types.

use prewrap_config::ConfigError;
use prewrap_transform::PipelineError;
use prewrap_tree::TreeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document: {0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Pipeline(#[from] PipelineError),
}
