//! CLI error types.

use plotdoc_backend::BackendError;
use plotdoc_render::DocError;
use plotdoc_tables::TableError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Backend(#[from] BackendError),

    #[error("{0}")]
    Doc(#[from] DocError),

    #[error("{0}")]
    Table(#[from] TableError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
