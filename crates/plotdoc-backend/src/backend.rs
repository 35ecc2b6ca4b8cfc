//! The backend trait and its support classification.

use std::path::Path;

use plotdoc_catalog::Node;
use rand::rngs::StdRng;

/// How a backend supports one capability value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// Implemented directly by the backend.
    Native,
    /// Emulated by composing native primitives.
    Recipe,
    /// Absent.
    Unsupported,
}

impl Support {
    /// Literal cell text used in rendered tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Support::Native => "native",
            Support::Recipe => "recipe",
            Support::Unsupported => "no",
        }
    }
}

/// Error raised by backend selection, statement execution or capture.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("unknown backend '{0}'")]
    UnknownBackend(String),

    #[error("not executable on this backend: {0}")]
    Unsupported(String),

    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    #[error("no frames captured for animation")]
    EmptyAnimation,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// A pluggable rendering backend.
///
/// Statement execution advances the backend's current-figure state; the
/// capture methods read that state back. There is no isolation between
/// examples beyond sequential ordering, so figure-level side effects of one
/// example are visible to the next until a plot call resets the figure.
pub trait Backend: std::fmt::Debug {
    /// Registered backend name, also used in artifact filenames.
    fn name(&self) -> &'static str;

    /// Argument names this backend understands.
    fn supported_attributes(&self) -> Vec<&'static str>;

    /// Series types with native or recipe support.
    fn supported_series_types(&self) -> Vec<&'static str>;

    /// Supported line styles.
    fn supported_styles(&self) -> Vec<&'static str>;

    /// Supported marker shapes.
    fn supported_markers(&self) -> Vec<&'static str>;

    /// Supported axis scales.
    fn supported_scales(&self) -> Vec<&'static str>;

    /// Three-state classification for one series type.
    fn series_type_support(&self, series_type: &str) -> Support;

    /// Enable or disable interactive display. Selection via the registry
    /// always disables it before the backend is handed out.
    fn set_display(&mut self, enabled: bool);

    /// Execute one statement against the current figure state.
    fn execute(&mut self, statement: &Node, rng: &mut StdRng) -> Result<(), BackendError>;

    /// Rasterize the current figure to a still PNG at `path`.
    fn rasterize(&mut self, path: &Path) -> Result<(), BackendError>;

    /// Encode the frames captured so far to an animated GIF at `path`.
    fn encode_animation(&mut self, path: &Path, fps: u32) -> Result<(), BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_cell_text() {
        assert_eq!(Support::Native.as_str(), "native");
        assert_eq!(Support::Recipe.as_str(), "recipe");
        assert_eq!(Support::Unsupported.as_str(), "no");
    }
}
