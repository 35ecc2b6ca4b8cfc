//! Rendering backends for the documentation pipeline.
//!
//! A [`Backend`] executes catalog statements against an in-memory figure,
//! captures the result as PNG or GIF, and answers the capability queries
//! the table builders and the Markdown footer rely on. Backends are
//! registered by name; deprecated entries stay selectable but are excluded
//! from capability matrices.

pub mod attrs;
mod backend;
mod exec;
mod outline;
mod pixel;
mod registry;
pub mod symbols;

pub use backend::{Backend, BackendError, Support};
pub use outline::OutlineBackend;
pub use pixel::PixelBackend;
pub use registry::{active_backends, backend_names, select_backend};
