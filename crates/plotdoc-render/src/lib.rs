//! Example execution and Markdown document rendering.
//!
//! The driver walks the example catalog in order for one backend,
//! executing each entry with a freshly seeded generator, capturing media,
//! and appending a section per success. Failures become warnings; the run
//! always finishes with the capability footer.

mod doc;

pub use doc::{
    ANIMATION_FPS, EXAMPLE_SEED, DocError, RenderOptions, RenderReport, render_backend_doc,
};
