//! Capability matrices and attribute tables, rendered to HTML.
//!
//! The builders produce in-memory tables from backend capability queries
//! and the attribute registries; [`html`] turns a [`RenderedTable`] into a
//! self-contained HTML document.

pub mod attr;
pub mod html;
pub mod support;

pub use attr::{AttributeRow, build_attribute_rows};
pub use html::{RenderedTable, TableError, TableStyle, escape_html, render_document, write_document};
pub use support::{Classifier, SupportMatrix, build_support_matrix};
