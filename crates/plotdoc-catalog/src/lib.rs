//! Statement trees and the built-in example catalog.
//!
//! Examples are stored as parsed statement trees ([`Node`]) rather than
//! source text, so the same catalog entry can be executed by a backend and
//! rendered into a fenced code block. Source-position markers survive
//! parsing as [`Node::LineInfo`] children; [`normalize`] strips them before
//! display.

mod catalog;
pub mod node;
pub mod normalize;

pub use catalog::{ExampleSpec, MediaKind, examples};
pub use node::Node;
pub use normalize::{statement_text, strip_line_info};
