//! The built-in example catalog.
//!
//! Entries are ordered; the renderer executes them in catalog order and
//! derives image filenames from the entry index. Statement trees carry the
//! same source-position markers a parser would leave behind, which keeps
//! the normalizer honest in end-to-end runs.

use crate::node::Node;

/// What kind of media an example produces when captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Rasterize the current figure to a still PNG.
    Static,
    /// Encode the accumulated frames to an animated GIF.
    Animated,
}

/// One documentation example.
#[derive(Debug, Clone)]
pub struct ExampleSpec {
    /// Section heading text.
    pub header: String,
    /// Free-text description rendered under the heading.
    pub description: String,
    /// Statements executed in order against the backend.
    pub statements: Vec<Node>,
    /// Media produced by the capture step.
    pub media: MediaKind,
}

impl ExampleSpec {
    fn new(header: &str, description: &str, statements: Vec<Node>, media: MediaKind) -> Self {
        Self {
            header: header.to_owned(),
            description: description.to_owned(),
            statements,
            media,
        }
    }
}

/// The ordered example catalog.
///
/// Entry 2 is the animated example; everything else captures a still image.
#[must_use]
pub fn examples() -> Vec<ExampleSpec> {
    vec![
        ExampleSpec::new(
            "A simple line",
            "Plot a vector of values as a connected line. \
             Data is regenerated from a fixed seed on every run.",
            vec![Node::Block(vec![
                Node::line_info("catalog", 1),
                Node::assign("y", Node::call("rand", vec![Node::Int(20)])),
                Node::line_info("catalog", 2),
                Node::call("plot", vec![Node::ident("y"), Node::kw("label", Node::text("noise"))]),
            ])],
            MediaKind::Static,
        ),
        ExampleSpec::new(
            "Scatter markers",
            "Render the same data as unconnected markers by switching the series type.",
            vec![Node::Block(vec![
                Node::line_info("catalog", 1),
                Node::assign("y", Node::call("rand", vec![Node::Int(30)])),
                Node::line_info("catalog", 2),
                Node::call(
                    "scatter",
                    vec![
                        Node::ident("y"),
                        Node::kw("markershape", Node::sym("circle")),
                        Node::kw("markersize", Node::Int(6)),
                    ],
                ),
            ])],
            MediaKind::Static,
        ),
        ExampleSpec::new(
            "Animated noise",
            "Capture one frame per plot call and encode the sequence as an animation.",
            vec![Node::Block(vec![
                Node::line_info("catalog", 1),
                Node::call("plot", vec![Node::call("rand", vec![Node::Int(20)])]),
                Node::call("frame", vec![]),
                Node::line_info("catalog", 3),
                Node::call("plot", vec![Node::call("rand", vec![Node::Int(20)])]),
                Node::call("frame", vec![]),
                Node::line_info("catalog", 5),
                Node::call("plot", vec![Node::call("rand", vec![Node::Int(20)])]),
                Node::call("frame", vec![]),
            ])],
            MediaKind::Animated,
        ),
        ExampleSpec::new(
            "Histogram",
            "Bin a larger sample into a histogram. The `bins` keyword controls bin count.",
            vec![Node::Block(vec![
                Node::line_info("catalog", 1),
                Node::assign("x", Node::call("rand", vec![Node::Int(200)])),
                Node::line_info("catalog", 2),
                Node::call(
                    "histogram",
                    vec![Node::ident("x"), Node::kw("bins", Node::Int(20))],
                ),
            ])],
            MediaKind::Static,
        ),
        ExampleSpec::new(
            "Bar series",
            "Explicit data literals render the same way as generated data.",
            vec![Node::Block(vec![
                Node::line_info("catalog", 1),
                Node::call(
                    "bar",
                    vec![Node::List(vec![
                        Node::Float(3.0),
                        Node::Float(1.5),
                        Node::Float(4.0),
                        Node::Float(2.25),
                    ])],
                ),
            ])],
            MediaKind::Static,
        ),
        ExampleSpec::new(
            "Titles and guides",
            "Figure-level attributes are set by separate statements after the plot call. \
             They apply to the current figure.",
            vec![Node::Block(vec![
                Node::line_info("catalog", 1),
                Node::call("plot", vec![Node::call("rand", vec![Node::Int(40)])]),
                Node::line_info("catalog", 2),
                Node::call("title", vec![Node::text("Labeled figure")]),
                Node::call("xlabel", vec![Node::text("sample")]),
                Node::call("ylabel", vec![Node::text("value")]),
            ])],
            MediaKind::Static,
        ),
        ExampleSpec::new(
            "Line styles",
            "Dashed and widened strokes via the `linestyle` and `linewidth` keywords.",
            vec![Node::Block(vec![
                Node::line_info("catalog", 1),
                Node::call(
                    "plot",
                    vec![
                        Node::call("rand", vec![Node::Int(25)]),
                        Node::kw("linestyle", Node::sym("dash")),
                        Node::kw("linewidth", Node::Int(2)),
                    ],
                ),
            ])],
            MediaKind::Static,
        ),
        ExampleSpec::new(
            "Heatmap",
            "A matrix-valued series. Backends without native heatmap support skip this entry.",
            vec![Node::Block(vec![
                Node::line_info("catalog", 1),
                Node::assign("z", Node::call("rand", vec![Node::Int(64)])),
                Node::line_info("catalog", 2),
                Node::call("heatmap", vec![Node::ident("z")]),
            ])],
            MediaKind::Static,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let first = examples();
        let second = examples();
        let headers: Vec<_> = first.iter().map(|e| e.header.clone()).collect();
        let headers2: Vec<_> = second.iter().map(|e| e.header.clone()).collect();
        assert_eq!(headers, headers2);
    }

    #[test]
    fn test_exactly_one_animated_entry() {
        let catalog = examples();
        let animated: Vec<_> = catalog
            .iter()
            .enumerate()
            .filter(|(_, e)| e.media == MediaKind::Animated)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(animated, vec![2]);
    }

    #[test]
    fn test_entries_carry_line_info_markers() {
        let catalog = examples();
        for example in &catalog {
            let has_marker = example.statements.iter().any(|s| match s {
                Node::Block(children) => children.iter().any(Node::is_line_info),
                other => other.is_line_info(),
            });
            assert!(has_marker, "{} has no markers", example.header);
        }
    }
}
