//! Expression normalization for display.
//!
//! Statement trees carry source-position markers interleaved with semantic
//! nodes. Before a statement lands in a fenced code block those markers are
//! filtered out, on a copy, so the catalog entry itself is never mutated.

use std::fmt::Write;

use crate::node::Node;

/// Return a copy of `node` with source-position markers removed from every
/// composite node's child list, at any depth.
#[must_use]
pub fn strip_line_info(node: &Node) -> Node {
    match node {
        Node::Block(children) => Node::Block(strip_children(children)),
        Node::Call { name, args } => Node::Call {
            name: name.clone(),
            args: strip_children(args),
        },
        Node::Keyword { name, value } => Node::Keyword {
            name: name.clone(),
            value: Box::new(strip_line_info(value)),
        },
        Node::Assign { target, value } => Node::Assign {
            target: target.clone(),
            value: Box::new(strip_line_info(value)),
        },
        Node::List(items) => Node::List(strip_children(items)),
        leaf => leaf.clone(),
    }
}

fn strip_children(children: &[Node]) -> Vec<Node> {
    children
        .iter()
        .filter(|child| !child.is_line_info())
        .map(strip_line_info)
        .collect()
}

/// Render the statements of one example as the text of a fenced code block.
///
/// Each remaining top-level child of a block statement lands on its own
/// line; any other statement renders as a single line. The returned text
/// has no trailing newline.
#[must_use]
pub fn statement_text(statements: &[Node]) -> String {
    let mut out = String::new();
    for statement in statements {
        match strip_line_info(statement) {
            Node::Block(children) => {
                for child in children {
                    let _ = writeln!(out, "{child}");
                }
            }
            other => {
                let _ = writeln!(out, "{other}");
            }
        }
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_block() -> Node {
        Node::Block(vec![
            Node::line_info("catalog.rs", 4),
            Node::assign("y", Node::call("rand", vec![Node::Int(20)])),
            Node::line_info("catalog.rs", 5),
            Node::call(
                "plot",
                vec![
                    Node::ident("y"),
                    Node::line_info("catalog.rs", 5),
                    Node::kw("seriestype", Node::sym("line")),
                ],
            ),
        ])
    }

    #[test]
    fn test_strip_removes_markers_at_any_depth() {
        let stripped = strip_line_info(&sample_block());
        assert_eq!(
            stripped,
            Node::Block(vec![
                Node::assign("y", Node::call("rand", vec![Node::Int(20)])),
                Node::call(
                    "plot",
                    vec![Node::ident("y"), Node::kw("seriestype", Node::sym("line"))],
                ),
            ])
        );
    }

    #[test]
    fn test_strip_does_not_mutate_input() {
        let original = sample_block();
        let before = original.clone();
        let _ = strip_line_info(&original);
        assert_eq!(original, before);
    }

    #[test]
    fn test_statement_text_is_stable() {
        let statements = vec![sample_block()];
        let first = statement_text(&statements);
        let second = statement_text(&statements);
        assert_eq!(first, second);
        assert_eq!(first, "y = rand(20)\nplot(y, seriestype = :line)");
    }

    #[test]
    fn test_statement_text_contains_no_marker_rendering() {
        let text = statement_text(&[sample_block()]);
        assert!(!text.contains("catalog.rs"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_statement_text_non_block_statement() {
        let statements = vec![Node::call("plot", vec![Node::ident("y")])];
        assert_eq!(statement_text(&statements), "plot(y)");
    }

    #[test]
    fn test_statement_text_empty() {
        assert_eq!(statement_text(&[]), "");
    }

    #[test]
    fn test_strip_inside_keyword_value() {
        let node = Node::kw("data", Node::List(vec![Node::line_info("f", 1), Node::Int(3)]));
        assert_eq!(
            strip_line_info(&node),
            Node::kw("data", Node::List(vec![Node::Int(3)]))
        );
    }
}
