//! Parsed statement nodes for example code.

use std::fmt;

/// One node of a parsed code statement.
///
/// `Block`, `Call`, `Keyword`, `Assign` and `List` are composite nodes that
/// own children. `LineInfo` is a source-position marker interleaved by the
/// parser; it carries no semantic content and is elided from display output
/// by [`crate::normalize::strip_line_info`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Sequence of statements, rendered one per line.
    Block(Vec<Node>),
    /// Function call: `name(arg, ...)`.
    Call { name: String, args: Vec<Node> },
    /// Keyword argument inside a call: `name = value`.
    Keyword { name: String, value: Box<Node> },
    /// Assignment: `target = value`.
    Assign { target: String, value: Box<Node> },
    /// Literal list: `[a, b, c]`.
    List(Vec<Node>),
    /// Variable reference.
    Ident(String),
    /// Symbolic value, displayed with a leading `:` sigil.
    Sym(String),
    Int(i64),
    Float(f64),
    Str(String),
    /// Source-position marker. No semantic content.
    LineInfo { file: String, line: u32 },
}

impl Node {
    pub fn call(name: &str, args: Vec<Node>) -> Self {
        Node::Call {
            name: name.to_owned(),
            args,
        }
    }

    pub fn kw(name: &str, value: Node) -> Self {
        Node::Keyword {
            name: name.to_owned(),
            value: Box::new(value),
        }
    }

    pub fn assign(target: &str, value: Node) -> Self {
        Node::Assign {
            target: target.to_owned(),
            value: Box::new(value),
        }
    }

    pub fn ident(name: &str) -> Self {
        Node::Ident(name.to_owned())
    }

    pub fn sym(name: &str) -> Self {
        Node::Sym(name.to_owned())
    }

    pub fn text(value: &str) -> Self {
        Node::Str(value.to_owned())
    }

    pub fn line_info(file: &str, line: u32) -> Self {
        Node::LineInfo {
            file: file.to_owned(),
            line,
        }
    }

    /// Whether this node is a metadata-only source-position marker.
    #[must_use]
    pub fn is_line_info(&self) -> bool {
        matches!(self, Node::LineInfo { .. })
    }
}

/// Canonical display form. Total over all well-formed trees; metadata
/// markers render as comments so display never panics, but callers are
/// expected to strip them first.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Block(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{child}")?;
                }
                Ok(())
            }
            Node::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Node::Keyword { name, value } => write!(f, "{name} = {value}"),
            Node::Assign { target, value } => write!(f, "{target} = {value}"),
            Node::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Ident(name) => write!(f, "{name}"),
            Node::Sym(name) => write!(f, ":{name}"),
            Node::Int(value) => write!(f, "{value}"),
            Node::Float(value) => write!(f, "{value:?}"),
            Node::Str(value) => write!(f, "{value:?}"),
            Node::LineInfo { file, line } => write!(f, "# {file}:{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_display() {
        let node = Node::call(
            "plot",
            vec![Node::ident("y"), Node::kw("seriestype", Node::sym("scatter"))],
        );
        assert_eq!(node.to_string(), "plot(y, seriestype = :scatter)");
    }

    #[test]
    fn test_assign_display() {
        let node = Node::assign("y", Node::call("rand", vec![Node::Int(20)]));
        assert_eq!(node.to_string(), "y = rand(20)");
    }

    #[test]
    fn test_list_display() {
        let node = Node::List(vec![Node::Float(1.0), Node::Float(2.5)]);
        assert_eq!(node.to_string(), "[1.0, 2.5]");
    }

    #[test]
    fn test_str_display_is_quoted() {
        assert_eq!(Node::text("My Title").to_string(), "\"My Title\"");
    }

    #[test]
    fn test_block_display_one_line_per_child() {
        let node = Node::Block(vec![
            Node::call("plot", vec![Node::ident("y")]),
            Node::call("title", vec![Node::text("t")]),
        ]);
        assert_eq!(node.to_string(), "plot(y)\ntitle(\"t\")");
    }

    #[test]
    fn test_is_line_info() {
        assert!(Node::line_info("examples.rs", 12).is_line_info());
        assert!(!Node::ident("y").is_line_info());
    }
}
