//! HTML rendering of tabular data.
//!
//! Produces one self-contained document per table with an embedded
//! stylesheet, so the artifacts can be opened directly from disk.

use std::fmt::Write as _;
use std::path::Path;

/// Error raised when a table document cannot be written.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Column headers plus ordered rows of display strings.
#[derive(Debug, Clone, Default)]
pub struct RenderedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Per-cell styling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// First column `attr`, last column `desc`, others unclassed.
    Attribute,
    /// First column `attr`; other cells classed by their literal text.
    Support,
}

const STYLESHEET: &str = "\
table { border-collapse: collapse; font-family: sans-serif; font-size: 14px; }
th, td { border: 1px solid #ccc; padding: 4px 8px; }
th { background: #f0f0f0; }
td.attr { font-family: monospace; }
td.desc { max-width: 40em; }
td.supported_native { background: #c8e6c9; text-align: center; }
td.supported_recipe { background: #fff9c4; text-align: center; }
td.supported_not { background: #ffcdd2; text-align: center; }
";

/// Escape HTML special characters in cell text.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn cell_class(style: TableStyle, column: usize, columns: usize, text: &str) -> Option<&'static str> {
    match style {
        TableStyle::Attribute => {
            if column == 0 {
                Some("attr")
            } else if column + 1 == columns {
                Some("desc")
            } else {
                None
            }
        }
        TableStyle::Support => {
            if column == 0 {
                Some("attr")
            } else {
                Some(match text {
                    "native" => "supported_native",
                    "recipe" => "supported_recipe",
                    _ => "supported_not",
                })
            }
        }
    }
}

/// Render a table as a self-contained HTML document.
#[must_use]
pub fn render_document(table: &RenderedTable, style: TableStyle) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n<table>\n<thead>\n<tr>");
    for column in &table.columns {
        let _ = write!(out, "<th>{}</th>", escape_html(column));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for (index, cell) in row.iter().enumerate() {
            match cell_class(style, index, row.len(), cell) {
                Some(class) => {
                    let _ = write!(out, "<td class=\"{class}\">{}</td>", escape_html(cell));
                }
                None => {
                    let _ = write!(out, "<td>{}</td>", escape_html(cell));
                }
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}

/// Render and write a table document to `path`.
pub fn write_document(
    path: &Path,
    table: &RenderedTable,
    style: TableStyle,
) -> Result<(), TableError> {
    std::fs::write(path, render_document(table, style))?;
    tracing::debug!(path = %path.display(), "wrote table document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> RenderedTable {
        RenderedTable {
            columns: vec!["seriestype".to_owned(), "pixel".to_owned()],
            rows: vec![
                vec!["line".to_owned(), "native".to_owned()],
                vec!["step".to_owned(), "recipe".to_owned()],
                vec!["surface".to_owned(), "no".to_owned()],
            ],
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#x27;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_support_cell_classes() {
        let html = render_document(&sample(), TableStyle::Support);
        assert!(html.contains(r#"<td class="attr">line</td>"#));
        assert!(html.contains(r#"<td class="supported_native">native</td>"#));
        assert!(html.contains(r#"<td class="supported_recipe">recipe</td>"#));
        assert!(html.contains(r#"<td class="supported_not">no</td>"#));
    }

    #[test]
    fn test_attribute_cell_classes() {
        let table = RenderedTable {
            columns: ["Attribute", "Default", "Aliases", "Type", "Description"]
                .map(str::to_owned)
                .to_vec(),
            rows: vec![
                ["bins", "30", "nbins", "Integer", "Number of bins."]
                    .map(str::to_owned)
                    .to_vec(),
            ],
        };
        let html = render_document(&table, TableStyle::Attribute);
        assert!(html.contains(r#"<td class="attr">bins</td>"#));
        assert!(html.contains(r#"<td class="desc">Number of bins.</td>"#));
        assert!(html.contains("<td>30</td>"));
        assert!(html.contains("<td>Integer</td>"));
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let table = RenderedTable {
            columns: vec!["a < b".to_owned()],
            rows: vec![vec!["x & y".to_owned()], vec!["<script>".to_owned()]],
        };
        let html = render_document(&table, TableStyle::Attribute);
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("x &amp; y"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_document_is_self_contained() {
        let html = render_document(&sample(), TableStyle::Support);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_write_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("supported_types.html");
        write_document(&path, &sample(), TableStyle::Support).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_document(&sample(), TableStyle::Support));
    }

    #[test]
    fn test_write_document_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("table.html");
        let err = write_document(&path, &sample(), TableStyle::Support).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }
}
