//! The per-backend Markdown driver.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use plotdoc_backend::{Backend, BackendError};
use plotdoc_catalog::{ExampleSpec, MediaKind, statement_text};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seed restored before every example, so repeated runs of the same
/// example produce reproducible stochastic output.
pub const EXAMPLE_SEED: u64 = 1234;

/// Frame rate of encoded animations.
pub const ANIMATION_FPS: u32 = 15;

/// Error raised when the document or its image directory cannot be
/// written. Per-example failures are warnings, not errors.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where and what to render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Destination directory for the Markdown file; images land in
    /// `img/<backend>/` below it. Created if absent.
    pub out_dir: PathBuf,
    /// Catalog indices to leave out of the run.
    pub skip: BTreeSet<usize>,
}

/// Outcome of one document render.
#[derive(Debug)]
pub struct RenderReport {
    pub doc_path: PathBuf,
    /// Number of example sections written.
    pub sections: usize,
    /// One entry per skipped-on-failure example.
    pub warnings: Vec<String>,
}

/// Render the example catalog for one backend into `<backend>.md`.
///
/// Examples run in catalog order. A failing example is recorded as a
/// warning and omitted from the document; the run continues and always
/// ends with the capability footer. Only destination-path failures are
/// fatal.
pub fn render_backend_doc(
    backend: &mut dyn Backend,
    catalog: &[ExampleSpec],
    options: &RenderOptions,
) -> Result<RenderReport, DocError> {
    let name = backend.name();
    let img_dir = options.out_dir.join("img").join(name);
    fs::create_dir_all(&img_dir)?;

    let doc_path = options.out_dir.join(format!("{name}.md"));
    let mut out = BufWriter::new(File::create(&doc_path)?);
    out.write_all(preamble(name).as_bytes())?;

    let mut sections = 0;
    let mut warnings = Vec::new();
    for (index, example) in catalog.iter().enumerate() {
        if options.skip.contains(&index) {
            tracing::debug!(index, header = %example.header, "example skipped by request");
            continue;
        }
        match render_example(backend, example, index, &img_dir) {
            Ok(section) => {
                out.write_all(section.as_bytes())?;
                sections += 1;
            }
            Err(err) => {
                let warning = format!("example {index} ({}) skipped: {err}", example.header);
                tracing::warn!(index, header = %example.header, error = %err, "example failed");
                warnings.push(warning);
            }
        }
    }

    out.write_all(capability_footer(backend, Utc::now()).as_bytes())?;
    out.flush()?;
    tracing::debug!(path = %doc_path.display(), sections, "wrote backend document");

    Ok(RenderReport {
        doc_path,
        sections,
        warnings,
    })
}

/// Execute one example and return its Markdown section.
fn render_example(
    backend: &mut dyn Backend,
    example: &ExampleSpec,
    index: usize,
    img_dir: &Path,
) -> Result<String, BackendError> {
    let mut rng = StdRng::seed_from_u64(EXAMPLE_SEED);
    for statement in &example.statements {
        backend.execute(statement, &mut rng)?;
    }

    let name = backend.name();
    let ext = match example.media {
        MediaKind::Animated => "gif",
        MediaKind::Static => "png",
    };
    let filename = format!("{name}_example_{index}.{ext}");
    let path = img_dir.join(&filename);
    match example.media {
        MediaKind::Animated => backend.encode_animation(&path, ANIMATION_FPS)?,
        MediaKind::Static => backend.rasterize(&path)?,
    }

    let mut section = String::new();
    let _ = writeln!(section, "### {}\n", example.header);
    let _ = writeln!(section, "{}\n", example.description);
    let _ = writeln!(section, "```\n{}\n```\n", statement_text(&example.statements));
    let _ = writeln!(section, "![{name} example {index}](img/{name}/{filename})\n");
    Ok(section)
}

fn preamble(name: &str) -> String {
    format!(
        "# Examples for the {name} backend\n\n\
         ## Initialize\n\n\
         ```\nselect_backend({name:?})\n```\n\n"
    )
}

/// Fixed-order capability summary plus the generation timestamp.
fn capability_footer(backend: &dyn Backend, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("## Supported features\n\n");
    let _ = writeln!(
        out,
        "- Supported arguments: {}",
        joined(&backend.supported_attributes(), false)
    );
    let _ = writeln!(
        out,
        "- Supported series types: {}",
        joined(&backend.supported_series_types(), true)
    );
    let _ = writeln!(
        out,
        "- Supported line styles: {}",
        joined(&backend.supported_styles(), true)
    );
    let _ = writeln!(
        out,
        "- Supported markers: {}",
        joined(&backend.supported_markers(), true)
    );
    out.push('\n');
    let _ = writeln!(
        out,
        "(Automatically generated: {})",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out
}

/// Sort, deduplicate and backtick-join capability values; symbols get the
/// `:` sigil before sorting.
fn joined(values: &[&'static str], sigil: bool) -> String {
    let mut decorated: Vec<String> = values
        .iter()
        .map(|value| {
            if sigil {
                format!(":{value}")
            } else {
                (*value).to_owned()
            }
        })
        .collect();
    decorated.sort_unstable();
    decorated.dedup();
    decorated
        .iter()
        .map(|value| format!("`{value}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_joined_sorts_dedups_and_prefixes() {
        assert_eq!(joined(&["solid", "dash", "dash"], true), "`:dash`, `:solid`");
        assert_eq!(joined(&["label", "bins"], false), "`bins`, `label`");
        assert_eq!(joined(&[], true), "");
    }

    #[test]
    fn test_preamble_has_initialize_section() {
        let text = preamble("pixel");
        assert!(text.contains("## Initialize"));
        assert!(text.contains("select_backend(\"pixel\")"));
    }
}
