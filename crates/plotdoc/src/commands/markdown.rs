//! `markdown` command: render the example catalog for one backend.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use plotdoc_backend::{backend_names, select_backend};
use plotdoc_catalog::examples;
use plotdoc_render::{RenderOptions, render_backend_doc};

use crate::error::CliError;
use crate::output::Output;

#[derive(Args)]
pub(crate) struct MarkdownArgs {
    /// Backend to render with.
    #[arg(long)]
    backend: String,

    /// Destination directory for the Markdown file and images.
    #[arg(long, default_value = "docs")]
    out: PathBuf,

    /// Catalog indices to skip, comma separated.
    #[arg(long, value_delimiter = ',')]
    skip: Vec<usize>,
}

impl MarkdownArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let mut backend = select_backend(&self.backend).inspect_err(|_| {
            output.info(&format!("known backends: {}", backend_names().join(", ")));
        })?;

        let catalog = examples();
        let options = RenderOptions {
            out_dir: self.out,
            skip: self.skip.into_iter().collect::<BTreeSet<_>>(),
        };
        let report = render_backend_doc(backend.as_mut(), &catalog, &options)?;

        for warning in &report.warnings {
            output.warning(warning);
        }
        output.success(&format!(
            "wrote {} ({} sections, {} warnings)",
            report.doc_path.display(),
            report.sections,
            report.warnings.len()
        ));
        Ok(())
    }
}
