//! `tables` command: render attribute and support tables to HTML.

use std::path::PathBuf;

use clap::Args;
use plotdoc_backend::attrs::{AttrGroup, attr_registry, group_defaults};
use plotdoc_backend::{Backend, active_backends, symbols};
use plotdoc_tables::{Classifier, TableStyle, attr, build_support_matrix, write_document};

use crate::error::CliError;
use crate::output::Output;

#[derive(Args)]
pub(crate) struct TablesArgs {
    /// Destination directory for the HTML documents.
    #[arg(long, default_value = "docs")]
    out: PathBuf,
}

impl TablesArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        std::fs::create_dir_all(&self.out)?;

        let registry = attr_registry();
        for group in AttrGroup::ALL {
            let rows = attr::build_attribute_rows(&group_defaults(group), &registry);
            let table = attr::to_table(&rows);
            let path = self.out.join(format!("{}_attr.html", group.as_str()));
            write_document(&path, &table, TableStyle::Attribute)?;
            output.info(&format!("wrote {}", path.display()));
        }

        let backends = active_backends();

        let arguments = symbols::all_arguments();
        let argument_refs: Vec<&str> = arguments.iter().map(String::as_str).collect();
        let matrix = build_support_matrix(
            &argument_refs,
            &backends,
            &Classifier::TwoState(&|b: &dyn Backend| b.supported_attributes()),
        );
        self.write_support(output, "supported_args.html", &matrix.to_table("argument"))?;

        let matrix = build_support_matrix(
            symbols::ALL_SERIES_TYPES,
            &backends,
            &Classifier::ThreeState(&|b: &dyn Backend, v: &str| b.series_type_support(v)),
        );
        self.write_support(output, "supported_types.html", &matrix.to_table("seriestype"))?;

        let matrix = build_support_matrix(
            symbols::ALL_STYLES,
            &backends,
            &Classifier::TwoState(&|b: &dyn Backend| b.supported_styles()),
        );
        self.write_support(output, "supported_styles.html", &matrix.to_table("linestyle"))?;

        let matrix = build_support_matrix(
            symbols::ALL_MARKERS,
            &backends,
            &Classifier::TwoState(&|b: &dyn Backend| b.supported_markers()),
        );
        self.write_support(output, "supported_markers.html", &matrix.to_table("marker"))?;

        let matrix = build_support_matrix(
            symbols::ALL_SCALES,
            &backends,
            &Classifier::TwoState(&|b: &dyn Backend| b.supported_scales()),
        );
        self.write_support(output, "supported_scales.html", &matrix.to_table("scale"))?;

        output.success(&format!("wrote table documents to {}", self.out.display()));
        Ok(())
    }

    fn write_support(
        &self,
        output: &Output,
        filename: &str,
        table: &plotdoc_tables::RenderedTable,
    ) -> Result<(), CliError> {
        let path = self.out.join(filename);
        write_document(&path, table, TableStyle::Support)?;
        output.info(&format!("wrote {}", path.display()));
        Ok(())
    }
}
