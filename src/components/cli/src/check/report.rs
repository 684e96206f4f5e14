use analyze::Finding;
use diagnostics::{Show, minimal_filename};
use itertools::Itertools;
use source_files::SourceFiles;
use std::path::Path;

/// One line of output for a finding, optionally followed by the recommended
/// field order.
pub struct FindingReport<'a> {
    pub package: &'a str,
    pub finding: &'a Finding,
    pub verbose: bool,
}

impl<'a> Show for FindingReport<'a> {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result {
        let finding = self.finding;
        let source = finding.source;

        write!(
            w,
            "{}: {}:{}: struct {} could have size {} (currently {})",
            self.package,
            minimal_filename(source, source_files, project_root),
            source.location,
            finding.record_name,
            finding.minimal_size,
            finding.actual_size,
        )?;

        if self.verbose {
            write!(
                w,
                ":\n\tRecommended alignment:\n{}",
                finding
                    .suggested_order
                    .iter()
                    .map(|field| format!("\t\t{} (size {})", field.name, field.size))
                    .join("\n")
            )?;
        }

        Ok(())
    }
}
