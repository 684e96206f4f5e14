use super::{CheckCommand, report::FindingReport, supported_targets::warn_if_unsupported_target};
use crate::{Invoke, Outcome};
use analyze::{Finding, diagnose};
use build_records::{build_records, load_manifest};
use data_units::ByteUnits;
use diagnostics::{DiagnosticFlags, Diagnostics, Show, unerror};
use rayon::prelude::*;
use record::Record;
use source_files::SourceFiles;

impl Invoke for CheckCommand {
    fn invoke(self) -> Result<Outcome, ()> {
        let source_files = SourceFiles::new();
        let diagnostics = Diagnostics::new(&source_files, DiagnosticFlags::default());

        let lines = self.check(&diagnostics)?;

        for line in lines.iter() {
            println!("{}", line);
        }

        Ok(if lines.is_empty() {
            Outcome::Clean
        } else {
            Outcome::Findings
        })
    }
}

impl CheckCommand {
    /// Loads every manifest before reporting anything, so that a broken
    /// manifest fails the whole run. Returns report lines in sorted order.
    pub fn check(&self, diagnostics: &Diagnostics) -> Result<Vec<String>, ()> {
        let source_files = diagnostics.source_files();
        let project_root = diagnostics.project_root();
        let sizes = self.options.sizes();

        warn_if_unsupported_target(&self.options.target, &sizes, diagnostics);

        let mut lines = vec![];

        for path in self.manifests.iter() {
            let loaded = unerror(load_manifest(path, source_files), source_files, project_root)?;
            let records = unerror(
                build_records(&loaded, &sizes, source_files),
                source_files,
                project_root,
            )?;

            for finding in find_all(&records, sizes.max_alignment) {
                let report = FindingReport {
                    package: &loaded.package,
                    finding: &finding,
                    verbose: self.options.verbose,
                };

                let mut line = String::new();
                report
                    .show(&mut line, source_files, project_root)
                    .expect("show finding");
                lines.push(line);
            }
        }

        lines.sort();
        Ok(lines)
    }
}

/// Records are independent, so they are analyzed in parallel.
fn find_all(records: &[Record], max_alignment: ByteUnits) -> Vec<Finding> {
    records
        .par_iter()
        .filter_map(|record| diagnose(record, max_alignment))
        .collect()
}
