use crate::{Diagnostic, minimal_filename, show::Show};
use colored::Colorize;
use source_files::{Source, SourceFiles};
use std::path::Path;

pub struct WarningDiagnostic {
    message: String,
    source: Option<Source>,
}

impl WarningDiagnostic {
    pub fn new(message: impl ToString, source: Source) -> Self {
        Self {
            message: message.to_string(),
            source: Some(source),
        }
    }

    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            source: None,
        }
    }
}

impl Show for WarningDiagnostic {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result {
        if let Some(source) = self.source {
            write!(
                w,
                "{}:{}: {} {}",
                minimal_filename(source, source_files, project_root),
                source.location,
                "warning:".yellow().bold(),
                self.message,
            )
        } else {
            write!(w, "{} {}", "warning:".yellow().bold(), self.message)
        }
    }
}

impl Diagnostic for WarningDiagnostic {}

#[test]
fn test_collected_warnings_render_with_location() {
    use crate::{DiagnosticFlags, Diagnostics};
    use source_files::Location;

    colored::control::set_override(false);

    let source_files = SourceFiles::new();
    let key = source_files.add_named("shapes.go".into());
    let diagnostics = Diagnostics::new(
        &source_files,
        DiagnosticFlags {
            print_without_collecting: false,
            project_root: None,
        },
    );

    diagnostics.push(WarningDiagnostic::new(
        "Unknown target architecture",
        Source::new(key, Location::new(3, 6)),
    ));
    diagnostics.push(WarningDiagnostic::plain("Falling back to 64-bit sizes"));

    assert_eq!(
        diagnostics.render(&WarningDiagnostic::new(
            "Unknown target architecture",
            Source::new(key, Location::new(3, 6)),
        )),
        "shapes.go:3:6: warning: Unknown target architecture"
    );
}
