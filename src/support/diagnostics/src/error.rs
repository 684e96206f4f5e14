use crate::{Diagnostic, Show, minimal_filename};
use colored::Colorize;
use source_files::{Source, SourceFiles};
use std::path::Path;

#[derive(Debug)]
pub struct ErrorDiagnostic {
    message: String,
    source: Source,
}

impl ErrorDiagnostic {
    pub fn new(message: impl ToString, source: Source) -> Self {
        Self {
            message: message.to_string(),
            source,
        }
    }
}

impl Show for ErrorDiagnostic {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result {
        write!(
            w,
            "{}:{}: {} {}",
            minimal_filename(self.source, source_files, project_root),
            self.source.location,
            "error:".red().bold(),
            self.message,
        )
    }
}

impl Diagnostic for ErrorDiagnostic {}

#[test]
fn test_error_renders_with_location() {
    use source_files::Location;

    colored::control::set_override(false);

    let source_files = SourceFiles::new();
    let key = source_files.add_named("/work/shapes.go".into());
    let error = ErrorDiagnostic::new(
        "Record 'Point' is declared more than once",
        Source::new(key, Location::new(7, 2)),
    );

    let mut message = String::new();
    error
        .show(&mut message, &source_files, Some(Path::new("/work")))
        .unwrap();

    assert_eq!(
        message,
        "shapes.go:7:2: error: Record 'Point' is declared more than once"
    );
}
