use source_files::{Source, SourceFiles};
use std::path::Path;

pub trait Show {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result;

    fn eprintln(self: &Self, source_files: &SourceFiles, project_root: Option<&Path>) {
        let mut message = String::new();
        self.show(&mut message, source_files, project_root).unwrap();
        eprintln!("{}", message);
    }
}

/// Filename of `source`, relative to `project_root` when it lives inside of it.
pub fn minimal_filename<'a>(
    source: Source,
    source_files: &'a SourceFiles,
    project_root: Option<&Path>,
) -> &'a str {
    let file = source_files.get(source.key);

    project_root
        .and_then(|root| file.filepath().strip_prefix(root).ok())
        .and_then(|relative| relative.to_str())
        .filter(|relative| !relative.is_empty())
        .unwrap_or_else(|| file.filename())
}

#[test]
fn test_minimal_filename() {
    use source_files::Location;

    let source_files = SourceFiles::new();
    let inside = source_files.add_named("/work/shapes/point.go".into());
    let outside = source_files.add_named("/elsewhere/line.go".into());
    let root = Path::new("/work");

    let source = |key| Source::new(key, Location::default());

    assert_eq!(
        minimal_filename(source(inside), &source_files, Some(root)),
        "shapes/point.go"
    );
    assert_eq!(
        minimal_filename(source(outside), &source_files, Some(root)),
        "/elsewhere/line.go"
    );
    assert_eq!(
        minimal_filename(source(inside), &source_files, None),
        "/work/shapes/point.go"
    );
}
