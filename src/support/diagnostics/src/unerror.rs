use crate::show::Show;
use source_files::SourceFiles;
use std::path::Path;

/// Prints the error of a failed result and collapses it, for callers that
/// only need to know that something already reported went wrong.
pub fn unerror<T, E: Show>(
    result: Result<T, E>,
    source_files: &SourceFiles,
    project_root: Option<&Path>,
) -> Result<T, ()> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => {
            err.eprintln(source_files, project_root);
            Err(())
        }
    }
}
