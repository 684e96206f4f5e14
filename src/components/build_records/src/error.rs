use diagnostics::{ErrorDiagnostic, Show};
use manifest::TypeExprError;
use source_files::{Source, SourceFiles};
use std::{fmt::Display, path::Path};
use target_layout::LayoutError;

#[derive(Debug)]
pub struct BuildError {
    pub kind: BuildErrorKind,
    pub source: Source,
}

impl Show for BuildError {
    fn show(
        &self,
        w: &mut dyn std::fmt::Write,
        source_files: &SourceFiles,
        project_root: Option<&Path>,
    ) -> std::fmt::Result {
        ErrorDiagnostic::new(&self.kind, self.source).show(w, source_files, project_root)
    }
}

#[derive(Debug)]
pub enum BuildErrorKind {
    FailedToRead(std::io::Error),
    InvalidManifest(serde_json::Error),
    DuplicateRecord(String),
    DuplicateField {
        record: String,
        field: String,
    },
    InvalidFieldType {
        field: String,
        error: TypeExprError,
    },
    Layout {
        record: String,
        error: LayoutError,
    },
}

impl BuildErrorKind {
    pub fn at(self, source: Source) -> BuildError {
        BuildError { kind: self, source }
    }
}

impl Display for BuildErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildErrorKind::FailedToRead(error) => write!(f, "Failed to read manifest: {}", error),
            BuildErrorKind::InvalidManifest(error) => write!(f, "Invalid manifest: {}", error),
            BuildErrorKind::DuplicateRecord(name) => {
                write!(f, "Record '{}' is declared more than once", name)
            }
            BuildErrorKind::DuplicateField { record, field } => {
                write!(f, "Record '{}' has more than one field named '{}'", record, field)
            }
            BuildErrorKind::InvalidFieldType { field, error } => {
                write!(f, "Invalid type for field '{}': {}", field, error)
            }
            BuildErrorKind::Layout { record, error } => {
                write!(f, "Cannot lay out record '{}': {}", record, error)
            }
        }
    }
}
