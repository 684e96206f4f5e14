mod error;
mod show;
mod unerror;
mod warning;

use append_only_vec::AppendOnlyVec;
use core::fmt::Debug;
pub use error::ErrorDiagnostic;
pub use show::{Show, minimal_filename};
use source_files::SourceFiles;
use std::path::{Path, PathBuf};
pub use unerror::unerror;
pub use warning::WarningDiagnostic;

pub trait Diagnostic: Show + Send + Sync {}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub project_root: Option<PathBuf>,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
            project_root: std::env::current_dir().ok(),
        }
    }
}

pub struct Diagnostics<'a> {
    source_files: &'a SourceFiles,
    diagnostics: AppendOnlyVec<Box<dyn Diagnostic>>,
    flags: DiagnosticFlags,
}

impl<'a> Debug for Diagnostics<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl<'a> Diagnostics<'a> {
    pub fn new(source_files: &'a SourceFiles, flags: DiagnosticFlags) -> Self {
        Self {
            source_files,
            diagnostics: AppendOnlyVec::<Box<dyn Diagnostic>>::new(),
            flags,
        }
    }

    pub fn source_files(&self) -> &'a SourceFiles {
        self.source_files
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.flags.project_root.as_deref()
    }

    pub fn push(&self, diagnostic: impl Diagnostic + 'static) {
        if self.flags.print_without_collecting {
            self.print(&diagnostic);
        } else {
            self.diagnostics.push(Box::new(diagnostic));
        }
    }

    pub fn render(&self, diagnostic: &dyn Diagnostic) -> String {
        let mut message = String::new();

        diagnostic
            .show(&mut message, self.source_files, self.project_root())
            .expect("show diagnostic message");

        message
    }

    pub fn print(&self, diagnostic: &dyn Diagnostic) {
        eprintln!("{}", self.render(diagnostic));
    }
}
