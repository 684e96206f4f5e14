mod invoke;
mod options;
mod parse;
mod report;
mod supported_targets;

pub use options::CheckOptions;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct CheckCommand {
    pub manifests: Vec<PathBuf>,
    pub options: CheckOptions,
}

#[cfg(test)]
mod tests;
