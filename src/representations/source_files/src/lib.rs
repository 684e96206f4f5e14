mod file;
mod key;
mod source;

use append_only_vec::AppendOnlyVec;
pub use file::SourceFile;
pub use key::SourceFileKey;
pub use line_column::Location;
pub use source::Source;
use std::{
    collections::HashMap,
    fmt::Debug,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

pub struct SourceFiles {
    files: AppendOnlyVec<SourceFile>,
    named: Mutex<HashMap<PathBuf, SourceFileKey>>,
}

impl Debug for SourceFiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFiles")
            .field("len", &self.files.len())
            .finish_non_exhaustive()
    }
}

impl SourceFiles {
    pub const INTERNAL_KEY: SourceFileKey = SourceFileKey(0);

    pub fn new() -> Self {
        let files = AppendOnlyVec::new();

        // Create the <internal> file, used for records without a known origin
        assert_eq!(
            files.push(SourceFile::new("<internal>".into(), "".into())),
            Self::INTERNAL_KEY.0 as usize,
        );

        Self {
            files,
            named: Default::default(),
        }
    }

    pub fn get(&self, key: SourceFileKey) -> &SourceFile {
        &self.files[key.0 as usize]
    }

    pub fn add(&self, filename: PathBuf, content: String) -> SourceFileKey {
        let index = self.files.push(SourceFile::new(filename, content));
        SourceFileKey(index.try_into().expect("too many source files"))
    }

    /// Registers a file that is only known by name, such as the original
    /// declaration site of a record described by a manifest.
    pub fn add_named(&self, filename: PathBuf) -> SourceFileKey {
        let mut named = self.named.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(key) = named.get(&filename) {
            return *key;
        }

        let key = self.add(filename.clone(), String::new());
        named.insert(filename, key);
        key
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_add_named_reuses_key() {
    let source_files = SourceFiles::new();
    let first = source_files.add_named("shapes.go".into());
    let second = source_files.add_named("shapes.go".into());
    let other = source_files.add_named("point.go".into());

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(source_files.get(first).filename(), "shapes.go");
}

#[test]
fn test_add_named_is_separate_from_loaded_files() {
    let source_files = SourceFiles::new();
    let loaded = source_files.add("layout.json".into(), "{}".into());
    let named = source_files.add_named("layout.json".into());
    let internal = source_files.add_named("<internal>".into());

    assert_ne!(loaded, named);
    assert_ne!(internal, SourceFiles::INTERNAL_KEY);
    assert_eq!(source_files.add_named("layout.json".into()), named);
}

#[test]
fn test_add_named_many_files() {
    let source_files = SourceFiles::new();

    let keys = (0..10_000)
        .map(|i| source_files.add_named(format!("pkg/file_{}.go", i).into()))
        .collect::<Vec<_>>();

    assert_eq!(
        source_files.add_named("pkg/file_9999.go".into()),
        keys[9999]
    );
    assert_eq!(source_files.get(keys[42]).filename(), "pkg/file_42.go");
}
