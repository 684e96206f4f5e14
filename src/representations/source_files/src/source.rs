use super::{SourceFileKey, SourceFiles};
use line_column::Location;

// WARNING: Don't implement PartialEq, Eq, or Hash for this.
// Two records declared at the same place are still different records.
#[derive(Copy, Clone, Debug)]
pub struct Source {
    pub key: SourceFileKey,
    pub location: Location,
}

impl Source {
    pub fn new(key: SourceFileKey, location: Location) -> Self {
        Self { key, location }
    }

    pub fn internal() -> Self {
        Self {
            key: SourceFiles::INTERNAL_KEY,
            location: Location { line: 1, column: 1 },
        }
    }
}
