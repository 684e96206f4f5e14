mod oracle;

use data_units::ByteUnits;
pub use oracle::RecordOracle;
use source_files::Source;

/// One member of a record, as sized for the target being checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub size: ByteUnits,
    pub alignment: ByteUnits,
}

impl Field {
    pub fn new(name: impl Into<String>, size: ByteUnits, alignment: ByteUnits) -> Self {
        Self {
            name: name.into(),
            size,
            alignment,
        }
    }
}

/// A named aggregate with its fields in declaration order.
///
/// `actual_size` and `alignment` are whatever the oracle reported for the
/// declared order, including all inter-field and trailing padding.
#[derive(Clone, Debug)]
pub struct Record {
    pub name: String,
    pub source: Source,
    pub fields: Vec<Field>,
    pub actual_size: ByteUnits,
    pub alignment: ByteUnits,
}

impl Record {
    pub fn from_oracle<R: ?Sized, O: RecordOracle<R>>(
        name: impl Into<String>,
        source: Source,
        declaration: &R,
        oracle: &O,
    ) -> Result<Self, O::Error> {
        Ok(Self {
            name: name.into(),
            source,
            fields: oracle.fields_of(declaration)?,
            actual_size: oracle.actual_size_of(declaration)?,
            alignment: oracle.alignment_of(declaration)?,
        })
    }
}
