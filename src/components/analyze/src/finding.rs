use data_units::ByteUnits;
use record::Field;
use source_files::Source;

/// A record that could be smaller if its fields were reordered.
#[derive(Clone, Debug)]
pub struct Finding {
    pub record_name: String,
    pub source: Source,
    pub minimal_size: ByteUnits,
    pub actual_size: ByteUnits,
    pub suggested_order: Vec<Field>,
}
