//! Detection of padding that could be removed by reordering fields.
//!
//! The minimal size of a record is estimated as the sum of its field sizes,
//! rounded up once to the record's alignment. This is exact for scalar fields
//! and a lower bound for fields whose alignment is smaller than their size
//! (arrays, nested records), so the savings reported for such records may
//! not be reachable by any field order.

mod finding;

use data_units::ByteUnits;
pub use finding::Finding;
use itertools::Itertools;
use record::{Field, Record};

/// Smallest size any permutation of `record`'s fields could have, along with
/// the alignment it was rounded to.
pub fn minimal_size(record: &Record, max_alignment: ByteUnits) -> (ByteUnits, ByteUnits) {
    let alignment = record.alignment.min(max_alignment).max(ByteUnits::ONE);
    let unpadded: ByteUnits = record.fields.iter().map(|field| field.size).sum();

    (unpadded.align_to(alignment), alignment)
}

pub fn diagnose(record: &Record, max_alignment: ByteUnits) -> Option<Finding> {
    let (minimal_size, _) = minimal_size(record, max_alignment);

    assert!(
        minimal_size <= record.actual_size,
        "record '{}' reported with size {}, smaller than any layout of its fields ({})",
        record.name,
        record.actual_size,
        minimal_size,
    );

    (minimal_size < record.actual_size).then(|| Finding {
        record_name: record.name.clone(),
        source: record.source,
        minimal_size,
        actual_size: record.actual_size,
        suggested_order: suggested_order(&record.fields),
    })
}

/// Largest fields first, with ties ordered by name so output is reproducible.
pub fn suggested_order(fields: &[Field]) -> Vec<Field> {
    fields
        .iter()
        .sorted_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)))
        .cloned()
        .collect()
}
