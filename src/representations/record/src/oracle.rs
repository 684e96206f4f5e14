use crate::Field;
use data_units::ByteUnits;

/// Source of truth for how a target lays out a record declaration `R`.
pub trait RecordOracle<R: ?Sized> {
    type Error;

    /// Fields in declaration order.
    fn fields_of(&self, record: &R) -> Result<Vec<Field>, Self::Error>;

    /// Padded size of the record laid out in declaration order.
    fn actual_size_of(&self, record: &R) -> Result<ByteUnits, Self::Error>;

    fn alignment_of(&self, record: &R) -> Result<ByteUnits, Self::Error>;
}

#[test]
fn test_record_from_oracle() {
    use crate::Record;
    use source_files::Source;

    struct FixedOracle;

    impl RecordOracle<[(&'static str, u64)]> for FixedOracle {
        type Error = ();

        fn fields_of(&self, record: &[(&'static str, u64)]) -> Result<Vec<Field>, ()> {
            Ok(record
                .iter()
                .map(|(name, size)| Field::new(*name, ByteUnits::of(*size), ByteUnits::of(*size)))
                .collect())
        }

        fn actual_size_of(&self, _record: &[(&'static str, u64)]) -> Result<ByteUnits, ()> {
            Ok(ByteUnits::of(24))
        }

        fn alignment_of(&self, _record: &[(&'static str, u64)]) -> Result<ByteUnits, ()> {
            Ok(ByteUnits::of(8))
        }
    }

    let declaration = [("a", 1), ("b", 8), ("c", 1)];
    let record =
        Record::from_oracle("Padded", Source::internal(), &declaration[..], &FixedOracle).unwrap();

    assert_eq!(record.name, "Padded");
    assert_eq!(record.fields.len(), 3);
    assert_eq!(record.fields[1], Field::new("b", ByteUnits::of(8), ByteUnits::of(8)));
    assert_eq!(record.actual_size, ByteUnits::of(24));
    assert_eq!(record.alignment, ByteUnits::of(8));
}
