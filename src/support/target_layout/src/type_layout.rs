use data_units::ByteUnits;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeLayout {
    pub width: ByteUnits,
    pub alignment: ByteUnits,
}

impl TypeLayout {
    pub fn new(width: ByteUnits, alignment: ByteUnits) -> Self {
        Self { width, alignment }
    }
}
