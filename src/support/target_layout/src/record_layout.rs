use crate::TypeLayout;
use data_units::ByteUnits;

/// Places fields one after another in declaration order, each at the next
/// offset satisfying its alignment.
#[derive(Debug)]
pub struct RecordLayoutBuilder {
    pub size: ByteUnits,
    pub alignment: ByteUnits,
    pub max_field_alignment: ByteUnits,
}

impl RecordLayoutBuilder {
    /// Returns `None` when the record does not fit in the address space.
    pub fn generate(
        fields: impl IntoIterator<Item = TypeLayout>,
        max_field_alignment: ByteUnits,
    ) -> Option<TypeLayout> {
        let mut builder = Self::new(max_field_alignment);

        for field in fields {
            builder.layout_field(field)?;
        }

        builder.finish_layout()
    }

    pub fn new(max_field_alignment: ByteUnits) -> Self {
        Self {
            size: ByteUnits::ZERO,
            alignment: ByteUnits::ONE,
            max_field_alignment,
        }
    }

    pub fn layout_field(&mut self, field: TypeLayout) -> Option<()> {
        let field_alignment = field.alignment.min(self.max_field_alignment).max(ByteUnits::ONE);
        let field_offset = self.size.checked_align_to(field_alignment)?;

        assert!((field_offset % field_alignment).is_zero());

        // Reserve space for this field
        self.size = field_offset.checked_add(field.width)?;
        self.update_alignment(field_alignment);
        Some(())
    }

    pub fn finish_layout(self) -> Option<TypeLayout> {
        // Round size of record up to its alignment
        let size = self.size.checked_align_to(self.alignment)?;
        Some(TypeLayout::new(size, self.alignment))
    }

    pub fn update_alignment(&mut self, new_alignment: ByteUnits) {
        if new_alignment > self.alignment {
            assert!(new_alignment.is_power_of_2());
            self.alignment = new_alignment;
        }
    }
}
