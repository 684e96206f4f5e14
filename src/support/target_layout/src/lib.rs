mod error;
mod record_layout;
mod std_sizes;
mod type_layout;
mod type_layout_cache;

use data_units::ByteUnits;
pub use error::{LayoutError, LayoutErrorKind};
use manifest::Primitive;
pub use record_layout::RecordLayoutBuilder;
pub use std_sizes::StdSizes;
pub use type_layout::TypeLayout;
pub use type_layout_cache::{MAX_RECORD_NESTING, TypeLayoutCache};

pub trait TargetLayout {
    fn word_size(&self) -> ByteUnits;
    fn max_alignment(&self) -> ByteUnits;
    fn pointer_layout(&self) -> TypeLayout;
    fn primitive_layout(&self, primitive: Primitive) -> TypeLayout;
}

impl TargetLayout for StdSizes {
    fn word_size(&self) -> ByteUnits {
        self.word_size
    }

    fn max_alignment(&self) -> ByteUnits {
        self.max_alignment
    }

    fn pointer_layout(&self) -> TypeLayout {
        self.words(1)
    }

    fn primitive_layout(&self, primitive: Primitive) -> TypeLayout {
        match primitive {
            Primitive::Bool | Primitive::I8 | Primitive::U8 => self.scalar(1),
            Primitive::I16 | Primitive::U16 => self.scalar(2),
            Primitive::I32 | Primitive::U32 | Primitive::F32 | Primitive::Char => self.scalar(4),
            Primitive::I64 | Primitive::U64 | Primitive::F64 => self.scalar(8),
            Primitive::Isize | Primitive::Usize => self.words(1),

            // Complex numbers align like a pair of their component
            Primitive::C64 => TypeLayout::new(ByteUnits::of(8), self.cap(ByteUnits::of(4))),
            Primitive::C128 => TypeLayout::new(ByteUnits::of(16), self.cap(ByteUnits::of(8))),

            Primitive::Str | Primitive::Dyn => self.words(2),
        }
    }
}

impl StdSizes {
    fn scalar(&self, bytes: u64) -> TypeLayout {
        TypeLayout::new(ByteUnits::of(bytes), self.cap(ByteUnits::of(bytes)))
    }

    pub(crate) fn words(&self, count: u64) -> TypeLayout {
        TypeLayout::new(self.word_size * count, self.cap(self.word_size))
    }

    pub(crate) fn cap(&self, alignment: ByteUnits) -> ByteUnits {
        alignment.min(self.max_alignment).max(ByteUnits::ONE)
    }
}

#[cfg(test)]
mod tests;
