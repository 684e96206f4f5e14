use data_units::ByteUnits;
use target::Target;

/// Platform parameters that decide type sizes, fixed for one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StdSizes {
    pub word_size: ByteUnits,
    pub max_alignment: ByteUnits,
}

impl StdSizes {
    pub fn new(word_size: ByteUnits, max_alignment: ByteUnits) -> Self {
        assert!(word_size.is_power_of_2());
        assert!(max_alignment.is_power_of_2());

        Self {
            word_size,
            max_alignment,
        }
    }

    /// Natural alignment is capped at the width of a machine word.
    pub fn for_target(target: &Target) -> Self {
        let word_size = ByteUnits::of(target.pointer_width());
        Self::new(word_size, word_size)
    }

    pub fn with_max_alignment(self, max_alignment: ByteUnits) -> Self {
        Self::new(self.word_size, max_alignment)
    }
}
