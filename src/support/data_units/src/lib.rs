use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Rem},
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ByteUnits {
    units: u64,
}

impl ByteUnits {
    pub const ZERO: Self = Self { units: 0 };
    pub const ONE: Self = Self { units: 1 };

    pub const fn of(value: u64) -> Self {
        Self { units: value }
    }

    pub const fn bytes(&self) -> u64 {
        self.units
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0
    }

    pub fn is_power_of_2(&self) -> bool {
        self.units.is_power_of_two()
    }

    /// Rounds up to the next multiple of `align`, which must be a power of two.
    pub fn align_to(&self, align: ByteUnits) -> ByteUnits {
        let width = self.units;
        let align = align.units;

        assert!(align.is_power_of_two());
        Self::of((width + align - 1) & !(align - 1))
    }

    pub fn checked_align_to(&self, align: ByteUnits) -> Option<ByteUnits> {
        assert!(align.is_power_of_2());

        self.units
            .checked_add(align.units - 1)
            .map(|width| Self::of(width & !(align.units - 1)))
    }

    pub fn checked_add(self, rhs: ByteUnits) -> Option<ByteUnits> {
        self.units.checked_add(rhs.units).map(Self::of)
    }

    pub fn checked_mul(self, rhs: u64) -> Option<ByteUnits> {
        self.units.checked_mul(rhs).map(Self::of)
    }
}

impl Display for ByteUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.units)
    }
}

impl Add<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn add(self, rhs: ByteUnits) -> Self::Output {
        Self::of(self.units + rhs.units)
    }
}

impl Mul<u64> for ByteUnits {
    type Output = ByteUnits;

    fn mul(self, rhs: u64) -> Self::Output {
        Self::of(self.units * rhs)
    }
}

impl Rem<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn rem(self, rhs: ByteUnits) -> Self::Output {
        Self::of(self.units % rhs.units)
    }
}

impl Sum for ByteUnits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, units| total + units)
    }
}

impl<'a> Sum<&'a ByteUnits> for ByteUnits {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[test]
fn test_align_to() {
    assert_eq!(ByteUnits::of(0).align_to(ByteUnits::of(8)), ByteUnits::of(0));
    assert_eq!(ByteUnits::of(1).align_to(ByteUnits::of(8)), ByteUnits::of(8));
    assert_eq!(ByteUnits::of(10).align_to(ByteUnits::of(8)), ByteUnits::of(16));
    assert_eq!(ByteUnits::of(16).align_to(ByteUnits::of(8)), ByteUnits::of(16));
    assert_eq!(ByteUnits::of(7).align_to(ByteUnits::ONE), ByteUnits::of(7));
}

#[test]
fn test_checked_align_to_overflow() {
    assert_eq!(ByteUnits::of(u64::MAX).checked_align_to(ByteUnits::of(8)), None);
    assert_eq!(
        ByteUnits::of(9).checked_align_to(ByteUnits::of(4)),
        Some(ByteUnits::of(12))
    );
}

#[test]
fn test_sum() {
    let sizes = [ByteUnits::of(1), ByteUnits::of(8), ByteUnits::of(1)];
    assert_eq!(sizes.iter().sum::<ByteUnits>(), ByteUnits::of(10));
    assert_eq!(std::iter::empty::<ByteUnits>().sum::<ByteUnits>(), ByteUnits::ZERO);
}
