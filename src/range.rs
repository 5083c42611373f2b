use crate::{Packable, TypedByteBuffer};

/// Closed interval check `[min, max]`.
///
/// `min <= max` is not checked; an inverted range rejects every value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangeChecker<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd> RangeChecker<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }

    /// Returns `true` if `min <= value <= max`. Values that don't compare
    /// (e.g. `NaN`) are never within range.
    pub fn is_within_range(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Unpacks `buffer` and checks its value against `[min, max]`.
pub fn is_within_range<T>(buffer: &TypedByteBuffer<T>, min: T, max: T) -> bool
where
    T: Packable + PartialOrd,
{
    buffer.is_within(&RangeChecker::new(min, max))
}

/// Checks `value` against `[min, max]`.
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    RangeChecker::new(min, max).is_within_range(value)
}
