use {num_traits::Float, std::ops::RangeInclusive};

/// Fitting float values into closed ranges.
pub trait RangeExt: Sized {
    /// Restricts value to the range.
    fn clamped(self, range: RangeInclusive<Self>) -> Self;

    /// Wraps value around the range, the way angles wrap around full turn.
    /// Upper bound is mapped onto lower bound.
    fn wrapped(self, range: RangeInclusive<Self>) -> Self;
}

impl<T> RangeExt for T
where
    T: Float,
{
    fn clamped(self, range: RangeInclusive<T>) -> T {
        let (lower, upper) = range.into_inner();
        self.max(lower).min(upper)
    }

    fn wrapped(self, range: RangeInclusive<T>) -> T {
        let (lower, upper) = range.into_inner();
        let size = upper - lower;

        // `%` is truncating remainder, result takes sign of the dividend.
        let wrapped = (self - lower) % size;
        if wrapped < T::zero() {
            wrapped + size + lower
        } else {
            wrapped + lower
        }
    }
}
