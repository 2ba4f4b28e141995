use std::fmt::{Debug, Display};

/// Arithmetic needed to lay out an inclusive stepped progression.
///
/// Implemented for every primitive integer and for `f32`/`f64`. Integer
/// spans are computed in `i128` so ranges covering the whole domain of the
/// narrower types do not overflow. Spans that cannot be counted in a
/// `usize` come back as `None`.
pub trait Numeric: Copy + PartialOrd + Debug + Display {
    fn zero() -> Self;

    fn one() -> Self;

    /// Number of values in `start..=stop` stepping by `step`.
    ///
    /// REQUIRES: `start <= stop` and `step > 0`.
    fn span(start: Self, stop: Self, step: Self) -> Option<usize>;

    /// Whether `stop - start` is not an integer multiple of `step`.
    fn is_unclean(start: Self, stop: Self, step: Self) -> bool;

    /// The `n`-th value of the progression.
    fn nth(start: Self, step: Self, n: usize) -> Self;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            fn span(start: Self, stop: Self, step: Self) -> Option<usize> {
                let diff = (stop as i128).checked_sub(start as i128)?;
                usize::try_from(diff / step as i128).ok()?.checked_add(1)
            }

            fn is_unclean(start: Self, stop: Self, step: Self) -> bool {
                (stop as i128)
                    .checked_sub(start as i128)
                    .map_or(false, |diff| diff % step as i128 != 0)
            }

            #[inline]
            fn nth(start: Self, step: Self, n: usize) -> Self {
                (start as i128 + step as i128 * n as i128) as Self
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            fn span(start: Self, stop: Self, step: Self) -> Option<usize> {
                let n = ((stop - start) / step).floor();
                // `as` saturates, so anything at or past usize::MAX is unrepresentable
                if !n.is_finite() || n >= usize::MAX as Self {
                    return None;
                }
                (n as usize).checked_add(1)
            }

            fn is_unclean(start: Self, stop: Self, step: Self) -> bool {
                (stop - start) % step != 0.0
            }

            #[inline]
            fn nth(start: Self, step: Self, n: usize) -> Self {
                // an infinite step times zero would be NaN
                if n == 0 { start } else { start + step * n as Self }
            }
        }
    )*};
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
impl_numeric_float!(f32, f64);
