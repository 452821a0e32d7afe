use std::fmt::Debug;

/// Numeric edge weight / path cost
///
/// Dijkstra's algorithm is only correct for non-negative weights, see
/// [`Cost::is_invalid_weight`].
pub trait Cost: Copy + PartialOrd + Debug {
    const ZERO: Self;

    /// Whether this value is unusable as an edge weight (negative, or `NaN`
    /// for floats)
    fn is_invalid_weight(self) -> bool;

    /// Sum of two costs, `None` if it does not fit the type.
    /// Floats saturate to infinity and never fail.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_unsigned_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;

                #[inline]
                fn is_invalid_weight(self) -> bool {
                    false
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_signed_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;

                #[inline]
                fn is_invalid_weight(self) -> bool {
                    self < 0
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn is_invalid_weight(self) -> bool {
                    self.is_nan() || self < 0.0
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_unsigned_cost!(u8, u16, u32, u64, usize);
impl_signed_cost!(i8, i16, i32, i64, isize);
impl_float_cost!(f32, f64);
