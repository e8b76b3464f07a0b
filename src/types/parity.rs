//! Sign-agnostic odd/even test for integer vertex values.

/// Values that can be classified as odd or even.
pub trait Parity {
    /// True when the value is not evenly divisible by two.
    fn is_odd(&self) -> bool;

    /// True when the value is evenly divisible by two.
    fn is_even(&self) -> bool {
        !self.is_odd()
    }
}

macro_rules! impl_parity {
    ($($t:ty),*) => {
        $(
            impl Parity for $t {
                fn is_odd(&self) -> bool {
                    // Remainder is -1 for negative odd values, so test against zero.
                    *self % 2 != 0
                }
            }
        )*
    };
}

impl_parity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
