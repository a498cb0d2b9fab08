//! Truthiness of source cell values
//!
//! Grids are built from in-memory arrays of booleans or numbers. A value
//! marks a filled cell when it is truthy: `true`, a non-zero integer, or a
//! float that does not compare equal to zero (so NaN counts as filled).

/// A value that can be interpreted as a filled or empty grid cell.
pub trait CellValue {
    /// Returns `true` if the value marks a filled cell.
    fn is_filled(&self) -> bool;
}

impl CellValue for bool {
    #[inline]
    fn is_filled(&self) -> bool {
        *self
    }
}

macro_rules! impl_cell_value_int {
    ($($t:ty),*) => {
        $(
            impl CellValue for $t {
                #[inline]
                fn is_filled(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_cell_value_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl CellValue for f32 {
    #[inline]
    fn is_filled(&self) -> bool {
        *self != 0.0
    }
}

impl CellValue for f64 {
    #[inline]
    fn is_filled(&self) -> bool {
        *self != 0.0
    }
}

impl<T: CellValue + ?Sized> CellValue for &T {
    #[inline]
    fn is_filled(&self) -> bool {
        (**self).is_filled()
    }
}
