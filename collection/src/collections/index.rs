use alloc::{format, string::String};

use crate::errors::{CollectionError, Result};

/// A value that may be supplied where a position is expected.
///
/// Only values whose representation is exactly a primitive integer type are
/// treated as positions. Everything else (floats, strings, characters,
/// booleans) is rejected with [`CollectionError::InvalidArgument`] before any
/// bounds check runs, even when it looks numeric such as `"3"` or `3.0`.
pub trait IndexArgument {
    /// The integer value of the argument, or `None` when it is not an integer type.
    fn as_integer(&self) -> Option<i128>;

    /// Human readable name of the argument's type, used in error messages.
    fn type_name(&self) -> &'static str;
}

macro_rules! impl_integer_argument {
    ($($t:ty),* $(,)?) => {
        $(
            impl IndexArgument for $t {
                #[inline]
                fn as_integer(&self) -> Option<i128> {
                    Some(i128::try_from(*self).unwrap_or(i128::MAX))
                }

                fn type_name(&self) -> &'static str {
                    stringify!($t)
                }
            }
        )*
    };
}

macro_rules! impl_non_integer_argument {
    ($($t:ty),* $(,)?) => {
        $(
            impl IndexArgument for $t {
                #[inline]
                fn as_integer(&self) -> Option<i128> {
                    None
                }

                fn type_name(&self) -> &'static str {
                    stringify!($t)
                }
            }
        )*
    };
}

impl_integer_argument!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_non_integer_argument!(f32, f64, bool, char, str, String);

impl<I: IndexArgument + ?Sized> IndexArgument for &I {
    fn as_integer(&self) -> Option<i128> {
        (**self).as_integer()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// Type stage: the argument must be an integer.
pub(crate) fn integer<I: IndexArgument + ?Sized>(name: &'static str, argument: &I) -> Result<i128> {
    argument.as_integer().ok_or_else(|| {
        CollectionError::invalid_argument(
            name,
            format!("expected an integer, found {}", argument.type_name()),
        )
    })
}

/// Range stage: `value` must lie within `min..=max`.
pub(crate) fn within(name: &'static str, value: i128, min: usize, max: i128) -> Result<usize> {
    let min = min as i128;
    if value < min || value > max {
        return Err(CollectionError::out_of_range(name, value, min, max));
    }
    usize::try_from(value).map_err(|_| CollectionError::out_of_range(name, value, min, max))
}

/// Both stages for a position into a sequence of `length` elements.
///
/// `inclusive_end` admits `length` itself, for operations that may append.
pub(crate) fn position<I: IndexArgument + ?Sized>(
    name: &'static str,
    argument: &I,
    length: usize,
    inclusive_end: bool,
) -> Result<usize> {
    let value = integer(name, argument)?;
    let max = length as i128 - i128::from(!inclusive_end);
    within(name, value, 0, max)
}
