//! Lossless numeric conversions.
//!
//! A safe cast either reproduces the source value exactly in the target
//! type or fails. It never wraps, saturates or drops a fractional part.

use std::fmt;

use kronecker_integers::Integer;
use num_traits::NumCast;
use thiserror::Error;

/// A value could not be represented exactly in the target type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot convert {value} to {target} without loss")]
pub struct CastError {
    value: String,
    target: &'static str,
}

impl CastError {
    /// Creates a cast error for `value` and the named target type.
    pub fn new(value: impl fmt::Display, target: &'static str) -> Self {
        Self {
            value: value.to_string(),
            target,
        }
    }

    /// Returns the textual form of the rejected value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the name of the target type.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}

/// Conversion into `To` that fails instead of losing information.
pub trait SafeCast<To>: Sized {
    /// Converts `self` into `To`.
    ///
    /// # Errors
    ///
    /// Returns [`CastError`] if the value is not exactly representable.
    fn safe_cast(self) -> Result<To, CastError>;
}

/// Converts `value` into `To` without loss.
///
/// # Errors
///
/// Returns [`CastError`] if the value is not exactly representable.
pub fn safe_cast<To, From: SafeCast<To>>(value: From) -> Result<To, CastError> {
    value.safe_cast()
}

impl<T, To> SafeCast<To> for &T
where
    T: Copy + SafeCast<To>,
{
    fn safe_cast(self) -> Result<To, CastError> {
        (*self).safe_cast()
    }
}

macro_rules! int_to_int {
    ($from:ty => $($to:ty),*) => {
        $(
            impl SafeCast<$to> for $from {
                #[allow(clippy::useless_conversion)]
                fn safe_cast(self) -> Result<$to, CastError> {
                    <$to>::try_from(self).map_err(|_| CastError::new(self, stringify!($to)))
                }
            }
        )*
    };
}

macro_rules! float_to_int {
    ($from:ty => $($to:ty),*) => {
        $(
            impl SafeCast<$to> for $from {
                fn safe_cast(self) -> Result<$to, CastError> {
                    if self.is_finite() && self.fract() == 0.0 {
                        if let Some(v) = <$to as NumCast>::from(self) {
                            return Ok(v);
                        }
                    }
                    Err(CastError::new(self, stringify!($to)))
                }
            }
        )*
    };
}

macro_rules! int_to_float {
    ($from:ty => $($to:ty),*) => {
        $(
            impl SafeCast<$to> for $from {
                fn safe_cast(self) -> Result<$to, CastError> {
                    match <$to as NumCast>::from(self) {
                        Some(f) if <$from as NumCast>::from(f) == Some(self) => Ok(f),
                        _ => Err(CastError::new(self, stringify!($to))),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_casts {
    ($($int:ty),*) => {
        $(
            int_to_int!($int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
            int_to_float!($int => f32, f64);

            impl SafeCast<$int> for Integer {
                fn safe_cast(self) -> Result<$int, CastError> {
                    <$int>::try_from(self.to_ibig()).map_err(|_| CastError::new(&self, stringify!($int)))
                }
            }

            impl SafeCast<Integer> for $int {
                fn safe_cast(self) -> Result<Integer, CastError> {
                    Ok(Integer::from(self))
                }
            }
        )*
        float_to_int!(f32 => $($int),*);
        float_to_int!(f64 => $($int),*);
    };
}

impl_casts!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_to_int() {
        assert_eq!(safe_cast::<i8, _>(127i64), Ok(127i8));
        assert!(safe_cast::<i8, _>(128i64).is_err());
        assert!(safe_cast::<u32, _>(-1i32).is_err());
        assert_eq!(safe_cast::<i64, _>(&42u16), Ok(42i64));
    }

    #[test]
    fn test_float_to_int() {
        assert_eq!(safe_cast::<i32, _>(3.0f64), Ok(3));
        assert_eq!(safe_cast::<i32, _>(-0.0f64), Ok(0));

        let err = safe_cast::<i32, _>(1.5f64).unwrap_err();
        assert_eq!(err.target(), "i32");
        assert_eq!(err.value(), "1.5");

        assert!(safe_cast::<i32, _>(f64::NAN).is_err());
        assert!(safe_cast::<i8, _>(300.0f32).is_err());
        assert!(safe_cast::<i64, _>(9.223_372_036_854_775_808e18f64).is_err());
    }

    #[test]
    fn test_int_to_float() {
        assert_eq!(safe_cast::<f64, _>(1i64 << 53), Ok(9_007_199_254_740_992.0));
        assert!(safe_cast::<f64, _>((1i64 << 53) + 1).is_err());
        assert!(safe_cast::<f64, _>(i64::MAX).is_err());
    }

    #[test]
    fn test_big_integer() {
        let big = Integer::new(2).pow(70);
        assert!(safe_cast::<i64, _>(big.clone()).is_err());
        assert_eq!(safe_cast::<i128, _>(big), Ok(1i128 << 70));
        assert_eq!(safe_cast::<Integer, _>(u128::MAX).unwrap().to_string(), u128::MAX.to_string());
    }
}
