//! Native signed integer types usable as Kronecker codes.

use std::fmt;
use std::sync::OnceLock;

use kronecker_integers::Integer;
use num_traits::{PrimInt, Signed};

use crate::limits::{search_limits, LimitSearchConfig, LimitTable};

/// A bounded signed machine integer that codes can be stored in.
///
/// Each implementor owns one process-wide [`LimitTable`], computed with
/// the default [`LimitSearchConfig`] the first time it is requested and
/// shared read-only afterwards.
pub trait KroneckerInt: PrimInt + Signed + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Name of the type, used in diagnostics.
    const NAME: &'static str;

    /// Returns the cached limit table for this type.
    fn limits() -> &'static LimitTable<Self>;

    /// Widens the value to `i128` without loss.
    fn widen(self) -> i128;

    /// Converts an arbitrary precision integer, if it is representable.
    fn from_integer(value: &Integer) -> Option<Self>;
}

macro_rules! impl_kronecker_int {
    ($($t:ty),*) => {
        $(
            impl KroneckerInt for $t {
                const NAME: &'static str = stringify!($t);

                fn limits() -> &'static LimitTable<Self> {
                    static TABLE: OnceLock<LimitTable<$t>> = OnceLock::new();
                    TABLE.get_or_init(|| search_limits(&LimitSearchConfig::default()))
                }

                #[allow(clippy::cast_lossless)]
                fn widen(self) -> i128 {
                    self as i128
                }

                fn from_integer(value: &Integer) -> Option<Self> {
                    value.to_i128().and_then(|v| <$t>::try_from(v).ok())
                }
            }
        )*
    };
}

impl_kronecker_int!(i8, i16, i32, i64, i128, isize);
