//! # Kronecker
//!
//! Kronecker substitution for short vectors of bounded signed integers.
//!
//! A vector of dimension `m` whose components stay within per-position
//! bounds is packed into one signed machine integer, so that equality,
//! hashing and storage of the vector reduce to those of the integer. The
//! bounds for every dimension and every native width are derived once
//! per process.
//!
//! ## Quick Start
//!
//! ```rust
//! use kronecker::prelude::*;
//!
//! let code = encode::<i64, _>([2, -7, 1])?;
//! assert_eq!(decode::<i64>(code, 3)?, vec![2, -7, 1]);
//!
//! let table = get_limits::<i32>();
//! assert!(table.max_dimension() >= 10);
//! # Ok::<(), KroneckerError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use kronecker_codec as codec;
pub use kronecker_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use kronecker_codec::{
        decode, decode_as, decode_into, encode, encode_exact, get_limits, safe_cast, KDecoder, KEncoder,
        KroneckerError, KroneckerInt, LimitEntry, LimitSearchConfig, LimitTable, SafeCast,
    };
    pub use kronecker_integers::Integer;
}
