//! # kronecker-codec
//!
//! Kronecker substitution: packing a short vector of small signed integers
//! into a single signed machine integer, and unpacking it again.
//!
//! This crate provides:
//! - Per-type limit tables giving the component bounds for every dimension
//! - A streaming encoder (`KEncoder`) and decoder (`KDecoder`)
//! - Batch `encode`/`decode` with lossless conversion of element types
//!
//! ## Example
//!
//! ```
//! use kronecker_codec::{decode, encode};
//!
//! let code = encode::<i64, _>([3, -1, 4])?;
//! assert_eq!(decode::<i64>(code, 3)?, vec![3, -1, 4]);
//! # Ok::<(), kronecker_codec::KroneckerError>(())
//! ```
//!
//! ## Determinism
//!
//! Limit tables are computed once per type on first use. The search is
//! seeded per dimension, so tables (and therefore codes) are identical
//! across runs and threads of the same build.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cast;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod limits;
pub mod native;

#[cfg(test)]
mod proptests;

pub use cast::{safe_cast, CastError, SafeCast};
pub use decoder::{decode, decode_as, decode_into, KDecoder};
pub use encoder::{encode, encode_exact, KEncoder};
pub use error::{KroneckerError, Result};
pub use limits::{determine_limit, determine_limits, get_limits, LimitEntry, LimitSearchConfig, LimitTable};
pub use native::KroneckerInt;
