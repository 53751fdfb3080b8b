//! # kronecker-integers
//!
//! Arbitrary precision integer arithmetic for the Kronecker codec.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision signed integers (`Integer`)
//! - Deterministic primality testing and `next_prime`
//!
//! ## Performance Notes
//!
//! - Integers fitting in an `i64` are stored inline, without allocation
//! - Larger values are promoted to a heap-allocated `dashu::IBig`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
mod primality;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
