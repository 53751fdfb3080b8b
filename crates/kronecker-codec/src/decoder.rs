//! Kronecker decoding.

use std::iter::FusedIterator;

use crate::cast::{safe_cast, SafeCast};
use crate::error::{KroneckerError, Result};
use crate::limits::LimitEntry;
use crate::native::KroneckerInt;

/// Streaming Kronecker decoder.
///
/// Components come out in the order they were encoded, either through
/// [`pull`](Self::pull) or by iterating the decoder.
///
/// ```
/// # use kronecker_codec::{encode, KDecoder};
/// let code = encode::<i32, _>([4, -1, 2])?;
/// let values: Vec<i32> = KDecoder::new(code, 3)?.collect();
/// assert_eq!(values, [4, -1, 2]);
/// # Ok::<(), kronecker_codec::KroneckerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct KDecoder<N: KroneckerInt> {
    entry: &'static LimitEntry<N>,
    index: usize,
    // Shifted into [0, h_max - h_min].
    code: N,
    mod_arg: N,
}

impl<N: KroneckerInt> KDecoder<N> {
    /// Creates a decoder that splits `code` into `size` components.
    ///
    /// # Errors
    ///
    /// - [`KroneckerError::DimensionTooLarge`] if `N` cannot code sequences of this size,
    /// - [`KroneckerError::InvalidZeroSizeCode`] if `size` is zero and `code` is not,
    /// - [`KroneckerError::CodeOutOfRange`] if `code` lies outside `[h_min, h_max]`.
    pub fn new(code: N, size: usize) -> Result<Self> {
        let entry = N::limits().entry(size)?;

        if size == 0 {
            if !code.is_zero() {
                return Err(KroneckerError::InvalidZeroSizeCode { code: code.widen() });
            }
        } else if !entry.contains(code) {
            return Err(KroneckerError::CodeOutOfRange {
                code: code.widen(),
                size,
                h_min: entry.h_min().widen(),
                h_max: entry.h_max().widen(),
            });
        }

        Ok(Self {
            entry,
            index: 0,
            code: code - entry.h_min(),
            mod_arg: N::one(),
        })
    }

    /// Returns the size the decoder was created for.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entry.dimension()
    }

    /// Returns how many components are left to pull.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.size() - self.index
    }

    /// Pulls the next component.
    ///
    /// # Errors
    ///
    /// Returns [`KroneckerError::TooManyPulls`] once every component has
    /// been pulled.
    pub fn pull(&mut self) -> Result<N> {
        let size = self.size();
        if self.index == size {
            return Err(KroneckerError::TooManyPulls { size });
        }

        let bound = self.entry.bounds()[self.index];
        let next_mod = self.mod_arg * (bound + bound + N::one());
        let value = (self.code % next_mod) / self.mod_arg - bound;

        self.mod_arg = next_mod;
        self.index += 1;

        Ok(value)
    }
}

impl<N: KroneckerInt> Iterator for KDecoder<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.pull().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<N: KroneckerInt> ExactSizeIterator for KDecoder<N> {}

impl<N: KroneckerInt> FusedIterator for KDecoder<N> {}

/// Decodes `code` into a vector of `size` components.
///
/// # Errors
///
/// Same as [`KDecoder::new`].
pub fn decode<N: KroneckerInt>(code: N, size: usize) -> Result<Vec<N>> {
    Ok(KDecoder::new(code, size)?.collect())
}

/// Decodes `code` and safe-casts every component to `T`.
///
/// # Errors
///
/// Same as [`KDecoder::new`], plus [`KroneckerError::ComponentCastFailure`]
/// for the first component that is not representable in `T`.
pub fn decode_as<N, T>(code: N, size: usize) -> Result<Vec<T>>
where
    N: KroneckerInt + SafeCast<T>,
{
    KDecoder::new(code, size)?
        .enumerate()
        .map(|(index, value)| {
            safe_cast::<T, N>(value).map_err(|source| KroneckerError::ComponentCastFailure { index, source })
        })
        .collect()
}

/// Decodes `code` into `out`, using its length as the dimension.
///
/// On error `out` is left untouched.
///
/// # Errors
///
/// Same as [`decode_as`].
pub fn decode_into<N, T>(code: N, out: &mut [T]) -> Result<()>
where
    N: KroneckerInt + SafeCast<T>,
{
    let values = decode_as::<N, T>(code, out.len())?;
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = value;
    }
    Ok(())
}
