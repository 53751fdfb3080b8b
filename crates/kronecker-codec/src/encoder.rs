//! Kronecker encoding.
//!
//! A vector `v` of dimension `m` is coded as the mixed-radix number
//! `sum_i v[i] * c[i]`, where `c[0] = 1` and `c[i+1] = c[i] * (2 * B[i] + 1)`
//! for the bound vector `B` of dimension `m`. The computation is carried
//! out on the shifted digits `v[i] + B[i] >= 0` and offset by `h_min` at
//! the end, so no intermediate value exceeds `h_max - h_min`.

use crate::cast::{safe_cast, SafeCast};
use crate::error::{KroneckerError, Result};
use crate::limits::LimitEntry;
use crate::native::KroneckerInt;

/// Streaming Kronecker encoder.
///
/// The encoder is created for a fixed number of components, which are
/// then pushed one at a time; [`get`](Self::get) returns the code once all
/// of them have been pushed. An encoder whose protocol was violated should
/// be discarded.
///
/// ```
/// # use kronecker_codec::KEncoder;
/// let mut enc = KEncoder::<i64>::new(3)?;
/// enc.push(1)?.push(-2)?.push(3)?;
/// let code = enc.get()?;
/// assert_eq!(code, kronecker_codec::encode::<i64, _>([1, -2, 3])?);
/// # Ok::<(), kronecker_codec::KroneckerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct KEncoder<N: KroneckerInt> {
    entry: &'static LimitEntry<N>,
    index: usize,
    value: N,
    cur_c: N,
}

impl<N: KroneckerInt> KEncoder<N> {
    /// Creates an encoder for sequences of `size` components.
    ///
    /// # Errors
    ///
    /// Returns [`KroneckerError::DimensionTooLarge`] if `N` cannot code
    /// sequences of this size.
    pub fn new(size: usize) -> Result<Self> {
        let entry = N::limits().entry(size)?;
        Ok(Self {
            entry,
            index: 0,
            value: N::zero(),
            cur_c: N::one(),
        })
    }

    /// Returns the size the encoder was created for.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entry.dimension()
    }

    /// Returns how many components have been pushed so far.
    #[must_use]
    pub fn pushed(&self) -> usize {
        self.index
    }

    /// Pushes the next component.
    ///
    /// # Errors
    ///
    /// Returns [`KroneckerError::TooManyPushes`] if all components have
    /// already been pushed, or [`KroneckerError::ComponentOutOfRange`] if
    /// `n` exceeds the bound of its position. A rejected value leaves the
    /// encoder unchanged.
    pub fn push(&mut self, n: N) -> Result<&mut Self> {
        let size = self.size();
        if self.index == size {
            return Err(KroneckerError::TooManyPushes { size });
        }

        let bound = self.entry.bounds()[self.index];
        if n < -bound || n > bound {
            return Err(KroneckerError::ComponentOutOfRange {
                index: self.index,
                value: n.widen(),
                bound: bound.widen(),
            });
        }

        // Bounded by h_max - h_min and h_max - h_min + 1 respectively.
        self.value = self.value + (n + bound) * self.cur_c;
        self.cur_c = self.cur_c * (bound + bound + N::one());
        self.index += 1;

        Ok(self)
    }

    /// Returns the code of the pushed sequence.
    ///
    /// # Errors
    ///
    /// Returns [`KroneckerError::NotEnoughPushes`] if fewer components than
    /// the construction size have been pushed.
    pub fn get(&self) -> Result<N> {
        let size = self.size();
        if self.index < size {
            return Err(KroneckerError::NotEnoughPushes {
                pushed: self.index,
                size,
            });
        }
        Ok(self.value + self.entry.h_min())
    }
}

fn cast_component<N, T>(index: usize, value: T) -> Result<N>
where
    T: SafeCast<N>,
{
    safe_cast::<N, T>(value).map_err(|source| KroneckerError::ComponentCastFailure { index, source })
}

/// Encodes a sequence of known length.
///
/// Every element is safe-cast to `N` before it is checked against its
/// bound. The empty sequence is coded as zero.
///
/// # Errors
///
/// - [`KroneckerError::DimensionTooLarge`] if the sequence is too long for `N`,
/// - [`KroneckerError::ComponentCastFailure`] if an element is not representable in `N`,
/// - [`KroneckerError::ComponentOutOfRange`] if an element exceeds its bound.
pub fn encode<N, I>(values: I) -> Result<N>
where
    N: KroneckerInt,
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: SafeCast<N>,
{
    let values = values.into_iter();
    let mut encoder = KEncoder::new(values.len())?;
    for (index, value) in values.enumerate() {
        encoder.push(cast_component(index, value)?)?;
    }
    encoder.get()
}

/// Encodes the first `size` elements of `values`.
///
/// Elements past `size` are not consumed.
///
/// # Errors
///
/// Same as [`encode`], plus [`KroneckerError::NotEnoughPushes`] if `values`
/// yields fewer than `size` elements.
pub fn encode_exact<N, I>(values: I, size: usize) -> Result<N>
where
    N: KroneckerInt,
    I: IntoIterator,
    I::Item: SafeCast<N>,
{
    let mut encoder = KEncoder::new(size)?;
    for (index, value) in values.into_iter().take(size).enumerate() {
        encoder.push(cast_component(index, value)?)?;
    }
    encoder.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::get_limits;

    // Radices c[i] = prod_{j<i} (2 * B[j] + 1) of a dimension.
    fn radices(bounds: &[i64]) -> Vec<i64> {
        bounds
            .iter()
            .scan(1i64, |c, &b| {
                let current = *c;
                *c *= 2 * b + 1;
                Some(current)
            })
            .collect()
    }

    #[test]
    fn test_zero_dimension() {
        assert_eq!(encode::<i32, _>(Vec::<i16>::new()), Ok(0));
        assert_eq!(KEncoder::<i8>::new(0).unwrap().get(), Ok(0));
    }

    #[test]
    fn test_single_component_is_identity() {
        for k in -10i16..=10 {
            assert_eq!(encode::<i8, _>([k]), Ok(k as i8));
            assert_eq!(encode::<i16, _>([k]), Ok(k));
            assert_eq!(encode::<i32, _>([k]), Ok(i32::from(k)));
            assert_eq!(encode::<i64, _>([k]), Ok(i64::from(k)));
            assert_eq!(encode::<i128, _>([k]), Ok(i128::from(k)));
        }
    }

    #[test]
    fn test_mixed_radix_value() {
        let entry = &get_limits::<i64>()[3];
        let c = radices(entry.bounds());
        let expected = 1 - 2 * c[1] + 3 * c[2];
        assert_eq!(encode::<i64, _>([1, -2, 3]), Ok(expected));
    }

    #[test]
    fn test_boundary_values() {
        for entry in get_limits::<i32>().iter().skip(1) {
            let max = entry.bounds().to_vec();
            let min: Vec<i32> = max.iter().map(|b| -b).collect();
            assert_eq!(encode::<i32, _>(&max), Ok(entry.h_max()));
            assert_eq!(encode::<i32, _>(&min), Ok(entry.h_min()));
        }
    }

    #[test]
    fn test_out_of_range_component() {
        let entry = &get_limits::<i64>()[1];
        let b = entry.bounds()[0];
        assert_eq!(encode::<i64, _>([b]), Ok(entry.h_max()));
        assert_eq!(encode::<i64, _>([-b]), Ok(entry.h_min()));
        assert_eq!(
            encode::<i64, _>([b + 1]),
            Err(KroneckerError::ComponentOutOfRange {
                index: 0,
                value: i128::from(b) + 1,
                bound: i128::from(b),
            })
        );

        let entry = &get_limits::<i16>()[4];
        let mut v = vec![0i16; 4];
        v[2] = -entry.bounds()[2] - 1;
        assert!(matches!(
            encode::<i16, _>(&v),
            Err(KroneckerError::ComponentOutOfRange { index: 2, .. })
        ));

        assert!(encode::<i32, _>([0, i32::MAX]).is_err());
        assert!(encode::<i32, _>([0, i32::MIN]).is_err());
    }

    #[test]
    fn test_dimension_too_large() {
        let max = get_limits::<i16>().max_dimension();
        assert_eq!(
            encode::<i16, _>(vec![0i16; max + 1]),
            Err(KroneckerError::DimensionTooLarge {
                size: max + 1,
                max,
                type_name: "i16",
            })
        );
        assert!(KEncoder::<i16>::new(max).is_ok());
        assert!(KEncoder::<i16>::new(max + 1).is_err());
    }

    #[test]
    fn test_cast_failures() {
        assert!(matches!(
            encode::<i32, _>([1.5f64]),
            Err(KroneckerError::ComponentCastFailure { index: 0, .. })
        ));
        assert!(matches!(
            encode::<i8, _>([0i64, 1000]),
            Err(KroneckerError::ComponentCastFailure { index: 1, .. })
        ));
        assert_eq!(encode::<i32, _>([2.0f64, -1.0]), encode::<i32, _>([2, -1]));
    }

    #[test]
    fn test_stream_errors() {
        let mut k0 = KEncoder::<i32>::new(0).unwrap();
        assert_eq!(k0.push(1).err(), Some(KroneckerError::TooManyPushes { size: 0 }));
        assert_eq!(k0.push(1).err(), Some(KroneckerError::TooManyPushes { size: 0 }));

        let mut k1 = KEncoder::<i32>::new(1).unwrap();
        k1.push(1).unwrap();
        assert_eq!(k1.push(2).err(), Some(KroneckerError::TooManyPushes { size: 1 }));

        let mut k2 = KEncoder::<i32>::new(2).unwrap();
        assert!(k2.push(i32::MAX).is_err());
        assert!(k2.push(i32::MAX).is_err());
        assert_eq!(k2.pushed(), 0);

        let mut k3 = KEncoder::<i32>::new(3).unwrap();
        k3.push(1).unwrap();
        assert_eq!(k3.get(), Err(KroneckerError::NotEnoughPushes { pushed: 1, size: 3 }));
        assert_eq!(k3.size(), 3);
    }

    #[test]
    fn test_stream_matches_batch() -> Result<()> {
        let mut enc = KEncoder::<i64>::new(4)?;
        enc.push(7)?.push(-8)?.push(9)?.push(0)?;
        assert_eq!(enc.get()?, encode::<i64, _>(&[7i64, -8, 9, 0])?);
        Ok(())
    }

    #[test]
    fn test_encode_exact() {
        let values = [7i32, 8, 9];
        assert_eq!(encode_exact::<i32, _>(&values, 3), encode::<i32, _>(&values));
        assert_eq!(encode_exact::<i32, _>(&values, 2), encode::<i32, _>(&values[..2]));
        assert_eq!(
            encode_exact::<i32, _>(&values, 5),
            Err(KroneckerError::NotEnoughPushes { pushed: 3, size: 5 })
        );
        assert_eq!(encode_exact::<i32, _>(std::iter::repeat(1u8), 1), Ok(1));
    }
}
