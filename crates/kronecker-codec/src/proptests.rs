//! Property-based tests for Kronecker coding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{decode, encode, get_limits, KDecoder, KEncoder, KroneckerError};

    macro_rules! codec_props {
        ($module:ident, $t:ty) => {
            mod $module {
                use super::*;

                // A dimension together with a vector inside its bounds.
                fn bounded_vector() -> impl Strategy<Value = Vec<$t>> {
                    let table = get_limits::<$t>();
                    (1..table.len()).prop_flat_map(move |m| {
                        table[m].bounds().iter().map(|&b| -b..=b).collect::<Vec<_>>()
                    })
                }

                // A dimension together with a code inside its range.
                fn bounded_code() -> impl Strategy<Value = (usize, $t)> {
                    let table = get_limits::<$t>();
                    (1..table.len()).prop_flat_map(move |m| {
                        (Just(m), table[m].h_min()..=table[m].h_max())
                    })
                }

                proptest! {
                    #[test]
                    fn round_trip(v in bounded_vector()) {
                        let code = encode::<$t, _>(&v).unwrap();
                        prop_assert_eq!(decode::<$t>(code, v.len()).unwrap(), v);
                    }

                    #[test]
                    fn every_code_decodes(pair in bounded_code()) {
                        let (m, code) = pair;
                        let v = decode::<$t>(code, m).unwrap();
                        prop_assert_eq!(v.len(), m);
                        prop_assert_eq!(encode::<$t, _>(&v).unwrap(), code);
                    }

                    #[test]
                    fn code_within_range(v in bounded_vector()) {
                        let entry = &get_limits::<$t>()[v.len()];
                        let code = encode::<$t, _>(&v).unwrap();
                        prop_assert!(entry.contains(code));
                    }

                    #[test]
                    fn streaming_matches_batch(v in bounded_vector()) {
                        let mut enc = KEncoder::<$t>::new(v.len()).unwrap();
                        for &x in &v {
                            enc.push(x).unwrap();
                        }
                        let code = enc.get().unwrap();
                        prop_assert_eq!(code, encode::<$t, _>(&v).unwrap());

                        let mut dec = KDecoder::new(code, v.len()).unwrap();
                        for &x in &v {
                            prop_assert_eq!(dec.pull().unwrap(), x);
                        }
                        prop_assert_eq!(dec.pull(), Err(KroneckerError::TooManyPulls { size: v.len() }));
                    }

                    #[test]
                    fn exceeding_bound_fails(v in bounded_vector(), index in any::<prop::sample::Index>()) {
                        let bounds = get_limits::<$t>()[v.len()].bounds();
                        let i = index.index(v.len());
                        let mut w = v.clone();
                        w[i] = bounds[i] + 1;
                        let err = encode::<$t, _>(&w).unwrap_err();
                        prop_assert!(
                            matches!(err, KroneckerError::ComponentOutOfRange { index, .. } if index == i),
                            "unexpected error: {}",
                            err
                        );
                    }
                }
            }
        };
    }

    codec_props!(props_i8, i8);
    codec_props!(props_i16, i16);
    codec_props!(props_i32, i32);
    codec_props!(props_i64, i64);
    codec_props!(props_i128, i128);
    codec_props!(props_isize, isize);
}
