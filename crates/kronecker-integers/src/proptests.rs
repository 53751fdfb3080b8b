//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Naive reference primality check.
    fn trial_division(n: i64) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    proptest! {
        // Ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -a.clone();
            prop_assert!((a + neg_a).is_zero());
        }

        // Agreement with i128 arithmetic across the inline/heap boundary

        #[test]
        fn add_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let sum = Integer::new(a) + Integer::new(b);
            prop_assert_eq!(sum.to_i128(), Some(i128::from(a) + i128::from(b)));
        }

        #[test]
        fn sub_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let diff = Integer::new(a) - Integer::new(b);
            prop_assert_eq!(diff.to_i128(), Some(i128::from(a) - i128::from(b)));
        }

        #[test]
        fn mul_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let product = Integer::new(a) * Integer::new(b);
            prop_assert_eq!(product.to_i128(), Some(i128::from(a) * i128::from(b)));
        }

        #[test]
        fn div_rem_match_i128(a in any::<i128>(), b in non_zero_int()) {
            let q = Integer::from(a) / Integer::new(b);
            let r = Integer::from(a) % Integer::new(b);
            prop_assert_eq!(q.to_i128(), Some(a / i128::from(b)));
            prop_assert_eq!(r.to_i128(), Some(a % i128::from(b)));
        }

        #[test]
        fn ordering_ignores_storage(a in any::<i64>(), b in any::<i64>()) {
            let mut big_a = Integer::new(a);
            big_a.promote();
            prop_assert_eq!(big_a.cmp(&Integer::new(b)), a.cmp(&b));
            prop_assert!(big_a == Integer::new(a));
        }

        // Primes

        #[test]
        fn next_prime_is_smallest_prime_above(n in -100i64..100_000i64) {
            let p = Integer::new(n).next_prime().to_i64().unwrap();
            prop_assert!(trial_division(p));
            prop_assert!(p >= n);
            prop_assert!((n.max(2)..p).all(|k| !trial_division(k)));
        }

        #[test]
        fn is_prime_matches_trial_division(n in 0i64..200_000i64) {
            prop_assert_eq!(Integer::new(n).is_prime(), trial_division(n));
        }
    }
}
