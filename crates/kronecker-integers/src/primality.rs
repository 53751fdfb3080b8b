//! Miller-Rabin primality testing.

use dashu::base::BitTest;
use dashu::integer::IBig;

/// Witnesses that make Miller-Rabin deterministic for every n < 2^64.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }

    result
}

/// Deterministic primality test for machine-sized values.
pub(crate) fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    // n - 1 = d * 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    WITNESSES.iter().all(|&a| {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            return true;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                return true;
            }
        }
        false
    })
}

fn pow_mod_big(base: &IBig, exp: &IBig, m: &IBig) -> IBig {
    let mut result = IBig::ONE;
    let mut base = base % m;

    for i in 0..exp.bit_len() {
        if exp.bit(i) {
            result = (&result * &base) % m;
        }
        base = (&base * &base) % m;
    }

    result
}

/// Strong probable-prime test for values of at least 2^64.
pub(crate) fn is_probable_prime(n: &IBig) -> bool {
    for &p in &WITNESSES {
        if (n % IBig::from(p)).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - IBig::ONE;
    let two = IBig::from(2u8);
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while !d.bit(0) {
        d = d / &two;
        s += 1;
    }

    WITNESSES.iter().all(|&a| {
        let mut x = pow_mod_big(&IBig::from(a), &d, n);
        if x == IBig::ONE || x == n_minus_one {
            return true;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                return true;
            }
        }
        false
    })
}
