//! Arbitrary precision integers.
//!
//! Values that fit in an `i64` are stored inline; everything else lives in
//! a heap-allocated `dashu::IBig`. A value is promoted to the large form
//! when an operation overflows the inline storage and, once large, is
//! never demoted again. Fresh values (constructors, parsing) start in the
//! smallest form that holds them.

use dashu::base::{Abs, BitTest, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use crate::primality;

#[derive(Clone)]
enum Repr {
    Small(i64),
    Large(IBig),
}

/// An arbitrary precision integer.
///
/// Arithmetic follows the usual Rust integer conventions: division
/// truncates toward zero and the remainder takes the sign of the dividend.
#[derive(Clone)]
pub struct Integer(Repr);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(Repr::Small(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self::from)
    }

    /// Returns true if the value is held in inline storage.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(self.0, Repr::Small(_))
    }

    /// Moves the value to heap storage. Has no effect on large values.
    pub fn promote(&mut self) {
        if let Repr::Small(v) = self.0 {
            self.0 = Repr::Large(IBig::from(v));
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        match &self.0 {
            Repr::Small(v) => v
                .checked_abs()
                .map_or_else(|| Self(Repr::Large(IBig::from(*v).abs())), Self::new),
            Repr::Large(v) => Self(Repr::Large(v.clone().abs())),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match &self.0 {
            Repr::Small(v) => v.signum() as i8,
            Repr::Large(v) => {
                if v.is_zero() {
                    0
                } else if DashuSigned::is_positive(v) {
                    1
                } else {
                    -1
                }
            }
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Returns true if this integer is divisible by two.
    #[must_use]
    pub fn is_even(&self) -> bool {
        match &self.0 {
            Repr::Small(v) => v % 2 == 0,
            Repr::Large(v) => !v.bit(0),
        }
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        match &self.0 {
            Repr::Small(v) => (u64::BITS - v.unsigned_abs().leading_zeros()) as usize,
            Repr::Large(v) => v.bit_len(),
        }
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match &self.0 {
            Repr::Small(v) => Some(*v),
            Repr::Large(v) => v.clone().try_into().ok(),
        }
    }

    /// Attempts to convert to an i128.
    ///
    /// Returns `None` if the value doesn't fit in an i128.
    #[must_use]
    pub fn to_i128(&self) -> Option<i128> {
        match &self.0 {
            Repr::Small(v) => Some(i128::from(*v)),
            Repr::Large(v) => v.clone().try_into().ok(),
        }
    }

    /// Returns the value as a `dashu::IBig`, regardless of storage.
    #[must_use]
    pub fn to_ibig(&self) -> IBig {
        match &self.0 {
            Repr::Small(v) => IBig::from(*v),
            Repr::Large(v) => v.clone(),
        }
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        if let Repr::Small(v) = self.0 {
            if let Some(p) = v.checked_pow(exp) {
                return Self::new(p);
            }
        }
        Self(Repr::Large(self.to_ibig().pow(exp as usize)))
    }

    /// Returns true if this integer is a prime number.
    ///
    /// Deterministic for every value below 2^64. Larger values are
    /// subjected to a strong probable-prime test with a fixed witness set,
    /// so the answer is reproducible but not a proof.
    #[must_use]
    pub fn is_prime(&self) -> bool {
        if self.signum() <= 0 {
            return false;
        }
        match &self.0 {
            Repr::Small(v) => primality::is_prime_u64(v.unsigned_abs()),
            Repr::Large(v) => match u64::try_from(v.clone()) {
                Ok(small) => primality::is_prime_u64(small),
                Err(_) => primality::is_probable_prime(v),
            },
        }
    }

    /// Returns the smallest prime greater than or equal to self.
    #[must_use]
    pub fn next_prime(&self) -> Self {
        let two = Self::new(2);
        if *self <= two {
            return two;
        }
        let mut candidate = if self.is_even() { self + &Self::one() } else { self.clone() };
        while !candidate.is_prime() {
            candidate += &two;
        }
        candidate
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::new(0)
    }

    fn is_zero(&self) -> bool {
        self.signum() == 0
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        match &self.0 {
            Repr::Small(v) => *v == 1,
            Repr::Large(v) => *v == IBig::ONE,
        }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => a.cmp(b),
            _ => self.to_ibig().cmp(&other.to_ibig()),
        }
    }
}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal values must hash alike whatever their storage.
        match self.to_i128() {
            Some(v) => v.hash(state),
            None => self.to_ibig().hash(state),
        }
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Small(v) => write!(f, "{v}"),
            Repr::Large(v) => write!(f, "{v}"),
        }
    }
}

// Arithmetic operations. The inline fast path uses checked machine
// arithmetic and falls through to IBig on overflow.
macro_rules! impl_binop {
    ($trait:ident, $method:ident, $checked:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<&Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                if let (Repr::Small(a), Repr::Small(b)) = (&self.0, &rhs.0) {
                    if let Some(v) = a.$checked(*b) {
                        return Integer::new(v);
                    }
                }
                Integer(Repr::Large($trait::$method(self.to_ibig(), rhs.to_ibig())))
            }
        }

        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<i64> for Integer {
            type Output = Integer;

            fn $method(self, rhs: i64) -> Integer {
                $trait::$method(&self, &Integer::new(rhs))
            }
        }

        impl $trait<i64> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: i64) -> Integer {
                $trait::$method(self, &Integer::new(rhs))
            }
        }

        impl $assign_trait<&Integer> for Integer {
            fn $assign_method(&mut self, rhs: &Integer) {
                *self = $trait::$method(&*self, rhs);
            }
        }

        impl $assign_trait<i64> for Integer {
            fn $assign_method(&mut self, rhs: i64) {
                *self = $trait::$method(&*self, &Integer::new(rhs));
            }
        }
    };
}

impl_binop!(Add, add, checked_add, AddAssign, add_assign);
impl_binop!(Sub, sub, checked_sub, SubAssign, sub_assign);
impl_binop!(Mul, mul, checked_mul, MulAssign, mul_assign);
// Division by zero falls through to IBig, which panics.
impl_binop!(Div, div, checked_div, DivAssign, div_assign);

impl Rem<&Integer> for &Integer {
    type Output = Integer;

    fn rem(self, rhs: &Integer) -> Integer {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.0, &rhs.0) {
            if let Some(v) = a.checked_rem(*b) {
                return Integer::new(v);
            }
        }
        Integer(Repr::Large(self.to_ibig() % rhs.to_ibig()))
    }
}

impl Rem for Integer {
    type Output = Integer;

    fn rem(self, rhs: Integer) -> Integer {
        &self % &rhs
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        match &self.0 {
            Repr::Small(v) => v
                .checked_neg()
                .map_or_else(|| Integer(Repr::Large(-IBig::from(*v))), Integer::new),
            Repr::Large(v) => Integer(Repr::Large(-v)),
        }
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        -&self
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                #[allow(clippy::useless_conversion)]
                fn from(value: $t) -> Self {
                    i64::try_from(value).map_or_else(|_| Self(Repr::Large(IBig::from(value))), Self::new)
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        match i64::try_from(value.clone()) {
            Ok(v) => Self::new(v),
            Err(_) => Self(Repr::Large(value)),
        }
    }
}
