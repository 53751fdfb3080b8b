//! Limits of the Kronecker codification.
//!
//! For every dimension `m` a native integer type `N` can handle, the limit
//! table stores the symmetric bound vector `B` and the code range
//! `[h_min, h_max]` of `m`-dimensional vectors whose `i`-th component lies
//! in `[-B[i], B[i]]`.
//!
//! The bounds are found by a search carried out in arbitrary precision:
//! starting from `B = (1, ..., 1)` and the radix sequence
//! `c = (1, 3, ..., 3^(m-1))`, every step roughly doubles each radix (with
//! a small seeded perturbation, rounded up to a prime) and derives new
//! bounds from the ratios of consecutive radices. The search stops at the
//! first step whose `h_min`, `h_max` or `h_max - h_min + 1` would not fit
//! in `N`, and keeps the previous step.
//!
//! Within this implementation the search is fully deterministic: the
//! generator for dimension `m` is seeded with `m`.

use std::fmt;
use std::iter;
use std::ops::Index;

use kronecker_integers::Integer;
use num_traits::{One, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::error::{KroneckerError, Result};
use crate::native::KroneckerInt;

/// Parameters of the bound search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LimitSearchConfig {
    /// Half-width, in percent, of the random perturbation applied to every
    /// grown radix.
    pub perturbation_percent: u32,
    /// Factor by which each radix grows per step.
    pub growth_factor: u32,
}

impl Default for LimitSearchConfig {
    fn default() -> Self {
        Self {
            perturbation_percent: 5,
            growth_factor: 2,
        }
    }
}

impl LimitSearchConfig {
    /// Checks that the search is guaranteed to make progress.
    ///
    /// # Errors
    ///
    /// Returns [`KroneckerError::InvalidConfig`] if the growth factor is
    /// below 2 or the perturbation reaches 50%.
    pub fn validate(&self) -> Result<()> {
        if self.growth_factor < 2 {
            return Err(KroneckerError::InvalidConfig(format!(
                "growth factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        if self.perturbation_percent >= 50 {
            return Err(KroneckerError::InvalidConfig(format!(
                "perturbation must be below 50%, got {}%",
                self.perturbation_percent
            )));
        }
        Ok(())
    }
}

/// Codification limits for one dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LimitEntry<N> {
    bounds: Vec<N>,
    h_min: N,
    h_max: N,
    delta: N,
}

impl<N: KroneckerInt> LimitEntry<N> {
    /// The entry for dimension zero: no bounds, every value zero.
    fn empty() -> Self {
        Self {
            bounds: Vec::new(),
            h_min: N::zero(),
            h_max: N::zero(),
            delta: N::zero(),
        }
    }

    /// Converts a search state, provided `h_max - h_min + 1` fits as well.
    fn from_search(bounds: &[Integer], h_min: &Integer, h_max: &Integer, delta: &Integer) -> Option<Self> {
        N::from_integer(&(delta + 1))?;
        Some(Self {
            bounds: bounds.iter().map(N::from_integer).collect::<Option<_>>()?,
            h_min: N::from_integer(h_min)?,
            h_max: N::from_integer(h_max)?,
            delta: N::from_integer(delta)?,
        })
    }

    /// Returns the dimension this entry describes.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    /// Returns the absolute bound of every component.
    #[must_use]
    pub fn bounds(&self) -> &[N] {
        &self.bounds
    }

    /// Returns the smallest code of this dimension.
    #[must_use]
    pub fn h_min(&self) -> N {
        self.h_min
    }

    /// Returns the largest code of this dimension.
    #[must_use]
    pub fn h_max(&self) -> N {
        self.h_max
    }

    /// Returns `h_max - h_min`.
    #[must_use]
    pub fn delta(&self) -> N {
        self.delta
    }

    /// Returns true if `code` lies in `[h_min, h_max]`.
    #[must_use]
    pub fn contains(&self, code: N) -> bool {
        self.h_min <= code && code <= self.h_max
    }
}

impl<N: fmt::Display> fmt::Display for LimitEntry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, b) in self.bounds.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{b}")?;
        }
        write!(f, "] {}, {}, {}", self.h_min, self.h_max, self.delta)
    }
}

/// Codification limits for every dimension a native type supports.
///
/// Entry `m` describes `m`-dimensional vectors; entry 0 is the empty
/// entry. The largest supported dimension is `len() - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LimitTable<N> {
    entries: Vec<LimitEntry<N>>,
}

impl<N: KroneckerInt> LimitTable<N> {
    /// Runs the bound search with custom parameters.
    ///
    /// The process-wide tables returned by [`get_limits`] always use the
    /// default parameters; codes produced with a custom table are only
    /// meaningful together with that table.
    ///
    /// # Errors
    ///
    /// Returns [`KroneckerError::InvalidConfig`] if `config` is rejected by
    /// [`LimitSearchConfig::validate`].
    pub fn build(config: &LimitSearchConfig) -> Result<Self> {
        determine_limits(config)
    }

    /// Returns the number of entries, including the empty one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the dimension-zero entry is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the largest dimension that can be coded.
    #[must_use]
    pub fn max_dimension(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns the entry for dimension `size`, if there is one.
    #[must_use]
    pub fn get(&self, size: usize) -> Option<&LimitEntry<N>> {
        self.entries.get(size)
    }

    /// Returns the entry for dimension `size`.
    ///
    /// # Errors
    ///
    /// Returns [`KroneckerError::DimensionTooLarge`] if `size` exceeds
    /// [`max_dimension`](Self::max_dimension).
    pub fn entry(&self, size: usize) -> Result<&LimitEntry<N>> {
        self.entries.get(size).ok_or(KroneckerError::DimensionTooLarge {
            size,
            max: self.max_dimension(),
            type_name: N::NAME,
        })
    }

    /// Iterates over the entries in order of dimension.
    pub fn iter(&self) -> impl Iterator<Item = &LimitEntry<N>> {
        self.entries.iter()
    }
}

impl<N> Index<usize> for LimitTable<N> {
    type Output = LimitEntry<N>;

    fn index(&self, size: usize) -> &LimitEntry<N> {
        &self.entries[size]
    }
}

/// Returns the process-wide limit table of `N`.
#[must_use]
pub fn get_limits<N: KroneckerInt>() -> &'static LimitTable<N> {
    N::limits()
}

fn dot(a: &[Integer], b: &[Integer]) -> Integer {
    a.iter().zip(b).fold(Integer::zero(), |acc, (x, y)| acc + x * y)
}

/// Searches the limits of `m`-dimensional codification in `N`.
///
/// Returns `Ok(None)` when not even the unit bound vector is representable,
/// i.e. when `m` exceeds what `N` can ever code. Dimension zero yields the
/// empty entry.
///
/// # Errors
///
/// Returns [`KroneckerError::InvalidConfig`] if `config` is rejected by
/// [`LimitSearchConfig::validate`].
pub fn determine_limit<N: KroneckerInt>(m: usize, config: &LimitSearchConfig) -> Result<Option<LimitEntry<N>>> {
    config.validate()?;
    if m == 0 {
        return Ok(Some(LimitEntry::empty()));
    }
    Ok(search_limit(m, config))
}

// Requires a validated config and m >= 1.
fn search_limit<N: KroneckerInt>(m: usize, config: &LimitSearchConfig) -> Option<LimitEntry<N>> {
    let mut rng = ChaCha8Rng::seed_from_u64(m as u64);
    let spread = i64::from(config.perturbation_percent);
    let growth = i64::from(config.growth_factor);
    // Shift by a random percentage, then round up to a prime.
    let mut perturb = |x: &Integer| -> Integer {
        let percent = rng.gen_range(-spread..=spread);
        (x + &(x * percent / 100)).next_prime()
    };

    // Lower bounds are the negated upper bounds, so h_min == -h_max.
    let mut bounds = vec![Integer::one(); m];
    let mut radices: Vec<Integer> = iter::successors(Some(Integer::one()), |c| Some(c * 3))
        .take(m)
        .collect();
    let mut best = None;

    loop {
        let h_max = dot(&radices, &bounds);
        let h_min = -&h_max;
        let delta = &h_max - &h_min;
        trace!(dimension = m, %h_max, "limit search step");

        let Some(entry) = LimitEntry::from_search(&bounds, &h_min, &h_max, &delta) else {
            return best;
        };
        best = Some(entry);

        // Grow the step between consecutive radices.
        let previous = radices.clone();
        for i in 1..m {
            let step = &previous[i] / &previous[i - 1];
            radices[i] = &perturb(&(step * growth)) * &radices[i - 1];
        }

        // Every bound but the last follows from its radix step.
        for (bound, pair) in bounds.iter_mut().zip(radices.windows(2)) {
            *bound = (&pair[1] / &pair[0] - 1) / 2;
        }

        // The last interval has no radix step above it: widen it directly.
        let widened = ((&bounds[m - 1] * 2 + 1) * growth - 1) / 2;
        bounds[m - 1] = perturb(&widened);
    }
}

/// Builds the limit table of `N`, stopping at the first dimension that
/// cannot be represented.
///
/// # Errors
///
/// Returns [`KroneckerError::InvalidConfig`] if `config` is rejected by
/// [`LimitSearchConfig::validate`].
pub fn determine_limits<N: KroneckerInt>(config: &LimitSearchConfig) -> Result<LimitTable<N>> {
    config.validate()?;
    Ok(search_limits(config))
}

// Requires a validated config.
pub(crate) fn search_limits<N: KroneckerInt>(config: &LimitSearchConfig) -> LimitTable<N> {
    let mut entries = vec![LimitEntry::empty()];
    entries.extend(
        (1..)
            .map_while(|m| search_limit::<N>(m, config))
            .inspect(|entry| {
                debug!(
                    int_type = N::NAME,
                    dimension = entry.dimension(),
                    limits = %entry,
                    "derived Kronecker limits"
                );
            }),
    );
    debug!(
        int_type = N::NAME,
        max_dimension = entries.len() - 1,
        "built Kronecker limit table"
    );
    LimitTable { entries }
}
