//! Immutable random variable over a fixed Monte Carlo sample.
//!
//! A [`RandomVariable`] holds the realisations of a stochastic quantity at
//! one observation time, either as an explicit sample vector of length `M`
//! (one entry per path) or as a constant that broadcasts against any
//! sample count. All operations return fresh values; nothing mutates in
//! place.
//!
//! # Combination rules
//!
//! ```text
//! constant  op  constant  ->  constant
//! constant  op  samples   ->  samples   (broadcast)
//! samples   op  samples   ->  samples   (lengths must agree)
//! ```
//!
//! Combining two sample vectors of different lengths fails with
//! [`RandomVariableError::ShapeMismatch`].

use crate::types::RandomVariableError;

/// Sample storage: a broadcastable constant or an explicit vector.
#[derive(Clone, Debug, PartialEq)]
enum Realisations {
    Constant(f64),
    Samples(Vec<f64>),
}

/// Immutable vector of realisations at one observation time.
///
/// The associated time is advisory provenance (it feeds curve exports and
/// diagnostics); it does not participate in arithmetic beyond being
/// propagated as the latest operand time.
///
/// # Examples
///
/// ```
/// use xva_core::stochastic::RandomVariable;
///
/// let x = RandomVariable::from_samples(1.0, vec![-2.0, 0.5, 3.0]).unwrap();
///
/// // Positive part and its expectation
/// let positive = x.floor(0.0);
/// assert!((positive.mean() - (0.5 + 3.0) / 3.0).abs() < 1e-15);
///
/// // Operations never mutate the receiver
/// assert!((x.mean() - 0.5).abs() < 1e-15);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RandomVariable {
    time: f64,
    realisations: Realisations,
}

impl RandomVariable {
    /// Creates a constant random variable.
    ///
    /// A constant broadcasts against sample vectors of any length, and its
    /// statistics are exact: `mean`, `quantile`, `min` and `max` all
    /// return the constant itself without summation error.
    #[inline]
    pub fn constant(time: f64, value: f64) -> Self {
        Self {
            time,
            realisations: Realisations::Constant(value),
        }
    }

    /// Creates a random variable from an explicit sample vector.
    ///
    /// # Errors
    ///
    /// Returns [`RandomVariableError::EmptySamples`] for an empty vector.
    pub fn from_samples(time: f64, samples: Vec<f64>) -> Result<Self, RandomVariableError> {
        if samples.is_empty() {
            return Err(RandomVariableError::EmptySamples);
        }
        Ok(Self {
            time,
            realisations: Realisations::Samples(samples),
        })
    }

    /// Returns the associated observation time.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns true when this variable is a broadcastable constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self.realisations, Realisations::Constant(_))
    }

    /// Returns the sample count, or `None` for a constant.
    #[inline]
    pub fn sample_count(&self) -> Option<usize> {
        match &self.realisations {
            Realisations::Constant(_) => None,
            Realisations::Samples(v) => Some(v.len()),
        }
    }

    /// Returns the realisation on path `p`.
    ///
    /// A constant returns its value for every `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of range for a sample vector.
    #[inline]
    pub fn get(&self, p: usize) -> f64 {
        match &self.realisations {
            Realisations::Constant(c) => *c,
            Realisations::Samples(v) => v[p],
        }
    }

    // ---- pointwise maps ----------------------------------------------

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let realisations = match &self.realisations {
            Realisations::Constant(c) => Realisations::Constant(f(*c)),
            Realisations::Samples(v) => Realisations::Samples(v.iter().map(|&x| f(x)).collect()),
        };
        Self {
            time: self.time,
            realisations,
        }
    }

    fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, RandomVariableError> {
        let realisations = match (&self.realisations, &other.realisations) {
            (Realisations::Constant(a), Realisations::Constant(b)) => {
                Realisations::Constant(f(*a, *b))
            }
            (Realisations::Constant(a), Realisations::Samples(v)) => {
                Realisations::Samples(v.iter().map(|&b| f(*a, b)).collect())
            }
            (Realisations::Samples(v), Realisations::Constant(b)) => {
                Realisations::Samples(v.iter().map(|&a| f(a, *b)).collect())
            }
            (Realisations::Samples(u), Realisations::Samples(v)) => {
                if u.len() != v.len() {
                    return Err(RandomVariableError::ShapeMismatch {
                        left: u.len(),
                        right: v.len(),
                    });
                }
                Realisations::Samples(u.iter().zip(v.iter()).map(|(&a, &b)| f(a, b)).collect())
            }
        };
        Ok(Self {
            time: self.time.max(other.time),
            realisations,
        })
    }

    // ---- scalar arithmetic -------------------------------------------

    /// Pointwise addition of a scalar.
    #[inline]
    pub fn add(&self, x: f64) -> Self {
        self.map(|v| v + x)
    }

    /// Pointwise subtraction of a scalar.
    #[inline]
    pub fn sub(&self, x: f64) -> Self {
        self.map(|v| v - x)
    }

    /// Pointwise multiplication by a scalar.
    #[inline]
    pub fn mult(&self, x: f64) -> Self {
        self.map(|v| v * x)
    }

    /// Pointwise division by a scalar.
    #[inline]
    pub fn div(&self, x: f64) -> Self {
        self.map(|v| v / x)
    }

    /// Pointwise negation.
    #[inline]
    pub fn neg(&self) -> Self {
        self.map(|v| -v)
    }

    /// Lower-bound clip: `v -> max(v, c)`.
    ///
    /// `floor(0.0)` extracts the positive part of an exposure.
    #[inline]
    pub fn floor(&self, c: f64) -> Self {
        self.map(|v| v.max(c))
    }

    /// Upper-bound clip: `v -> min(v, c)`.
    ///
    /// `cap(0.0)` extracts the (non-positive) negative part of an
    /// exposure.
    #[inline]
    pub fn cap(&self, c: f64) -> Self {
        self.map(|v| v.min(c))
    }

    // ---- random variable arithmetic ----------------------------------

    /// Pointwise addition of another random variable.
    ///
    /// # Errors
    ///
    /// Returns [`RandomVariableError::ShapeMismatch`] when both operands
    /// are sample vectors of different lengths.
    #[inline]
    pub fn add_rv(&self, other: &Self) -> Result<Self, RandomVariableError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Pointwise subtraction of another random variable.
    #[inline]
    pub fn sub_rv(&self, other: &Self) -> Result<Self, RandomVariableError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Pointwise multiplication by another random variable.
    #[inline]
    pub fn mult_rv(&self, other: &Self) -> Result<Self, RandomVariableError> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Pointwise division by another random variable.
    #[inline]
    pub fn div_rv(&self, other: &Self) -> Result<Self, RandomVariableError> {
        self.zip_with(other, |a, b| a / b)
    }

    // ---- reductions --------------------------------------------------

    /// Arithmetic mean over the sample.
    ///
    /// Uses pairwise summation, so the reduction order is fixed and the
    /// result is reproducible. The mean of a constant is the constant,
    /// bit-exact.
    pub fn mean(&self) -> f64 {
        match &self.realisations {
            Realisations::Constant(c) => *c,
            Realisations::Samples(v) => pairwise_sum(v) / v.len() as f64,
        }
    }

    /// Population variance over the sample.
    ///
    /// Zero for a constant.
    pub fn variance(&self) -> f64 {
        match &self.realisations {
            Realisations::Constant(_) => 0.0,
            Realisations::Samples(v) => {
                let mean = self.mean();
                let squares: Vec<f64> = v.iter().map(|&x| (x - mean) * (x - mean)).collect();
                pairwise_sum(&squares) / v.len() as f64
            }
        }
    }

    /// Smallest realisation.
    pub fn min(&self) -> f64 {
        match &self.realisations {
            Realisations::Constant(c) => *c,
            Realisations::Samples(v) => v.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }

    /// Largest realisation.
    pub fn max(&self) -> f64 {
        match &self.realisations {
            Realisations::Constant(c) => *c,
            Realisations::Samples(v) => v.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    /// Empirical quantile at level `alpha`.
    ///
    /// Sort-and-pick with the lower tie policy: the element at index
    /// `floor(alpha * (M - 1))` after ascending sort. The quantile of a
    /// constant is the constant at every valid level.
    ///
    /// # Errors
    ///
    /// Returns [`RandomVariableError::InvalidQuantileLevel`] when `alpha`
    /// lies outside the open interval `(0, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xva_core::stochastic::RandomVariable;
    ///
    /// let x = RandomVariable::from_samples(0.0, vec![30.0, 10.0, 20.0, 40.0, 50.0]).unwrap();
    ///
    /// // floor(0.95 * 4) = 3 -> fourth element of the sorted sample
    /// assert_eq!(x.quantile(0.95).unwrap(), 40.0);
    /// ```
    pub fn quantile(&self, alpha: f64) -> Result<f64, RandomVariableError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(RandomVariableError::InvalidQuantileLevel { alpha });
        }
        match &self.realisations {
            Realisations::Constant(c) => Ok(*c),
            Realisations::Samples(v) => {
                let mut sorted = v.clone();
                sorted.sort_by(f64::total_cmp);
                let index = (alpha * (sorted.len() - 1) as f64).floor() as usize;
                Ok(sorted[index])
            }
        }
    }
}

/// Deterministic pairwise summation.
///
/// Splits recursively down to short runs, keeping rounding error
/// O(log M) while the reduction order stays fixed across runs and
/// thread counts.
fn pairwise_sum(values: &[f64]) -> f64 {
    const BASE: usize = 32;
    if values.len() <= BASE {
        return values.iter().sum();
    }
    let mid = values.len() / 2;
    pairwise_sum(&values[..mid]) + pairwise_sum(&values[mid..])
}
