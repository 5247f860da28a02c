//! Counterparty credit parameters.

use thiserror::Error;

/// Adjustment parameter errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdjustmentError {
    /// Invalid credit parameter (hazard rate or LGD).
    #[error("Invalid credit parameter: {0}")]
    InvalidCreditParam(String),
}

/// Counterparty default model: constant hazard rate and loss given
/// default.
///
/// Survival follows a homogeneous Poisson default time,
/// `Q(t) = exp(-lambda * t)`.
///
/// # Examples
///
/// ```
/// use xva_engine::adjustments::CreditParams;
///
/// let credit = CreditParams::new(0.04, 0.6).unwrap();
///
/// assert_eq!(credit.survival_prob(0.0), 1.0);
/// assert!(credit.marginal_pd(0.0, 1.0) > 0.0);
/// assert_eq!(credit.recovery_rate(), 0.4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditParams {
    /// Annualised default intensity.
    hazard_rate: f64,
    /// Loss given default as a fraction of exposure, in [0, 1].
    lgd: f64,
}

impl CreditParams {
    /// Creates validated credit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AdjustmentError::InvalidCreditParam`] for a negative
    /// hazard rate or an LGD outside `[0, 1]`.
    pub fn new(hazard_rate: f64, lgd: f64) -> Result<Self, AdjustmentError> {
        if !hazard_rate.is_finite() || hazard_rate < 0.0 {
            return Err(AdjustmentError::InvalidCreditParam(
                "Hazard rate must be non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&lgd) {
            return Err(AdjustmentError::InvalidCreditParam(
                "LGD must be in range [0, 1]".to_string(),
            ));
        }
        Ok(Self { hazard_rate, lgd })
    }

    /// Returns the hazard rate.
    #[inline]
    pub fn hazard_rate(&self) -> f64 {
        self.hazard_rate
    }

    /// Returns the loss given default.
    #[inline]
    pub fn lgd(&self) -> f64 {
        self.lgd
    }

    /// Returns the recovery rate `1 - LGD`.
    #[inline]
    pub fn recovery_rate(&self) -> f64 {
        1.0 - self.lgd
    }

    /// Survival probability to time `t`: `Q(t) = exp(-lambda * t)`.
    #[inline]
    pub fn survival_prob(&self, t: f64) -> f64 {
        (-self.hazard_rate * t).exp()
    }

    /// Default probability to time `t`: `1 - Q(t)`.
    #[inline]
    pub fn default_prob(&self, t: f64) -> f64 {
        1.0 - self.survival_prob(t)
    }

    /// Marginal default probability on `(t1, t2]`: `Q(t1) - Q(t2)`.
    #[inline]
    pub fn marginal_pd(&self, t1: f64, t2: f64) -> f64 {
        self.survival_prob(t1) - self.survival_prob(t2)
    }
}
