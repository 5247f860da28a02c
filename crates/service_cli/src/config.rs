//! Scenario configuration.
//!
//! Parameters for the two analyses, loaded from a TOML file with every
//! field optional. Defaults reproduce the reference scenario: a uniform
//! millisecond grid over one year, 10 000 paths, a deep in-the-money
//! forward for the DiscVA study and an opposing at-the-money pair for
//! the netting study.

use serde::Deserialize;
use std::path::Path;
use xva_models::instruments::Direction;

use crate::{CliError, Result};

/// Forward deal parameters for the DiscVA analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardConfig {
    /// Strike of the forward.
    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Number of units.
    #[serde(default = "default_quantity")]
    pub quantity: f64,

    /// Maturity in year fractions; defaults to the last grid point.
    pub maturity: Option<f64>,

    /// Position direction ("long" or "short").
    #[serde(default = "default_direction")]
    pub direction: Direction,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            strike: default_strike(),
            quantity: default_quantity(),
            maturity: None,
            direction: default_direction(),
        }
    }
}

/// Counterparty credit parameters for the CVA analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditConfig {
    /// Annualised hazard rate.
    #[serde(default = "default_hazard_rate")]
    pub hazard_rate: f64,

    /// Loss given default in [0, 1].
    #[serde(default = "default_lgd")]
    pub loss_given_default: f64,
}

impl Default for CreditConfig {
    fn default() -> Self {
        Self {
            hazard_rate: default_hazard_rate(),
            loss_given_default: default_lgd(),
        }
    }
}

/// Opposing forward pair for the non-linearity analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct NettingConfig {
    /// Strike of the long forward.
    #[serde(default = "default_strike_long")]
    pub strike_long: f64,

    /// Strike of the short forward.
    #[serde(default = "default_strike_short")]
    pub strike_short: f64,

    /// Number of units on each leg.
    #[serde(default = "default_quantity")]
    pub quantity: f64,
}

impl Default for NettingConfig {
    fn default() -> Self {
        Self {
            strike_long: default_strike_long(),
            strike_short: default_strike_short(),
            quantity: default_quantity(),
        }
    }
}

/// Full scenario configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Uniform grid step in year fractions.
    #[serde(default = "default_delta_t")]
    pub delta_t: f64,

    /// Number of grid points.
    #[serde(default = "default_time_steps")]
    pub number_of_time_steps: usize,

    /// Monte Carlo sample count.
    #[serde(default = "default_paths")]
    pub number_of_paths: usize,

    /// Initial asset value.
    #[serde(default = "default_initial_value")]
    pub initial_value: f64,

    /// Collateral (risk-free) rate; also the risk-neutral drift.
    #[serde(default = "default_collateral_rate")]
    pub collateral_rate: f64,

    /// Unsecured funding rate for the front-office view.
    #[serde(default = "default_unsecured_rate")]
    pub unsecured_rate: f64,

    /// Volatility of the asset.
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// RNG seed.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Confidence level for PFE profiles.
    #[serde(default = "default_confidence")]
    pub confidence_level: f64,

    /// DiscVA deal.
    #[serde(default)]
    pub forward: ForwardConfig,

    /// Counterparty credit.
    #[serde(default)]
    pub credit: CreditConfig,

    /// Non-linearity deal pair.
    #[serde(default)]
    pub netting: NettingConfig,
}

fn default_delta_t() -> f64 {
    0.001
}

fn default_time_steps() -> usize {
    1000
}

fn default_paths() -> usize {
    10_000
}

fn default_initial_value() -> f64 {
    100.0
}

fn default_collateral_rate() -> f64 {
    0.01
}

fn default_unsecured_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.25
}

fn default_seed() -> u64 {
    3141
}

fn default_confidence() -> f64 {
    0.95
}

fn default_strike() -> f64 {
    80.0
}

fn default_quantity() -> f64 {
    1000.0
}

fn default_hazard_rate() -> f64 {
    0.04
}

fn default_lgd() -> f64 {
    0.6
}

fn default_strike_long() -> f64 {
    100.0
}

fn default_strike_short() -> f64 {
    90.0
}

fn default_direction() -> Direction {
    Direction::Long
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            delta_t: default_delta_t(),
            number_of_time_steps: default_time_steps(),
            number_of_paths: default_paths(),
            initial_value: default_initial_value(),
            collateral_rate: default_collateral_rate(),
            unsecured_rate: default_unsecured_rate(),
            volatility: default_volatility(),
            seed: default_seed(),
            confidence_level: default_confidence(),
            forward: ForwardConfig::default(),
            credit: CreditConfig::default(),
            netting: NettingConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Loads a scenario from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::ConfigParse(e.to_string()))
    }
}
