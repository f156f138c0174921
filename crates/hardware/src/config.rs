//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (cycle cap, predictor start state).
//! 2. **Feature Flags:** The three independently toggleable micro-architectural features.
//! 3. **Structures:** Hierarchical config for general settings, features, and the predictor.
//!
//! Configuration is supplied as JSON via [`Config::from_json`] or built with `Config::default()`.

use serde::{Deserialize, Deserializer};

use crate::common::error::SimResult;
use crate::core::units::bru::PredictorState;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::DEFAULT_MAX_CYCLES;

    /// Cycle cap applied by `Simulator::run`.
    pub const MAX_CYCLES: u64 = DEFAULT_MAX_CYCLES;

    /// All three pipeline features are on unless explicitly disabled.
    pub const FEATURE_ENABLED: bool = true;
}

/// Root configuration structure containing all simulator settings.
///
/// Every section and field is optional in JSON; missing values take their
/// defaults and unknown fields are rejected.
///
/// # Examples
///
/// ```
/// use rvpipe_core::config::Config;
/// use rvpipe_core::core::units::bru::PredictorState;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 500 },
///     "features": { "forwarding": false },
///     "predictor": { "initial_state": "StronglyNotTaken" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, 500);
/// assert!(!config.features.forwarding);
/// assert!(config.features.hazard_detection);
/// assert_eq!(config.predictor.initial_state, PredictorState::StronglyNotTaken);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Micro-architectural feature toggles
    pub features: FeatureFlags,
    /// Branch predictor configuration
    pub predictor: PredictorConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`](crate::common::error::SimError::Config) if
    /// the document is not valid JSON or does not match the schema.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log a per-cycle pipeline summary at `debug` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Cycle cap for `Simulator::run`
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// The three independently toggleable pipeline features.
///
/// Features only ever change timing (stalls, flushes) and statistics; for a
/// program free of data hazards and branches the architectural outcome is
/// the same under every combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureFlags {
    /// Two-bit branch prediction with speculative redirect in decode
    #[serde(default = "FeatureFlags::enabled")]
    pub branch_prediction: bool,

    /// Operand forwarding from the EX/MEM and MEM/WB latches
    #[serde(default = "FeatureFlags::enabled")]
    pub forwarding: bool,

    /// RAW hazard detection with stall insertion in decode
    #[serde(default = "FeatureFlags::enabled")]
    pub hazard_detection: bool,
}

impl FeatureFlags {
    const fn enabled() -> bool {
        defaults::FEATURE_ENABLED
    }

    /// All features enabled.
    pub const fn all() -> Self {
        Self {
            branch_prediction: true,
            forwarding: true,
            hazard_detection: true,
        }
    }

    /// All features disabled: a plain in-order pipeline with no interlocks.
    pub const fn none() -> Self {
        Self {
            branch_prediction: false,
            forwarding: false,
            hazard_detection: false,
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Branch predictor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PredictorConfig {
    /// Counter state assigned to a branch the first time it is seen.
    ///
    /// Accepts a state name (`"WeaklyTaken"`) or a raw counter value; values
    /// above 3 saturate to `StronglyTaken`.
    #[serde(deserialize_with = "deserialize_state")]
    pub initial_state: PredictorState,
}

fn deserialize_state<'de, D>(deserializer: D) -> Result<PredictorState, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Counter(u8),
        Name(PredictorState),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Counter(value) => PredictorState::from_counter(value),
        Repr::Name(state) => state,
    })
}
