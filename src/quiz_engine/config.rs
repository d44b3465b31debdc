//! Tunables for one module instance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{error::ConfigError, helpers::GenerationLimits};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Questions asked per activation.
    pub max_questions: usize,
    /// Family picks per generation attempt before the used-question memory is wiped.
    pub trials_per_attempt: usize,
    /// Distractor draws allowed for a serial-character question.
    pub serial_distractor_trials: usize,
    pub correct_delay_ms: u64,
    pub pass_clear_delay_ms: u64,
    pub incorrect_clear_delay_ms: u64,
    pub timeout_clear_delay_ms: u64,
    /// `Some` makes question generation reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfig {
            max_questions: 3,
            trials_per_attempt: 20,
            serial_distractor_trials: 20,
            correct_delay_ms: 750,
            pass_clear_delay_ms: 750,
            incorrect_clear_delay_ms: 1250,
            timeout_clear_delay_ms: 2000,
            rng_seed: None,
        }
    }
}

impl ModuleConfig {
    pub fn seeded(seed: u64) -> Self {
        ModuleConfig { rng_seed: Some(seed), ..Default::default() }
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ModuleConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_questions == 0 {
            return Err(ConfigError::NoQuestions);
        }
        self.limits().validate()
    }

    /// The generator caps carried by this config.
    pub fn limits(&self) -> GenerationLimits {
        GenerationLimits {
            trials_per_attempt: self.trials_per_attempt,
            serial_distractor_trials: self.serial_distractor_trials,
        }
    }

    pub fn correct_delay(&self) -> Duration {
        Duration::from_millis(self.correct_delay_ms)
    }

    pub fn pass_clear_delay(&self) -> Duration {
        Duration::from_millis(self.pass_clear_delay_ms)
    }

    pub fn incorrect_clear_delay(&self) -> Duration {
        Duration::from_millis(self.incorrect_clear_delay_ms)
    }

    pub fn timeout_clear_delay(&self) -> Duration {
        Duration::from_millis(self.timeout_clear_delay_ms)
    }
}
