//! Timing, scoring and default sizes for every session type.
//!
//! All fields have defaults, so a partial JSON object is enough to override
//! one value: `{"feedback_delay_ms": 800}`.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::vocab_engine::options::DEFAULT_OPTION_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How long answer colouring stays up before the next question.
    pub feedback_delay_ms: u64,
    /// Pause between the second card pick and judging the pair.
    pub match_check_delay_ms: u64,
    /// How long a mismatched pair stays flagged as wrong.
    pub wrong_flash_ms: u64,
    /// Pause between the last match and the results screen.
    pub match_complete_delay_ms: u64,
    /// Period of the elapsed-time counter.
    pub timer_period_ms: u64,
    pub match_reward: u32,
    pub mismatch_penalty: u32,
    /// Options per quiz question, correct answer included.
    pub option_count: usize,
    pub default_question_count: usize,
    pub default_pair_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            feedback_delay_ms: 1500,
            match_check_delay_ms: 500,
            wrong_flash_ms: 500,
            match_complete_delay_ms: 1000,
            timer_period_ms: 1000,
            match_reward: 10,
            mismatch_penalty: 2,
            option_count: DEFAULT_OPTION_COUNT,
            default_question_count: 10,
            default_pair_count: 10,
        }
    }
}

impl EngineConfig {
    /// Decode a (possibly partial) JSON object over the defaults and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json).map_err(|source| EngineError::Parse {
            source_name: "engine config",
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.option_count < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "option_count must be at least 2 (got {})",
                self.option_count
            )));
        }
        if self.timer_period_ms == 0 {
            return Err(EngineError::InvalidConfig(
                "timer_period_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
