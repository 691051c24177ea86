use common::defaults::{ACCELERATED_TICK, NORMAL_TICK, POINTER_TICK};
use common::snake::SpeedSettings;
use common::storage::Validate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MIN_TICK_MS: u64 = 20;
const MAX_TICK_MS: u64 = 2000;

/// Tick periods in milliseconds, one per input mode.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct SpeedConfig {
    pub normal_tick_ms: u64,
    pub accelerated_tick_ms: u64,
    pub pointer_tick_ms: u64,
}

impl SpeedConfig {
    pub fn to_settings(&self) -> SpeedSettings {
        SpeedSettings {
            normal: Duration::from_millis(self.normal_tick_ms),
            accelerated: Duration::from_millis(self.accelerated_tick_ms),
            pointer: Duration::from_millis(self.pointer_tick_ms),
        }
    }
}

fn validate_tick(name: &str, value: u64) -> Result<(), String> {
    if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&value) {
        return Err(format!(
            "{} must be between {} and {} ms, got {}",
            name, MIN_TICK_MS, MAX_TICK_MS, value
        ));
    }
    Ok(())
}

impl Validate for SpeedConfig {
    fn validate(&self) -> Result<(), String> {
        validate_tick("Normal tick", self.normal_tick_ms)?;
        validate_tick("Accelerated tick", self.accelerated_tick_ms)?;
        validate_tick("Pointer tick", self.pointer_tick_ms)?;
        Ok(())
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            normal_tick_ms: NORMAL_TICK.as_millis() as u64,
            accelerated_tick_ms: ACCELERATED_TICK.as_millis() as u64,
            pointer_tick_ms: POINTER_TICK.as_millis() as u64,
        }
    }
}
