use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use shared_definitions::controller::PilotCommands;

use super::constants::{
    ACCELERATION_GAINS, INITIAL_YAW_SETPOINT_DEG, MAX_FORCE, MIN_FORCE, PITCH_GAINS, ROLL_GAINS,
    TELEMETRY_INTERVAL_TICKS, TICK_SECONDS, YAW_GAINS,
};
use crate::{
    control::pid::PidGains, drivers::simulated_quad::SimulatedQuadParams, util::error::AppError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizerConfig {
    pub min_force: f32,
    pub max_force: f32,
    pub initial_yaw_setpoint: f32,
    pub acceleration: PidGains,
    pub pitch: PidGains,
    pub roll: PidGains,
    pub yaw: PidGains,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            min_force: MIN_FORCE,
            max_force: MAX_FORCE,
            initial_yaw_setpoint: INITIAL_YAW_SETPOINT_DEG,
            acceleration: ACCELERATION_GAINS,
            pitch: PITCH_GAINS,
            roll: ROLL_GAINS,
            yaw: YAW_GAINS,
        }
    }
}

impl StabilizerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let limits_ok = self.min_force.is_finite()
            && self.max_force.is_finite()
            && self.min_force > 0.0
            && self.min_force <= self.max_force;
        if !limits_ok {
            return Err(AppError::InvalidForceLimits {
                min: self.min_force,
                max: self.max_force,
            });
        }

        if !self.initial_yaw_setpoint.is_finite() {
            return Err(AppError::InvalidYawSetpoint(self.initial_yaw_setpoint));
        }

        for (axis, gains) in [
            ("acceleration", &self.acceleration),
            ("pitch", &self.pitch),
            ("roll", &self.roll),
            ("yaw", &self.yaw),
        ] {
            if let Some(value) = [gains.p, gains.i, gains.d]
                .into_iter()
                .find(|value| !value.is_finite())
            {
                return Err(AppError::InvalidGain { axis, value });
            }
        }

        Ok(())
    }
}

/// Commands held from `start_tick` (inclusive) to `end_tick` (exclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub start_tick: u64,
    pub end_tick: u64,
    #[serde(default)]
    pub commands: PilotCommands,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_seconds: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u64>,
    /// Ticks between telemetry log lines, 0 disables them.
    pub telemetry_interval_ticks: u64,
    pub vehicle: SimulatedQuadParams,
    pub script: Vec<ScriptSegment>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_seconds: TICK_SECONDS,
            max_ticks: None,
            telemetry_interval_ticks: TELEMETRY_INTERVAL_TICKS,
            vehicle: SimulatedQuadParams::default(),
            script: Vec::new(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.tick_seconds.is_finite() || self.tick_seconds <= 0.0 {
            return Err(AppError::InvalidTickInterval(self.tick_seconds));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub stabilizer: StabilizerConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, AppError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.stabilizer.validate()?;
        self.simulation.validate()
    }
}

pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ConfigStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store_to_file(&self, config: &AppConfig) -> Result<(), AppError> {
        let contents = config.to_toml_string()?;
        fs::write(&self.path, contents).map_err(|source| AppError::ConfigWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Missing files fall back to the built-in defaults.
    pub fn load_from_file(&self) -> Result<AppConfig, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => AppConfig::from_toml_str(&contents),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                log::warn!("No config at {:?}, using defaults", self.path);
                Ok(AppConfig::default())
            }
            Err(source) => Err(AppError::ConfigRead {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
