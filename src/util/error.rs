use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not read config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not write config file {path:?}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Could not serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("Invalid force limits: min {min}, max {max} (need 0 < min <= max)")]
    InvalidForceLimits { min: f32, max: f32 },
    #[error("Invalid tick interval {0}s")]
    InvalidTickInterval(f32),
    #[error("Invalid initial yaw setpoint {0}")]
    InvalidYawSetpoint(f32),
    #[error("Invalid {axis} gain {value}")]
    InvalidGain { axis: &'static str, value: f32 },
}
