use crate::control::pid::PidGains;

// Stabilizer gains
pub const ACCELERATION_GAINS: PidGains = PidGains::new(4.0, 0.8, 2.0);
pub const PITCH_GAINS: PidGains = PidGains::new(0.02, 0.001, 0.10);
pub const ROLL_GAINS: PidGains = PidGains::new(0.02, 0.001, 0.10);
pub const YAW_GAINS: PidGains = PidGains::new(0.2, 0.001, 1.0);

// Heading held until the first yaw command recenters it
pub const INITIAL_YAW_SETPOINT_DEG: f32 = 90.0_f32;

//Motor limits, min stays above zero so the props never stop
pub const MIN_FORCE: f32 = 0.02_f32;
pub const MAX_FORCE: f32 = 10.0_f32;

//Simulation
pub const TICK_SECONDS: f32 = 0.04_f32;
pub const TELEMETRY_INTERVAL_TICKS: u64 = 1;
pub const DEFAULT_CONFIG_PATH: &str = "quad-stabilizer.toml";

//Simulated vehicle
pub const DEFAULT_VEHICLE_MASS: f32 = 1.0_f32;
pub const DEFAULT_GRAVITY: f32 = 9.81_f32;
pub const DEFAULT_PITCH_AUTHORITY: f32 = 50.0_f32;
pub const DEFAULT_ROLL_AUTHORITY: f32 = 50.0_f32;
pub const DEFAULT_YAW_AUTHORITY: f32 = 5.0_f32;
pub const DEFAULT_ANGULAR_DAMPING: f32 = 2.0_f32;
