use std::env;

use quad_stabilizer::{
    communication_interfaces::scripted::ScriptedInput,
    config::{constants::DEFAULT_CONFIG_PATH, store::ConfigStorage},
    control::{
        control_loops::{ControlLoop, ControlLoopEvent},
        stabilizer::Stabilizer,
    },
    drivers::simulated_quad::SimulatedQuad,
    util::error::AppError,
};

fn main() -> Result<(), AppError> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let storage = ConfigStorage::new(config_path);
    let config = storage.load_from_file()?;
    log::info!("Loaded config from {:?}", storage.path());

    let stabilizer = Stabilizer::new(&config.stabilizer)?;
    let vehicle = SimulatedQuad::new(config.simulation.vehicle.clone());
    let input = ScriptedInput::new(config.simulation.script.clone());

    let mut control_loop = ControlLoop::new(stabilizer, vehicle, input, &config.simulation)?;
    let telemetry_interval = config.simulation.telemetry_interval_ticks;

    log::info!(
        "Running stabilizer at {}s per tick{}",
        config.simulation.tick_seconds,
        config
            .simulation
            .max_ticks
            .map(|max| format!(" for {} ticks", max))
            .unwrap_or_default()
    );

    control_loop.run(|event| {
        if let ControlLoopEvent::Tick(snapshot) = event {
            if telemetry_interval > 0 && snapshot.tick % telemetry_interval == 0 {
                log::debug!("{}", snapshot.log_line());
            }
        }
    });

    Ok(())
}
