use approx::assert_relative_eq;
use quad_stabilizer::{
    communication_interfaces::scripted::ScriptedInput,
    config::store::{AppConfig, SimulationConfig, StabilizerConfig},
    control::{
        control_loops::{ControlLoop, ControlLoopEvent, StopReason},
        pid::PID,
        stabilizer::Stabilizer,
    },
    drivers::{
        simulated_quad::{SimulatedQuad, SimulatedQuadParams},
        vehicle::Vehicle,
    },
    telemetry::TelemetrySnapshot,
};
use shared_definitions::controller::PilotCommands;

#[test]
fn hover_pid_at_rest_outputs_nothing() {
    let mut acceleration = PID::new(4.0, 0.8, 2.0);
    acceleration.set_setpoint(0.0);
    for _ in 0..5 {
        assert_eq!(acceleration.update(0.0), 0.0);
    }
}

#[test]
fn single_pitch_error_sample() {
    let mut pitch = PID::new(0.02, 0.001, 0.10);
    pitch.set_setpoint(0.0);
    assert_relative_eq!(pitch.update(1.0).abs(), 0.121, epsilon = 1e-6);
}

#[test]
fn clamp_bounds_out_of_range_forces() {
    let stabilizer = Stabilizer::new(&StabilizerConfig {
        min_force: 0.02,
        max_force: 10.0,
        ..StabilizerConfig::default()
    })
    .unwrap();

    assert_eq!(
        stabilizer.clamp_forces([15.0, -3.0, 4.0, 10.0]),
        [10.0, 0.02, 4.0, 10.0]
    );
}

#[test]
fn yaw_release_recenters_on_current_heading_in_closed_loop() {
    let config = AppConfig::from_toml_str(
        r#"
        [simulation]
        max_ticks = 40

        [[simulation.script]]
        start_tick = 0
        end_tick = 10
        commands = { yaw = 1.0 }
        "#,
    )
    .unwrap();

    let stabilizer = Stabilizer::new(&config.stabilizer).unwrap();
    let vehicle = SimulatedQuad::new(config.simulation.vehicle.clone());
    let input = ScriptedInput::new(config.simulation.script.clone());
    let mut control = ControlLoop::new(stabilizer, vehicle, input, &config.simulation).unwrap();

    let mut snapshots: Vec<TelemetrySnapshot> = Vec::new();
    let reason = control.run(|event| {
        if let ControlLoopEvent::Tick(snapshot) = event {
            snapshots.push(*snapshot);
        }
    });

    assert_eq!(reason, StopReason::TickLimitReached);
    assert_eq!(snapshots.len(), 40);
    assert!(snapshots[..10].iter().all(|s| !s.yaw_locked));
    assert!(snapshots[10..].iter().all(|s| s.yaw_locked));

    let heading_at_release = snapshots[9].attitude.yaw;
    assert_ne!(heading_at_release, 0.0);
    assert_relative_eq!(control.stabilizer().yaw_setpoint(), heading_at_release);
}

#[test]
fn motor_forces_stay_within_limits_in_closed_loop() {
    let stabilizer_config = StabilizerConfig::default();
    let simulation = SimulationConfig {
        max_ticks: Some(200),
        ..SimulationConfig::default()
    };
    let input = ScriptedInput::default()
        .hold(
            20,
            60,
            PilotCommands {
                pitch: 0.8,
                roll: -0.4,
                yaw: -1.0,
                acceleration: 1.0,
            },
        )
        .hold(
            90,
            120,
            PilotCommands {
                acceleration: -15.0,
                ..PilotCommands::NONE
            },
        );
    let stabilizer = Stabilizer::new(&stabilizer_config).unwrap();
    let vehicle = SimulatedQuad::new(SimulatedQuadParams::default());
    let mut control = ControlLoop::new(stabilizer, vehicle, input, &simulation).unwrap();

    let (min, max) = (stabilizer_config.min_force, stabilizer_config.max_force);
    control.run(|event| {
        if let ControlLoopEvent::Tick(snapshot) = event {
            assert!(
                snapshot.motor_forces.iter().all(|f| (min..=max).contains(f)),
                "tick {} out of range: {:?}",
                snapshot.tick,
                snapshot.motor_forces
            );
        }
    });
    assert_eq!(control.ticks_elapsed(), 200);
}

#[test]
fn forces_persist_between_ticks_as_clamped_values() {
    let mut stabilizer = Stabilizer::new(&StabilizerConfig {
        initial_yaw_setpoint: 0.0,
        ..StabilizerConfig::default()
    })
    .unwrap();
    let mut vehicle = SimulatedQuad::new(SimulatedQuadParams::default()).with_vertical_velocity(-5.0);

    stabilizer.set_commands(PilotCommands {
        pitch: 3.0,
        ..PilotCommands::NONE
    });
    stabilizer.step(&mut vehicle);

    // The stabilize pass already saturated every motor; the pitch command then adds
    // on top of the clamped value, not the raw one.
    let forces = vehicle.motor_forces();
    assert_eq!(forces[0], 10.0);
    assert_relative_eq!(forces[1], 7.0);
    assert_eq!(forces[2], 10.0);
    assert_eq!(forces[3], 10.0);
}
