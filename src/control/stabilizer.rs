use nalgebra::Vector4;
use shared_definitions::controller::PilotCommands;

use super::pid::PID;
use crate::{
    config::store::StabilizerConfig,
    drivers::vehicle::Vehicle,
    output::vehicle_movement_mappers::{
        FlyingVehicleMovementMapper, MotorForces, QuadcopterMixer,
    },
    util::{error::AppError, vectors::RotationVector3D},
};

/// Per-axis corrections produced by one stabilize pass, before mixing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightStabilizerOut {
    pub throttle: f32,
    pub rotation_output_command: RotationVector3D,
}

/// Attitude and altitude hold for a cross layout quadcopter.
///
/// Each tick runs [`Stabilizer::stabilize`] and then [`Stabilizer::apply_commands`],
/// both of which clamp and write the motor forces back to the vehicle. While the
/// yaw is locked the yaw PID holds the heading captured when the pilot last
/// released the yaw command; while unlocked yaw is driven by the pilot only.
pub struct Stabilizer {
    acceleration_pid: PID,
    pitch_pid: PID,
    roll_pid: PID,
    yaw_pid: PID,
    set_point_acceleration: f32,
    set_point_pitch: f32,
    set_point_roll: f32,
    set_point_yaw: f32,
    commands: PilotCommands,
    lock_yaw: bool,
    mixer: QuadcopterMixer,
}

impl Stabilizer {
    pub fn new(config: &StabilizerConfig) -> Result<Self, AppError> {
        config.validate()?;

        let mut stabilizer = Stabilizer {
            acceleration_pid: PID::with_gains(&config.acceleration),
            pitch_pid: PID::with_gains(&config.pitch),
            roll_pid: PID::with_gains(&config.roll),
            yaw_pid: PID::with_gains(&config.yaw),
            set_point_acceleration: 0.0,
            set_point_pitch: 0.0,
            set_point_roll: 0.0,
            set_point_yaw: 0.0,
            commands: PilotCommands::NONE,
            lock_yaw: true,
            mixer: QuadcopterMixer::new(config.min_force, config.max_force),
        };
        stabilizer.set_acceleration_setpoint(0.0);
        stabilizer.set_pitch_setpoint(0.0);
        stabilizer.set_roll_setpoint(0.0);
        stabilizer.set_yaw_setpoint(config.initial_yaw_setpoint);

        Ok(stabilizer)
    }

    pub fn set_commands(&mut self, commands: PilotCommands) {
        self.commands = commands;
    }

    pub fn is_yaw_locked(&self) -> bool {
        self.lock_yaw
    }

    pub fn acceleration_setpoint(&self) -> f32 {
        self.set_point_acceleration
    }

    pub fn pitch_setpoint(&self) -> f32 {
        self.set_point_pitch
    }

    pub fn roll_setpoint(&self) -> f32 {
        self.set_point_roll
    }

    pub fn yaw_setpoint(&self) -> f32 {
        self.set_point_yaw
    }

    fn set_pitch_setpoint(&mut self, value: f32) {
        self.set_point_pitch = value;
        self.pitch_pid.set_setpoint(value);
    }

    fn set_roll_setpoint(&mut self, value: f32) {
        self.set_point_roll = value;
        self.roll_pid.set_setpoint(value);
    }

    fn set_acceleration_setpoint(&mut self, value: f32) {
        self.set_point_acceleration = value;
        self.acceleration_pid.set_setpoint(value);
    }

    fn set_yaw_setpoint(&mut self, value: f32) {
        self.set_point_yaw = value;
        self.yaw_pid.set_setpoint(value);
    }

    pub fn min_force(&self) -> f32 {
        self.mixer.min_force()
    }

    pub fn max_force(&self) -> f32 {
        self.mixer.max_force()
    }

    pub fn clamp_forces(&self, forces: MotorForces) -> MotorForces {
        self.mixer.clamp_forces(Vector4::from(forces))
    }

    fn update_forces<V: Vehicle + ?Sized>(&self, vehicle: &mut V, forces: Vector4<f32>) {
        vehicle.set_motor_forces(self.mixer.clamp_forces(forces));
    }

    /// Attitude hold pass. Runs the PIDs against the vehicle state and commits the
    /// mixed, clamped forces. The yaw PID is only sampled while the yaw is locked.
    pub fn stabilize<V: Vehicle + ?Sized>(&mut self, vehicle: &mut V) -> FlightStabilizerOut {
        let attitude = vehicle.attitude();

        let throttle = self.acceleration_pid.update(vehicle.vertical_velocity());
        let pitch = self.pitch_pid.update(attitude.pitch);
        let roll = self.roll_pid.update(attitude.roll);
        let yaw = if self.lock_yaw {
            self.yaw_pid.update(attitude.yaw)
        } else {
            0.0
        };

        let out = FlightStabilizerOut {
            throttle,
            rotation_output_command: RotationVector3D { pitch, roll, yaw },
        };
        let forces = self
            .mixer
            .map_controller_output_to_actuators_input(out.throttle, out.rotation_output_command);
        self.update_forces(vehicle, forces);

        out
    }

    /// Pilot command pass: yaw lock arbitration, throttle setpoint and additive blend
    /// of the commands on top of the forces committed by the stabilize pass.
    pub fn apply_commands<V: Vehicle + ?Sized>(&mut self, vehicle: &mut V) {
        if self.lock_yaw && self.commands.yaw != 0.0 {
            self.lock_yaw = false;
            log::trace!("Yaw unlocked");
        }
        if self.commands.yaw == 0.0 && !self.lock_yaw {
            // Recenter on wherever the vehicle ended up, not the stale heading.
            let heading = vehicle.attitude().yaw;
            self.set_yaw_setpoint(heading);
            self.lock_yaw = true;
            log::trace!("Yaw locked at {}", heading);
        }

        if self.set_point_acceleration != self.commands.acceleration {
            // Positive throttle maps to a negative vertical velocity setpoint.
            self.set_acceleration_setpoint(-self.commands.acceleration);
            log::trace!("Acceleration setpoint {}", self.set_point_acceleration);
        }

        let forces = self
            .mixer
            .map_pilot_commands_to_actuators_input(vehicle.motor_forces(), &self.commands);
        self.update_forces(vehicle, forces);
    }

    /// One control tick. Does not advance the vehicle physics.
    pub fn step<V: Vehicle + ?Sized>(&mut self, vehicle: &mut V) -> FlightStabilizerOut {
        let out = self.stabilize(vehicle);
        self.apply_commands(vehicle);
        out
    }
}
