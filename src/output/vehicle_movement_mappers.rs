use nalgebra::Vector4;
use shared_definitions::controller::PilotCommands;

use crate::util::vectors::RotationVector3D;

/// Motor forces indexed by position: front-left, front-right, back-left, back-right.
pub type MotorForces = [f32; 4];

pub trait FlyingVehicleMovementMapper<TActuator> {
    fn map_controller_output_to_actuators_input(
        &self,
        throttle: f32,
        rotation_input: RotationVector3D,
    ) -> TActuator;
}

/// Linear mixer for the diagonal cross layout. The sign pattern encodes the motor
/// layout and must not be "simplified".
#[derive(Debug, Clone)]
pub struct QuadcopterMixer {
    motor_min_force: f32,
    motor_max_force: f32,
}

impl QuadcopterMixer {
    pub fn new(motor_min_force: f32, motor_max_force: f32) -> Self {
        Self {
            motor_min_force,
            motor_max_force,
        }
    }

    pub fn min_force(&self) -> f32 {
        self.motor_min_force
    }

    pub fn max_force(&self) -> f32 {
        self.motor_max_force
    }

    fn map_throttle_to_motor_input(&self, throttle_value: f32) -> Vector4<f32> {
        Vector4::repeat(throttle_value)
    }

    fn map_pitch_to_motor_input(&self, pitch_value: f32) -> Vector4<f32> {
        Vector4::new(pitch_value, -pitch_value, 0.0, 0.0)
    }

    fn map_roll_to_motor_input(&self, roll_value: f32) -> Vector4<f32> {
        Vector4::new(0.0, 0.0, -roll_value, roll_value)
    }

    // Pilot roll drives the back pair the other way round from the roll correction.
    fn map_roll_command_to_motor_input(&self, roll_value: f32) -> Vector4<f32> {
        Vector4::new(0.0, 0.0, roll_value, -roll_value)
    }

    fn map_yaw_to_motor_input(&self, yaw_value: f32) -> Vector4<f32> {
        Vector4::new(yaw_value, yaw_value, -yaw_value, -yaw_value)
    }

    /// Adds the pilot command contributions on top of `previous` motor forces.
    pub fn map_pilot_commands_to_actuators_input(
        &self,
        previous: MotorForces,
        commands: &PilotCommands,
    ) -> Vector4<f32> {
        Vector4::from(previous)
            + self.map_pitch_to_motor_input(commands.pitch)
            + self.map_roll_command_to_motor_input(commands.roll)
            + self.map_yaw_to_motor_input(commands.yaw)
    }

    pub fn clamp_forces(&self, motor_inputs: Vector4<f32>) -> MotorForces {
        let capped = motor_inputs.map(|value| {
            value
                .max(self.motor_min_force)
                .min(self.motor_max_force)
        });

        [capped[0], capped[1], capped[2], capped[3]]
    }
}

impl FlyingVehicleMovementMapper<Vector4<f32>> for QuadcopterMixer {
    fn map_controller_output_to_actuators_input(
        &self,
        throttle: f32,
        rotation_input: RotationVector3D,
    ) -> Vector4<f32> {
        self.map_throttle_to_motor_input(throttle)
            + self.map_pitch_to_motor_input(rotation_input.pitch)
            + self.map_roll_to_motor_input(rotation_input.roll)
            + self.map_yaw_to_motor_input(rotation_input.yaw)
    }
}
