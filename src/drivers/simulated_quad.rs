use serde::{Deserialize, Serialize};

use super::vehicle::Vehicle;
use crate::{
    config::constants::{
        DEFAULT_ANGULAR_DAMPING, DEFAULT_GRAVITY, DEFAULT_PITCH_AUTHORITY, DEFAULT_ROLL_AUTHORITY,
        DEFAULT_VEHICLE_MASS, DEFAULT_YAW_AUTHORITY,
    },
    output::vehicle_movement_mappers::MotorForces,
    util::vectors::RotationVector3D,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedQuadParams {
    pub mass: f32,
    pub gravity: f32,
    /// Angular acceleration (deg/s^2) per unit of front pair force difference.
    pub pitch_authority: f32,
    /// Angular acceleration (deg/s^2) per unit of back pair force difference.
    pub roll_authority: f32,
    /// Angular acceleration (deg/s^2) per unit of diagonal force difference.
    pub yaw_authority: f32,
    pub angular_damping: f32,
}

impl Default for SimulatedQuadParams {
    fn default() -> Self {
        Self {
            mass: DEFAULT_VEHICLE_MASS,
            gravity: DEFAULT_GRAVITY,
            pitch_authority: DEFAULT_PITCH_AUTHORITY,
            roll_authority: DEFAULT_ROLL_AUTHORITY,
            yaw_authority: DEFAULT_YAW_AUTHORITY,
            angular_damping: DEFAULT_ANGULAR_DAMPING,
        }
    }
}

/// Point-mass stand-in for a physics engine: thrust along the vertical axis only and
/// one decoupled second order model per attitude axis, integrated with explicit Euler.
#[derive(Debug, Clone)]
pub struct SimulatedQuad {
    params: SimulatedQuadParams,
    altitude: f32,
    vertical_velocity: f32,
    attitude: RotationVector3D,
    rotation_rate: RotationVector3D,
    motors_force: MotorForces,
}

impl SimulatedQuad {
    pub fn new(params: SimulatedQuadParams) -> Self {
        Self {
            params,
            altitude: 0.0,
            vertical_velocity: 0.0,
            attitude: RotationVector3D::default(),
            rotation_rate: RotationVector3D::default(),
            motors_force: [0.0; 4],
        }
    }

    pub fn with_vertical_velocity(mut self, vertical_velocity: f32) -> Self {
        self.vertical_velocity = vertical_velocity;
        self
    }

    pub fn rotation_rate(&self) -> RotationVector3D {
        self.rotation_rate
    }

    fn angular_acceleration(&self) -> RotationVector3D {
        let [front_left, front_right, back_left, back_right] = self.motors_force;
        let damping = self.rotation_rate * -self.params.angular_damping;

        RotationVector3D {
            pitch: self.params.pitch_authority * (front_left - front_right),
            roll: self.params.roll_authority * (back_right - back_left),
            yaw: self.params.yaw_authority
                * ((front_left + front_right) - (back_left + back_right)),
        } + damping
    }
}

impl Vehicle for SimulatedQuad {
    fn altitude(&self) -> f32 {
        self.altitude
    }

    fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    fn attitude(&self) -> RotationVector3D {
        self.attitude
    }

    fn motor_forces(&self) -> MotorForces {
        self.motors_force
    }

    fn set_motor_forces(&mut self, forces: MotorForces) {
        self.motors_force = forces;
    }

    fn step(&mut self, iteration_length: f32) {
        let thrust: f32 = self.motors_force.iter().sum();
        let vertical_acceleration = thrust / self.params.mass - self.params.gravity;

        self.altitude += self.vertical_velocity * iteration_length;
        self.vertical_velocity += vertical_acceleration * iteration_length;

        let angular_acceleration = self.angular_acceleration();
        self.attitude += self.rotation_rate * iteration_length;
        self.rotation_rate += angular_acceleration * iteration_length;
    }
}
