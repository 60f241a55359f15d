use crate::{output::vehicle_movement_mappers::MotorForces, util::vectors::RotationVector3D};

/// State provider and actuator sink for the stabilizer. The physics behind it is the
/// implementor's business; the stabilizer only reads state and writes motor forces.
pub trait Vehicle {
    fn altitude(&self) -> f32;
    fn vertical_velocity(&self) -> f32;
    fn attitude(&self) -> RotationVector3D;
    fn motor_forces(&self) -> MotorForces;
    fn set_motor_forces(&mut self, forces: MotorForces);
    /// Advance the physics by one tick using the current motor forces.
    fn step(&mut self, iteration_length: f32);
}
