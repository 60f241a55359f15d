use crate::{
    control::stabilizer::Stabilizer, drivers::vehicle::Vehicle,
    output::vehicle_movement_mappers::MotorForces, util::vectors::RotationVector3D,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySnapshot {
    pub tick: u64,
    pub time_seconds: f32,
    pub altitude: f32,
    pub vertical_velocity: f32,
    pub attitude: RotationVector3D,
    pub motor_forces: MotorForces,
    pub attitude_setpoint: RotationVector3D,
    pub acceleration_setpoint: f32,
    pub yaw_locked: bool,
}

impl TelemetrySnapshot {
    pub fn capture<V: Vehicle + ?Sized>(
        tick: u64,
        time_seconds: f32,
        vehicle: &V,
        stabilizer: &Stabilizer,
    ) -> Self {
        Self {
            tick,
            time_seconds,
            altitude: vehicle.altitude(),
            vertical_velocity: vehicle.vertical_velocity(),
            attitude: vehicle.attitude(),
            motor_forces: vehicle.motor_forces(),
            attitude_setpoint: RotationVector3D {
                pitch: stabilizer.pitch_setpoint(),
                roll: stabilizer.roll_setpoint(),
                yaw: stabilizer.yaw_setpoint(),
            },
            acceleration_setpoint: stabilizer.acceleration_setpoint(),
            yaw_locked: stabilizer.is_yaw_locked(),
        }
    }

    pub fn log_line(&self) -> String {
        let [m0, m1, m2, m3] = self.motor_forces;
        format!(
            "{:.2}sec: alt={:6.3} vel={:6.3} pry=({:6.3}, {:6.3}, {:6.3}) power=({:6.3}, {:6.3}, {:6.3}, {:6.3}) sp=({:6.3}, {:6.3}, {:6.3}) vel_sp={:6.3} yaw_lock={}",
            self.time_seconds,
            self.altitude,
            self.vertical_velocity,
            self.attitude.pitch,
            self.attitude.roll,
            self.attitude.yaw,
            m0,
            m1,
            m2,
            m3,
            self.attitude_setpoint.pitch,
            self.attitude_setpoint.roll,
            self.attitude_setpoint.yaw,
            self.acceleration_setpoint,
            self.yaw_locked,
        )
    }
}
