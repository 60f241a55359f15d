use std::ops::{Add, AddAssign, Mul};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RotationVector3D {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl Add<RotationVector3D> for RotationVector3D {
    type Output = RotationVector3D;

    fn add(self, rhs: RotationVector3D) -> Self::Output {
        Self {
            pitch: self.pitch + rhs.pitch,
            roll: self.roll + rhs.roll,
            yaw: self.yaw + rhs.yaw,
        }
    }
}

impl AddAssign<RotationVector3D> for RotationVector3D {
    fn add_assign(&mut self, rhs: RotationVector3D) {
        self.pitch += rhs.pitch;
        self.roll += rhs.roll;
        self.yaw += rhs.yaw;
    }
}

impl Mul<f32> for RotationVector3D {
    type Output = RotationVector3D;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            pitch: self.pitch * rhs,
            roll: self.roll * rhs,
            yaw: self.yaw * rhs,
        }
    }
}
