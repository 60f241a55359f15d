use serde::{Deserialize, Serialize};

use super::integrator::Integrator;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    pub p: f32,
    pub i: f32,
    pub d: f32,
}

impl PidGains {
    pub const fn new(p: f32, i: f32, d: f32) -> Self {
        PidGains { p, i, d }
    }
}

/// Single-axis PID tracking a setpoint. Assumes it is updated once per tick at a
/// constant cadence: the integral and derivative terms are per-sample, not per-second.
#[derive(Debug, Clone)]
pub struct PID {
    setpoint: f32,
    previous_error: f32,
    proportional_multiplier: f32,
    integral_multiplier: f32,
    derivative_multiplier: f32,
    error_integrator: Integrator,
}

impl PID {
    pub fn new(
        proportional_multiplier: f32,
        integral_multiplier: f32,
        derivative_multiplier: f32,
    ) -> Self {
        PID {
            setpoint: 0.0_f32,
            previous_error: 0.0_f32,
            proportional_multiplier,
            integral_multiplier,
            derivative_multiplier,
            error_integrator: Integrator::new(),
        }
    }

    pub fn with_gains(gains: &PidGains) -> Self {
        Self::new(gains.p, gains.i, gains.d)
    }

    pub fn set_setpoint(&mut self, setpoint: f32) {
        self.setpoint = setpoint;
    }

    pub fn setpoint(&self) -> f32 {
        self.setpoint
    }

    pub fn update(&mut self, measured_state: f32) -> f32 {
        let error = self.setpoint - measured_state;
        // No anti-windup: the accumulated error is unbounded.
        let current_accumulated_error = self.error_integrator.add_new_value(error);

        let change_rate = error - self.previous_error;
        self.previous_error = error;

        let proportional_output = error * self.proportional_multiplier;
        let integral_output = current_accumulated_error * self.integral_multiplier;
        let derivative_output = change_rate * self.derivative_multiplier;

        proportional_output + integral_output + derivative_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_error_without_history_is_zero() {
        let mut pid = PID::new(4.0, 0.8, 2.0);
        assert_eq!(pid.update(0.0), 0.0);
    }

    #[test]
    fn hover_at_zero_velocity_stays_zero() {
        let mut pid = PID::new(4.0, 0.8, 2.0);
        pid.set_setpoint(0.0);
        for _ in 0..5 {
            assert_eq!(pid.update(0.0), 0.0);
        }
    }

    #[test]
    fn single_pitch_sample_sums_all_terms() {
        let mut pid = PID::new(0.02, 0.001, 0.10);
        pid.set_setpoint(0.0);
        // error = -1.0 on the first sample, so every term contributes -gain.
        assert_relative_eq!(pid.update(1.0), -0.121, epsilon = 1e-6);
    }

    #[test]
    fn integral_and_derivative_use_sample_history() {
        let mut pid = PID::new(0.0, 1.0, 0.0);
        pid.set_setpoint(1.0);
        pid.update(0.0);
        pid.update(0.0);
        assert_relative_eq!(pid.update(0.0), 3.0);

        let mut pid = PID::new(0.0, 0.0, 1.0);
        pid.set_setpoint(1.0);
        assert_relative_eq!(pid.update(0.0), 1.0);
        assert_relative_eq!(pid.update(0.5), -0.5);
        assert_relative_eq!(pid.update(0.5), 0.0);
    }

    #[test]
    fn output_scales_linearly_with_each_gain() {
        let measurements = [0.3_f32, -1.2, 0.7, 2.5, 0.0];
        let run = |gains: PidGains| {
            let mut pid = PID::with_gains(&gains);
            pid.set_setpoint(0.5);
            measurements.map(|m| pid.update(m))
        };

        let base = run(PidGains::new(0.0, 0.0, 0.0));
        assert!(base.iter().all(|v| *v == 0.0));

        for (unit, scaled) in [
            (PidGains::new(1.0, 0.0, 0.0), PidGains::new(3.0, 0.0, 0.0)),
            (PidGains::new(0.0, 1.0, 0.0), PidGains::new(0.0, 3.0, 0.0)),
            (PidGains::new(0.0, 0.0, 1.0), PidGains::new(0.0, 0.0, 3.0)),
        ] {
            for (a, b) in run(unit).iter().zip(run(scaled).iter()) {
                assert_relative_eq!(*a * 3.0, *b, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn setpoint_change_keeps_history() {
        let mut pid = PID::new(0.0, 1.0, 0.0);
        pid.set_setpoint(1.0);
        pid.update(0.0);
        pid.set_setpoint(2.0);
        assert_eq!(pid.setpoint(), 2.0);
        assert_relative_eq!(pid.update(0.0), 3.0);
    }
}
