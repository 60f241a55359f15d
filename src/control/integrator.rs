/// Running sum of samples taken at a fixed cadence. Never decays.
#[derive(Debug, Default, Clone)]
pub struct Integrator {
    current_value: f32,
}

impl Integrator {
    pub fn new() -> Self {
        Integrator {
            current_value: 0.0_f32,
        }
    }

    pub fn add_new_value(&mut self, value: f32) -> f32 {
        self.current_value += value;
        self.current_value
    }
}
