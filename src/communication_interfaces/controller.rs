use shared_definitions::controller::ControllerInput;

/// Anything that can hand the control loop the pilot input for the current tick.
pub trait PilotInputSource {
    fn poll(&mut self, tick: u64) -> ControllerInput;
}

/// Hands-off flight: never commands anything and never stops the loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl PilotInputSource for NoInput {
    fn poll(&mut self, _tick: u64) -> ControllerInput {
        ControllerInput::default()
    }
}
