//! Pad backend for embedding the stabilizer in a host that reads a handheld
//! remote. The bundled binary drives the loop from scripted input only; hosts
//! supply the pad reader closure themselves.

use shared_definitions::controller::{
    ControllerInput, PadButtons, PadState, PilotCommands, TILT_CENTER_POINT,
};

use super::controller::PilotInputSource;

const TILT_ACCELERATION_SCALE: f32 = 10.0;

/// Maps a handheld pad (d-pad, two face buttons, trigger buttons and a tilt sensor)
/// onto pilot commands. Commands latch: a button sets its axis until every button is
/// released, which clears all of them.
pub struct ButtonPadInput<R> {
    read_state: R,
    latched: PilotCommands,
}

impl<R> ButtonPadInput<R>
where
    R: FnMut(u64) -> PadState,
{
    pub fn new(read_state: R) -> Self {
        Self {
            read_state,
            latched: PilotCommands::NONE,
        }
    }

    fn normalized_tilt(count: u8) -> f32 {
        (count as f32 - TILT_CENTER_POINT) / TILT_CENTER_POINT
    }

    fn map_state(&mut self, state: &PadState) -> bool {
        let buttons = state.buttons;
        let commands = &mut self.latched;

        if buttons.contains(PadButtons::LEFT) {
            commands.yaw = 1.0;
        }
        if buttons.contains(PadButtons::RIGHT) {
            commands.yaw = -1.0;
        }
        if buttons.contains(PadButtons::ONE) {
            commands.acceleration = 1.0;
        }
        if buttons.contains(PadButtons::TWO) {
            commands.acceleration = -1.0;
        }
        if let Some([x, y, _]) = state.tilt {
            if buttons.contains(PadButtons::A) {
                commands.pitch = -Self::normalized_tilt(y);
                commands.roll = Self::normalized_tilt(x);
            }
            if buttons.contains(PadButtons::B) {
                commands.acceleration = Self::normalized_tilt(y) * TILT_ACCELERATION_SCALE;
            }
        }
        if buttons.is_empty() {
            *commands = PilotCommands::NONE;
        }

        buttons.contains(PadButtons::HOME)
    }
}

impl<R> PilotInputSource for ButtonPadInput<R>
where
    R: FnMut(u64) -> PadState,
{
    fn poll(&mut self, tick: u64) -> ControllerInput {
        let state = (self.read_state)(tick);
        let stop = self.map_state(&state);
        ControllerInput {
            commands: self.latched,
            stop,
        }
    }
}
