use serde::{Deserialize, Serialize};

/// Pilot commands for one tick. A zero component means "no command" on that axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PilotCommands {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
    pub acceleration: f32,
}

impl PilotCommands {
    pub const NONE: PilotCommands = PilotCommands {
        pitch: 0.0,
        roll: 0.0,
        yaw: 0.0,
        acceleration: 0.0,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ControllerInput {
    pub commands: PilotCommands,
    pub stop: bool,
}

#[cfg(feature = "button-pad")]
pub use self::pad::*;

#[cfg(feature = "button-pad")]
mod pad {
    use bitflags::bitflags;

    bitflags! {
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct PadButtons: u16 {
            const LEFT = 1 << 0;
            const RIGHT = 1 << 1;
            const ONE = 1 << 2;
            const TWO = 1 << 3;
            const A = 1 << 4;
            const B = 1 << 5;
            const HOME = 1 << 6;
        }
    }

    /// Raw accelerometer counts of the pad, centred at `TILT_CENTER_POINT`.
    pub const TILT_CENTER_POINT: f32 = 125.0;

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct PadState {
        pub buttons: PadButtons,
        /// x, y, z tilt counts. `None` while the pad reports no reading.
        pub tilt: Option<[u8; 3]>,
    }
}
