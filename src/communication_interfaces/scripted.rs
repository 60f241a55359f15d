use shared_definitions::controller::{ControllerInput, PilotCommands};

use super::controller::PilotInputSource;
use crate::config::store::ScriptSegment;

/// Replays a fixed timeline of command segments. Ticks outside every segment
/// produce no command; overlapping segments resolve to the first match.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    segments: Vec<ScriptSegment>,
    stop_at: Option<u64>,
}

impl ScriptedInput {
    pub fn new(segments: Vec<ScriptSegment>) -> Self {
        Self {
            segments,
            stop_at: None,
        }
    }

    /// Request a stop once `tick` is reached.
    pub fn stop_at(mut self, tick: u64) -> Self {
        self.stop_at = Some(tick);
        self
    }

    pub fn hold(mut self, start_tick: u64, end_tick: u64, commands: PilotCommands) -> Self {
        self.segments.push(ScriptSegment {
            start_tick,
            end_tick,
            commands,
        });
        self
    }

    fn commands_at(&self, tick: u64) -> PilotCommands {
        self.segments
            .iter()
            .find(|segment| (segment.start_tick..segment.end_tick).contains(&tick))
            .map(|segment| segment.commands)
            .unwrap_or(PilotCommands::NONE)
    }
}

impl PilotInputSource for ScriptedInput {
    fn poll(&mut self, tick: u64) -> ControllerInput {
        ControllerInput {
            commands: self.commands_at(tick),
            stop: self.stop_at.is_some_and(|stop| tick >= stop),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_segments_and_idles_between_them() {
        let yaw_left = PilotCommands {
            yaw: 1.0,
            ..PilotCommands::NONE
        };
        let climb = PilotCommands {
            acceleration: 2.0,
            ..PilotCommands::NONE
        };
        let mut input = ScriptedInput::default()
            .hold(2, 4, yaw_left)
            .hold(6, 7, climb)
            .stop_at(9);

        let polled: Vec<_> = (0..10).map(|tick| input.poll(tick)).collect();

        assert!(polled[0].commands.is_idle());
        assert_eq!(polled[2].commands, yaw_left);
        assert_eq!(polled[3].commands, yaw_left);
        assert!(polled[4].commands.is_idle());
        assert_eq!(polled[6].commands, climb);
        assert!(polled[7].commands.is_idle());
        assert!(!polled[8].stop);
        assert!(polled[9].stop);
    }

    #[test]
    fn never_stops_without_stop_tick() {
        let mut input = ScriptedInput::new(Vec::new());
        assert!(!input.poll(u64::MAX).stop);
    }
}
