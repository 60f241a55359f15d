use super::stabilizer::Stabilizer;
use crate::{
    communication_interfaces::controller::PilotInputSource, config::store::SimulationConfig,
    drivers::vehicle::Vehicle, telemetry::TelemetrySnapshot, util::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    PilotRequested,
    TickLimitReached,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlLoopEvent {
    Tick(TelemetrySnapshot),
    Stopped(StopReason),
}

/// Fixed cadence driver: pilot input, stabilizer pass, command pass, physics step.
pub struct ControlLoop<V, I> {
    stabilizer: Stabilizer,
    vehicle: V,
    input: I,
    iteration_length: f32,
    max_ticks: Option<u64>,
    tick: u64,
}

impl<V, I> ControlLoop<V, I>
where
    V: Vehicle,
    I: PilotInputSource,
{
    pub fn new(
        stabilizer: Stabilizer,
        vehicle: V,
        input: I,
        simulation: &SimulationConfig,
    ) -> Result<Self, AppError> {
        simulation.validate()?;
        Ok(Self {
            stabilizer,
            vehicle,
            input,
            iteration_length: simulation.tick_seconds,
            max_ticks: simulation.max_ticks,
            tick: 0,
        })
    }

    pub fn stabilizer(&self) -> &Stabilizer {
        &self.stabilizer
    }

    pub fn vehicle(&self) -> &V {
        &self.vehicle
    }

    pub fn ticks_elapsed(&self) -> u64 {
        self.tick
    }

    pub fn tick(&mut self) -> ControlLoopEvent {
        if self.max_ticks.is_some_and(|max| self.tick >= max) {
            return ControlLoopEvent::Stopped(StopReason::TickLimitReached);
        }

        let input = self.input.poll(self.tick);
        if input.stop {
            return ControlLoopEvent::Stopped(StopReason::PilotRequested);
        }

        self.stabilizer.set_commands(input.commands);
        self.stabilizer.step(&mut self.vehicle);
        self.vehicle.step(self.iteration_length);
        self.tick += 1;

        ControlLoopEvent::Tick(TelemetrySnapshot::capture(
            self.tick,
            self.tick as f32 * self.iteration_length,
            &self.vehicle,
            &self.stabilizer,
        ))
    }

    pub fn run(&mut self, mut on_event: impl FnMut(&ControlLoopEvent)) -> StopReason {
        loop {
            let event = self.tick();
            on_event(&event);
            if let ControlLoopEvent::Stopped(reason) = event {
                log::info!("Control loop stopped after {} ticks: {:?}", self.tick, reason);
                return reason;
            }
        }
    }
}
