//! ----- SIMULATION -----
//! Drives a scheduler on a virtual clock instead of real timers, so a
//! whole sweep can be replayed instantly with exact timestamps.

use std::time::Duration;

use crate::modules::scheduler::MotionScheduler;
use crate::utilities::config::{ElevatorSettings, TimingConfig};
use crate::utilities::direction::Direction;
use crate::utilities::error::PressError;
use crate::utilities::event::{ElevatorEvent, EventLog};

pub struct Simulation {
    scheduler: MotionScheduler<EventLog>,
    now: Duration,
    deadline: Option<Duration>,
    events: Vec<(Duration, ElevatorEvent)>,
}

impl Simulation {
    pub fn new(settings: ElevatorSettings, timing: TimingConfig) -> Self {
        Simulation {
            scheduler: MotionScheduler::new(settings, timing, EventLog::new()),
            now: Duration::ZERO,
            deadline: None,
            events: Vec::new(),
        }
    }

    pub fn press(&mut self, direction: Direction, floor: i32) -> Result<(), PressError> {
        let wait = self.scheduler.press(direction, floor);
        self.record();
        self.arm(wait?);
        Ok(())
    }

    pub fn press_raw(&mut self, direction: &str, floor: i32) -> Result<(), PressError> {
        let wait = self.scheduler.press_raw(direction, floor);
        self.record();
        self.arm(wait?);
        Ok(())
    }

    /// Moves the clock forward, firing every timer that falls due.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        while let Some(deadline) = self.deadline.filter(|deadline| *deadline <= target) {
            self.now = deadline;
            self.deadline = None;
            let wait = self.scheduler.on_timer_elapsed();
            self.record();
            self.arm(wait);
        }
        self.now = target;
    }

    /// Fires timers until nothing is pending. Returns the time it took.
    pub fn run_until_idle(&mut self) -> Duration {
        let start = self.now;
        while let Some(deadline) = self.deadline {
            self.advance(deadline - self.now);
        }
        self.now - start
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_waiting(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn events(&self) -> &[(Duration, ElevatorEvent)] {
        &self.events
    }

    pub fn scheduler(&self) -> &MotionScheduler<EventLog> {
        &self.scheduler
    }

    fn arm(&mut self, wait: Option<Duration>) {
        if let Some(wait) = wait {
            self.deadline = Some(self.now + wait);
        }
    }

    fn record(&mut self) {
        let now = self.now;
        let drained = self.scheduler.port_mut().drain();
        self.events.extend(drained.into_iter().map(|event| (now, event)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_only_moves_when_advanced() {
        let mut sim = Simulation::new(ElevatorSettings::new(0, 2).unwrap(), TimingConfig::from_millis(50, 20));
        sim.press(Direction::Up, 1).unwrap();
        assert_eq!(sim.now(), Duration::ZERO);
        assert!(sim.is_waiting());

        sim.advance(Duration::from_millis(49));
        assert_eq!(sim.scheduler().car().current_floor, 0);
        sim.advance(Duration::from_millis(1));
        assert_eq!(sim.scheduler().car().current_floor, 1);
    }
}
