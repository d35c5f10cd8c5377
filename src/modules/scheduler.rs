//! ----- MOTION SCHEDULER -----
//! The elevator's state machine. A sweep runs the car from one extreme
//! floor to the other, stopping wherever a call waits in the sweep
//! direction. Waits are not performed here: every entry point hands back
//! the duration the caller must wait before calling `on_timer_elapsed`.

use std::time::Duration;

use log::{debug, info};

use crate::modules::call_registry::CallRegistry;
use crate::utilities::config::{ElevatorSettings, TimingConfig};
use crate::utilities::direction::Direction;
use crate::utilities::error::PressError;
use crate::utilities::event::PresentationPort;
use crate::utilities::request::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    SweepingUp,
    SweepingDown,
}

impl Phase {
    pub fn sweeping(direction: Direction) -> Self {
        match direction {
            Direction::Up => Phase::SweepingUp,
            Direction::Down => Phase::SweepingDown,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Phase::Idle => None,
            Phase::SweepingUp => Some(Direction::Up),
            Phase::SweepingDown => Some(Direction::Down),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarState {
    pub current_floor: i32,
    pub moving_up: bool,
    pub moving_down: bool,
}

impl CarState {
    pub fn new(floor: i32) -> Self {
        CarState {
            current_floor: floor,
            moving_up: false,
            moving_down: false,
        }
    }

    pub fn is_moving(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.moving_up,
            Direction::Down => self.moving_down,
        }
    }

    fn set_moving(&mut self, direction: Direction, moving: bool) {
        match direction {
            Direction::Up => self.moving_up = moving,
            Direction::Down => self.moving_down = moving,
        }
    }
}

/// What the pending timer is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Dwelling { floor: i32 },
    Travelling { from: i32, to: i32 },
}

pub struct MotionScheduler<P: PresentationPort> {
    settings: ElevatorSettings,
    timing: TimingConfig,
    registry: CallRegistry,
    car: CarState,
    phase: Phase,
    step: Option<Step>,
    port: P,
}

impl<P: PresentationPort> MotionScheduler<P> {
    pub fn new(settings: ElevatorSettings, timing: TimingConfig, port: P) -> Self {
        MotionScheduler {
            settings,
            timing,
            registry: CallRegistry::new(settings),
            car: CarState::new(settings.bottom_floor),
            phase: Phase::Idle,
            step: None,
            port,
        }
    }

    /// Press entry point for raw button labels.
    pub fn press_raw(&mut self, direction: &str, floor: i32) -> Result<Option<Duration>, PressError> {
        let direction = direction.parse::<Direction>()?;
        self.press(direction, floor)
    }

    /// Registers a call and starts a sweep when the car is idle at the
    /// floor a sweep in `direction` begins from. Returns the wait to arm,
    /// if the press set the car in motion.
    pub fn press(&mut self, direction: Direction, floor: i32) -> Result<Option<Duration>, PressError> {
        let floor = self.settings.check_floor(floor)?;
        self.registry.press(Request::new(floor, direction), &mut self.port);

        if self.phase != Phase::Idle {
            debug!("{} call at floor {} queued behind the running sweep", direction, floor);
            return Ok(None);
        }
        if self.car.is_moving(direction) || self.car.current_floor != self.start_floor(direction) {
            debug!(
                "{} call at floor {} left pending, car rests at floor {}",
                direction, floor, self.car.current_floor
            );
            return Ok(None);
        }

        self.car.set_moving(direction, true);
        Ok(self.start_sweep(direction))
    }

    /// Resumes the sweep after the wait returned by the previous call.
    pub fn on_timer_elapsed(&mut self) -> Option<Duration> {
        let direction = self.phase.direction()?;
        let step = self.step.take()?;

        match step {
            Step::Dwelling { floor } => {
                self.registry.clear(Request::new(floor, direction), &mut self.port);
                self.port.on_service_end(floor, direction);
                Some(self.begin_transition(direction, floor))
            }
            Step::Travelling { from, to } => {
                debug!("arrived at floor {} from floor {}", to, from);
                self.car.current_floor = to;
                self.port.on_transition_end(to);
                self.car.set_moving(direction, false);
                self.advance(direction)
            }
        }
    }

    pub fn car(&self) -> &CarState {
        &self.car
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn registry(&self) -> &CallRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &ElevatorSettings {
        &self.settings
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    fn start_floor(&self, direction: Direction) -> i32 {
        match direction {
            Direction::Up => self.settings.bottom_floor,
            Direction::Down => self.settings.top_floor,
        }
    }

    fn end_floor(&self, direction: Direction) -> i32 {
        self.start_floor(direction.opposite())
    }

    fn start_sweep(&mut self, direction: Direction) -> Option<Duration> {
        if !self.registry.any_pending(direction) {
            debug!("no {} calls pending, staying at floor {}", direction, self.car.current_floor);
            self.car.set_moving(direction, false);
            return None;
        }

        info!("starting {} sweep from floor {}", direction, self.car.current_floor);
        self.phase = Phase::sweeping(direction);
        self.advance(direction)
    }

    /// Handles the floor the car rests on: dwell if it has a call in the
    /// sweep direction, otherwise move on, unless the sweep is over.
    fn advance(&mut self, direction: Direction) -> Option<Duration> {
        let floor = self.car.current_floor;

        if floor == self.end_floor(direction) {
            info!("{} sweep finished at floor {}", direction, floor);
            self.phase = Phase::Idle;
            return None;
        }

        if self.registry.is_pending(floor, direction) {
            self.port.on_service_start(floor, direction);
            self.step = Some(Step::Dwelling { floor });
            return Some(self.timing.stoppage_interval);
        }

        Some(self.begin_transition(direction, floor))
    }

    fn begin_transition(&mut self, direction: Direction, from: i32) -> Duration {
        let to = direction.step(from);
        self.port.on_transition_start(from, to, direction);
        self.step = Some(Step::Travelling { from, to });
        self.timing.movement_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::event::{ElevatorEvent, EventLog};

    fn scheduler() -> MotionScheduler<EventLog> {
        MotionScheduler::new(
            ElevatorSettings::new(0, 2).unwrap(),
            TimingConfig::from_millis(5000, 2000),
            EventLog::new(),
        )
    }

    #[test]
    fn starts_idle_at_bottom() {
        let elevator = scheduler();
        assert_eq!(elevator.phase(), Phase::Idle);
        assert_eq!(*elevator.car(), CarState::new(0));
        assert!(elevator.registry().pending().is_empty());
    }

    #[test]
    fn press_at_bottom_dwells_first() {
        let mut elevator = scheduler();
        let wait = elevator.press(Direction::Up, 0).unwrap();

        assert_eq!(wait, Some(Duration::from_millis(2000)));
        assert_eq!(elevator.phase(), Phase::SweepingUp);
        assert!(elevator.car().moving_up);
        assert_eq!(
            elevator.port().events().last(),
            Some(&ElevatorEvent::ServiceStarted { floor: 0, direction: Direction::Up })
        );
    }

    #[test]
    fn press_above_starts_travel() {
        let mut elevator = scheduler();
        let wait = elevator.press(Direction::Up, 1).unwrap();

        assert_eq!(wait, Some(Duration::from_millis(5000)));
        assert_eq!(
            elevator.port().events().last(),
            Some(&ElevatorEvent::TransitionStarted { from: 0, to: 1, direction: Direction::Up })
        );
        assert_eq!(elevator.car().current_floor, 0);
    }

    #[test]
    fn moving_flag_clears_after_first_leg() {
        let mut elevator = scheduler();
        elevator.press(Direction::Up, 1).unwrap();

        let wait = elevator.on_timer_elapsed();
        assert_eq!(elevator.car().current_floor, 1);
        assert!(!elevator.car().moving_up);
        assert_eq!(elevator.phase(), Phase::SweepingUp);
        assert_eq!(wait, Some(Duration::from_millis(2000)));
    }

    #[test]
    fn invalid_press_changes_nothing() {
        let mut elevator = scheduler();
        assert_eq!(
            elevator.press(Direction::Up, 7),
            Err(PressError::InvalidFloor { floor: 7, bottom: 0, top: 2 })
        );
        assert_eq!(
            elevator.press_raw("LEFT", 1),
            Err(PressError::InvalidDirection(String::from("LEFT")))
        );
        assert!(elevator.port().events().is_empty());
        assert_eq!(elevator.phase(), Phase::Idle);
    }

    #[test]
    fn boundary_press_aborts_without_moving() {
        let mut elevator = scheduler();
        assert_eq!(elevator.press(Direction::Up, 2), Ok(None));
        assert!(!elevator.car().moving_up);
        assert_eq!(elevator.press(Direction::Down, 0), Ok(None));
        assert!(!elevator.car().moving_down);
        assert_eq!(elevator.phase(), Phase::Idle);
        assert!(elevator.port().events().is_empty());
    }

    #[test]
    fn spurious_timer_is_ignored() {
        let mut elevator = scheduler();
        assert_eq!(elevator.on_timer_elapsed(), None);
        assert_eq!(elevator.car().current_floor, 0);
    }
}
