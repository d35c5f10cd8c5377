//! Notifications the motion core sends towards the presentation side.
//! Delivery is fire-and-forget; the core never waits on a reply.

use crossbeam_channel::Sender;
use log::trace;

use crate::utilities::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorEvent {
    ButtonStateChanged { floor: i32, direction: Direction, pressed: bool },
    ServiceStarted { floor: i32, direction: Direction },
    ServiceEnded { floor: i32, direction: Direction },
    TransitionStarted { from: i32, to: i32, direction: Direction },
    TransitionEnded { floor: i32 },
}

pub trait PresentationPort {
    fn notify(&mut self, event: ElevatorEvent);

    fn on_button_state_changed(&mut self, floor: i32, direction: Direction, pressed: bool) {
        self.notify(ElevatorEvent::ButtonStateChanged { floor, direction, pressed });
    }

    fn on_service_start(&mut self, floor: i32, direction: Direction) {
        self.notify(ElevatorEvent::ServiceStarted { floor, direction });
    }

    fn on_service_end(&mut self, floor: i32, direction: Direction) {
        self.notify(ElevatorEvent::ServiceEnded { floor, direction });
    }

    fn on_transition_start(&mut self, from: i32, to: i32, direction: Direction) {
        self.notify(ElevatorEvent::TransitionStarted { from, to, direction });
    }

    fn on_transition_end(&mut self, floor: i32) {
        self.notify(ElevatorEvent::TransitionEnded { floor });
    }
}

impl PresentationPort for Sender<ElevatorEvent> {
    fn notify(&mut self, event: ElevatorEvent) {
        if self.send(event).is_err() {
            trace!("no presentation listener for {:?}", event);
        }
    }
}

/// In-memory port that keeps every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<ElevatorEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog::default()
    }

    pub fn events(&self) -> &[ElevatorEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<ElevatorEvent> {
        std::mem::take(&mut self.events)
    }
}

impl PresentationPort for EventLog {
    fn notify(&mut self, event: ElevatorEvent) {
        self.events.push(event);
    }
}
