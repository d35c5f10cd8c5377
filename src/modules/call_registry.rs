//! ----- CALL REGISTRY -----
//! Pressed/unpressed state of every hall call button. There is no UP
//! button worth lighting on the top floor and no DOWN button on the
//! bottom floor, so those two flags are kept false after every change.

use log::debug;

use crate::utilities::config::ElevatorSettings;
use crate::utilities::direction::Direction;
use crate::utilities::event::PresentationPort;
use crate::utilities::request::Request;

#[derive(Clone, Debug)]
pub struct CallRegistry {
    calls: Vec<Vec<bool>>,
    bottom_floor: i32,
    top_floor: i32,
}

impl CallRegistry {
    pub fn new(settings: ElevatorSettings) -> Self {
        CallRegistry {
            calls: vec![vec![false; Direction::num_directions()]; settings.num_floors()],
            bottom_floor: settings.bottom_floor,
            top_floor: settings.top_floor,
        }
    }

    /// Registers a call. Returns whether the button changed state.
    pub fn press(&mut self, request: Request, port: &mut impl PresentationPort) -> bool {
        if self.is_boundary(request) {
            debug!("ignoring {} call at floor {}, no floor beyond it", request.direction, request.floor);
            return false;
        }
        let Some(index) = self.index(request.floor) else {
            return false;
        };

        let changed = !self.calls[index][request.direction as usize];
        self.calls[index][request.direction as usize] = true;
        self.clear_boundaries();

        if changed {
            port.on_button_state_changed(request.floor, request.direction, true);
        }
        changed
    }

    pub fn clear(&mut self, request: Request, port: &mut impl PresentationPort) {
        if let Some(index) = self.index(request.floor) {
            self.calls[index][request.direction as usize] = false;
        }
        self.clear_boundaries();
        port.on_button_state_changed(request.floor, request.direction, false);
    }

    pub fn any_pending(&self, direction: Direction) -> bool {
        self.calls.iter().any(|floor| floor[direction as usize])
    }

    pub fn is_pending(&self, floor: i32, direction: Direction) -> bool {
        self.index(floor)
            .map(|index| self.calls[index][direction as usize])
            .unwrap_or(false)
    }

    pub fn pending(&self) -> Vec<Request> {
        let mut pending = Vec::new();
        for floor in self.bottom_floor..=self.top_floor {
            for direction in Direction::iter() {
                if self.is_pending(floor, direction) {
                    pending.push(Request::new(floor, direction));
                }
            }
        }
        pending
    }

    fn is_boundary(&self, request: Request) -> bool {
        match request.direction {
            Direction::Up => request.floor == self.top_floor,
            Direction::Down => request.floor == self.bottom_floor,
        }
    }

    fn clear_boundaries(&mut self) {
        let top = self.calls.len() - 1;
        self.calls[top][Direction::Up as usize] = false;
        self.calls[0][Direction::Down as usize] = false;
    }

    fn index(&self, floor: i32) -> Option<usize> {
        if (self.bottom_floor..=self.top_floor).contains(&floor) {
            Some((floor - self.bottom_floor) as usize)
        } else {
            None
        }
    }
}
