use crate::utilities::direction::Direction;

/// A call button: the floor it sits on and the direction it asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Request {
    pub floor: i32,
    pub direction: Direction,
}

impl Request {
    pub fn new(floor: i32, direction: Direction) -> Self {
        Request { floor, direction }
    }
}
