use std::fmt;
use std::str::FromStr;

use crate::utilities::error::PressError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
}

impl Direction {
    pub fn num_directions() -> usize {
        2
    }

    pub fn iter() -> impl Iterator<Item = Direction> {
        [Direction::Up, Direction::Down].iter().copied()
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Next floor one step away in this direction.
    pub fn step(self, floor: i32) -> i32 {
        match self {
            Direction::Up => floor + 1,
            Direction::Down => floor - 1,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Direction::Up => String::from("up"),
            Direction::Down => String::from("down"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/// Parses the button labels `UP` and `DOWN`, ignoring ASCII case.
impl FromStr for Direction {
    type Err = PressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("up") {
            Ok(Direction::Up)
        } else if s.eq_ignore_ascii_case("down") {
            Ok(Direction::Down)
        } else {
            Err(PressError::InvalidDirection(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_button_labels() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("down".parse::<Direction>().unwrap(), Direction::Down);
    }

    #[test]
    fn rejects_unknown_label() {
        let err = "SIDEWAYS".parse::<Direction>().unwrap_err();
        assert_eq!(err, PressError::InvalidDirection(String::from("SIDEWAYS")));
    }

    #[test]
    fn step_and_opposite() {
        assert_eq!(Direction::Up.step(1), 2);
        assert_eq!(Direction::Down.step(1), 0);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }
}
