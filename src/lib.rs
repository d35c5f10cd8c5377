//! Single-car elevator simulator. Floor-side call buttons feed a motion
//! scheduler that sweeps the car between the bottom and top floors,
//! stopping for every call waiting in the direction of travel.

pub mod modules;
pub mod utilities;

pub use modules::scheduler::{CarState, MotionScheduler, Phase};
pub use modules::simulation::Simulation;
pub use utilities::config::{Config, ElevatorSettings, TimingConfig};
pub use utilities::direction::Direction;
pub use utilities::error::{ConfigError, PressError};
pub use utilities::event::{ElevatorEvent, EventLog, PresentationPort};
