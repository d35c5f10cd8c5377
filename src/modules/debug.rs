//! ----- DEBUG MODULE -----
//! Terminal view of the elevator, rebuilt from the events the state
//! machine emits. Redraws the whole table in place on every event.

use std::io::{stdout, Stdout, Write};

use crossbeam_channel::Receiver;
use crossterm::{cursor, terminal, ExecutableCommand, Result};

use crate::utilities::config::ElevatorSettings;
use crate::utilities::direction::Direction;
use crate::utilities::event::ElevatorEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Idle,
    Serving { floor: i32, direction: Direction },
    Moving { from: i32, to: i32, direction: Direction },
}

#[derive(Debug, Clone)]
pub struct Status {
    settings: ElevatorSettings,
    lamps: Vec<[bool; 2]>,
    pub car_floor: i32,
    pub motion: Motion,
    chime: bool,
}

impl Status {
    pub fn new(settings: ElevatorSettings) -> Self {
        Status {
            settings,
            lamps: vec![[false; 2]; settings.num_floors()],
            car_floor: settings.bottom_floor,
            motion: Motion::Idle,
            chime: false,
        }
    }

    pub fn apply(&mut self, event: ElevatorEvent) {
        match event {
            ElevatorEvent::ButtonStateChanged { floor, direction, pressed } => {
                if let Some(lamps) = self.lamps_mut(floor) {
                    lamps[direction as usize] = pressed;
                }
            }
            ElevatorEvent::ServiceStarted { floor, direction } => {
                self.motion = Motion::Serving { floor, direction };
                self.chime = false;
            }
            ElevatorEvent::ServiceEnded { .. } => {
                self.motion = Motion::Idle;
                self.chime = true;
            }
            ElevatorEvent::TransitionStarted { from, to, direction } => {
                self.motion = Motion::Moving { from, to, direction };
                // Every sweep leaves from an extreme floor.
                if from == self.settings.bottom_floor || from == self.settings.top_floor {
                    self.chime = true;
                }
            }
            ElevatorEvent::TransitionEnded { floor } => {
                self.car_floor = floor;
                self.motion = Motion::Idle;
                self.chime = false;
            }
        }
    }

    pub fn lamp(&self, floor: i32, direction: Direction) -> bool {
        self.settings.contains(floor) && self.lamps[(floor - self.settings.bottom_floor) as usize][direction as usize]
    }

    /// The travel chime starts with a sweep and again after each service,
    /// and pauses on every arrival. A leg that leaves a floor the car did
    /// not stop at runs silent.
    pub fn chime_playing(&self) -> bool {
        self.chime
    }

    fn lamps_mut(&mut self, floor: i32) -> Option<&mut [bool; 2]> {
        if self.settings.contains(floor) {
            self.lamps.get_mut((floor - self.settings.bottom_floor) as usize)
        } else {
            None
        }
    }

    fn status_size(&self) -> u16 {
        (2 * self.settings.num_floors() + 11) as u16
    }
}

pub struct Debug {
    stdout: Stdout,
    status: Status,
}

impl Debug {
    pub fn new(settings: ElevatorSettings) -> Self {
        Debug {
            stdout: stdout(),
            status: Status::new(settings),
        }
    }

    pub fn printstatus(&mut self) -> Result<()> {
        let status = &self.status;
        self.stdout.execute(cursor::MoveUp(status.status_size()))?;
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        writeln!(self.stdout, "+---------------------------------------+")?;
        writeln!(self.stdout, "| CALL BUTTONS                          |")?;
        writeln!(self.stdout, "+------------+------------+-------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<11} |", "FLOOR", "UP", "DOWN")?;
        for floor in status.settings.floors().rev() {
            writeln!(self.stdout, "+------------+------------+-------------+")?;
            let marker = if floor == status.car_floor { "[#]" } else { "" };
            writeln!(
                self.stdout,
                "| {0:<6}{1:<4} | {2:<10} | {3:<11} |",
                floor,
                marker,
                lamp_text(status.lamp(floor, Direction::Up)),
                lamp_text(status.lamp(floor, Direction::Down)),
            )?;
        }
        writeln!(self.stdout, "+------------+------------+-------------+\n")?;

        let motion = match status.motion {
            Motion::Idle => String::from("idle"),
            Motion::Serving { floor, direction } => format!("serving {} {}", floor, direction.as_string()),
            Motion::Moving { from, to, .. } => format!("moving {} -> {}", from, to),
        };
        writeln!(self.stdout, "+------------+--------------------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<24} |", "CAR", motion)?;
        writeln!(self.stdout, "+------------+--------------------------+")?;
        writeln!(
            self.stdout,
            "| {0:<10} | {1:<24} |",
            "CHIME",
            if status.chime_playing() { "playing" } else { "paused" }
        )?;
        writeln!(self.stdout, "+------------+--------------------------+")?;

        Ok(())
    }
}

fn lamp_text(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "-"
    }
}

pub fn main(settings: ElevatorSettings, event_rx: Receiver<ElevatorEvent>) -> Result<()> {
    let mut debug = Debug::new(settings);

    for _ in 0..debug.status.status_size() {
        writeln!(debug.stdout)?;
    }
    debug.printstatus()?;

    for event in event_rx.iter() {
        debug.status.apply(event);
        debug.printstatus()?;
    }
    Ok(())
}
