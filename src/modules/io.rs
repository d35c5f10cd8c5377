//! ----- I/O MODULE -----
//! Reads call-button presses from stdin, one `<DIRECTION> <FLOOR>` per
//! line, and forwards them to the state machine. `quit` stops the program;
//! end of input only closes the press channel.

use std::io::{self, BufRead};
use std::thread::spawn;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::warn;

/// A press as typed; the direction is validated by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressCommand {
    pub direction: String,
    pub floor: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Press(PressCommand),
    Stop,
}

pub fn parse_line(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    if first.eq_ignore_ascii_case("quit") || first.eq_ignore_ascii_case("q") {
        return Some(Input::Stop);
    }

    let floor = match words.next().map(str::parse::<i32>) {
        Some(Ok(floor)) => floor,
        _ => {
            warn!("expected `<UP|DOWN> <FLOOR>`, got {:?}, skipping...", line);
            return None;
        }
    };
    if words.next().is_some() {
        warn!("trailing input in {:?}, skipping...", line);
        return None;
    }

    Some(Input::Press(PressCommand {
        direction: first.to_string(),
        floor,
    }))
}

pub fn init() -> (Receiver<PressCommand>, Receiver<()>) {
    let (press_tx, press_rx) = unbounded();
    let (stop_tx, stop_rx) = unbounded();

    spawn(move || read_input(io::stdin().lock(), press_tx, stop_tx));

    (press_rx, stop_rx)
}

fn read_input(input: impl BufRead, press_tx: Sender<PressCommand>, stop_tx: Sender<()>) {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        match parse_line(&line) {
            Some(Input::Press(command)) => {
                if press_tx.send(command).is_err() {
                    return;
                }
            }
            Some(Input::Stop) => {
                let _ = stop_tx.send(());
                return;
            }
            None => (),
        }
    }
}
