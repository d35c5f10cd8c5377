//! ----- FSM MODULE -----
//! Owns the motion scheduler and feeds it presses and timer expiries.
//! This is the only thread that touches elevator state.

use crossbeam_channel::{select, Receiver, Sender};
use log::{info, warn};

use crate::modules::io::PressCommand;
use crate::modules::scheduler::{MotionScheduler, Phase};
use crate::modules::timer::Timer;
use crate::utilities::config::Config;
use crate::utilities::event::ElevatorEvent;

/// Runs until the press channel closes and the car has finished any sweep
/// it already started.
pub fn main(
    config: Config,
    press_rx: Receiver<PressCommand>,
    event_tx: Sender<ElevatorEvent>,
) {
    let mut scheduler = MotionScheduler::new(config.elevator, config.timing, event_tx);
    let timer = Timer::init();

    loop {
        select! {
            recv(press_rx) -> msg => {
                let Ok(command) = msg else {
                    break;
                };
                match scheduler.press_raw(&command.direction, command.floor) {
                    Ok(Some(wait)) => timer.start(wait),
                    Ok(None) => (),
                    Err(err) => warn!("ignoring press {:?}: {}", command, err),
                }
            },
            recv(timer.timeout_channel()) -> _ => {
                if let Some(wait) = scheduler.on_timer_elapsed() {
                    timer.start(wait);
                }
            },
        }
    }

    if scheduler.phase() != Phase::Idle {
        info!("press channel closed, finishing the running sweep");
    }
    while scheduler.phase() != Phase::Idle {
        if timer.timeout_channel().recv().is_err() {
            return;
        }
        if let Some(wait) = scheduler.on_timer_elapsed() {
            timer.start(wait);
        }
    }
    info!("press channel closed, stopping state machine");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    use crossbeam_channel::unbounded;

    use crate::utilities::config::{ElevatorSettings, TimingConfig};

    #[test]
    fn closed_input_still_finishes_the_sweep() {
        let config = Config {
            elevator: ElevatorSettings::new(0, 2).unwrap(),
            timing: TimingConfig::from_millis(20, 10),
        };
        let (press_tx, press_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();

        press_tx
            .send(PressCommand { direction: String::from("UP"), floor: 1 })
            .unwrap();
        drop(press_tx);

        let fsm = thread::spawn(move || main(config, press_rx, event_tx));

        let mut arrivals = Vec::new();
        while let Ok(event) = event_rx.recv_timeout(Duration::from_secs(5)) {
            if let ElevatorEvent::TransitionEnded { floor } = event {
                arrivals.push(floor);
            }
        }
        assert_eq!(arrivals, vec![1, 2]);
        fsm.join().unwrap();
    }
}
