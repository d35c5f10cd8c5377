use std::thread;

use crossbeam_channel::{select, unbounded};
use log::{error, info};

use crate::utilities::config::Config;

pub mod call_registry;
pub mod debug;
pub mod fsm;
pub mod io;
pub mod scheduler;
pub mod simulation;
pub mod timer;

pub fn run(config: Config) -> std::io::Result<()> {
    // INITIALIZE CHANNELS
    let (event_tx, event_rx) = unbounded();

    // INITIALIZE INPUTS MODULE
    let (press_rx, stop_rx) = io::init();

    // INITIALIZE THREAD FOR DEBUG VIEW
    let debug_handle = {
        let elevator_settings = config.elevator;
        thread::Builder::new().name("debug".to_string()).spawn(move || {
            if let Err(err) = debug::main(elevator_settings, event_rx) {
                error!("status display failed: {}", err);
            }
        })?
    };

    // INITIALIZE THREAD FOR STATE MACHINE
    let (done_tx, done_rx) = unbounded::<()>();
    thread::Builder::new().name("fsm".to_string()).spawn(move || {
        fsm::main(config, press_rx, event_tx);
        drop(done_tx);
    })?;

    // WAIT FOR QUIT, OR FOR THE STATE MACHINE TO SETTLE AFTER END OF INPUT
    let settled = select! {
        recv(stop_rx) -> msg => match msg {
            Ok(()) => false,
            Err(_) => {
                let _ = done_rx.recv();
                true
            }
        },
        recv(done_rx) -> _ => true,
    };
    if settled {
        // The display exits once the last event is drawn.
        let _ = debug_handle.join();
    }
    info!("STOPPING PROGRAM...");
    Ok(())
}
