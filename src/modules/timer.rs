use std::thread::{sleep, spawn};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

/// One-shot timer signalled through a channel the fsm loop selects on.
#[derive(Debug, Clone)]
pub struct Timer {
    timeout_channel_tx: Sender<()>,
    timeout_channel_rx: Receiver<()>,
}

impl Timer {
    pub fn init() -> Timer {
        let (timeout_channel_tx, timeout_channel_rx) = unbounded::<()>();

        Timer {
            timeout_channel_tx,
            timeout_channel_rx,
        }
    }

    pub fn start(&self, duration: Duration) {
        let timeout_channel_tx = self.timeout_channel_tx.clone();

        spawn(move || {
            sleep(duration);
            let _ = timeout_channel_tx.send(());
        });
    }

    pub fn timeout_channel(&self) -> &Receiver<()> {
        &self.timeout_channel_rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_duration() {
        let timer = Timer::init();
        timer.start(Duration::from_millis(10));
        assert!(timer.timeout_channel().try_recv().is_err());
        assert!(timer
            .timeout_channel()
            .recv_timeout(Duration::from_secs(1))
            .is_ok());
    }
}
