use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use clipflow_core::Msg;

/// Recurring poll tick plus one-shot deadline for a watch session.
///
/// Both timer threads share one cancellation flag, so a terminal transition
/// cancels the pair in a single store; each thread re-checks the flag before
/// sending, which keeps a racing timer from acting on a finished session.
#[derive(Default)]
pub struct WatchTimers {
    cancel: Option<Arc<AtomicBool>>,
}

impl WatchTimers {
    pub fn start(&mut self, msg_tx: mpsc::Sender<Msg>, interval: Duration, deadline: Duration) {
        self.stop();
        let flag = Arc::new(AtomicBool::new(false));
        self.cancel = Some(flag.clone());

        let poll_flag = flag.clone();
        let poll_tx = msg_tx.clone();
        thread::spawn(move || loop {
            thread::sleep(interval);
            if poll_flag.load(Ordering::Acquire) {
                break;
            }
            if poll_tx.send(Msg::PollTick).is_err() {
                break;
            }
        });

        thread::spawn(move || {
            thread::sleep(deadline);
            if flag.load(Ordering::Acquire) {
                return;
            }
            let _ = msg_tx.send(Msg::DeadlineElapsed);
        });
    }

    pub fn stop(&mut self) {
        if let Some(flag) = self.cancel.take() {
            flag.store(true, Ordering::Release);
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn ticks_arrive_until_stopped() {
        let (tx, rx) = mpsc::channel();
        let mut timers = WatchTimers::default();
        timers.start(tx, Duration::from_millis(10), Duration::from_secs(60));
        assert!(timers.is_active());

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut ticks = 0;
        while ticks < 3 && Instant::now() < deadline {
            if let Ok(Msg::PollTick) = rx.recv_timeout(Duration::from_millis(100)) {
                ticks += 1;
            }
        }
        assert_eq!(ticks, 3);

        timers.stop();
        assert!(!timers.is_active());
        // Let a tick already past its flag check land, drain, then confirm
        // silence.
        thread::sleep(Duration::from_millis(30));
        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(50));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn deadline_fires_once_when_not_cancelled() {
        let (tx, rx) = mpsc::channel();
        let mut timers = WatchTimers::default();
        timers.start(tx, Duration::from_secs(60), Duration::from_millis(20));

        let msg = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("deadline fires");
        assert_eq!(msg, Msg::DeadlineElapsed);
    }

    #[test]
    fn stop_cancels_the_deadline_too() {
        let (tx, rx) = mpsc::channel();
        let mut timers = WatchTimers::default();
        timers.start(tx, Duration::from_secs(60), Duration::from_millis(50));
        timers.stop();

        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }
}
