//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum.  A blocking reader forwards
//! input and an interval task emits animation frames, both over one channel,
//! so the main loop stays non-blocking and handles everything in order.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// How long the reader waits for input before checking for shutdown.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// One animation frame elapsed.
    Frame,
}

/// Spawns the input reader and the frame clock, returning the channel both
/// feed.  Both stop once the receiver is dropped.
pub fn spawn_event_reader(frame_interval: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    let input_tx = tx.clone();
    tokio::task::spawn_blocking(move || loop {
        if input_tx.is_closed() {
            break;
        }
        if !event::poll(POLL_TIMEOUT).unwrap_or(false) {
            continue;
        }
        let Ok(ev) = event::read() else {
            continue;
        };
        let Some(app_event) = translate(ev) else {
            continue;
        };
        if input_tx.send(app_event).is_err() {
            break; // receiver dropped
        }
    });

    spawn_frame_clock(tx, frame_interval);
    rx
}

/// Emit `AppEvent::Frame` every `frame_interval` until the receiver goes away.
pub fn spawn_frame_clock(
    tx: mpsc::UnboundedSender<AppEvent>,
    frame_interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut clock = tokio::time::interval(frame_interval);
        // A stalled frame is dropped rather than replayed in a burst.
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            clock.tick().await;
            if tx.send(AppEvent::Frame).is_err() {
                break;
            }
        }
        tracing::debug!("frame clock stopped");
    })
}

/// Keep the terminal events the app reacts to.
fn translate(ev: CtEvent) -> Option<AppEvent> {
    match ev {
        CtEvent::Key(k) => Some(AppEvent::Key(k)),
        CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
        CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}
