use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    Quit,
}

/// Reads terminal input on its own thread and emits `Tick` on a fixed
/// cadence, even while keys are held down. Animation state never leaves
/// the UI thread; ticks only say "time to look at the clock".
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(frame_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let _tx = tx.clone();

        thread::spawn(move || {
            let mut next_tick = Instant::now() + frame_interval;
            loop {
                let timeout = next_tick.saturating_duration_since(Instant::now());
                let polled = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(err) => {
                        warn!(%err, "terminal poll failed");
                        false
                    }
                };
                if polled {
                    let app_event = match event::read() {
                        Ok(Event::Key(key)) => translate_key(key),
                        Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                        _ => None,
                    };
                    if let Some(app_event) = app_event {
                        if tx.send(app_event).is_err() {
                            return;
                        }
                    }
                }
                let now = Instant::now();
                if now >= next_tick {
                    next_tick = now + frame_interval;
                    if tx.send(AppEvent::Tick).is_err() {
                        return;
                    }
                }
            }
        });

        Self { rx, _tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

/// Presses only; Ctrl-C becomes `Quit` before it reaches any section.
fn translate_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppEvent::Quit);
    }
    Some(AppEvent::Key(key))
}
