// inputs/handler.rs

//! Event handler that wraps crossterm input and tick event.

use crossterm::event::{KeyEvent, KeyEventKind};
use log::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub enum Event {
    /// A key was pressed.
    Input(KeyEvent),
    /// No input during the tick rate.
    Tick,
}

/// Event handler that wraps crossterm input and tick event.
/// Terminal polling runs on a blocking task and forwards events to a
/// channel read by the UI loop.
pub struct EventHandler {
    rx: tokio::sync::mpsc::Receiver<Event>,
    // Need to be kept around to prevent disposing the sender side.
    _tx: tokio::sync::mpsc::Sender<Event>,
    // To stop the loop
    stop_capture: Arc<AtomicBool>,
}

impl EventHandler {
    /// Constructs a new instance of `EventHandler` polling the terminal
    /// every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = tokio::sync::mpsc::channel(100);
        let stop_capture = Arc::new(AtomicBool::new(false));

        let event_tx = tx.clone();
        let event_stop_capture = stop_capture.clone();
        tokio::task::spawn_blocking(move || loop {
            let event = match crossterm::event::poll(tick_rate) {
                Ok(true) => match crossterm::event::read() {
                    Ok(crossterm::event::Event::Key(key_event))
                        if key_event.kind == KeyEventKind::Press =>
                    {
                        Event::Input(key_event)
                    }
                    Ok(_) => Event::Tick,
                    Err(err) => {
                        error!("Could not read terminal event: {}", err);
                        Event::Tick
                    }
                },
                Ok(false) => Event::Tick,
                Err(err) => {
                    error!("Could not poll terminal events: {}", err);
                    Event::Tick
                }
            };
            if let Err(err) = event_tx.blocking_send(event) {
                error!("Could not send terminal event to main thread!, {}", err);
            }
            if event_stop_capture.load(Ordering::Relaxed) {
                break;
            }
        });

        EventHandler {
            rx,
            _tx: tx,
            stop_capture,
        }
    }

    /// Attempts to read an event.
    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Tick)
    }

    /// Stop polling the terminal
    pub fn close(&mut self) {
        self.stop_capture.store(true, Ordering::Relaxed)
    }
}
