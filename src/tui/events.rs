use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Error(String),
}

/// Multiplexes terminal key events and a fixed tick interval into one
/// channel. The reader task is aborted on drop, so no timer or poll
/// callback can outlive the UI that owns it.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    task: JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    _ = tokio::time::sleep(Duration::from_millis(5)) => {
                        // Drain any pending terminal events without blocking
                        while let Ok(true) = event::poll(Duration::from_millis(0)) {
                            match event::read() {
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    if tx.send(Event::Key(key)).is_err() {
                                        return;
                                    }
                                }
                                Ok(_) => {}
                                Err(e) => {
                                    error!("failed to read terminal event: {}", e);
                                    let _ = tx.send(Event::Error(e.to_string()));
                                }
                            }
                        }
                    }
                }
            }
            debug!("event handler task ended");
        });

        Self { rx, task }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.task.abort();
    }
}
