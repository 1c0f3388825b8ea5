use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Enter the alternate screen in raw mode. On failure the terminal is
/// put back before the error is returned.
pub fn init() -> io::Result<Tui> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    undo_on_error(
        enable_raw_mode().and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout()))),
        restore,
    )
}

fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        // Keep the setup error.
        let _ = undo();
    }
    result
}

pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

#[derive(Debug, Clone)]
pub enum Action {
    Tick,
    Resize(u16, u16),
    Key(event::KeyEvent),
    /// The people collection or the position was republished.
    FeedUpdated,
}

pub struct EventHandler {
    sender: mpsc::UnboundedSender<Action>,
    receiver: mpsc::UnboundedReceiver<Action>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        // 1. Tick Loop (Async)
        let tick_sender = sender.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                interval.tick().await;
                if tick_sender.send(Action::Tick).is_err() {
                    break;
                }
            }
        });

        // 2. Input Loop (Blocking Thread)
        let event_sender = sender.clone();
        std::thread::spawn(move || loop {
            // Blocks until event available
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind == KeyEventKind::Press && event_sender.send(Action::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(Event::Resize(w, h)) => {
                    if event_sender.send(Action::Resize(w, h)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
                _ => {}
            }
        });

        Self { sender, receiver }
    }

    /// Turn every change of `rx` into an [`Action::FeedUpdated`].
    ///
    /// The task ends when the publisher or this handler goes away.
    pub fn forward_changes<T>(&self, mut rx: watch::Receiver<T>)
    where
        T: Send + Sync + 'static,
    {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                if sender.send(Action::FeedUpdated).is_err() {
                    break;
                }
            }
        });
    }

    pub async fn next_async(&mut self) -> Option<Action> {
        self.receiver.recv().await
    }
}
