use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::game::GameState;
use crate::geometry::Direction;
use crate::grid::{Grid, to_grid};
use crate::input::GameInput;

/// Handle to one game shared by the tick driver and the input loop.
///
/// Every operation holds the lock for its whole duration, so a tick is never
/// observed half-applied.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn advance(&self) {
        self.lock().tick();
    }

    pub fn turn(&self, direction: Direction) {
        self.lock().turn(direction);
    }

    pub fn apply_input(&self, input: GameInput) {
        self.lock().apply_input(input);
    }

    /// Takes a grid snapshot under the lock.
    pub fn grid(&self) -> Grid {
        to_grid(&self.lock())
    }

    /// Runs `f` against the current state under the lock.
    pub fn with_state<T>(&self, f: impl FnOnce(&GameState) -> T) -> T {
        f(&*self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, GameState> {
        // Engine updates are total, so a panic elsewhere cannot leave a torn state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Background thread calling [`SharedGame::advance`] at a fixed interval.
///
/// The thread waits on a channel between ticks, so stopping never waits out
/// the rest of an interval.
#[derive(Debug)]
pub struct TickDriver {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Starts ticking `game` every `interval`.
    pub fn spawn(game: SharedGame, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            debug!(interval_ms = interval.as_millis() as u64, "tick driver started");
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => game.advance(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("tick driver stopped");
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Wakes the thread and waits for it to exit.
    pub fn stop(&mut self) {
        // Dropping the sender disconnects the channel and ends the wait.
        drop(self.stop_tx.take());
        let Some(handle) = self.handle.take() else {
            return;
        };
        if handle.join().is_err() {
            warn!("tick driver thread panicked");
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
