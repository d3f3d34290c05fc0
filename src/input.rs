use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::geometry::Direction;

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Turn(Direction),
    Pause,
    Quit,
}

impl GameInput {
    /// Maps a key press to an input event. Releases and unbound keys map to `None`.
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Self::Quit),
            KeyCode::Char('p' | 'P' | ' ') => Some(Self::Pause),
            code => match direction_for_key(code) {
                Direction::Invalid => None,
                direction => Some(Self::Turn(direction)),
            },
        }
    }
}

/// Maps the four arrow keys to headings; anything else is `Invalid`.
pub fn direction_for_key(code: KeyCode) -> Direction {
    match code {
        KeyCode::Up => Direction::North,
        KeyCode::Down => Direction::South,
        KeyCode::Left => Direction::West,
        KeyCode::Right => Direction::East,
        _ => Direction::Invalid,
    }
}

/// Reads terminal events and turns them into [`GameInput`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one event.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(GameInput::from_key_event(key)),
            _ => Ok(None),
        }
    }
}
