//! Input sources: where each tick's buttons come from.

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use log::trace;

use crate::map::KeyMap;
use crate::raw::RawModeGuard;
use crate::types::TickInput;

/// What one input window produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polled {
    /// The window closed with nothing pressed.
    Expired,
    Pressed(TickInput),
}

impl Polled {
    pub fn into_input(self) -> TickInput {
        match self {
            Polled::Expired => TickInput::default(),
            Polled::Pressed(input) => input,
        }
    }
}

impl From<TickInput> for Polled {
    fn from(input: TickInput) -> Self {
        if input.is_empty() {
            Polled::Expired
        } else {
            Polled::Pressed(input)
        }
    }
}

/// Supplies the buttons pressed during one tick.
pub trait InputSource {
    /// Collect input for at most `window`.
    fn poll(&mut self, window: Duration) -> io::Result<Polled>;
}

/// Reads keys from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalInput {
    keys: KeyMap,
}

impl TerminalInput {
    pub fn new(keys: KeyMap) -> Self {
        Self { keys }
    }
}

impl InputSource for TerminalInput {
    /// Stays open for the whole window so the tick cadence does not depend on
    /// typing speed; every key seen in that time is merged.
    fn poll(&mut self, window: Duration) -> io::Result<Polled> {
        let raw = RawModeGuard::acquire();
        if !raw.is_enabled() {
            trace!("polling with line buffering on");
        }
        let deadline = Instant::now() + window;
        let mut input = TickInput::default();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input.merge(self.keys.decode_key(key));
                }
            }
            if remaining.is_zero() {
                break;
            }
        }

        Ok(Polled::from(input))
    }
}

/// Replays a fixed list of windows, then reports expiry forever.
#[derive(Debug, Default)]
pub struct Scripted {
    windows: VecDeque<Polled>,
}

impl Scripted {
    pub fn new(windows: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            windows: windows.into_iter().map(Polled::from).collect(),
        }
    }
}

impl InputSource for Scripted {
    fn poll(&mut self, _window: Duration) -> io::Result<Polled> {
        Ok(self.windows.pop_front().unwrap_or(Polled::Expired))
    }
}
