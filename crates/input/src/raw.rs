//! Scoped raw-mode acquisition.

use crossterm::terminal;
use log::warn;

/// Puts the terminal in raw mode for as long as it lives.
///
/// Failures to switch modes are logged and otherwise ignored: the game still
/// runs on terminals that refuse, just with echo and line buffering.
#[derive(Debug)]
pub struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    pub fn acquire() -> Self {
        match terminal::enable_raw_mode() {
            Ok(()) => Self { enabled: true },
            Err(e) => {
                warn!("could not enter raw mode: {e}");
                Self { enabled: false }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("could not restore terminal mode: {e}");
        }
    }
}
