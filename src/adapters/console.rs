//! Console status display adapter.
//!
//! Implements [`StatusDisplay`] by writing the two status lines to the log
//! (UART / USB-CDC on the board, stderr on the host).  Only changed
//! screens are written, so a 500 ms refresh does not flood the console.

use log::info;

use crate::app::ports::StatusDisplay;
use crate::presentation::StatusLines;

/// Adapter that logs each new [`StatusLines`] screen.
pub struct ConsoleDisplay {
    last: Option<StatusLines>,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusDisplay for ConsoleDisplay {
    fn show(&mut self, lines: &StatusLines) {
        if self.last.as_ref() == Some(lines) {
            return;
        }
        info!("LCD | {:<16} | {:<16} |", lines.top.as_str(), lines.bottom.as_str());
        self.last = Some(lines.clone());
    }
}
