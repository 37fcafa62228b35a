//! Status display trait
//!
//! Optional telemetry surface for robots with a small character screen.
//! The controller writes short best-effort status lines through it;
//! chassis without a screen plug in [`NullDisplay`].

/// Characters per display line (21-column character screens).
pub const MAX_LINE_LEN: usize = 21;

/// Errors that can occur with display output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the device
    Communication,
    /// Text does not fit a display line
    LineOverflow,
}

/// Trait for status line output
///
/// Lines are queued with [`show_line`](StatusDisplay::show_line) and
/// pushed to the device by [`flush`](StatusDisplay::flush), so
/// implementations backed by a framebuffer repaint once per update.
pub trait StatusDisplay {
    /// Queue a status line for display.
    fn show_line(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Push queued lines to the device.
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// Display that drops all output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl StatusDisplay for NullDisplay {
    fn show_line(&mut self, _text: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
