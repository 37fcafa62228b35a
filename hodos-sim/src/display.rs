//! Status display backed by the log facade

use hodos_core::traits::{DisplayError, StatusDisplay};

/// Routes status lines to `log::info!`, one record per line.
///
/// Lines appear as soon as they are shown; `flush` is a no-op since the
/// logger has no frame to present.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDisplay;

impl StatusDisplay for ConsoleDisplay {
    fn show_line(&mut self, text: &str) -> Result<(), DisplayError> {
        log::info!("{}", text);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
