use crate::error::SubconResult;
use crate::types::ExitStatus;
use std::ffi::{OsStr, OsString};

#[cfg(not(target_os = "windows"))]
mod fallback;
#[cfg(target_os = "windows")]
mod win32;

/// Run a command line as a child process that shares this process's standard streams
#[derive(Debug)]
pub struct Launcher {
    command: OsString,
    new_console: bool,
    hide_window: bool,
}

impl Launcher {
    /// Create a launcher for a full command line, program name included.
    ///
    /// The command line is handed to the OS as-is, quoting and all.
    pub fn new(command: impl AsRef<OsStr>) -> Self {
        Launcher {
            command: command.as_ref().to_owned(),
            new_console: true,
            hide_window: true,
        }
    }

    /// Let the child reuse this process's console instead of getting a new one.
    ///
    /// Only meaningful on Windows.
    pub fn share_console(mut self) -> Self {
        self.new_console = false;
        self
    }

    /// Don't ask for the child's window to be hidden.
    ///
    /// Only meaningful on Windows.
    pub fn show_window(mut self) -> Self {
        self.hide_window = false;
        self
    }

    /// Start the child, block until it exits and return its exit status
    pub fn launch(&self) -> SubconResult<ExitStatus> {
        log::debug!("launching {:?}", self.command);

        #[cfg(target_os = "windows")]
        let status = win32::launch(self)?;
        #[cfg(not(target_os = "windows"))]
        let status = fallback::launch(self)?;

        log::debug!("child exited with status {status}");
        Ok(status)
    }
}
