#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod command_line;
mod error;
mod invocation;
mod launcher;
mod types;

pub use crate::command_line::{extract_command, extract_command_str};
pub use crate::error::{SubconError, SubconResult};
pub use crate::invocation::{current_command, invocation_from_args};
pub use crate::launcher::Launcher;
pub use crate::types::*;

/// Run the sub-command this process was invoked with and return the status to exit with
pub fn run() -> ExitStatus {
    match current_command().and_then(|command| Launcher::new(command).launch()) {
        Ok(status) => status,
        Err(e) => {
            log::debug!("{e}");
            e.exit_status()
        }
    }
}
