use crate::types::{ExitStatus, NO_COMMAND_EXIT_STATUS};
use thiserror::Error;

const EINVAL: i32 = 22;

/// Result type used throughout the crate
pub type SubconResult<T> = Result<T, SubconError>;

/// Failures that end a run before the child's own status is known
#[derive(Error, Debug)]
pub enum SubconError {
    /// The invocation text has nothing after the program's own name
    #[error("no command found after the program name")]
    NoCommand,

    /// The OS rejected or failed to start the requested program
    #[error("failed to create process: {0}")]
    CreateProcess(#[source] std::io::Error),

    /// The child ran but its exit code could not be retrieved
    #[error("failed to query the exit code of the child process: {0}")]
    ExitCodeQuery(#[source] std::io::Error),
}

impl SubconError {
    /// A command line that can't be turned into a program and its arguments
    pub(crate) fn invalid_command(reason: &str) -> Self {
        log::debug!("invalid command line: {reason}");
        SubconError::CreateProcess(std::io::Error::from_raw_os_error(EINVAL))
    }

    /// The status this program should terminate with for this error
    ///
    /// OS failures report the raw OS error code, a missing command reports [`NO_COMMAND_EXIT_STATUS`].
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            SubconError::NoCommand => NO_COMMAND_EXIT_STATUS,
            SubconError::CreateProcess(e) | SubconError::ExitCodeQuery(e) => {
                e.raw_os_error().unwrap_or(1)
            }
        }
    }
}
