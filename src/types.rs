/// The integer status this program terminates with
pub type ExitStatus = i32;

/// Reported when no sub-command could be found in the invocation text
pub const NO_COMMAND_EXIT_STATUS: ExitStatus = -1;
