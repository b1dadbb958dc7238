use crate::error::{SubconError, SubconResult};
use crate::launcher::Launcher;
use crate::types::ExitStatus;
use std::process::{Command, Stdio};

pub(super) fn launch(launcher: &Launcher) -> SubconResult<ExitStatus> {
    if !launcher.new_console || !launcher.hide_window {
        log::trace!("console and window options have no effect on this platform");
    }

    let command = launcher
        .command
        .to_str()
        .ok_or_else(|| SubconError::invalid_command("command line is not valid UTF-8"))?;
    let words = shell_words::split(command)
        .map_err(|e| SubconError::invalid_command(&e.to_string()))?;
    let (program, args) = words
        .split_first()
        .ok_or_else(|| SubconError::invalid_command("command line has no program"))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(SubconError::CreateProcess)?;
    log::trace!("created child process {}", child.id());

    let status = child.wait().map_err(SubconError::ExitCodeQuery)?;

    Ok(exit_status_of(status))
}

#[cfg(unix)]
fn exit_status_of(status: std::process::ExitStatus) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn exit_status_of(status: std::process::ExitStatus) -> ExitStatus {
    status.code().unwrap_or(1)
}
