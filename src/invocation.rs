use crate::error::{SubconError, SubconResult};
use std::ffi::{OsStr, OsString};

/// Find the sub-command this process was asked to run
///
/// On Windows this scans the raw command line the process was started with. Elsewhere the OS only
/// keeps the split arguments, so an equivalent command line is rebuilt from them first with
/// [`invocation_from_args`].
pub fn current_command() -> SubconResult<OsString> {
    let command = current_command_impl()?;
    log::debug!("extracted command {command:?}");
    Ok(command)
}

#[cfg(target_os = "windows")]
fn current_command_impl() -> SubconResult<OsString> {
    use crate::command_line::extract_command;
    use std::os::windows::ffi::OsStringExt;
    use windows::Win32::System::Environment::GetCommandLineW;

    // The returned buffer lives as long as the process and is never written to
    let raw = unsafe { GetCommandLineW() };
    let invocation = unsafe { raw.as_wide() };
    log::trace!("invocation text {:?}", OsString::from_wide(invocation));

    extract_command(invocation)
        .map(OsString::from_wide)
        .ok_or(SubconError::NoCommand)
}

#[cfg(not(target_os = "windows"))]
fn current_command_impl() -> SubconResult<OsString> {
    use crate::command_line::extract_command_str;

    let invocation = invocation_from_args(std::env::args_os())?;
    log::trace!("invocation text {invocation:?}");

    extract_command_str(&invocation)
        .map(OsString::from)
        .ok_or(SubconError::NoCommand)
}

/// Rebuild a single invocation text from split arguments, program name first.
///
/// The program name is wrapped in double quotes with `"` and `\` escaped by a backslash, so it
/// scans as one word. The remaining arguments are joined with POSIX shell quoting, which means
/// the command extracted from the result splits back into exactly those arguments.
///
/// Arguments after the program name must be valid UTF-8, anything else can't be carried through
/// the text unchanged and is rejected.
pub fn invocation_from_args<I, S>(args: I) -> SubconResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut args = args.into_iter();

    // Only used to find where the command starts, it never reaches the child
    let program = args
        .next()
        .map(|p| p.as_ref().to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut invocation = String::with_capacity(program.len() + 2);
    invocation.push('"');
    for c in program.chars() {
        if c == '"' || c == '\\' {
            invocation.push('\\');
        }
        invocation.push(c);
    }
    invocation.push('"');

    let rest = args
        .map(|a| {
            a.as_ref()
                .to_str()
                .map(str::to_owned)
                .ok_or_else(|| SubconError::invalid_command("argument is not valid UTF-8"))
        })
        .collect::<SubconResult<Vec<String>>>()?;
    if !rest.is_empty() {
        invocation.push(' ');
        invocation.push_str(&shell_words::join(rest));
    }

    Ok(invocation)
}
