use crate::error::{SubconError, SubconResult};
use crate::launcher::Launcher;
use crate::types::ExitStatus;
use std::io;
use std::os::windows::ffi::OsStrExt;
use std::os::windows::io::{AsRawHandle, FromRawHandle, OwnedHandle};
use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::{
    SetHandleInformation, HANDLE, HANDLE_FLAG_INHERIT, TRUE, WAIT_FAILED,
};
use windows::Win32::System::Console::{
    GetStdHandle, STD_ERROR_HANDLE, STD_HANDLE, STD_INPUT_HANDLE, STD_OUTPUT_HANDLE,
};
use windows::Win32::System::Threading::{
    CreateProcessW, GetExitCodeProcess, WaitForSingleObject, CREATE_NEW_CONSOLE, INFINITE,
    PROCESS_CREATION_FLAGS, PROCESS_INFORMATION, STARTF_USESHOWWINDOW, STARTF_USESTDHANDLES,
    STARTUPINFOW,
};
use windows::Win32::UI::WindowsAndMessaging::SW_HIDE;

pub(super) fn launch(launcher: &Launcher) -> SubconResult<ExitStatus> {
    let std_input = inheritable_std_handle(STD_INPUT_HANDLE);
    let std_output = inheritable_std_handle(STD_OUTPUT_HANDLE);
    let std_error = inheritable_std_handle(STD_ERROR_HANDLE);

    let mut flags = STARTF_USESTDHANDLES;
    if launcher.hide_window {
        flags |= STARTF_USESHOWWINDOW;
    }
    let startup_info = STARTUPINFOW {
        cb: std::mem::size_of::<STARTUPINFOW>() as u32,
        dwFlags: flags,
        wShowWindow: SW_HIDE.0 as u16,
        hStdInput: std_input,
        hStdOutput: std_output,
        hStdError: std_error,
        ..Default::default()
    };

    let creation_flags = if launcher.new_console {
        CREATE_NEW_CONSOLE
    } else {
        PROCESS_CREATION_FLAGS(0)
    };

    // CreateProcessW needs a writable, NUL-terminated command line
    let mut command_line: Vec<u16> = launcher
        .command
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    let mut process_info = PROCESS_INFORMATION::default();
    unsafe {
        CreateProcessW(
            PCWSTR::null(),
            PWSTR(command_line.as_mut_ptr()),
            None,
            None,
            TRUE,
            creation_flags,
            None,
            PCWSTR::null(),
            &startup_info,
            &mut process_info,
        )
    }
    .map_err(|e| SubconError::CreateProcess(os_error(&e)))?;

    // Both handles are closed when these go out of scope, whichever way this function returns
    let owned_process = unsafe { OwnedHandle::from_raw_handle(process_info.hProcess.0) };
    let _thread = unsafe { OwnedHandle::from_raw_handle(process_info.hThread.0) };
    log::trace!("created child process {}", process_info.dwProcessId);

    let process = HANDLE(owned_process.as_raw_handle());
    if unsafe { WaitForSingleObject(process, INFINITE) } == WAIT_FAILED {
        let e = io::Error::last_os_error();
        log::warn!("waiting for child process {} failed: {e}", process_info.dwProcessId);
        return Err(SubconError::ExitCodeQuery(e));
    }

    let mut exit_code = 0u32;
    unsafe { GetExitCodeProcess(process, &mut exit_code) }
        .map_err(|e| SubconError::ExitCodeQuery(os_error(&e)))?;

    Ok(exit_code as ExitStatus)
}

/// Get one of this process's standard handles and mark it inheritable.
///
/// Marking is best effort, a handle that can't be marked is still passed to the child.
fn inheritable_std_handle(which: STD_HANDLE) -> HANDLE {
    let handle = match unsafe { GetStdHandle(which) } {
        Ok(handle) => handle,
        Err(e) => {
            log::warn!("unable to get standard handle {}: {e}", which.0);
            return HANDLE::default();
        }
    };

    let marked = unsafe { SetHandleInformation(handle, HANDLE_FLAG_INHERIT.0, HANDLE_FLAG_INHERIT) };
    if let Err(e) = marked {
        log::debug!("unable to mark standard handle {} inheritable: {e}", which.0);
    }

    handle
}

/// Recover the Win32 error code carried by an HRESULT built from the thread's last error
fn os_error(e: &windows::core::Error) -> io::Error {
    let hresult = e.code().0 as u32;
    let code = if hresult & 0xFFFF_0000 == 0x8007_0000 {
        hresult & 0xFFFF
    } else {
        hresult
    };

    io::Error::from_raw_os_error(code as i32)
}
