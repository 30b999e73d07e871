//! External-program redirector.
//!
//! [`exec_filter`] rewires the calling process's standard input and output
//! to the filter's stream handles and replaces the process image with the
//! named external program. On success it never returns — the external
//! program *becomes* this process and inherits the rebound descriptors. On
//! failure it returns the error so the caller can apply the fatal contract.

use std::io;
use std::os::fd::{AsRawFd, IntoRawFd, OwnedFd, RawFd};

use crate::command::ExternalCommand;

/// Rebind `fd` onto `target` (0 or 1), closing the original handle once the
/// rebind holds so no descriptor leaks into the new process image.
fn rebind(fd: OwnedFd, target: RawFd) -> io::Result<()> {
    if fd.as_raw_fd() == target {
        // Already in place; release ownership so the slot stays open for
        // the new process image.
        let _ = fd.into_raw_fd();
        return Ok(());
    }
    if unsafe { libc::dup2(fd.as_raw_fd(), target) } < 0 {
        return Err(io::Error::last_os_error());
    }
    drop(fd);
    Ok(())
}

/// Rebind stdin/stdout to the given handles and replace the current process
/// image with `command`. Returns only on failure.
pub fn exec_filter(fd_in: OwnedFd, fd_out: OwnedFd, command: &ExternalCommand) -> io::Error {
    if let Err(e) = rebind(fd_in, libc::STDIN_FILENO) {
        return e;
    }
    if let Err(e) = rebind(fd_out, libc::STDOUT_FILENO) {
        return e;
    }

    let argv = match command.to_argv() {
        Ok(argv) => argv,
        Err(e) => return io::Error::new(io::ErrorKind::InvalidInput, e),
    };

    match nix::unistd::execvp(&argv[0], &argv) {
        Ok(never) => match never {},
        Err(errno) => io::Error::from(errno),
    }
}
