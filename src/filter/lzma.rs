//! Lzma strategy: delegated to the external `lzma` program.
//!
//! No byte pumping happens in-process. The strategy builds the invocation
//! (`-dc` to decompress, `-c<level>` to compress) and hands the stream
//! handles back to the dispatcher as a delegated outcome; the external
//! program inherits them directly.

use std::os::fd::OwnedFd;

use crate::command::ExternalCommand;
use crate::filter::Outcome;

/// Program the lzma strategy delegates to.
pub const LZMA_PROGRAM: &str = "lzma";

pub(crate) fn decompress(fd_in: OwnedFd, fd_out: OwnedFd, desc: &str) -> Outcome {
    Outcome::Delegated {
        fd_in,
        fd_out,
        command: ExternalCommand::new(LZMA_PROGRAM, desc).arg("-dc"),
    }
}

pub(crate) fn compress(fd_in: OwnedFd, fd_out: OwnedFd, level: i32, desc: &str) -> Outcome {
    Outcome::Delegated {
        fd_in,
        fd_out,
        command: ExternalCommand::new(LZMA_PROGRAM, desc).arg(format!("-c{}", level)),
    }
}
