//! Filter dispatch.
//!
//! The public surface has two layers, so the transformation logic stays
//! unit-testable while the process-level contract stays intact:
//!
//! - [`run_decompress`] / [`run_compress`] — the pure cores. Given a codec
//!   selector, two stream handles, and (for compression) a level, they apply
//!   exactly one strategy and return an [`Outcome`] or a fatal
//!   [`FilterError`]. They never terminate the process.
//! - [`decompress_filter`] / [`compress_filter`] — the non-returning entry
//!   points a dedicated child process runs as its body. They consume the
//!   core's result: exit 0 on completion, replace the process image for a
//!   delegated transformation, or emit the diagnostic and exit nonzero.
//!
//! Level normalization lives in the compression dispatch: a negative level
//! selects the default ([`DEFAULT_LEVEL`]), and level 0 forces the *none*
//! selector, since "compress at level 0" is defined as pass-through.

pub mod pump;

mod bzip2;
mod gzip;
mod lzma;
mod none;

use std::os::fd::OwnedFd;
use std::process;

use crate::codec::Codec;
use crate::command::ExternalCommand;
use crate::error::{FilterError, EXIT_FATAL};
use crate::exec;

pub use lzma::LZMA_PROGRAM;

/// Compression level used when the caller passes the negative sentinel.
pub const DEFAULT_LEVEL: i32 = 9;

/// How a filter invocation concluded in-process.
#[derive(Debug)]
pub enum Outcome {
    /// All bytes were pumped in-process; the output handle is closed.
    Completed,
    /// The transformation is handed to an external program. The stream
    /// handles transfer with the invocation; the caller decides how to run
    /// and observe it.
    Delegated {
        fd_in: OwnedFd,
        fd_out: OwnedFd,
        command: ExternalCommand,
    },
}

/// Normalize a requested (codec, level) pair for compression.
pub fn normalize_compression(codec: Codec, level: i32) -> (Codec, i32) {
    if level < 0 {
        (codec, DEFAULT_LEVEL)
    } else if level == 0 {
        (Codec::None, 0)
    } else {
        (codec, level)
    }
}

/// Decompression dispatch core. Applies exactly one strategy; refuses
/// unknown selectors before touching either handle.
pub fn run_decompress(
    codec: Codec,
    fd_in: OwnedFd,
    fd_out: OwnedFd,
    desc: &str,
) -> Result<Outcome, FilterError> {
    match codec {
        Codec::Gzip => gzip::decompress(fd_in, fd_out, desc).map(|()| Outcome::Completed),
        Codec::Bzip2 => bzip2::decompress(fd_in, fd_out, desc).map(|()| Outcome::Completed),
        Codec::Lzma => Ok(lzma::decompress(fd_in, fd_out, desc)),
        Codec::None => none::copy(fd_in, fd_out, desc).map(|()| Outcome::Completed),
        Codec::Unknown => Err(FilterError::UnsupportedCodec),
    }
}

/// Compression dispatch core. Normalizes the level, then applies exactly
/// one strategy; refuses unknown selectors before touching either handle.
pub fn run_compress(
    codec: Codec,
    fd_in: OwnedFd,
    fd_out: OwnedFd,
    level: i32,
    desc: &str,
) -> Result<Outcome, FilterError> {
    let (codec, level) = normalize_compression(codec, level);
    match codec {
        Codec::Gzip => gzip::compress(fd_in, fd_out, level, desc).map(|()| Outcome::Completed),
        Codec::Bzip2 => bzip2::compress(fd_in, fd_out, level, desc).map(|()| Outcome::Completed),
        Codec::Lzma => Ok(lzma::compress(fd_in, fd_out, level, desc)),
        Codec::None => none::copy(fd_in, fd_out, desc).map(|()| Outcome::Completed),
        Codec::Unknown => Err(FilterError::UnsupportedCodec),
    }
}

/// Non-returning decompression entry point: the body of a dedicated filter
/// process. Terminates with 0 on success, 1 on an unsupported selector, or
/// [`EXIT_FATAL`] on any fatal error; for lzma the process image is replaced
/// by the external program.
pub fn decompress_filter(codec: Codec, fd_in: OwnedFd, fd_out: OwnedFd, desc: &str) -> ! {
    conclude(run_decompress(codec, fd_in, fd_out, desc))
}

/// Non-returning compression entry point. See [`decompress_filter`].
pub fn compress_filter(
    codec: Codec,
    fd_in: OwnedFd,
    fd_out: OwnedFd,
    level: i32,
    desc: &str,
) -> ! {
    conclude(run_compress(codec, fd_in, fd_out, level, desc))
}

/// Terminal half of the dispatcher: every path ends the process, by exiting
/// or by replacing the process image.
fn conclude(result: Result<Outcome, FilterError>) -> ! {
    match result {
        Ok(Outcome::Completed) => process::exit(0),
        Ok(Outcome::Delegated {
            fd_in,
            fd_out,
            command,
        }) => {
            let err = exec::exec_filter(fd_in, fd_out, &command);
            crate::displaylevel!(
                1,
                "{}: unable to execute {}: {}\n",
                command.desc(),
                command.program(),
                err
            );
            process::exit(EXIT_FATAL);
        }
        Err(err) => {
            crate::displaylevel!(1, "{}\n", err);
            process::exit(err.exit_code());
        }
    }
}
