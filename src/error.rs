//! Filter error taxonomy.
//!
//! Every error in the filter core is fatal: there is no local recovery,
//! retry, or partial-success state anywhere. A filter that produced even one
//! corrupt byte must never report success, so the policy trades robustness
//! for integrity by refusing to continue past any anomaly. The enums here
//! classify what went wrong so the terminating diagnostic is precise; the
//! actual process termination lives in the dispatch wrapper.
//!
//! [`Cause`] records whether a failed stream operation was rejected by the
//! codec library itself or by the operating environment underneath it. The
//! distinction is resolved exactly once, at the boundary where the error is
//! captured ([`Cause::from_io`]), rather than re-inspected at each call site.

use std::io;

use thiserror::Error;

/// Exit status for an unknown/unsupported codec selector.
pub const EXIT_UNSUPPORTED: i32 = 1;
/// Exit status for any fatal I/O, codec, finalization, or exec error.
pub const EXIT_FATAL: i32 = 2;

/// Why a stream operation failed: in the codec library, or in the
/// environment's I/O underneath it.
///
/// An [`io::Error`] carrying an OS error code is an environment failure and
/// displays the operating system's error text; anything else is the codec
/// library's own diagnostic.
#[derive(Debug, Error)]
pub enum Cause {
    /// The codec library rejected the stream (corrupt data, bad parameters).
    #[error("{0}")]
    Codec(io::Error),
    /// The operating environment reported an I/O failure underneath.
    #[error("{0}")]
    Io(io::Error),
}

impl Cause {
    /// Classify an error captured at the codec boundary.
    pub fn from_io(err: io::Error) -> Cause {
        if err.raw_os_error().is_some() {
            Cause::Io(err)
        } else {
            Cause::Codec(err)
        }
    }

    /// `true` when the failure originated in the operating environment's
    /// I/O rather than in the codec library.
    pub fn is_environment(&self) -> bool {
        matches!(self, Cause::Io(_))
    }
}

/// A fatal filter failure.
///
/// `codec` is the strategy label ("gzip", "bzip2", "pass-through") and
/// `desc` the caller-supplied description of the stream being transformed;
/// both are embedded in the diagnostic so the parent process's log names the
/// stream that failed.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The requested selector is outside the supported set.
    #[error("unknown compression type")]
    UnsupportedCodec,

    /// A read from the input side failed.
    #[error("{desc}: internal {codec} read error: {cause}")]
    Read {
        codec: &'static str,
        desc: String,
        cause: Cause,
    },

    /// A write to the output side failed outright.
    #[error("{desc}: internal {codec} write error: {cause}")]
    Write {
        codec: &'static str,
        desc: String,
        cause: Cause,
    },

    /// A write consumed fewer bytes than requested. Treated identically to a
    /// failed write: continuing would desynchronize the stream.
    #[error("{desc}: internal {codec} write error: wrote {written} of {expected} bytes")]
    ShortWrite {
        codec: &'static str,
        desc: String,
        written: usize,
        expected: usize,
    },

    /// Finalizing the codec stream or closing the output handle failed.
    /// A compressed trailer is only written on proper finalize, and a failed
    /// close can hide undetected truncation, so both carry write-error
    /// severity.
    #[error("{desc}: internal {codec} write error: {cause}")]
    Finalize {
        codec: &'static str,
        desc: String,
        cause: Cause,
    },
}

impl FilterError {
    pub(crate) fn read(codec: &'static str, desc: &str, err: io::Error) -> FilterError {
        FilterError::Read {
            codec,
            desc: desc.to_owned(),
            cause: Cause::from_io(err),
        }
    }

    pub(crate) fn write(codec: &'static str, desc: &str, err: io::Error) -> FilterError {
        FilterError::Write {
            codec,
            desc: desc.to_owned(),
            cause: Cause::from_io(err),
        }
    }

    pub(crate) fn finalize(codec: &'static str, desc: &str, err: io::Error) -> FilterError {
        FilterError::Finalize {
            codec,
            desc: desc.to_owned(),
            cause: Cause::from_io(err),
        }
    }

    /// The process exit status this error terminates with.
    pub fn exit_code(&self) -> i32 {
        match self {
            FilterError::UnsupportedCodec => EXIT_UNSUPPORTED,
            _ => EXIT_FATAL,
        }
    }
}
