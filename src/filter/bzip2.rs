//! Bzip2 strategy, backed by the in-process libbzip2 bindings.
//!
//! Mirrors the gzip strategy: multi-stream decoder on the read side, encoder
//! parameterized by level on the write side, with finish and close as two
//! separately checked finalization steps.

use std::fs::File;
use std::os::fd::OwnedFd;

use bzip2::read::MultiBzDecoder;
use bzip2::write::BzEncoder;
use bzip2::Compression;

use crate::error::FilterError;
use crate::filter::pump::{close_checked, pump};

const LABEL: &str = "bzip2";

pub(crate) fn decompress(fd_in: OwnedFd, fd_out: OwnedFd, desc: &str) -> Result<(), FilterError> {
    let mut decoder = MultiBzDecoder::new(File::from(fd_in));
    let mut output = File::from(fd_out);

    pump(&mut decoder, &mut output).map_err(|e| e.into_filter(LABEL, desc))?;
    close_checked(output).map_err(|e| FilterError::finalize(LABEL, desc, e))?;

    Ok(())
}

pub(crate) fn compress(
    fd_in: OwnedFd,
    fd_out: OwnedFd,
    level: i32,
    desc: &str,
) -> Result<(), FilterError> {
    let mut input = File::from(fd_in);
    let mut encoder = BzEncoder::new(File::from(fd_out), Compression::new(level as u32));

    pump(&mut input, &mut encoder).map_err(|e| e.into_filter(LABEL, desc))?;
    let output = encoder
        .finish()
        .map_err(|e| FilterError::finalize(LABEL, desc, e))?;
    close_checked(output).map_err(|e| FilterError::finalize(LABEL, desc, e))?;

    Ok(())
}
