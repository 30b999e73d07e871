//! Gzip strategy, backed by the in-process zlib bindings.
//!
//! Decompression wraps the input handle in a multi-member decoder so
//! concatenated gzip members decode as one stream, matching the whole-stream
//! semantics of the standalone tools. Compression wraps the output handle in
//! an encoder parameterized by the level; the trailer is only written on a
//! proper finish, so finishing the encoder and closing the underlying handle
//! are two separately checked steps — skipping either can turn a truncated
//! archive into a silent success.

use std::fs::File;
use std::os::fd::OwnedFd;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::FilterError;
use crate::filter::pump::{close_checked, pump};

const LABEL: &str = "gzip";

pub(crate) fn decompress(fd_in: OwnedFd, fd_out: OwnedFd, desc: &str) -> Result<(), FilterError> {
    let mut decoder = MultiGzDecoder::new(File::from(fd_in));
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
    let mut encoder = GzEncoder::new(File::from(fd_out), Compression::new(level as u32));

    pump(&mut input, &mut encoder).map_err(|e| e.into_filter(LABEL, desc))?;
    let output = encoder
        .finish()
        .map_err(|e| FilterError::finalize(LABEL, desc, e))?;
    close_checked(output).map_err(|e| FilterError::finalize(LABEL, desc, e))?;

    Ok(())
}
