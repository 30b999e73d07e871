//! Pass-through strategy: bytes are copied verbatim, both directions.

use std::fs::File;
use std::os::fd::OwnedFd;

use crate::error::FilterError;
use crate::filter::pump::{close_checked, pump};

const LABEL: &str = "pass-through";

/// Copy all bytes input → output unmodified and close the output handle.
/// Compression and decompression under the *none* selector are the same
/// operation, so the dispatcher routes both here.
pub(crate) fn copy(fd_in: OwnedFd, fd_out: OwnedFd, desc: &str) -> Result<(), FilterError> {
    let mut input = File::from(fd_in);
    let mut output = File::from(fd_out);

    pump(&mut input, &mut output).map_err(|e| e.into_filter(LABEL, desc))?;
    close_checked(output).map_err(|e| FilterError::finalize(LABEL, desc, e))?;

    Ok(())
}
