//! Bounded-block stream pump shared by every in-process strategy.
//!
//! Bytes move in [`BLOCK_SIZE`] chunks through a single read / single write
//! per block. The block size is an I/O granularity tradeoff, not a protocol
//! requirement. A write that consumes fewer bytes than requested is an error
//! at this layer — the strategies treat it with the same severity as a failed
//! write, because continuing past it would desynchronize the stream.
//!
//! [`close_checked`] surfaces close failures on the output handle, which a
//! plain `drop` of a [`File`] would swallow. On a compressed write path a
//! failed close can hide undetected truncation, so it must be checked.

use std::fs::File;
use std::io::{self, Read, Write};
use std::os::fd::IntoRawFd;

use crate::error::FilterError;

/// I/O granularity of the pump loop, in bytes.
pub const BLOCK_SIZE: usize = 4096;

/// What went wrong inside the pump loop. The strategy that owns the loop
/// maps this into a [`FilterError`] with its codec label and description.
#[derive(Debug)]
pub enum PumpError {
    /// The input side failed.
    Read(io::Error),
    /// The output side failed outright.
    Write(io::Error),
    /// The output side consumed fewer bytes than requested.
    ShortWrite { written: usize, expected: usize },
}

impl PumpError {
    /// Attach the strategy's codec label and description.
    pub fn into_filter(self, codec: &'static str, desc: &str) -> FilterError {
        match self {
            PumpError::Read(e) => FilterError::read(codec, desc, e),
            PumpError::Write(e) => FilterError::write(codec, desc, e),
            PumpError::ShortWrite { written, expected } => FilterError::ShortWrite {
                codec,
                desc: desc.to_owned(),
                written,
                expected,
            },
        }
    }
}

/// Pump `reader` into `writer` until a zero-length read (clean end of
/// stream). Returns the number of bytes moved.
///
/// Interrupted reads/writes are retried at the syscall boundary; every other
/// anomaly stops the loop before any further bytes are processed.
pub fn pump<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
) -> Result<u64, PumpError> {
    let mut buffer = [0u8; BLOCK_SIZE];
    let mut total: u64 = 0;

    loop {
        let got = match reader.read(&mut buffer) {
            Ok(0) => break, // EOF.
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(PumpError::Read(e)),
        };

        let wrote = loop {
            match writer.write(&buffer[..got]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(PumpError::Write(e)),
            }
        };
        if wrote != got {
            return Err(PumpError::ShortWrite {
                written: wrote,
                expected: got,
            });
        }
        total += got as u64;
    }

    Ok(total)
}

/// Close `file`, reporting the close result instead of discarding it.
pub fn close_checked(file: File) -> io::Result<()> {
    let fd = file.into_raw_fd();
    nix::unistd::close(fd).map_err(io::Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    // ── Test doubles ─────────────────────────────────────────────────────────

    /// Writer that accepts at most `limit` bytes per call, then short-writes.
    struct ShortWriter {
        accepted: Vec<u8>,
        limit: usize,
        calls: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls += 1;
            let n = buf.len().min(self.limit);
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writer that fails every call with the given OS error.
    struct FailingWriter(i32);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from_raw_os_error(self.0))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Reader that fails after yielding a prefix.
    struct FailingReader {
        prefix: Vec<u8>,
        given: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.given < self.prefix.len() {
                let n = (self.prefix.len() - self.given).min(buf.len());
                buf[..n].copy_from_slice(&self.prefix[self.given..self.given + n]);
                self.given += n;
                Ok(n)
            } else {
                Err(io::Error::from_raw_os_error(libc::EIO))
            }
        }
    }

    // ── pump ─────────────────────────────────────────────────────────────────

    #[test]
    fn empty_input_moves_zero_bytes() {
        let mut src = Cursor::new(Vec::new());
        let mut dst = Vec::new();
        let moved = pump(&mut src, &mut dst).unwrap();
        assert_eq!(moved, 0);
        assert!(dst.is_empty());
    }

    #[test]
    fn copies_input_verbatim() {
        let data = b"abcdef".to_vec();
        let mut src = Cursor::new(data.clone());
        let mut dst = Vec::new();
        let moved = pump(&mut src, &mut dst).unwrap();
        assert_eq!(moved, 6);
        assert_eq!(dst, data);
    }

    #[test]
    fn copies_multi_block_input() {
        // Three full blocks plus a partial tail.
        let data: Vec<u8> = (0u8..=255).cycle().take(3 * BLOCK_SIZE + 123).collect();
        let mut src = Cursor::new(data.clone());
        let mut dst = Vec::new();
        let moved = pump(&mut src, &mut dst).unwrap();
        assert_eq!(moved, data.len() as u64);
        assert_eq!(dst, data);
    }

    #[test]
    fn short_write_stops_before_further_bytes() {
        let data: Vec<u8> = vec![7u8; 2 * BLOCK_SIZE];
        let mut src = Cursor::new(data);
        let mut dst = ShortWriter {
            accepted: Vec::new(),
            limit: 100,
            calls: 0,
        };
        let err = pump(&mut src, &mut dst).unwrap_err();
        match err {
            PumpError::ShortWrite { written, expected } => {
                assert_eq!(written, 100);
                assert_eq!(expected, BLOCK_SIZE);
            }
            other => panic!("expected ShortWrite, got {:?}", other),
        }
        // Exactly one write attempt; the second block was never processed.
        assert_eq!(dst.calls, 1);
        assert_eq!(dst.accepted.len(), 100);
    }

    #[test]
    fn write_failure_surfaces_as_write_error() {
        let mut src = Cursor::new(vec![1u8; 10]);
        let mut dst = FailingWriter(libc::ENOSPC);
        let err = pump(&mut src, &mut dst).unwrap_err();
        match err {
            PumpError::Write(e) => assert_eq!(e.raw_os_error(), Some(libc::ENOSPC)),
            other => panic!("expected Write, got {:?}", other),
        }
    }

    #[test]
    fn read_failure_surfaces_as_read_error() {
        let mut src = FailingReader {
            prefix: vec![9u8; BLOCK_SIZE],
            given: 0,
        };
        let mut dst = Vec::new();
        let err = pump(&mut src, &mut dst).unwrap_err();
        match err {
            PumpError::Read(e) => assert_eq!(e.raw_os_error(), Some(libc::EIO)),
            other => panic!("expected Read, got {:?}", other),
        }
        // The prefix before the failure was still delivered.
        assert_eq!(dst.len(), BLOCK_SIZE);
    }

    #[test]
    fn pump_error_maps_to_filter_error_with_labels() {
        let err = PumpError::Read(io::Error::from_raw_os_error(libc::EIO))
            .into_filter("gzip", "member.tar");
        let msg = err.to_string();
        assert!(msg.contains("member.tar"), "{}", msg);
        assert!(msg.contains("gzip read error"), "{}", msg);
    }

    // ── close_checked ────────────────────────────────────────────────────────

    #[test]
    fn close_checked_succeeds_on_open_file() {
        let file = tempfile::tempfile().unwrap();
        assert!(close_checked(file).is_ok());
    }

    #[test]
    fn close_checked_reports_a_failed_close() {
        use std::os::fd::FromRawFd;
        // A descriptor number far above the default open-files limit cannot
        // be open, so closing it must surface EBADF, not silent success.
        let bogus = unsafe { File::from_raw_fd(99_999) };
        let err = close_checked(bogus).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EBADF));
    }
}
