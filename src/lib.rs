// pipepress — streaming fd-to-fd compression/decompression filter.
//
// The filter is the body of a dedicated child process: given two stream
// handles and a codec selector, it transforms input into output and ends
// the process. Gzip and bzip2 run in-process through their library
// bindings; lzma delegates to the external `lzma` program by replacing the
// process image. The dispatch cores (`run_compress`/`run_decompress`) are
// pure and unit-testable; only the `*_filter` wrappers terminate.

pub mod cli;
pub mod codec;
pub mod command;
pub mod error;
pub mod exec;
pub mod filter;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use codec::Codec;
pub use command::ExternalCommand;
pub use error::{Cause, FilterError, EXIT_FATAL, EXIT_UNSUPPORTED};
pub use filter::{
    compress_filter, decompress_filter, normalize_compression, run_compress, run_decompress,
    Outcome, DEFAULT_LEVEL,
};
