//! Command-line argument surface for the `pipepress` binary.
//!
//! The binary is one dedicated filter invocation: direction, codec, level,
//! and an optional description label for diagnostics. Codec names are parsed
//! as plain strings and resolved through [`crate::codec::Codec::from_name`]
//! so an unrecognized name reaches the dispatcher and terminates with the
//! selector-error status instead of being rejected by the parser.

use clap::Parser;

use crate::cli::constants::{PROGRAM_NAME, PROGRAM_VERSION};

/// Parsed command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = PROGRAM_NAME,
    version = PROGRAM_VERSION,
    about = "Streaming compression/decompression filter between stdin and stdout"
)]
pub struct Args {
    /// Decompress the input stream.
    #[arg(short = 'd', long, conflicts_with = "compress")]
    pub decompress: bool,

    /// Compress the input stream (the default direction).
    #[arg(short = 'z', long)]
    pub compress: bool,

    /// Codec to apply: none, gzip, bzip2, lzma.
    #[arg(
        short = 't',
        long = "type",
        value_name = "CODEC",
        default_value = "gzip"
    )]
    pub codec: String,

    /// Compression level 0-9; -1 selects the codec default.
    #[arg(
        short = 'l',
        long,
        value_name = "LEVEL",
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-1..=9)
    )]
    pub level: i32,

    /// Label embedded in diagnostics to identify the stream.
    #[arg(long, value_name = "LABEL")]
    pub desc: Option<String>,

    /// Increase verbosity (repeatable).
    #[arg(short = 'v', action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Print errors only.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Map the `-q`/`-v` flags onto a display level. Quiet keeps errors visible;
/// silencing fatal diagnostics would defeat the filter's whole contract.
pub fn display_level_for(quiet: bool, verbose: u8) -> u32 {
    if quiet {
        1
    } else {
        2 + verbose as u32
    }
}
