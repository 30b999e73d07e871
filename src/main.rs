//! Binary entry point for the `pipepress` filter.
//!
//! The binary is the standalone rendition of the dedicated filter process:
//! it consumes standard input, produces standard output, and terminates from
//! inside the filter call — control never returns here once dispatch starts.

use std::io::{self, IsTerminal};
use std::os::fd::{AsFd, OwnedFd};
use std::process;

use anyhow::Context;
use clap::Parser;

use pipepress::cli::args::{display_level_for, Args};
use pipepress::cli::constants::{set_display_level, PROGRAM_NAME};
use pipepress::displaylevel;
use pipepress::error::EXIT_FATAL;
use pipepress::{compress_filter, decompress_filter, Codec};

/// Duplicate the stdio descriptors into owned handles for the filter, which
/// becomes their sole owner and closer.
fn stdio_handles() -> anyhow::Result<(OwnedFd, OwnedFd)> {
    let fd_in = io::stdin()
        .as_fd()
        .try_clone_to_owned()
        .context("cannot duplicate standard input")?;
    let fd_out = io::stdout()
        .as_fd()
        .try_clone_to_owned()
        .context("cannot duplicate standard output")?;
    Ok((fd_in, fd_out))
}

fn main() {
    let args = Args::parse();
    set_display_level(display_level_for(args.quiet, args.verbose));

    let codec = Codec::from_name(&args.codec);
    let desc = args
        .desc
        .unwrap_or_else(|| format!("{} {}", PROGRAM_NAME, codec.name()));

    // Refuse to dump compressed bytes onto an interactive terminal.
    let compressing = !args.decompress;
    if compressing
        && matches!(codec, Codec::Gzip | Codec::Bzip2 | Codec::Lzma)
        && io::stdout().is_terminal()
    {
        displaylevel!(
            1,
            "{}: refusing to write compressed data to a terminal\n",
            PROGRAM_NAME
        );
        process::exit(EXIT_FATAL);
    }

    let (fd_in, fd_out) = match stdio_handles() {
        Ok(pair) => pair,
        Err(err) => {
            displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, err);
            process::exit(EXIT_FATAL);
        }
    };

    if args.decompress {
        decompress_filter(codec, fd_in, fd_out, &desc)
    } else {
        compress_filter(codec, fd_in, fd_out, args.level, &desc)
    }
}
