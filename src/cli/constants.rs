// cli/constants.rs — program identity and display infrastructure.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ───────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "pipepress";
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = silent; 1 = errors only; 2 = normal; 3 = progress; 4 = verbose.
// A crate-level atomic so the macros below can be used from any module.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
