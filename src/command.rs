//! External filter invocations.
//!
//! [`ExternalCommand`] is an ordered argv builder for codecs satisfied by an
//! external program rather than an in-process library. It carries the program
//! name, the caller's description label (used only in diagnostics), and the
//! flag list, and converts the whole invocation to the C string vector that
//! `execvp` consumes. Built fresh per filter call; never cached.

use std::ffi::{CString, NulError};

/// A pending invocation of an external filter program.
///
/// The argument list is ordered: argv\[0\] is the program name, followed by
/// the flags in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    desc: String,
    args: Vec<String>,
}

impl ExternalCommand {
    /// Start an invocation of `program`, annotated with the description
    /// label `desc` for diagnostics.
    pub fn new(program: impl Into<String>, desc: impl Into<String>) -> Self {
        ExternalCommand {
            program: program.into(),
            desc: desc.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument. Returns `self` so flags chain in order.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The program to execute (also argv\[0\]).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The description label this invocation is annotated with.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// The arguments following argv\[0\], in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The full argv (program first) as C strings for `execvp`.
    ///
    /// Fails only if an argument contains an interior NUL byte.
    pub fn to_argv(&self) -> Result<Vec<CString>, NulError> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(CString::new(self.program.as_str())?);
        for arg in &self.args {
            argv.push(CString::new(arg.as_str())?);
        }
        Ok(argv)
    }
}
