//! Codec selection.
//!
//! This module provides:
//! - [`Codec`] — an enum identifying the transformation family applied by the
//!   filter (pass-through, gzip, bzip2, lzma).
//! - [`Codec::from_name`] / [`Codec::from_extension`] — selector resolution
//!   from user-visible names and file extensions.
//!
//! Exactly one selector is active per filter invocation. Unrecognized names
//! resolve to [`Codec::Unknown`], which every dispatch path refuses as a hard
//! failure rather than a silent pass-through.

/// Which compression family (or none) the filter applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Pass-through: bytes are copied verbatim.
    None,
    /// Gzip, via the in-process zlib bindings.
    Gzip,
    /// Bzip2, via the in-process libbzip2 bindings.
    Bzip2,
    /// Lzma, delegated to the external `lzma` program.
    Lzma,
    /// Unrecognized selector; refused at dispatch.
    Unknown,
}

impl Codec {
    /// Resolve a codec from its user-visible name.
    ///
    /// Returns [`Codec::Unknown`] for names outside the supported set; the
    /// dispatcher turns that into a status-1 termination.
    pub fn from_name(name: &str) -> Codec {
        match name {
            "none" => Codec::None,
            "gzip" => Codec::Gzip,
            "bzip2" => Codec::Bzip2,
            "lzma" => Codec::Lzma,
            _ => Codec::Unknown,
        }
    }

    /// Resolve a codec from a filename extension (with or without the
    /// leading dot). The empty extension maps to pass-through.
    pub fn from_extension(ext: &str) -> Codec {
        match ext.strip_prefix('.').unwrap_or(ext) {
            "" => Codec::None,
            "gz" => Codec::Gzip,
            "bz2" => Codec::Bzip2,
            "lzma" => Codec::Lzma,
            _ => Codec::Unknown,
        }
    }

    /// The user-visible name of this codec.
    pub fn name(&self) -> &'static str {
        match self {
            Codec::None => "none",
            Codec::Gzip => "gzip",
            Codec::Bzip2 => "bzip2",
            Codec::Lzma => "lzma",
            Codec::Unknown => "unknown",
        }
    }

    /// The conventional filename extension produced by this codec.
    pub fn extension(&self) -> &'static str {
        match self {
            Codec::None => "",
            Codec::Gzip => ".gz",
            Codec::Bzip2 => ".bz2",
            Codec::Lzma => ".lzma",
            Codec::Unknown => "",
        }
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── from_name ────────────────────────────────────────────────────────────

    #[test]
    fn from_name_resolves_supported_set() {
        assert_eq!(Codec::from_name("none"), Codec::None);
        assert_eq!(Codec::from_name("gzip"), Codec::Gzip);
        assert_eq!(Codec::from_name("bzip2"), Codec::Bzip2);
        assert_eq!(Codec::from_name("lzma"), Codec::Lzma);
    }

    #[test]
    fn from_name_unrecognized_is_unknown() {
        assert_eq!(Codec::from_name("zstd"), Codec::Unknown);
        assert_eq!(Codec::from_name(""), Codec::Unknown);
        assert_eq!(Codec::from_name("GZIP"), Codec::Unknown);
    }

    // ── from_extension ───────────────────────────────────────────────────────

    #[test]
    fn from_extension_with_and_without_dot() {
        assert_eq!(Codec::from_extension(".gz"), Codec::Gzip);
        assert_eq!(Codec::from_extension("gz"), Codec::Gzip);
        assert_eq!(Codec::from_extension(".bz2"), Codec::Bzip2);
        assert_eq!(Codec::from_extension(".lzma"), Codec::Lzma);
        assert_eq!(Codec::from_extension(""), Codec::None);
    }

    #[test]
    fn from_extension_unrecognized_is_unknown() {
        assert_eq!(Codec::from_extension(".zip"), Codec::Unknown);
    }

    // ── name / extension round trip ──────────────────────────────────────────

    #[test]
    fn name_round_trips_through_from_name() {
        for codec in [Codec::None, Codec::Gzip, Codec::Bzip2, Codec::Lzma] {
            assert_eq!(Codec::from_name(codec.name()), codec);
        }
    }

    #[test]
    fn extension_round_trips_for_compressed_codecs() {
        for codec in [Codec::Gzip, Codec::Bzip2, Codec::Lzma] {
            assert_eq!(Codec::from_extension(codec.extension()), codec);
        }
    }
}
