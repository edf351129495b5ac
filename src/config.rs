//! Decoder configuration: per-category reference-document version pins,
//! listing verbosity, and error-handling policy. Plain data, built with
//! the `Default` + explicit-setter idiom rather than a builder macro.

/// Listing verbosity levels, matching `list_num.cpp`/`list_sno.cpp`'s
/// numeric scale (0 = silent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ListLevel {
    #[default]
    Silent,
    Summary,
    Full,
    Debug,
}

/// Per-run decoder configuration. One instance is shared read-only across
/// every category decoder in a run; nothing here is mutated once decoding
/// starts.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Reference-document edition selected per category,
    /// keyed by category number. Categories absent from this map use their
    /// compiled-in default edition.
    reference_versions: [Option<&'static str>; 256],
    pub list_level: ListLevel,
    /// Abort the whole run on the first `DecodeError` instead of skipping
    /// the offending record and continuing: FAIL propagates to the caller,
    /// and it is the caller's choice whether that ends the run.
    pub stop_on_error: bool,
    /// RFF recordings carry an optional 2-octet sequence number ahead of
    /// each frame's body.
    pub with_sequence_number: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            reference_versions: [None; 256],
            list_level: ListLevel::default(),
            stop_on_error: false,
            with_sequence_number: false,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reference_version(&mut self, category: u8, version: &'static str) -> &mut Self {
        self.reference_versions[category as usize] = Some(version);
        self
    }

    pub fn reference_version(&self, category: u8) -> Option<&'static str> {
        self.reference_versions[category as usize]
    }
}
