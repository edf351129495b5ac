//! Error taxonomy for the decoding engine. Every variant maps onto one of
//! four error classes (length, structural, semantic, sink refusal);
//! `Outcome` is the `OK | SKIP | FAIL` result type each sink callback
//! returns.
use thiserror::Error;

#[derive(Error, Debug)]
/// Failures raised while reading bits out of a buffer.
pub enum BitError {
    #[error("attempted to read out of bounds: asked {asked}, available {available}")]
    OutOfBounds { asked: usize, available: usize },
    #[error("cannot read more than {max} bits, requested {asked}")]
    TooLongForType { max: u8, asked: u8 },
    #[error("non-aligned bit cursor at {cursor}")]
    NonAligned { cursor: usize },
}

#[derive(Error, Debug)]
/// Failures produced by the FSPEC walker, item dispatcher, or a category
/// extractor. Carries enough context (category, FRN/item, offset) for the
/// one-line diagnostic requires.
pub enum DecodeError {
    #[error("cat {cat:03}: data block length {len} is invalid (< 3)")]
    BlockTooShort { cat: u8, len: u16 },

    #[error("cat {cat:03}: item read at offset {offset} would exceed block payload ({payload_len} bytes)")]
    ItemOverrun {
        cat: u8,
        offset: usize,
        payload_len: usize,
    },

    #[error("cat {cat:03}: FSPEC at offset {offset} exceeds maximum length {max_len}")]
    FspecOverlong {
        cat: u8,
        offset: usize,
        max_len: usize,
    },

    #[error("cat {cat:03}: FSPEC bit set for FRN {frn} has no UAP slot")]
    UnknownFrn { cat: u8, frn: usize },

    #[error("cat {cat:03}, item {item_no}: FX chain did not terminate within the block")]
    FxChainUnterminated { cat: u8, item_no: &'static str },

    #[error("cat {cat:03}, item {item_no}: repetition factor REP=0 is not allowed")]
    ZeroRepetitionForbidden { cat: u8, item_no: &'static str },

    #[error("cat {cat:03}, item {item_no}: compound primary subfield chain indicates an unsupported subfield")]
    UnsupportedCompoundSubfield { cat: u8, item_no: &'static str },

    #[error("cat {cat:03}, item {item_no}: inner length of RE/compound field does not match its header length byte")]
    InnerLengthMismatch { cat: u8, item_no: &'static str },

    #[error("cat {cat:03}, item {item_no}: primary subfield octet has its FX bit set, but this item's primary is always single-octet")]
    CompoundPrimaryExtensionForbidden { cat: u8, item_no: &'static str },

    #[error("cat {cat:03}: unknown reference version '{text}'")]
    UnknownVersion { cat: u8, text: String },

    #[error("cat {cat:03}, item {item_no}: item reached with an incompatible reference version")]
    VersionMismatch { cat: u8, item_no: &'static str },

    #[error("cat {cat:03}: time fill-up unavailable (no prior full time-of-day)")]
    TimeFillupSkip { cat: u8 },

    #[error("cat {cat:03}: downstream sink refused the record")]
    SinkRefusal { cat: u8 },

    #[error("cat {cat:03}, item {item_no}: bit-level read failed: {source}")]
    Bits {
        cat: u8,
        item_no: &'static str,
        #[source]
        source: BitError,
    },

    #[error("unknown ASTERIX category {cat}")]
    UnknownCategory { cat: u8 },
}

/// A three-way decode result without reusing `Result`'s two-state shape:
/// `Skip` is a distinct, non-error outcome (an empty record, a sink that
/// chose to drop it), `Fail` carries the error.
#[derive(Debug)]
pub enum Outcome {
    Ok,
    Skip,
    Fail(DecodeError),
}

impl From<Result<(), DecodeError>> for Outcome {
    fn from(value: Result<(), DecodeError>) -> Self {
        match value {
            Ok(()) => Outcome::Ok,
            Err(e) => Outcome::Fail(e),
        }
    }
}
