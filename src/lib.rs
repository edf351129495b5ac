//! `asterix-decode`: a decoder for EUROCONTROL ASTERIX surveillance data
//! streams. The crate exposes the shared data contract between category
//! tables and the generic engine (`core`), the decoded output types
//! (`domain`), the generic FSPEC/item/framing/wrapper infrastructure
//! (`infra`), the per-category UAP tables (`protocol`), and the run-time
//! configuration and listing surface (`config`, `version`, `listing`) that
//! ties them together behind [`decode_stream`].
/// Shared data contract between the per-category tables and the generic
/// FSPEC/dispatch engine.
pub mod core;
/// Decoder configuration: per-category reference-document pins, listing
/// verbosity, error-handling policy.
pub mod config;
/// Decoded output records, one variant per record kind.
pub mod domain;
/// Error taxonomy for the decoding engine.
pub mod error;
/// Bit/byte primitives, the FSPEC/item engine, DataBlock framing, and the
/// recording-format wrappers records arrive under.
pub mod infra;
/// Human-readable record listing.
pub mod listing;
/// Time-of-day fill-up: reconstructing a 24-bit time-of-day from a 16-bit
/// partial using the last fully-qualified value seen.
pub mod time_fillup;
/// Per-category UAP tables and item extractors.
pub mod protocol;
/// Per-category reference-document edition selection.
pub mod version;

use crate::config::DecoderConfig;
use crate::domain::DomainRecord;
use crate::error::{DecodeError, Outcome};
use crate::infra::wrappers::FrameSource;

/// Decode every record carried in `input`, stripping `source`'s recording
/// envelope and walking every DataBlock it yields. `on_record` is called
/// once per successfully-decoded record with its category number; its
/// return value is the sink's verdict and is subject to
/// `cfg.stop_on_error`.
pub fn decode_stream(
    input: &[u8],
    source: &mut impl FrameSource,
    cfg: &DecoderConfig,
    mut on_record: impl FnMut(u8, DomainRecord) -> Outcome,
) -> Result<(), DecodeError> {
    let mut remaining = input;
    while !remaining.is_empty() {
        let Some((frame, rest)) = source.next_frame(remaining)? else {
            break;
        };
        remaining = rest;
        crate::infra::framing::for_each_data_block(frame, |block| {
            crate::protocol::categories::decode_data_block(
                block.category,
                block.payload,
                cfg,
                |record| on_record(block.category, record),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::wrappers::NettoWrapper;

    #[test]
    fn decodes_a_single_data_block_netto() {
        // Cat 063, LEN=6 (3-octet header + FSPEC + 2-octet SAC/SIC item).
        let input = [63u8, 0, 6, 0b1000_0000, 7, 9];
        let cfg = DecoderConfig::new();
        let mut source = NettoWrapper;
        let mut seen = Vec::new();
        decode_stream(&input, &mut source, &cfg, |cat, record| {
            seen.push((cat, record));
            Outcome::Ok
        })
        .unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, 63);
    }

    #[test]
    fn unknown_category_propagates_as_an_error() {
        let input = [200u8, 0, 4, 0x80];
        let cfg = DecoderConfig::new();
        let mut source = NettoWrapper;
        let result = decode_stream(&input, &mut source, &cfg, |_, _| Outcome::Ok);
        assert!(matches!(result, Err(DecodeError::UnknownCategory { cat: 200 })));
    }
}
