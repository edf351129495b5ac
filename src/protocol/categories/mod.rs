//! Per-category UAP tables and item extractors. Each module
//! contributes a `Uap` and a `decode_record` entry point; this module ties
//! category numbers to them and is the only place that needs to change
//! when a new category is added.
pub mod cat001;
pub mod cat002;
pub mod cat008;
pub mod cat011;
pub mod cat017;
pub mod cat019;
pub mod cat020;
pub mod cat021;
pub mod cat023;
pub mod cat030;
pub mod cat031;
pub mod cat032;
pub mod cat034;
pub mod cat048;
pub mod cat062;
pub mod cat063;
pub mod cat065;
pub mod cat252;

use crate::config::DecoderConfig;
use crate::domain::DomainRecord;
use crate::error::{DecodeError, Outcome};

fn decode_one(
    cat: u8,
    buf: &[u8],
    cfg: &DecoderConfig,
) -> Result<(DomainRecord, usize), DecodeError> {
    match cat {
        1 => cat001::decode_record(buf, buf.len()),
        2 => cat002::decode_record(buf, buf.len()),
        8 => cat008::decode_record(buf, buf.len()),
        11 => {
            let version = crate::version::resolve(11, cfg.reference_version(11), cat011::DEFAULT_VERSION)?;
            cat011::decode_record(buf, buf.len(), version)
        }
        17 => cat017::decode_record(buf, buf.len()),
        19 => cat019::decode_record(buf, buf.len()),
        20 => cat020::decode_record(buf, buf.len()),
        21 => cat021::decode_record(buf, buf.len()),
        23 => cat023::decode_record(buf, buf.len()),
        30 => cat030::decode_record(buf, buf.len()),
        31 => cat031::decode_record(buf, buf.len()),
        32 => cat032::decode_record(buf, buf.len()),
        34 => cat034::decode_record(buf, buf.len()),
        48 => cat048::decode_record(buf, buf.len()),
        62 => cat062::decode_record(buf, buf.len()),
        63 => cat063::decode_record(buf, buf.len()),
        65 => cat065::decode_record(buf, buf.len()),
        252 => cat252::decode_record(buf, buf.len()),
        _ => Err(DecodeError::UnknownCategory { cat }),
    }
}

/// Decode every record in one data block's payload, calling `on_record` for
/// each one successfully decoded. An all-clear FSPEC is skipped rather than
/// handed to `on_record`, via `core::is_empty_fspec`.
///
/// A malformed record (bad FSPEC, item overrun, ...) always aborts the rest
/// of this block: once an item's declared length cannot be trusted, nothing
/// downstream of it can be resynchronized to the next record boundary.
/// `cfg.stop_on_error` instead governs a sink refusal (`on_record` returning
/// `Outcome::Fail` for a record that *did* decode correctly) — those have a
/// known length, so skipping just that record and continuing is safe.
pub fn decode_data_block(
    cat: u8,
    payload: &[u8],
    cfg: &DecoderConfig,
    mut on_record: impl FnMut(DomainRecord) -> Outcome,
) -> Result<(), DecodeError> {
    crate::infra::framing::for_each_record(payload, |buf| {
        if crate::core::is_empty_fspec(buf) {
            return Ok(1);
        }
        let (record, consumed) = decode_one(cat, buf, cfg)?;
        if let Outcome::Fail(e) = on_record(record) {
            if cfg.stop_on_error {
                return Err(e);
            }
        }
        Ok(consumed)
    })
}

/// The reference-document edition a category would use absent an explicit
/// pin in `DecoderConfig`. Only Cat 011 currently has more
/// than one compiled edition; every other category reports `None` since it
/// has just the one implemented edition.
pub fn default_reference_version(cat: u8) -> Option<&'static str> {
    match cat {
        11 => Some(cat011::DEFAULT_VERSION),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_is_reported() {
        let cfg = DecoderConfig::new();
        let buf = [0b1000_0000u8, 0];
        let err = decode_one(254, &buf, &cfg).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownCategory { cat: 254 }));
    }

    #[test]
    fn empty_fspec_record_is_skipped_without_reaching_the_sink() {
        let cfg = DecoderConfig::new();
        let payload = [0x00u8];
        let mut seen = 0;
        decode_data_block(63, &payload, &cfg, |_| {
            seen += 1;
            Outcome::Ok
        })
        .unwrap();
        assert_eq!(seen, 0);
    }

    #[test]
    fn one_record_reaches_the_sink() {
        let cfg = DecoderConfig::new();
        // Cat 063, FRN1 set (SAC/SIC), no FX.
        let payload = [0b1000_0000u8, 7, 9];
        let mut collected = Vec::new();
        decode_data_block(63, &payload, &cfg, |r| {
            collected.push(r);
            Outcome::Ok
        })
        .unwrap();
        assert_eq!(collected.len(), 1);
        match &collected[0] {
            DomainRecord::ServiceStep(r) => {
                assert_eq!(r.data_source_sac, Some(7));
                assert_eq!(r.data_source_sic, Some(9));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn cat011_honors_a_configured_reference_version() {
        let mut cfg = DecoderConfig::new();
        cfg.set_reference_version(11, "0.14Sensis");
        // FRN1 (data source) and FRN11 (I011/042, 8 octets under Sensis).
        let buf = [0x81u8, 0x10, 1, 2, 0, 0, 0, 1, 0, 0, 0, 2];
        let (record, _) = decode_one(11, &buf, &cfg).unwrap();
        match record {
            DomainRecord::SystemTrack(r) => {
                assert_eq!(
                    r.computed_position,
                    Some(crate::domain::Position2d { x: 1, y: 2 })
                )
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn malformed_record_aborts_the_block() {
        let cfg = DecoderConfig::new();
        // Cat 001, FRN3 (Mode 3/A, 2 octets) set but truncated.
        let payload = [0b0010_0000u8, 0xAA];
        let mut collected = Vec::new();
        let result = decode_data_block(1, &payload, &cfg, |r| {
            collected.push(r);
            Outcome::Ok
        });
        assert!(result.is_err());
        assert!(collected.is_empty());
    }

    #[test]
    fn sink_refusal_is_swallowed_unless_stop_on_error_is_set() {
        let cfg = DecoderConfig::new();
        let payload = [0b1000_0000u8, 7, 9];
        let mut attempts = 0;
        let result = decode_data_block(63, &payload, &cfg, |_| {
            attempts += 1;
            Outcome::Fail(DecodeError::SinkRefusal { cat: 63 })
        });
        assert!(result.is_ok());
        assert_eq!(attempts, 1);
    }
}
