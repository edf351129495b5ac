//! Category 011 — A-SMGCS system tracks (full fidelity).
//! Worked example of per-category reference-document edition selection:
//! I011/042 (MLAT Position in Cartesian Co-ordinates) is 4 octets — a pair
//! of 16-bit coordinates — under every edition except "0.14Sensis" (the
//! Inn Valley modification), which widens it to 8 octets of 32-bit
//! coordinates. Two `Uap` tables are compiled in, differing only in which
//! I011/042 descriptor occupies the slot, and `uap_for_version` picks
//! between them once before decoding starts.
use crate::core::{ItemDescriptor, Shape, Tres, Uap};
use crate::domain::{DomainRecord, FlightLevel, Mode3A, Position2d, SystemTrackRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::{make_i16, make_i32, make_u16, make_u32, sign_extend};
use crate::version::ReferenceVersion;

const CAT: u8 = 11;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_system_track_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i140(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_system_track_mut().time_of_track_information =
        Some(make_u32(0, buf[0], buf[1], buf[2]));
    Ok(())
}

fn i161(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_system_track_mut().track_number = Some(make_u16(buf[0], buf[1]) & 0x0FFF);
    Ok(())
}

fn i202(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let x = make_i16(buf[0], buf[1]) as i32;
    let y = make_i16(buf[2], buf[3]) as i32;
    record.as_system_track_mut().cartesian_position = Some(Position2d { x, y });
    Ok(())
}

fn i380_velocity(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let vx = make_i16(buf[0], buf[1]) as f32 / 256.0;
    let vy = make_i16(buf[2], buf[3]) as f32 / 256.0;
    record.as_system_track_mut().cartesian_velocity = Some((vx, vy));
    Ok(())
}

fn i090(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let raw = make_u16(buf[0], buf[1]);
    let quarter_fl = sign_extend((raw & 0x3FFF) as u32, 14) as i16;
    record.as_system_track_mut().flight_level = Some(FlightLevel {
        quarter_fl,
        validated: Tres::from_bit(raw & 0x8000 == 0),
        garbled: Tres::from_bit(raw & 0x4000 != 0),
    });
    Ok(())
}

fn i070(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let raw = make_u16(buf[0], buf[1]);
    let code = crate::infra::codec::bits::decode_octal_code(raw & 0x0FFF);
    record.as_system_track_mut().mode_3a = Some(Mode3A {
        code,
        validated: Tres::from_bit(raw & 0x8000 == 0),
        garbled: Tres::from_bit(raw & 0x4000 != 0),
        changed: Tres::from_bit(raw & 0x2000 != 0),
    });
    Ok(())
}

fn i170(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_system_track_mut().track_status = Some(make_u16(buf[0], buf[1]) as u32);
    Ok(())
}

fn i500_quality(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_system_track_mut().track_quality = Some(buf[0]);
    Ok(())
}

fn i290_sensors(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record
        .as_system_track_mut()
        .contributing_sensors
        .push((buf[0], buf[1]));
    Ok(())
}

/// I011/042, editions other than "0.14Sensis": two 16-bit coordinates.
fn i042_narrow(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let x = make_i16(buf[0], buf[1]) as i32;
    let y = make_i16(buf[2], buf[3]) as i32;
    record.as_system_track_mut().computed_position = Some(Position2d { x, y });
    Ok(())
}

/// I011/042, edition "0.14Sensis": two 32-bit coordinates.
fn i042_sensis(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let x = make_i32(buf[0], buf[1], buf[2], buf[3]);
    let y = make_i32(buf[4], buf[5], buf[6], buf[7]);
    record.as_system_track_mut().computed_position = Some(Position2d { x, y });
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I140: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/140", shape: Shape::Fixed { len: 3, extract: i140 } };
static I161: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/161", shape: Shape::Fixed { len: 2, extract: i161 } };
static I202: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/202", shape: Shape::Fixed { len: 4, extract: i202 } };
static I380: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/380", shape: Shape::Fixed { len: 4, extract: i380_velocity } };
static I090: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/090", shape: Shape::Fixed { len: 2, extract: i090 } };
static I070: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/070", shape: Shape::Fixed { len: 2, extract: i070 } };
static I170: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/170", shape: Shape::Fixed { len: 2, extract: i170 } };
static I500: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/500", shape: Shape::Fixed { len: 1, extract: i500_quality } };
static I290: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: "I011/290",
    shape: Shape::Repetitive {
        sub_len: 2,
        extract: i290_sensors,
        rep0_allowed: true,
    },
};
static I042_NARROW: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/042", shape: Shape::Fixed { len: 4, extract: i042_narrow } };
static I042_SENSIS: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I011/042", shape: Shape::Fixed { len: 8, extract: i042_sensis } };

/// Editions "0.14" and "0.17": I011/042 is the 4-octet pair of 16-bit
/// coordinates.
static UAP_NARROW: Uap = Uap::empty(11, 2)
    .with_slot(1, &I010)
    .with_slot(2, &I140)
    .with_slot(3, &I161)
    .with_slot(4, &I202)
    .with_slot(5, &I380)
    .with_slot(6, &I090)
    .with_slot(7, &I070)
    .with_slot(8, &I500)
    .with_slot(9, &I290)
    .with_slot(10, &I170)
    .with_slot(11, &I042_NARROW);

/// Edition "0.14Sensis" (worked example): I011/042 widens to the 8-octet
/// pair of 32-bit coordinates; every other slot is unchanged.
static UAP_SENSIS: Uap = Uap::empty(11, 2)
    .with_slot(1, &I010)
    .with_slot(2, &I140)
    .with_slot(3, &I161)
    .with_slot(4, &I202)
    .with_slot(5, &I380)
    .with_slot(6, &I090)
    .with_slot(7, &I070)
    .with_slot(8, &I500)
    .with_slot(9, &I290)
    .with_slot(10, &I170)
    .with_slot(11, &I042_SENSIS);

pub const DEFAULT_VERSION: &str = "0.17";

pub fn uap_for_version(version: ReferenceVersion) -> &'static Uap {
    if version.is_sensis() {
        &UAP_SENSIS
    } else {
        &UAP_NARROW
    }
}

pub fn decode_record(
    buf: &[u8],
    record_len: usize,
    version: ReferenceVersion,
) -> Result<(DomainRecord, usize), DecodeError> {
    crate::infra::codec::engine::decode_items_into(
        CAT,
        uap_for_version(version),
        buf,
        record_len,
        DomainRecord::SystemTrack(SystemTrackRecord::default()),
    )
}

#[cfg(test)]
#[path = "cat011_tests.rs"]
mod tests;
