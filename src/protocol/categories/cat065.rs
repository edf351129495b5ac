//! Category 065 — SDPS service status messages, full fidelity.
//! Administrative records (service start/end, configuration changes)
//! rather than target reports; reuses `RadarServiceRecord`.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, RadarServiceRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::make_u32;

const CAT: u8 = 65;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_radar_service_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i000(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_service_mut().message_type = Some(buf[0]);
    Ok(())
}

fn i015(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    // Service identification, carried in a 1-octet item alongside message
    // type in some profiles; modelled here as its own FRN for clarity.
    record.as_radar_service_mut().warning_error_conditions.push(buf[0]);
    Ok(())
}

fn i030(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_service_mut().time_of_day = Some(make_u32(0, buf[0], buf[1], buf[2]));
    Ok(())
}

fn i040(buf: &[u8], _pos: &mut usize, record: &mut DomainRecord) -> Result<(), DecodeError> {
    let start = *_pos;
    record.as_radar_service_mut().antenna_rotation_period_s =
        Some(crate::infra::codec::bits::make_u16(buf[start], buf[start + 1]) as f32 / 128.0);
    *_pos = start + 2;
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I065/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I000: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I065/000", shape: Shape::Fixed { len: 1, extract: i000 } };
static I015: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I065/015", shape: Shape::Fixed { len: 1, extract: i015 } };
static I030: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I065/030", shape: Shape::Fixed { len: 3, extract: i030 } };
static I040: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I065/040", shape: Shape::Immediate { read: i040 } };

static UAP: Uap = Uap::empty(5, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I000)
    .with_slot(3, &I015)
    .with_slot(4, &I030)
    .with_slot(5, &I040);

pub fn uap() -> &'static Uap {
    &UAP
}

pub fn decode_record(buf: &[u8], record_len: usize) -> Result<(DomainRecord, usize), DecodeError> {
    crate::infra::codec::engine::decode_items_into(
        CAT,
        uap(),
        buf,
        record_len,
        DomainRecord::RadarService(RadarServiceRecord::default()),
    )
}

#[cfg(test)]
#[path = "cat065_tests.rs"]
mod tests;
