//! Category 062 — SDPS system track messages (lighter item
//! set): the tracker's own fused output, distinct from the raw sensor
//! plots Cat 048/020/021 carry.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, Position2d, SystemTrackRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::{make_i16, make_u16};

const CAT: u8 = 62;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_system_track_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i040(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_system_track_mut().track_number = Some(make_u16(buf[0], buf[1]) & 0x0FFF);
    Ok(())
}

fn i100(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let x = make_i16(buf[0], buf[1]) as i32;
    let y = make_i16(buf[2], buf[3]) as i32;
    record.as_system_track_mut().cartesian_position = Some(Position2d { x, y });
    Ok(())
}

fn i185(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let vx = make_i16(buf[0], buf[1]) as f32 / 4.0;
    let vy = make_i16(buf[2], buf[3]) as f32 / 4.0;
    record.as_system_track_mut().cartesian_velocity = Some((vx, vy));
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I062/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I040: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I062/040", shape: Shape::Fixed { len: 2, extract: i040 } };
static I100: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I062/100", shape: Shape::Fixed { len: 4, extract: i100 } };
static I185: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I062/185", shape: Shape::Fixed { len: 4, extract: i185 } };

static UAP: Uap = Uap::empty(4, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I040)
    .with_slot(3, &I100)
    .with_slot(4, &I185);

pub fn uap() -> &'static Uap {
    &UAP
}

pub fn decode_record(buf: &[u8], record_len: usize) -> Result<(DomainRecord, usize), DecodeError> {
    crate::infra::codec::engine::decode_items_into(
        CAT,
        uap(),
        buf,
        record_len,
        DomainRecord::SystemTrack(SystemTrackRecord::default()),
    )
}
