//! Category 030 — fused system track messages, ground-ground exchange
//! format (lighter item set).
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, Position2d, SystemTrackRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::{make_i16, make_u16};

const CAT: u8 = 30;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_system_track_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i161(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_system_track_mut().track_number = Some(make_u16(buf[0], buf[1]) & 0x0FFF);
    Ok(())
}

fn i040(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let x = make_i16(buf[0], buf[1]) as i32;
    let y = make_i16(buf[2], buf[3]) as i32;
    record.as_system_track_mut().cartesian_position = Some(Position2d { x, y });
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I030/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I161: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I030/161", shape: Shape::Fixed { len: 2, extract: i161 } };
static I040: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I030/040", shape: Shape::Fixed { len: 4, extract: i040 } };

static UAP: Uap = Uap::empty(3, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I161)
    .with_slot(3, &I040);

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
