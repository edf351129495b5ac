//! Category 031 — fused system track messages, high-precision variant of
//! the Cat 030 family (lighter item set). Carries the same
//! position/track-number pair at finer resolution.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, Position2d, SystemTrackRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::{make_i32, make_u16};

const CAT: u8 = 31;

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

fn i042(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let x = make_i32(buf[0], buf[1], buf[2], buf[3]);
    let y = make_i32(buf[4], buf[5], buf[6], buf[7]);
    record.as_system_track_mut().cartesian_position = Some(Position2d { x, y });
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I031/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I161: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I031/161", shape: Shape::Fixed { len: 2, extract: i161 } };
static I042: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I031/042", shape: Shape::Fixed { len: 8, extract: i042 } };

static UAP: Uap = Uap::empty(3, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I161)
    .with_slot(3, &I042);

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_high_precision_position() {
        let buf = [
            0b0010_0000u8,
            0, 0, 0, 100,
            0, 0, 0, 200,
        ];
        let (record, _) = decode_record(&buf, buf.len()).unwrap();
        let r = match record {
            DomainRecord::SystemTrack(r) => r,
            _ => unreachable!(),
        };
        assert_eq!(r.cartesian_position.unwrap().x, 100);
        assert_eq!(r.cartesian_position.unwrap().y, 200);
    }
}
