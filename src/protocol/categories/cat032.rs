//! Category 032 — fused system track messages with sensor-quality
//! reporting, the third member of the Cat 030 family.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, SystemTrackRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::make_u16;

const CAT: u8 = 32;

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

fn i210(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_system_track_mut().track_quality = Some(buf[0]);
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I032/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I161: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I032/161", shape: Shape::Fixed { len: 2, extract: i161 } };
static I210: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I032/210", shape: Shape::Fixed { len: 1, extract: i210 } };

static UAP: Uap = Uap::empty(3, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I161)
    .with_slot(3, &I210);

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
    fn decodes_track_quality() {
        let buf = [0b0010_0000u8, 42];
        let (record, _) = decode_record(&buf, buf.len()).unwrap();
        let r = match record {
            DomainRecord::SystemTrack(r) => r,
            _ => unreachable!(),
        };
        assert_eq!(r.track_quality, Some(42));
    }
}
