//! Category 002 — monoradar service messages (lighter item
//! set): north marker, sector crossing and antenna rotation period, no
//! target data.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, RadarServiceRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::make_u16;

const CAT: u8 = 2;

fn i000(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_service_mut().message_type = Some(buf[0]);
    Ok(())
}

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_service_mut().data_source_sic = Some(buf[0]);
    Ok(())
}

fn i020(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    // Sector number, in 1/128 of a revolution on the wire.
    record
        .as_radar_service_mut()
        .warning_error_conditions
        .push(buf[0]);
    Ok(())
}

fn i030(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_service_mut().antenna_rotation_period_s =
        Some(make_u16(buf[0], buf[1]) as f32 / 128.0);
    Ok(())
}

static I000: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I002/000", shape: Shape::Fixed { len: 1, extract: i000 } };
static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I002/010", shape: Shape::Fixed { len: 1, extract: i010 } };
static I020: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I002/020", shape: Shape::Fixed { len: 1, extract: i020 } };
static I030: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I002/030", shape: Shape::Fixed { len: 2, extract: i030 } };

static UAP: Uap = Uap::empty(4, 1)
    .with_slot(1, &I000)
    .with_slot(2, &I010)
    .with_slot(3, &I020)
    .with_slot(4, &I030);

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
mod tests {
    use super::*;

    #[test]
    fn decodes_message_type_and_rotation_period() {
        let buf = [0b1001_0000u8, 1, 0, 128];
        let (record, _) = decode_record(&buf, buf.len()).unwrap();
        let r = match record {
            DomainRecord::RadarService(r) => r,
            _ => unreachable!(),
        };
        assert_eq!(r.message_type, Some(1));
        assert_eq!(r.antenna_rotation_period_s, Some(1.0));
    }
}
