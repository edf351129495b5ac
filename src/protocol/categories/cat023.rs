//! Category 023 — CNS/ATM ground station service messages.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, ServiceStepRecord};
use crate::error::DecodeError;

const CAT: u8 = 23;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_service_step_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i000(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_service_step_mut().message_type = Some(buf[0]);
    Ok(())
}

fn i100(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_service_step_mut().service_identification = Some(buf[0]);
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I023/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I000: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I023/000", shape: Shape::Fixed { len: 1, extract: i000 } };
static I100: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I023/100", shape: Shape::Fixed { len: 1, extract: i100 } };

static UAP: Uap = Uap::empty(3, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I000)
    .with_slot(3, &I100);

pub fn uap() -> &'static Uap {
    &UAP
}

pub fn decode_record(buf: &[u8], record_len: usize) -> Result<(DomainRecord, usize), DecodeError> {
    crate::infra::codec::engine::decode_items_into(
        CAT,
        uap(),
        buf,
        record_len,
        DomainRecord::ServiceStep(ServiceStepRecord::default()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_service_identification() {
        let buf = [0b0010_0000u8, 4];
        let (record, _) = decode_record(&buf, buf.len()).unwrap();
        let r = match record {
            DomainRecord::ServiceStep(r) => r,
            _ => unreachable!(),
        };
        assert_eq!(r.service_identification, Some(4));
    }
}
