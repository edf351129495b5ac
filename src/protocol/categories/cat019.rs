//! Category 019 — multilateration system status messages.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, ServiceStepRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::make_u32;

const CAT: u8 = 19;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_service_step_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i140(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_service_step_mut().time_of_day = Some(make_u32(0, buf[0], buf[1], buf[2]));
    Ok(())
}

fn i550(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_service_step_mut().sdps_configuration_status = Some(buf[0]);
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I019/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I140: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I019/140", shape: Shape::Fixed { len: 3, extract: i140 } };
static I550: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I019/550", shape: Shape::Fixed { len: 1, extract: i550 } };

static UAP: Uap = Uap::empty(3, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I140)
    .with_slot(3, &I550);

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
    fn decodes_sdps_configuration_status() {
        let buf = [0b0010_0000u8, 7];
        let (record, _) = decode_record(&buf, buf.len()).unwrap();
        let r = match record {
            DomainRecord::ServiceStep(r) => r,
            _ => unreachable!(),
        };
        assert_eq!(r.sdps_configuration_status, Some(7));
    }
}
