//! Category 063 — sensor status messages (lighter item
//! set): a sensor joining/leaving an SDPS, its configuration and time
//! stamping bias.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, ServiceStepRecord};
use crate::error::DecodeError;

const CAT: u8 = 63;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_service_step_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i015(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_service_step_mut().service_identification = Some(buf[0]);
    Ok(())
}

fn i060(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_service_step_mut().sdps_configuration_status = Some(buf[0]);
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I063/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I015: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I063/015", shape: Shape::Fixed { len: 1, extract: i015 } };
static I060: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I063/060", shape: Shape::Fixed { len: 1, extract: i060 } };

static UAP: Uap = Uap::empty(3, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I015)
    .with_slot(3, &I060);

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
    fn decodes_sensor_configuration_status() {
        let buf = [0b0110_0000u8, 3, 77];
        let (record, _) = decode_record(&buf, buf.len()).unwrap();
        let r = match record {
            DomainRecord::ServiceStep(r) => r,
            _ => unreachable!(),
        };
        assert_eq!(r.service_identification, Some(3));
        assert_eq!(r.sdps_configuration_status, Some(77));
    }
}
