//! Category 034 — monoradar service messages, the Cat 048 counterpart of
//! Cat 002 (lighter item set): north marker, sector
//! crossing and system configuration/status for the richer monoradar
//! pipeline.
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{DomainRecord, PolarPosition, RadarServiceRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::make_u16;

const CAT: u8 = 34;

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

fn i050_window(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let lo = PolarPosition {
        rho_m: make_u16(buf[0], buf[1]) as f64,
        theta_deg: make_u16(buf[2], buf[3]) as f64 * 360.0 / 65536.0,
    };
    let hi = PolarPosition {
        rho_m: make_u16(buf[4], buf[5]) as f64,
        theta_deg: make_u16(buf[6], buf[7]) as f64 * 360.0 / 65536.0,
    };
    record.as_radar_service_mut().polar_window = Some([lo, hi]);
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I034/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I000: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I034/000", shape: Shape::Fixed { len: 1, extract: i000 } };
static I050: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I034/050", shape: Shape::Fixed { len: 8, extract: i050_window } };

static UAP: Uap = Uap::empty(3, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I000)
    .with_slot(3, &I050);

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
