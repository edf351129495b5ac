//! Category 001 — monoradar target reports, first-generation format
//! (lighter item set). Superseded by Cat 048 in later
//! deployments; kept for recordings from older sensors. Only the items
//! every such recording carries are modelled.
use crate::core::{ItemDescriptor, Shape, Tres, Uap};
use crate::domain::{DomainRecord, Mode3A, PolarPosition, RadarTargetRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::make_u16;

const CAT: u8 = 1;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_target_mut().data_source_sic = Some(buf[0]);
    Ok(())
}

fn i040(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let rho = make_u16(buf[0], buf[1]) as f64 / 256.0;
    let theta = make_u16(buf[2], buf[3]) as f64 * 360.0 / 65536.0;
    record.as_radar_target_mut().polar_position = Some(PolarPosition {
        rho_m: rho,
        theta_deg: theta,
    });
    Ok(())
}

fn i070(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let raw = make_u16(buf[0], buf[1]);
    let code = crate::infra::codec::bits::decode_octal_code(raw & 0x0FFF);
    record.as_radar_target_mut().mode_3a = Some(Mode3A {
        code,
        validated: Tres::from_bit(raw & 0x8000 == 0),
        garbled: Tres::from_bit(raw & 0x4000 != 0),
        changed: Tres::from_bit(raw & 0x2000 != 0),
    });
    Ok(())
}

fn i161(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_target_mut().track_number = Some(make_u16(buf[0], buf[1]) & 0x0FFF);
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I001/010", shape: Shape::Fixed { len: 1, extract: i010 } };
static I040: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I001/040", shape: Shape::Fixed { len: 4, extract: i040 } };
static I070: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I001/070", shape: Shape::Fixed { len: 2, extract: i070 } };
static I161: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I001/161", shape: Shape::Fixed { len: 2, extract: i161 } };

static UAP: Uap = Uap::empty(4, 1)
    .with_slot(1, &I010)
    .with_slot(2, &I040)
    .with_slot(3, &I070)
    .with_slot(4, &I161);

pub fn uap() -> &'static Uap {
    &UAP
}

pub fn decode_record(buf: &[u8], record_len: usize) -> Result<(DomainRecord, usize), DecodeError> {
    crate::infra::codec::engine::decode_items_into(
        CAT,
        uap(),
        buf,
        record_len,
        DomainRecord::RadarTarget(RadarTargetRecord::default()),
    )
}
