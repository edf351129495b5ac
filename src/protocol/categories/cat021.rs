//! Category 021 — ADS-B target reports (full fidelity).
//! Positions arrive in WGS-84 degrees rather than the Cartesian/polar
//! coordinates the radar-derived categories use.
use crate::core::{ItemDescriptor, Shape, Tres, Uap};
use crate::domain::{AdsbReportRecord, DomainRecord, FlightLevel, Mode3A};
use crate::error::DecodeError;
use crate::infra::codec::bits::{make_i16, make_i32, make_u16, make_u32, sign_extend};

const CAT: u8 = 21;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_adsb_report_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i080(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_adsb_report_mut().target_address = Some(make_u32(0, buf[0], buf[1], buf[2]));
    Ok(())
}

fn i073(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_adsb_report_mut().time_of_day = Some(make_u32(0, buf[0], buf[1], buf[2]));
    Ok(())
}

fn i130(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    // Signed 1/180_0000 degree units, per the ADS-B WGS-84 position item.
    let lat_raw = make_i32(buf[0], buf[1], buf[2], 0) >> 8;
    let lon_raw = make_i32(buf[3], buf[4], buf[5], 0) >> 8;
    let lat = lat_raw as f64 * 180.0 / 8_388_608.0;
    let lon = lon_raw as f64 * 180.0 / 8_388_608.0;
    record.as_adsb_report_mut().wgs84_position = Some((lat, lon));
    Ok(())
}

fn i140(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let raw = make_i16(buf[0], buf[1]);
    record.as_adsb_report_mut().geometric_height_ft = Some(raw as i32 * 6);
    Ok(())
}

fn i090(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let raw = make_u16(buf[0], buf[1]);
    let quarter_fl = sign_extend((raw & 0x3FFF) as u32, 14) as i16;
    record.as_adsb_report_mut().flight_level = Some(FlightLevel {
        quarter_fl,
        validated: Tres::from_bit(raw & 0x8000 == 0),
        garbled: Tres::from_bit(raw & 0x4000 != 0),
    });
    Ok(())
}

fn i070(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let raw = make_u16(buf[0], buf[1]);
    let code = crate::infra::codec::bits::decode_octal_code(raw & 0x0FFF);
    record.as_adsb_report_mut().mode_3a = Some(Mode3A {
        code,
        validated: Tres::from_bit(raw & 0x8000 == 0),
        garbled: Tres::from_bit(raw & 0x4000 != 0),
        changed: Tres::from_bit(raw & 0x2000 != 0),
    });
    Ok(())
}

fn i170(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let mut six = [0u8; 6];
    six.copy_from_slice(buf);
    record.as_adsb_report_mut().target_identification =
        Some(crate::infra::codec::bits::decode_6bit_callsign(six));
    Ok(())
}

fn i020(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_adsb_report_mut().emitter_category = Some(buf[0]);
    Ok(())
}

fn i210(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_adsb_report_mut();
    r.link_technology = Some(buf[0] >> 4);
    r.mops_version = Some(buf[0] & 0x07);
    Ok(())
}

fn i090_2(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_adsb_report_mut().nucp_nacp = Some(buf[0]);
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I080: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/080", shape: Shape::Fixed { len: 3, extract: i080 } };
static I073: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/073", shape: Shape::Fixed { len: 3, extract: i073 } };
static I130: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/130", shape: Shape::Fixed { len: 6, extract: i130 } };
static I140: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/140", shape: Shape::Fixed { len: 2, extract: i140 } };
static I090: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/090", shape: Shape::Fixed { len: 2, extract: i090 } };
static I070: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/070", shape: Shape::Fixed { len: 2, extract: i070 } };
static I170: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/170", shape: Shape::Fixed { len: 6, extract: i170 } };
static I020: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/020", shape: Shape::Fixed { len: 1, extract: i020 } };
static I210: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/210", shape: Shape::Fixed { len: 1, extract: i210 } };
static I090B: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I021/090B", shape: Shape::Fixed { len: 1, extract: i090_2 } };

static UAP: Uap = Uap::empty(11, 3)
    .with_slot(1, &I010)
    .with_slot(2, &I020)
    .with_slot(3, &I080)
    .with_slot(4, &I073)
    .with_slot(5, &I130)
    .with_slot(6, &I140)
    .with_slot(7, &I090)
    .with_slot(8, &I070)
    .with_slot(9, &I170)
    .with_slot(10, &I210)
    .with_slot(11, &I090B);

pub fn uap() -> &'static Uap {
    &UAP
}

pub fn decode_record(buf: &[u8], record_len: usize) -> Result<(DomainRecord, usize), DecodeError> {
    crate::infra::codec::engine::decode_items_into(
        CAT,
        uap(),
        buf,
        record_len,
        DomainRecord::AdsbReport(AdsbReportRecord::default()),
    )
}

#[cfg(test)]
#[path = "cat021_tests.rs"]
mod tests;
