//! Category 048 — monoradar target reports (full fidelity).
//! The richest UAP in the decoder: combined plot/track reports carrying
//! polar position, Mode 3/A, flight level, Mode S BDS registers and track
//! state all in one record.
use crate::core::{ItemDescriptor, Shape, Tres, Uap};
use crate::domain::{BdsRegister, DomainRecord, FlightLevel, Mode3A, PolarPosition, RadarTargetRecord};
use crate::error::DecodeError;
use crate::infra::codec::bits::{make_u16, make_u32, sign_extend};

const CAT: u8 = 48;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_radar_target_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i140(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_target_mut().time_of_day = Some(make_u32(0, buf[0], buf[1], buf[2]));
    Ok(())
}

fn i020(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_target_mut().target_report_descriptor = Some(buf[0] as u16);
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

fn i090(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let raw = make_u16(buf[0], buf[1]);
    let quarter_fl = sign_extend((raw & 0x3FFF) as u32, 14) as i16;
    record.as_radar_target_mut().flight_level = Some(FlightLevel {
        quarter_fl,
        validated: Tres::from_bit(raw & 0x8000 == 0),
        garbled: Tres::from_bit(raw & 0x4000 != 0),
    });
    Ok(())
}

fn i130(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record
        .as_radar_target_mut()
        .radar_plot_characteristics
        .push((buf[0], buf[1] as i32));
    Ok(())
}

fn i220(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_target_mut().aircraft_address = Some(make_u32(0, buf[0], buf[1], buf[2]));
    Ok(())
}

fn i240(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let mut six = [0u8; 6];
    six.copy_from_slice(buf);
    record.as_radar_target_mut().aircraft_identification =
        Some(crate::infra::codec::bits::decode_6bit_callsign(six));
    Ok(())
}

/// One `I048/250` BDS register repetition: 7 octets of MB data plus a tag
/// octet splitting BDS1/BDS2 into nibbles.
fn i250_one(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let mut data = [0u8; 7];
    data.copy_from_slice(&buf[..7]);
    record.as_radar_target_mut().bds_registers.push(BdsRegister {
        data,
        bds1: buf[7] >> 4,
        bds2: buf[7] & 0x0F,
    });
    Ok(())
}

fn i161(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_target_mut().track_number = Some(make_u16(buf[0], buf[1]) & 0x0FFF);
    Ok(())
}

fn i200(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let speed = make_u16(buf[0], buf[1]) as f64 * 0.22 / 16384.0;
    let heading = make_u16(buf[2], buf[3]) as f64 * 360.0 / 65536.0;
    record.as_radar_target_mut().track_velocity = Some(PolarPosition {
        rho_m: speed,
        theta_deg: heading,
    });
    Ok(())
}

fn i170(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_radar_target_mut().track_status = Some(make_u16(buf[0], buf[1]));
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I140: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/140", shape: Shape::Fixed { len: 3, extract: i140 } };
static I020: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/020", shape: Shape::Variable { extract: i020 } };
static I040: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/040", shape: Shape::Fixed { len: 4, extract: i040 } };
static I070: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/070", shape: Shape::Fixed { len: 2, extract: i070 } };
static I090: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/090", shape: Shape::Fixed { len: 2, extract: i090 } };
static I130: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/130", shape: Shape::Variable { extract: i130 } };
static I220: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/220", shape: Shape::Fixed { len: 3, extract: i220 } };
static I240: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/240", shape: Shape::Fixed { len: 6, extract: i240 } };
static I250: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: "I048/250",
    shape: Shape::Repetitive {
        sub_len: 8,
        extract: i250_one,
        rep0_allowed: true,
    },
};
static I161: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/161", shape: Shape::Fixed { len: 2, extract: i161 } };
static I200: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/200", shape: Shape::Fixed { len: 4, extract: i200 } };
static I170: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I048/170", shape: Shape::Fixed { len: 2, extract: i170 } };

static UAP_V1_21: Uap = Uap::empty(13, 4)
    .with_slot(1, &I010)
    .with_slot(2, &I140)
    .with_slot(3, &I020)
    .with_slot(4, &I040)
    .with_slot(5, &I070)
    .with_slot(6, &I090)
    .with_slot(7, &I130)
    .with_slot(8, &I220)
    .with_slot(9, &I240)
    .with_slot(10, &I250)
    .with_slot(11, &I161)
    .with_slot(12, &I200)
    .with_slot(13, &I170);

pub fn uap() -> &'static Uap {
    &UAP_V1_21
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

#[cfg(test)]
#[path = "cat048_tests.rs"]
mod tests;
