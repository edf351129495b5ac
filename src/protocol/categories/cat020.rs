//! Category 020 — multilateration (MLAT) target reports, full fidelity.
//! Shares most item shapes with Cat 048 but carries its target report
//! descriptor and track status as wider, FX-chained fields, and adds
//! explicit SPI/simulated tri-state flags, both decoded as `Tres` rather
//! than folded into the descriptor bitmask, matching how every other
//! tri-state wire flag in this decoder is represented.
use crate::core::{ItemDescriptor, Shape, Tres, Uap};
use crate::domain::{
    BdsRegister, DomainRecord, FlightLevel, Mode3A, MlatReportRecord, Position2d, PositionAccuracy,
};
use crate::error::DecodeError;
use crate::infra::codec::bits::{make_i16, make_u16, make_u32, ord, sign_extend};

const CAT: u8 = 20;

fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_mlat_report_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    Ok(())
}

fn i020(buf: &[u8], _pos: &mut usize, record: &mut DomainRecord) -> Result<(), DecodeError> {
    let start = *_pos;
    let mut raw: u32 = 0;
    let mut cursor = start;
    loop {
        let octet = buf[cursor];
        raw = (raw << 7) | (octet as u32 >> 1);
        cursor += 1;
        if octet & 1 == 0 {
            break;
        }
    }
    let r = record.as_mlat_report_mut();
    r.target_report_descriptor = Some(raw);
    r.spi_present = Tres::from_bit(buf[start] & 0x04 != 0);
    r.simulated = Tres::from_bit(buf[start] & 0x02 != 0);
    *_pos = cursor;
    Ok(())
}

fn i140(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let tod = make_u32(0, buf[0], buf[1], buf[2]);
    record.as_mlat_report_mut().time_of_day = Some(tod);
    Ok(())
}

fn i042(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let x = make_i16(buf[0], buf[1]) as i32;
    let y = make_i16(buf[2], buf[3]) as i32;
    record.as_mlat_report_mut().cartesian_position = Some(Position2d { x, y });
    Ok(())
}

fn i090(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let raw = make_u16(buf[0], buf[1]);
    let quarter_fl = sign_extend((raw & 0x3FFF) as u32, 14) as i16;
    record.as_mlat_report_mut().flight_level = Some(FlightLevel {
        quarter_fl,
        validated: Tres::from_bit(raw & 0x8000 == 0),
        garbled: Tres::from_bit(raw & 0x4000 != 0),
    });
    Ok(())
}

fn i070(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let raw = make_u16(buf[0], buf[1]);
    let code = crate::infra::codec::bits::decode_octal_code(raw & 0x0FFF);
    record.as_mlat_report_mut().mode_3a = Some(Mode3A {
        code,
        validated: Tres::from_bit(raw & 0x8000 == 0),
        garbled: Tres::from_bit(raw & 0x4000 != 0),
        changed: Tres::from_bit(raw & 0x2000 != 0),
    });
    Ok(())
}

fn i220(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_mlat_report_mut().aircraft_address = Some(make_u32(0, buf[0], buf[1], buf[2]));
    Ok(())
}

fn i245(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let mut six = [0u8; 6];
    six.copy_from_slice(&buf[1..7]);
    record.as_mlat_report_mut().aircraft_identification =
        Some(crate::infra::codec::bits::decode_6bit_callsign(six));
    Ok(())
}

fn i161(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_mlat_report_mut().track_number = Some(make_u16(buf[0], buf[1]) & 0x0FFF);
    Ok(())
}

fn i202(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let vx = make_i16(buf[0], buf[1]);
    let vy = make_i16(buf[2], buf[3]);
    record.as_mlat_report_mut().track_velocity_cartesian = Some((vx, vy));
    Ok(())
}

fn i170(buf: &[u8], _pos: &mut usize, record: &mut DomainRecord) -> Result<(), DecodeError> {
    let start = *_pos;
    let mut raw: u32 = 0;
    let mut cursor = start;
    loop {
        let octet = buf[cursor];
        raw = (raw << 7) | (octet as u32 >> 1);
        cursor += 1;
        if octet & 1 == 0 {
            break;
        }
    }
    record.as_mlat_report_mut().track_status = Some(raw);
    *_pos = cursor;
    Ok(())
}

fn i110_one(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let mut data = [0u8; 7];
    data.copy_from_slice(&buf[..7]);
    record.as_mlat_report_mut().bds_registers.push(BdsRegister {
        data,
        bds1: buf[7] >> 4,
        bds2: buf[7] & 0x0F,
    });
    Ok(())
}

/// RE (Reserved Expansion) field: one length octet (itself included)
/// followed by `len - 1` vendor-defined data octets.
fn i_re(buf: &[u8], pos: &mut usize, record: &mut DomainRecord) -> Result<(), DecodeError> {
    let start = *pos;
    let len = *buf.get(start).ok_or(DecodeError::ItemOverrun {
        cat: CAT,
        offset: start,
        payload_len: buf.len(),
    })? as usize;
    let end = start + len;
    let body = buf.get(start + 1..end).ok_or(DecodeError::ItemOverrun {
        cat: CAT,
        offset: start + 1,
        payload_len: buf.len(),
    })?;

    let r = record.as_mlat_report_mut();
    for &b in body {
        r.re_raw.push(b);
    }

    #[cfg(feature = "ssc_hack")]
    {
        r.ssc_pa_forced = len == 15 && body.first().copied() == Some(0);
    }

    *pos = end;
    Ok(())
}

/// I020/500 (Position Accuracy), compound: primary octet declares up to
/// four secondary subfields (sf1 DOP, sf2 standard deviation of position,
/// sf3 standard deviation of geometric altitude, sf4 reserved), each 6,
/// 6, 2 and 6 octets respectively. The primary is always single-octet —
/// an FX bit here is a malformed record, not a continuation.
fn i500(buf: &[u8], pos: &mut usize, record: &mut DomainRecord) -> Result<(), DecodeError> {
    let start = *pos;
    let primary = *buf.get(start).ok_or(DecodeError::ItemOverrun {
        cat: CAT,
        offset: start,
        payload_len: buf.len(),
    })?;
    if primary & 0x01 != 0 {
        return Err(DecodeError::CompoundPrimaryExtensionForbidden {
            cat: CAT,
            item_no: "I020/500",
        });
    }

    let sf1 = primary & 0x80 != 0;
    let sf2 = primary & 0x40 != 0;
    let sf3 = primary & 0x20 != 0;
    let sf4 = primary & 0x10 != 0;
    let len = 1 + 6 * ord(sf1) + 6 * ord(sf2) + 2 * ord(sf3) + 6 * ord(sf4);
    let end = start + len as usize;
    let body = buf.get(start..end).ok_or(DecodeError::ItemOverrun {
        cat: CAT,
        offset: start,
        payload_len: buf.len(),
    })?;

    let mut cursor = 1usize;
    let mut pa = PositionAccuracy::default();
    if sf1 {
        let dop_x = make_u16(body[cursor], body[cursor + 1]);
        let dop_y = make_u16(body[cursor + 2], body[cursor + 3]);
        let dop_xy = make_i16(body[cursor + 4], body[cursor + 5]);
        pa.dop = Some((dop_x, dop_y, dop_xy));
        cursor += 6;
    }
    if sf2 {
        let std_x = make_u16(body[cursor], body[cursor + 1]);
        let std_y = make_u16(body[cursor + 2], body[cursor + 3]);
        let std_xy = make_i16(body[cursor + 4], body[cursor + 5]);
        pa.std_dev = Some((std_x, std_y, std_xy));
        cursor += 6;
    }
    if sf3 {
        pa.std_dev_geometric_altitude = Some(make_u16(body[cursor], body[cursor + 1]));
        cursor += 2;
    }
    if sf4 {
        let mut raw = [0u8; 6];
        raw.copy_from_slice(&body[cursor..cursor + 6]);
        pa.sf4_raw = Some(raw);
        cursor += 6;
    }
    debug_assert_eq!(cursor, len as usize);

    record.as_mlat_report_mut().position_accuracy = Some(pa);
    *pos = end;
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I020: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/020", shape: Shape::Compound { read: i020 } };
static I140: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/140", shape: Shape::Fixed { len: 3, extract: i140 } };
static I042: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/042", shape: Shape::Fixed { len: 4, extract: i042 } };
static I070: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/070", shape: Shape::Fixed { len: 2, extract: i070 } };
static I090: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/090", shape: Shape::Fixed { len: 2, extract: i090 } };
static I161: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/161", shape: Shape::Fixed { len: 2, extract: i161 } };
static I170: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/170", shape: Shape::Compound { read: i170 } };
static I202: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/202", shape: Shape::Fixed { len: 4, extract: i202 } };
static I220: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/220", shape: Shape::Fixed { len: 3, extract: i220 } };
static I245: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I020/245", shape: Shape::Fixed { len: 7, extract: i245 } };
static I110: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: "I020/110",
    shape: Shape::Repetitive {
        sub_len: 8,
        extract: i110_one,
        rep0_allowed: true,
    },
};
static RE: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: crate::core::REF_INDICATOR,
    shape: Shape::Immediate { read: i_re },
};
static I500: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: "I020/500",
    shape: Shape::Compound { read: i500 },
};

static UAP: Uap = Uap::empty(14, 4)
    .with_slot(1, &I010)
    .with_slot(2, &I020)
    .with_slot(3, &I140)
    .with_slot(4, &I042)
    .with_slot(5, &I070)
    .with_slot(6, &I090)
    .with_slot(7, &I161)
    .with_slot(8, &I170)
    .with_slot(9, &I202)
    .with_slot(10, &I220)
    .with_slot(11, &I245)
    .with_slot(12, &I110)
    .with_slot(13, &RE)
    .with_slot(14, &I500);

pub fn uap() -> &'static Uap {
    &UAP
}

pub fn decode_record(buf: &[u8], record_len: usize) -> Result<(DomainRecord, usize), DecodeError> {
    crate::infra::codec::engine::decode_items_into(
        CAT,
        uap(),
        buf,
        record_len,
        DomainRecord::MlatReport(MlatReportRecord::default()),
    )
}

#[cfg(test)]
#[path = "cat020_tests.rs"]
mod tests;
