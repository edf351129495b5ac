//! Category 008 — monoradar derived weather information, full fidelity.
//! An all-clear (empty) FSPEC is standardized across categories to produce
//! a `Skip` outcome rather than an all-`None` record, since a weather
//! message with no items carries no information worth listing.
use crate::core::{ItemDescriptor, Shape, Uap, REF_INDICATOR, SPF_INDICATOR};
use crate::domain::{
    CartesianVector, ContourIdentifier, DomainRecord, PolarVector, Position2d, ProcessingStatus,
    VectorQualifier, WeatherVectorRecord,
};
use crate::error::DecodeError;
use crate::infra::codec::bits::{make_i16, make_u16, make_u32};

pub use crate::core::is_empty_fspec;

const CAT: u8 = 8;

/// I008/010 Data Source Identifier: SAC/SIC pair, one octet each.
fn i010(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_weather_vector_mut();
    r.data_source_sac = Some(buf[0]);
    r.data_source_sic = Some(buf[1]);
    r.data_source_identifier = Some(make_u16(buf[0], buf[1]));
    Ok(())
}

/// I008/000 Message Type.
fn i000(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_weather_vector_mut().message_type = Some(buf[0]);
    Ok(())
}

/// I008/020 Vector Qualifier, FX-chained: a mandatory first octet carries
/// system coordinates, intensity and shading; an optional second octet
/// carries the test-vector and error-condition flags.
fn i020(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let df1 = buf[0];
    let mut vq = VectorQualifier {
        system_coordinates: df1 & 0x80 != 0,
        intensity: (df1 >> 4) & 0x07,
        shading_22_5deg_units: (df1 >> 1) & 0x07,
        test_vector: false,
        error_condition: false,
    };
    if let Some(&df2) = buf.get(1) {
        vq.test_vector = df2 & 0x04 != 0;
        vq.error_condition = df2 & 0x02 != 0;
    }
    record.as_weather_vector_mut().vector_qualifier = Some(vq);
    Ok(())
}

/// I008/036 Sequence of Cartesian Vectors: one octet each of x, y, length.
fn i036(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_weather_vector_mut().cartesian_vectors.push(CartesianVector {
        x: buf[0] as i8,
        y: buf[1] as i8,
        length: buf[2],
    });
    Ok(())
}

/// I008/034 Sequence of Polar Vectors: start/stop octets plus a 2-octet
/// azimuth.
fn i034(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_weather_vector_mut().polar_vectors.push(PolarVector {
        start: buf[0],
        stop: buf[1],
        azimuth: make_u16(buf[2], buf[3]),
    });
    Ok(())
}

/// I008/040 Contour Identifier.
fn i040(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let df1 = buf[0];
    record.as_weather_vector_mut().contour_identifier = Some(ContourIdentifier {
        system_coordinates: df1 & 0x80 != 0,
        intensity: (df1 >> 4) & 0x07,
        fst_lst: df1 & 0x03,
        serial: buf[1],
    });
    Ok(())
}

/// I008/050 Sequence of Contour Points: one octet each of x, y.
fn i050(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record
        .as_weather_vector_mut()
        .contour_points
        .push(Position2d {
            x: buf[0] as i8 as i32,
            y: buf[1] as i8 as i32,
        });
    Ok(())
}

/// I008/090 Time of Day.
fn i090(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_weather_vector_mut().time_of_day = Some(make_u32(0, buf[0], buf[1], buf[2]));
    Ok(())
}

/// I008/100 Processing Status, immediate: df1/df2/df3 are mandatory, with
/// any further octets consumed and discarded while the FX bit stays set.
fn i100(buf: &[u8], pos: &mut usize, record: &mut DomainRecord) -> Result<(), DecodeError> {
    let start = *pos;
    let body = buf.get(start..start + 3).ok_or(DecodeError::ItemOverrun {
        cat: CAT,
        offset: start,
        payload_len: buf.len(),
    })?;
    let df1 = body[0];
    let df2 = body[1];
    let df3 = body[2];

    let raw4 = (df1 >> 3) & 0x0F;
    let scaling_factor = if df1 & 0x80 != 0 {
        raw4 as i8 - 16
    } else {
        raw4 as i8
    };
    let reduction_stage = df1 & 0x07;
    let processing_parameters = (make_u16(df2, df3)) >> 1;

    record.as_weather_vector_mut().processing_status = Some(ProcessingStatus {
        scaling_factor,
        reduction_stage,
        processing_parameters,
    });

    let mut cursor = start + 3;
    while buf.get(cursor - 1).copied().unwrap_or(0) & 0x01 != 0 {
        cursor += 1;
        if cursor > buf.len() {
            return Err(DecodeError::ItemOverrun {
                cat: CAT,
                offset: cursor,
                payload_len: buf.len(),
            });
        }
    }
    *pos = cursor;
    Ok(())
}

/// I008/110 Station Configuration Status, FX-chained raw octets.
fn i110(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_weather_vector_mut();
    for &b in buf {
        r.station_configuration_status.push(b);
    }
    Ok(())
}

/// I008/120 Total Number Of Items.
fn i120(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_weather_vector_mut().total_number_of_items = Some(make_u16(buf[0], buf[1]));
    Ok(())
}

/// I008/038 Total X/Y: one 16-bit signed coordinate each.
fn i038(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let r = record.as_weather_vector_mut();
    r.total_x = Some(make_i16(buf[0], buf[1]) as i32);
    r.total_y = Some(make_i16(buf[2], buf[3]) as i32);
    Ok(())
}

/// SPF (Special Purpose Field): one length octet (itself included)
/// followed by `len - 1` vendor-defined data octets.
fn i_spf(buf: &[u8], pos: &mut usize, record: &mut DomainRecord) -> Result<(), DecodeError> {
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
    let r = record.as_weather_vector_mut();
    for &b in body {
        r.spf_raw.push(b);
    }
    *pos = end;
    Ok(())
}

/// REF (Reserved Expansion Field): same length-prefixed raw-byte shape as
/// SPF. The original's reprocessing loop over nested FRNs is not
/// reproduced here; the field's bytes are kept for forward compatibility.
fn i_ref(buf: &[u8], pos: &mut usize, record: &mut DomainRecord) -> Result<(), DecodeError> {
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
    let r = record.as_weather_vector_mut();
    for &b in body {
        r.ref_raw.push(b);
    }
    *pos = end;
    Ok(())
}

static I010: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I008/010", shape: Shape::Fixed { len: 2, extract: i010 } };
static I000: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I008/000", shape: Shape::Fixed { len: 1, extract: i000 } };
static I020: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I008/020", shape: Shape::Variable { extract: i020 } };
static I036: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: "I008/036",
    shape: Shape::Repetitive {
        sub_len: 3,
        extract: i036,
        rep0_allowed: false,
    },
};
static I034: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: "I008/034",
    shape: Shape::Repetitive {
        sub_len: 4,
        extract: i034,
        rep0_allowed: false,
    },
};
static I040: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I008/040", shape: Shape::Fixed { len: 2, extract: i040 } };
static I050: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: "I008/050",
    shape: Shape::Repetitive {
        sub_len: 2,
        extract: i050,
        rep0_allowed: false,
    },
};
static I090: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I008/090", shape: Shape::Fixed { len: 3, extract: i090 } };
static I100: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I008/100", shape: Shape::Immediate { read: i100 } };
static I110: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I008/110", shape: Shape::Variable { extract: i110 } };
static I120: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I008/120", shape: Shape::Fixed { len: 2, extract: i120 } };
static I038: ItemDescriptor = ItemDescriptor { category: CAT, item_no: "I008/038", shape: Shape::Fixed { len: 4, extract: i038 } };
static SPF: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: SPF_INDICATOR,
    shape: Shape::Immediate { read: i_spf },
};
static REF: ItemDescriptor = ItemDescriptor {
    category: CAT,
    item_no: REF_INDICATOR,
    shape: Shape::Immediate { read: i_ref },
};

static UAP: Uap = Uap::empty(14, 2)
    .with_slot(1, &I010)
    .with_slot(2, &I000)
    .with_slot(3, &I020)
    .with_slot(4, &I036)
    .with_slot(5, &I034)
    .with_slot(6, &I040)
    .with_slot(7, &I050)
    .with_slot(8, &I090)
    .with_slot(9, &I100)
    .with_slot(10, &I110)
    .with_slot(11, &I120)
    .with_slot(12, &I038)
    .with_slot(13, &SPF)
    .with_slot(14, &REF);

pub fn uap() -> &'static Uap {
    &UAP
}

pub fn decode_record(buf: &[u8], record_len: usize) -> Result<(DomainRecord, usize), DecodeError> {
    crate::infra::codec::engine::decode_items_into(
        CAT,
        uap(),
        buf,
        record_len,
        DomainRecord::WeatherVector(WeatherVectorRecord::new()),
    )
}

#[cfg(test)]
#[path = "cat008_tests.rs"]
mod tests;
