use super::*;
use crate::core::{ItemDescriptor, Shape, Uap};
use crate::domain::{RadarServiceRecord, ServiceStepRecord};

fn extract_sac(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_service_step_mut().data_source_sac = Some(buf[0]);
    Ok(())
}

fn extract_sic(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    record.as_service_step_mut().data_source_sic = Some(buf[0]);
    Ok(())
}

fn extract_tod(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
    let tod = crate::infra::codec::bits::make_u32(0, buf[0], buf[1], buf[2]);
    record.as_service_step_mut().time_of_day = Some(tod);
    Ok(())
}

static SAC: ItemDescriptor = ItemDescriptor {
    category: 1,
    item_no: "I001/010-1",
    shape: Shape::Fixed {
        len: 1,
        extract: extract_sac,
    },
};
static SIC: ItemDescriptor = ItemDescriptor {
    category: 1,
    item_no: "I001/010-2",
    shape: Shape::Fixed {
        len: 1,
        extract: extract_sic,
    },
};
static TOD: ItemDescriptor = ItemDescriptor {
    category: 1,
    item_no: "I001/020",
    shape: Shape::Fixed {
        len: 3,
        extract: extract_tod,
    },
};

fn test_uap() -> Uap {
    Uap::empty(3, 2)
        .with_slot(1, &SAC)
        .with_slot(2, &SIC)
        .with_slot(3, &TOD)
}

#[test]
fn single_octet_fspec_dispatches_set_frns_in_order() {
    let uap = test_uap();
    // FSPEC: FRN1 set, FRN2 clear, FRN3 set, no FX.
    let buf = [0b1010_0000u8, 0xAA, 0xBB, 0xCC, 0xDD];
    let (record, _) = decode_items_into(
        1,
        &uap,
        &buf,
        buf.len(),
        DomainRecord::ServiceStep(ServiceStepRecord::default()),
    )
    .unwrap();
    let svc = match record {
        DomainRecord::ServiceStep(s) => s,
        _ => unreachable!(),
    };
    assert_eq!(svc.data_source_sac, Some(0xAA));
    assert_eq!(svc.data_source_sic, None);
    assert_eq!(svc.time_of_day, Some(crate::infra::codec::bits::make_u32(0, 0xBB, 0xCC, 0xDD)));
}

#[test]
fn fx_chained_fspec_spans_two_octets() {
    let uap = test_uap();
    // Octet 1: FRN1..7 all clear except FX set; octet 2: FRN8 set (out of
    // range for this 3-FRN UAP) -> UnknownFrn.
    let buf = [0b0000_0001u8, 0b1000_0000u8];
    let err = decode_items_into(
        1,
        &uap,
        &buf,
        buf.len(),
        DomainRecord::ServiceStep(ServiceStepRecord::default()),
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::UnknownFrn { cat: 1, frn: 8 }));
}

#[test]
fn fspec_overlong_is_rejected() {
    let uap = Uap::empty(3, 1);
    let buf = [0xFFu8; 8];
    let err = decode_items_into(
        1,
        &uap,
        &buf,
        buf.len(),
        DomainRecord::ServiceStep(ServiceStepRecord::default()),
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::FspecOverlong { cat: 1, .. }));
}

#[test]
fn fixed_item_overrun_is_reported() {
    let uap = test_uap();
    // FRN3 (TOD, 3 octets) set but only 1 octet remains after FSPEC.
    let buf = [0b0010_0000u8, 0xAA];
    let err = decode_items_into(
        1,
        &uap,
        &buf,
        buf.len(),
        DomainRecord::ServiceStep(ServiceStepRecord::default()),
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::ItemOverrun { cat: 1, .. }));
}

#[test]
fn repetitive_item_respects_rep_count() {
    fn extract_sensor(buf: &[u8], record: &mut DomainRecord) -> Result<(), DecodeError> {
        record
            .as_radar_service_mut()
            .warning_error_conditions
            .push(buf[0]);
        Ok(())
    }
    static REP_ITEM: ItemDescriptor = ItemDescriptor {
        category: 2,
        item_no: "I002/000",
        shape: Shape::Repetitive {
            sub_len: 1,
            extract: extract_sensor,
            rep0_allowed: false,
        },
    };
    let uap = Uap::empty(1, 1).with_slot(1, &REP_ITEM);
    // FSPEC sets FRN1; REP=3, three data bytes.
    let buf = [0b1000_0000u8, 3, 0x01, 0x02, 0x03];
    let (record, _) = decode_items_into(
        2,
        &uap,
        &buf,
        buf.len(),
        DomainRecord::RadarService(RadarServiceRecord::default()),
    )
    .unwrap();
    let svc = match record {
        DomainRecord::RadarService(s) => s,
        _ => unreachable!(),
    };
    assert_eq!(svc.warning_error_conditions.len(), 3);
}

#[test]
fn repetitive_item_rejects_zero_rep_when_disallowed() {
    fn extract_sensor(_buf: &[u8], _record: &mut DomainRecord) -> Result<(), DecodeError> {
        Ok(())
    }
    static REP_ITEM: ItemDescriptor = ItemDescriptor {
        category: 2,
        item_no: "I002/000",
        shape: Shape::Repetitive {
            sub_len: 1,
            extract: extract_sensor,
            rep0_allowed: false,
        },
    };
    let uap = Uap::empty(1, 1).with_slot(1, &REP_ITEM);
    let buf = [0b1000_0000u8, 0];
    let err = decode_items_into(
        2,
        &uap,
        &buf,
        buf.len(),
        DomainRecord::RadarService(RadarServiceRecord::default()),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::ZeroRepetitionForbidden { cat: 2, .. }
    ));
}

#[test]
fn unset_fspec_bits_leave_optional_fields_none() {
    let uap = test_uap();
    let buf = [0b0000_0000u8];
    let (record, _) = decode_items_into(
        1,
        &uap,
        &buf,
        buf.len(),
        DomainRecord::ServiceStep(ServiceStepRecord::default()),
    )
    .unwrap();
    let svc = match record {
        DomainRecord::ServiceStep(s) => s,
        _ => unreachable!(),
    };
    assert_eq!(svc.data_source_sac, None);
    assert_eq!(svc.data_source_sic, None);
    assert_eq!(svc.time_of_day, None);
}
