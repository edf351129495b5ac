use super::*;

#[test]
fn decodes_position_and_track_number() {
    let buf = [0xA2u8, 1, 2, 0, 0, 128, 0, 7];
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::MlatReport(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(r.data_source_sac, Some(1));
    assert_eq!(r.data_source_sic, Some(2));
    assert_eq!(r.time_of_day, Some(128));
    assert_eq!(r.track_number, Some(7));
}

#[test]
fn target_report_descriptor_exposes_spi_and_simulated() {
    let buf = [0xC0u8, 10, 20, 0b0000_0110];
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::MlatReport(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(r.spi_present, Tres::True);
    assert_eq!(r.simulated, Tres::True);
    assert_eq!(r.target_report_descriptor, Some(3));
}

#[test]
fn spi_clear_when_bit_unset() {
    let buf = [0xC0u8, 10, 20, 0b0000_0000];
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::MlatReport(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(r.spi_present, Tres::False);
    assert_eq!(r.simulated, Tres::False);
}

#[test]
fn re_field_bytes_are_captured() {
    // FSPEC: octet1 FX only, octet2 FRN13 (RE) set.
    let buf = [0x01u8, 0x04, 5, 0xAA, 0xBB, 0xCC, 0xDD];
    let (record, consumed) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::MlatReport(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(consumed, buf.len());
    let bytes: Vec<_> = r.re_raw.iter().copied().collect();
    assert_eq!(bytes, vec![0xAA, 0xBB, 0xCC, 0xDD]);
}

#[test]
fn i020_500_decodes_dop_and_std_dev_secondaries() {
    // FSPEC: octet1 FX only, octet2 FRN14 (I020/500) set.
    let buf = [
        0x01u8, 0x02, // FSPEC
        0xC0, // primary: sf1, sf2 present
        0, 1, 0, 2, 0xFF, 0xFF, // sf1: dop_x=1, dop_y=2, dop_xy=-1
        0, 3, 0, 4, 0, 5, // sf2: std_x=3, std_y=4, std_xy=5
    ];
    let (record, consumed) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::MlatReport(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(consumed, buf.len());
    let pa = r.position_accuracy.unwrap();
    assert_eq!(pa.dop, Some((1, 2, -1)));
    assert_eq!(pa.std_dev, Some((3, 4, 5)));
    assert_eq!(pa.std_dev_geometric_altitude, None);
}

#[test]
fn i020_500_rejects_fx_set_in_primary() {
    let buf = [0x01u8, 0x02, 0xC1, 0, 1, 0, 2, 0xFF, 0xFF, 0, 3, 0, 4, 0, 5];
    let err = decode_record(&buf, buf.len()).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::CompoundPrimaryExtensionForbidden { cat: 20, .. }
    ));
}

#[cfg(feature = "ssc_hack")]
#[test]
fn ssc_hack_forces_pa_on_length_15_zero_second_octet() {
    let mut buf = vec![0x01u8, 0x04, 15];
    buf.push(0x00);
    buf.extend(std::iter::repeat(0xFFu8).take(13));
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::MlatReport(r) => r,
        _ => unreachable!(),
    };
    assert!(r.ssc_pa_forced);
}
