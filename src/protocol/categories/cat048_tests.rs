use super::*;

#[test]
fn decodes_a_representative_plot_with_track_number() {
    let buf: Vec<u8> = vec![
        0xE5, 0x10, // FSPEC: FRN 1,2,3,6 then FX to octet 2 with FRN 11
        10, 20, // I048/010 SAC/SIC
        0x00, 0x01, 0x00, // I048/140 time of day
        0x80, // I048/020 target report descriptor (FX clear)
        0x01, 0x40, // I048/090 flight level
        0x00, 0x05, // I048/161 track number
    ];
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::RadarTarget(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(r.data_source_sac, Some(10));
    assert_eq!(r.data_source_sic, Some(20));
    assert_eq!(r.time_of_day, Some(256));
    assert_eq!(r.target_report_descriptor, Some(0x80));
    let fl = r.flight_level.unwrap();
    assert_eq!(fl.quarter_fl, 0x0140);
    assert_eq!(fl.validated, Tres::True);
    assert_eq!(r.track_number, Some(5));
    assert!(r.polar_position.is_none());
}

#[test]
fn unknown_frn_in_second_fspec_octet_is_rejected() {
    // FRN 14 would need a third FSPEC octet this UAP's max_fspec_len allows,
    // but this UAP only goes up to FRN 13 -> UnknownFrn.
    let buf = [0x01, 0x02, 0, 0];
    let err = decode_record(&buf, buf.len()).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownFrn { cat: 48, .. }));
}

#[test]
fn bds_register_repetition_decodes_each_group() {
    let mut buf: Vec<u8> = vec![0b0000_0010, 0]; // FRN 10 (I048/250) only
    // Wait: FRN10 is bit index within first octet (bit pos for FRN10 is in
    // second octet since FRN8..14 live there). Encode directly below.
    buf.clear();
    // octet1: no bits set, FX set to continue
    buf.push(0b0000_0001);
    // octet2: FRN10 -> bit position 3rd from MSB among FRN8..14 (FRN8=bit7..FRN14=bit1)
    // FRN10 is the third, i.e. bit5.
    buf.push(0b0010_0000);
    buf.push(2); // REP = 2
    buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 0x45]); // bds1=4, bds2=5
    buf.extend_from_slice(&[8, 9, 10, 11, 12, 13, 14, 0x12]); // bds1=1, bds2=2
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::RadarTarget(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(r.bds_registers.len(), 2);
    let regs: Vec<_> = r.bds_registers.iter().collect();
    assert_eq!(regs[0].bds1, 4);
    assert_eq!(regs[0].bds2, 5);
    assert_eq!(regs[1].bds1, 1);
    assert_eq!(regs[1].bds2, 2);
}
