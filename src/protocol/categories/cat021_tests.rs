use super::*;

#[test]
fn decodes_address_height_and_callsign() {
    let buf = [
        0xA5, 0x40, // FSPEC: FRN 1,3,6 then FX to octet2 with FRN 9
        5, 6, // I021/010
        0xAB, 0xCD, 0xEF, // I021/080 target address
        0x00, 0x64, // I021/140 geometric height (raw=100 -> 600 ft)
        0x2C, 0xC3, 0x72, 0xCF, 0x48, 0x20, // I021/170 callsign "KLM234  "
    ];
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::AdsbReport(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(r.data_source_sac, Some(5));
    assert_eq!(r.data_source_sic, Some(6));
    assert_eq!(r.target_address, Some(0xABCDEF));
    assert_eq!(r.geometric_height_ft, Some(600));
    assert_eq!(
        r.target_identification,
        Some(['K', 'L', 'M', '2', '3', '4', ' ', ' '])
    );
}

#[test]
fn empty_fspec_yields_an_all_none_record() {
    let buf = [0x00u8];
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::AdsbReport(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(r.data_source_sac, None);
    assert_eq!(r.target_address, None);
}
