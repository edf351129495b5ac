use super::*;

#[test]
fn decodes_message_type_and_time_of_day() {
    let buf = [0xD0u8, 1, 2, 5, 0, 0, 10];
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::RadarService(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(r.data_source_sac, Some(1));
    assert_eq!(r.data_source_sic, Some(2));
    assert_eq!(r.message_type, Some(5));
    assert_eq!(r.time_of_day, Some(10));
}

#[test]
fn antenna_rotation_period_reads_through_immediate_cursor() {
    let buf = [0b0000_1000u8, 1, 0]; // FRN5 (I065/040), raw=256 -> 2.0 s
    let (record, _) = decode_record(&buf, buf.len()).unwrap();
    let r = match record {
        DomainRecord::RadarService(r) => r,
        _ => unreachable!(),
    };
    assert_eq!(r.antenna_rotation_period_s, Some(2.0));
}
