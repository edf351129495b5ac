use super::*;

#[test]
fn parses_single_data_block() {
    let input = [48u8, 0, 6, 0xAA, 0xBB, 0xCC];
    let (block, rest) = next_data_block(&input).unwrap();
    assert_eq!(block.category, 48);
    assert_eq!(block.payload, &[0xAA, 0xBB, 0xCC]);
    assert!(rest.is_empty());
}

#[test]
fn rejects_length_shorter_than_header() {
    let input = [48u8, 0, 2];
    let err = next_data_block(&input).unwrap_err();
    assert!(matches!(err, DecodeError::BlockTooShort { cat: 48, len: 2 }));
}

#[test]
fn rejects_truncated_payload() {
    let input = [48u8, 0, 10, 1, 2, 3];
    let err = next_data_block(&input).unwrap_err();
    assert!(matches!(err, DecodeError::ItemOverrun { cat: 48, .. }));
}

#[test]
fn walks_two_concatenated_blocks() {
    let input = [
        48u8, 0, 5, 0x01, 0x02, // block 1: 2-byte payload
        34u8, 0, 4, 0xFF, // block 2: 1-byte payload
    ];
    let mut seen = Vec::new();
    for_each_data_block(&input, |block| {
        seen.push((block.category, block.payload.to_vec()));
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, vec![(48, vec![0x01, 0x02]), (34, vec![0xFF])]);
}

#[test]
fn for_each_record_stops_on_zero_progress() {
    let payload = [1u8, 2, 3];
    let err = for_each_record(&payload, |_| Ok(0)).unwrap_err();
    assert!(matches!(err, DecodeError::ItemOverrun { .. }));
}

#[test]
fn for_each_record_walks_until_payload_exhausted() {
    let payload = [1u8, 2, 3, 4];
    let mut calls = 0;
    for_each_record(&payload, |buf| {
        calls += 1;
        Ok(buf.len().min(2))
    })
    .unwrap();
    assert_eq!(calls, 2);
}
