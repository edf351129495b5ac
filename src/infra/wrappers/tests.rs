use super::*;

#[test]
fn netto_wrapper_yields_whole_input_once() {
    let input = [1u8, 2, 3];
    let mut w = NettoWrapper;
    let (frame, rest) = w.next_frame(&input).unwrap().unwrap();
    assert_eq!(frame, &input);
    assert!(rest.is_empty());
    assert!(w.next_frame(rest).unwrap().is_none());
}

#[test]
fn rff_wrapper_strips_length_prefix() {
    let input = [0, 0, 0, 3, 0xAA, 0xBB, 0xCC];
    let mut w = RffWrapper::new(false);
    let (frame, rest) = w.next_frame(&input).unwrap().unwrap();
    assert_eq!(frame, &[0xAA, 0xBB, 0xCC]);
    assert!(rest.is_empty());
}

#[test]
fn rff_wrapper_with_sequence_number_skips_two_extra_octets() {
    let input = [0, 0, 0, 2, 0x00, 0x01, 0xAA, 0xBB];
    let mut w = RffWrapper::new(true);
    let (frame, rest) = w.next_frame(&input).unwrap().unwrap();
    assert_eq!(frame, &[0xAA, 0xBB]);
    assert!(rest.is_empty());
}

#[test]
fn rff_wrapper_rejects_truncated_body() {
    let input = [0, 0, 0, 9, 0xAA];
    let mut w = RffWrapper::new(false);
    assert!(w.next_frame(&input).unwrap_err().to_string().contains("exceed"));
}

#[test]
fn ioss_wrapper_skips_non_matching_channels() {
    // channel 2 (skipped), len 1, body 0xEE; then channel 1 (matched), len 2, body AA BB.
    let input = [2u8, 0, 1, 0xEE, 1, 0, 2, 0xAA, 0xBB];
    let mut w = IossWrapper::new(1);
    let (frame, rest) = w.next_frame(&input).unwrap().unwrap();
    assert_eq!(frame, &[0xAA, 0xBB]);
    assert!(rest.is_empty());
}

#[test]
fn ioss_wrapper_returns_none_at_end() {
    let mut w = IossWrapper::new(1);
    assert!(w.next_frame(&[]).unwrap().is_none());
}
