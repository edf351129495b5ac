use super::*;

#[test]
fn make_u16_big_endian() {
    assert_eq!(make_u16(0x01, 0x02), 0x0102);
}

#[test]
fn make_u32_big_endian() {
    assert_eq!(make_u32(0x01, 0x02, 0x03, 0x04), 0x01020304);
}

#[test]
fn sign_extend_negative_12_bit() {
    // 0xFFF as a 12-bit two's complement value is -1.
    assert_eq!(sign_extend(0x0FFF, 12), -1);
}

#[test]
fn sign_extend_positive_value_unaffected() {
    assert_eq!(sign_extend(0x07FF, 12), 0x07FF);
}

#[test]
fn sign_extend_full_width_passthrough() {
    assert_eq!(sign_extend(0xFFFF_FFFF, 32), -1);
}

#[test]
fn ord_maps_bool_to_0_or_1() {
    assert_eq!(ord(true), 1);
    assert_eq!(ord(false), 0);
}

#[test]
fn decode_6bit_callsign_known_value() {
    // 'K','L','M','2','3','4',' ',' ' packed MSB-first, 6 bits each.
    let codes = [11u8, 12, 13, 50, 51, 52, 32, 32];
    let mut bits: u64 = 0;
    for c in codes {
        bits = (bits << 6) | c as u64;
    }
    let bytes = bits.to_be_bytes();
    let mut six = [0u8; 6];
    six.copy_from_slice(&bytes[2..8]);
    let decoded = decode_6bit_callsign(six);
    assert_eq!(decoded, ['K', 'L', 'M', '2', '3', '4', ' ', ' ']);
}

#[test]
fn decode_octal_code_packs_each_digit_into_a_nibble() {
    // 0o7500 = binary 111 101 000 000
    let wire: u16 = 0b111_101_000_000;
    assert_eq!(decode_octal_code(wire), 0x7500);
}

#[test]
fn bit_reader_reads_across_byte_boundary() {
    let buf = [0b1010_1100u8, 0b0011_0000];
    let mut r = BitReader::new(&buf);
    // First 4 bits: 1010
    assert_eq!(r.read_u8(4).unwrap(), 0b1010);
    // Next 8 bits straddle the boundary: 1100_0011
    assert_eq!(r.read_u8(8).unwrap(), 0b1100_0011);
}

#[test]
fn bit_reader_out_of_bounds() {
    let buf = [0u8; 1];
    let mut r = BitReader::new(&buf);
    assert!(r.read_u64(9).is_err());
}

#[test]
fn bit_reader_advance_then_read() {
    let buf = [0xFFu8, 0x0F];
    let mut r = BitReader::new(&buf);
    r.advance(4).unwrap();
    assert_eq!(r.read_u8(4).unwrap(), 0xF);
    assert_eq!(r.byte_pos().unwrap(), 1);
}
