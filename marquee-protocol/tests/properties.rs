//! Property tests for the lights line protocol

use marquee_protocol::{
    decode_sextet, encode_line, encode_sextet, LineDecoder, LineError, ZoneSet, LINE_CAPACITY,
    LINE_TERMINATOR, SEXTET_MASK,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn high_bits_never_change_decoded_zones(value in 0u8..64, high in 0u8..4) {
        let byte = value | (high << 6);
        // A bare terminator is an empty line, not sextet 0x0A
        prop_assume!(byte != LINE_TERMINATOR);
        let mut decoder = LineDecoder::new();
        let zones = decoder.feed_bytes(&[byte, b'\n']);
        prop_assert_eq!(zones, Some(ZoneSet::from_bits(value & SEXTET_MASK)));
    }

    #[test]
    fn encoded_sextets_are_printable(value in any::<u8>()) {
        let byte = encode_sextet(value);
        prop_assert!(byte.is_ascii_graphic() || byte == b' ');
        prop_assert_eq!(decode_sextet(byte).bits(), value & SEXTET_MASK);
    }

    #[test]
    fn encoded_lines_decode_to_same_zones(bits in 0u8..64) {
        let zones = ZoneSet::from_bits(bits);
        let mut decoder = LineDecoder::new();
        prop_assert_eq!(decoder.feed_bytes(&encode_line(zones)), Some(zones));
    }

    #[test]
    fn overlong_lines_never_decode_and_next_line_does(
        junk in proptest::collection::vec(0x20u8..0x7F, LINE_CAPACITY + 1..LINE_CAPACITY * 3),
        bits in 0u8..64,
    ) {
        let mut decoder = LineDecoder::new();
        for &byte in &junk {
            prop_assert_eq!(decoder.feed(byte), Ok(None));
        }
        prop_assert_eq!(decoder.feed(b'\n'), Err(LineError::Overflow));

        let zones = ZoneSet::from_bits(bits);
        prop_assert_eq!(decoder.feed_bytes(&encode_line(zones)), Some(zones));
    }
}
