//! Printable sextet encoding
//!
//! The game's sextet stream packs six bits into one printable character
//! so a lights line is plain ASCII. Encoded bytes land in `'0'..='o'`;
//! the decoder only looks at the low six bits, so any byte with the same
//! low bits decodes to the same zones.

use crate::zone::ZoneSet;
use crate::line::LINE_TERMINATOR;

/// Bits of a byte that carry zone data
pub const SEXTET_MASK: u8 = 0x3F;

/// Encode a 6-bit value as a printable character
///
/// Bits above the sextet are ignored.
pub const fn encode_sextet(value: u8) -> u8 {
    (value.wrapping_add(0x10) & SEXTET_MASK) + 0x30
}

/// Decode the zones carried by one byte
pub const fn decode_sextet(byte: u8) -> ZoneSet {
    ZoneSet::from_bits(byte & SEXTET_MASK)
}

/// Encode a complete single-sextet lights line
pub fn encode_line(zones: ZoneSet) -> [u8; 2] {
    [encode_sextet(zones.bits()), LINE_TERMINATOR]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Zone;

    #[test]
    fn test_encode_range() {
        assert_eq!(encode_sextet(0x00), b'@');
        assert_eq!(encode_sextet(0x30), b'0');
        assert_eq!(encode_sextet(0x2F), b'o');
    }

    #[test]
    fn test_decode_ascii_a() {
        // 'A' = 0x41, low six bits = 0x01
        let zones = decode_sextet(b'A');
        assert_eq!(zones, ZoneSet::EMPTY.with(Zone::MarqueeUpLeft));
    }

    #[test]
    fn test_decode_ignores_high_bits() {
        assert_eq!(decode_sextet(0x45), decode_sextet(0x05));
        assert_eq!(decode_sextet(0x85), decode_sextet(0x05));
        assert_eq!(decode_sextet(0xC5), decode_sextet(0x05));
    }

    #[test]
    fn test_encode_line() {
        let line = encode_line(ZoneSet::BASS);
        assert_eq!(line[1], b'\n');
        assert_eq!(decode_sextet(line[0]), ZoneSet::BASS);
    }
}
