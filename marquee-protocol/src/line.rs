//! Line accumulation for the lights stream
//!
//! Bytes are fed one at a time. A line ends at `\n`; its first byte is
//! decoded as a sextet and the rest is ignored. The buffer is bounded:
//! a line longer than [`LINE_CAPACITY`] is discarded in full and the
//! decoder resyncs on the next terminator.

use heapless::Vec;

use crate::sextet::decode_sextet;
use crate::zone::ZoneSet;

/// Line terminator
pub const LINE_TERMINATOR: u8 = b'\n';

/// Maximum line length in bytes, terminator excluded
pub const LINE_CAPACITY: usize = 100;

/// Reasons a terminated line produced no zone state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Terminator with no payload
    Empty,
    /// Line exceeded the buffer and was dropped
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Collecting bytes of the current line
    Accumulating,
    /// Current line overran the buffer, skipping to the next terminator
    Discarding,
}

/// Incremental decoder for the lights stream
#[derive(Debug, Clone)]
pub struct LineDecoder {
    state: LineState,
    buffer: Vec<u8, LINE_CAPACITY>,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDecoder {
    /// Create a new line decoder
    pub fn new() -> Self {
        Self {
            state: LineState::Accumulating,
            buffer: Vec::new(),
        }
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.state = LineState::Accumulating;
        self.buffer.clear();
    }

    /// Number of bytes buffered for the current line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte to the decoder
    ///
    /// Returns `Ok(Some(zones))` when a line completes, `Ok(None)` when more
    /// bytes are needed, or `Err` when a terminated line had to be dropped.
    pub fn feed(&mut self, byte: u8) -> Result<Option<ZoneSet>, LineError> {
        if byte == LINE_TERMINATOR {
            let result = match (self.state, self.buffer.first()) {
                (LineState::Discarding, _) => Err(LineError::Overflow),
                (LineState::Accumulating, None) => Err(LineError::Empty),
                (LineState::Accumulating, Some(&first)) => Ok(Some(decode_sextet(first))),
            };
            self.reset();
            return result;
        }

        if self.state == LineState::Accumulating && self.buffer.push(byte).is_err() {
            self.buffer.clear();
            self.state = LineState::Discarding;
        }
        Ok(None)
    }

    /// Feed multiple bytes to the decoder
    ///
    /// Returns the zones of the last line that decoded. Dropped lines are
    /// skipped silently.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Option<ZoneSet> {
        let mut last = None;
        for &byte in bytes {
            if let Ok(Some(zones)) = self.feed(byte) {
                last = Some(zones);
            }
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Zone;

    #[test]
    fn test_single_line() {
        let mut decoder = LineDecoder::new();
        assert_eq!(decoder.feed(b'A'), Ok(None));
        assert_eq!(
            decoder.feed(b'\n'),
            Ok(Some(ZoneSet::EMPTY.with(Zone::MarqueeUpLeft)))
        );
        assert_eq!(decoder.pending(), 0);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut decoder = LineDecoder::new();
        // Only the first byte matters, the cabinet button sextets are ignored
        let zones = decoder.feed_bytes(b"C@@@@\n");
        assert_eq!(zones, Some(ZoneSet::from_bits(0x03)));
    }

    #[test]
    fn test_bare_terminator_is_not_a_sextet() {
        // 0x0A would carry zones {1, 3} if decoded; it only ever ends a line
        let mut decoder = LineDecoder::new();
        assert_eq!(decoder.feed(LINE_TERMINATOR), Err(LineError::Empty));
        assert_eq!(decoder.feed(LINE_TERMINATOR), Err(LineError::Empty));
        assert_eq!(decoder.feed_bytes(b"\n\n"), None);
        assert_eq!(decoder.pending(), 0);
    }

    #[test]
    fn test_empty_line_dropped() {
        let mut decoder = LineDecoder::new();
        assert_eq!(decoder.feed(b'\n'), Err(LineError::Empty));
        assert_eq!(decoder.feed_bytes(b"B\n"), Some(ZoneSet::from_bits(0x02)));
    }

    #[test]
    fn test_line_at_capacity_decodes() {
        let mut decoder = LineDecoder::new();
        let line = [b'o'; LINE_CAPACITY];
        assert_eq!(decoder.feed_bytes(&line), None);
        assert_eq!(decoder.pending(), LINE_CAPACITY);
        assert_eq!(decoder.feed(b'\n'), Ok(Some(ZoneSet::from_bits(b'o'))));
    }

    #[test]
    fn test_overlong_line_discarded_and_resyncs() {
        let mut decoder = LineDecoder::new();
        for _ in 0..LINE_CAPACITY + 25 {
            assert_eq!(decoder.feed(b'o'), Ok(None));
        }
        assert_eq!(decoder.feed(b'\n'), Err(LineError::Overflow));

        // Next line is clean
        assert_eq!(decoder.feed_bytes(b"A\n"), Some(ZoneSet::from_bits(0x01)));
    }

    #[test]
    fn test_reset_drops_partial_line() {
        let mut decoder = LineDecoder::new();
        decoder.feed_bytes(b"o");
        decoder.reset();
        assert_eq!(decoder.feed(b'\n'), Err(LineError::Empty));
    }
}
