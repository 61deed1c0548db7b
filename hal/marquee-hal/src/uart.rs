//! UART serial communication abstractions
//!
//! The lighting loop never waits on the link: reads are polled and return
//! `None` when nothing is buffered, writes are short and blocking.

/// Error type shared by both directions of a link
pub trait ErrorType {
    /// Error type for link operations
    type Error: core::fmt::Debug;
}

/// UART transmitter
pub trait UartTx: ErrorType {
    /// Write data to the UART
    ///
    /// Blocks until all data has been queued or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Wait until all queued outbound data has left the peripheral
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
///
/// Polled, never blocks.
pub trait UartRx: ErrorType {
    /// Read one byte if one is already buffered
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Drop everything currently buffered on the inbound side
    ///
    /// Returns the number of bytes discarded.
    fn discard_pending(&mut self) -> Result<usize, Self::Error> {
        let mut discarded = 0;
        while self.try_read_byte()?.is_some() {
            discarded += 1;
        }
        Ok(discarded)
    }
}

/// Combined UART interface
///
/// For UARTs that provide both TX and RX on a single peripheral.
pub trait Uart: UartTx + UartRx {}

// Blanket implementation
impl<T: UartTx + UartRx> Uart for T {}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// Default framing (8N1) at the given baud rate
    pub fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            ..Self::default()
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fifo {
        bytes: [u8; 8],
        head: usize,
        len: usize,
    }

    impl ErrorType for Fifo {
        type Error = ();
    }

    impl UartRx for Fifo {
        fn try_read_byte(&mut self) -> Result<Option<u8>, ()> {
            if self.head == self.len {
                return Ok(None);
            }
            let byte = self.bytes[self.head];
            self.head += 1;
            Ok(Some(byte))
        }
    }

    #[test]
    fn test_discard_pending_drains_fifo() {
        let mut fifo = Fifo {
            bytes: *b"AB\nCD\n\0\0",
            head: 0,
            len: 6,
        };
        assert_eq!(fifo.discard_pending(), Ok(6));
        assert_eq!(fifo.try_read_byte(), Ok(None));
    }

    #[test]
    fn test_default_config_is_115200_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 115200);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
        assert_eq!(UartConfig::with_baudrate(9600).baudrate, 9600);
    }
}
