//! Polled serial link over `embedded-io`
//!
//! Adapts any blocking `embedded-io` port with readiness reporting (such as
//! a buffered UART) to the link traits the controller expects. A read only
//! happens when the port says a byte is ready, so the loop never waits on
//! inbound data.

use embedded_io::{Error as _, ErrorKind, Read, ReadReady, Write};
use marquee_hal::{ErrorType, UartRx, UartTx};

/// Serial link over an `embedded-io` port
pub struct IoUart<T> {
    port: T,
}

impl<T> IoUart<T> {
    pub fn new(port: T) -> Self {
        Self { port }
    }

    /// Give back the underlying port
    pub fn release(self) -> T {
        self.port
    }
}

impl<T: embedded_io::ErrorType> ErrorType for IoUart<T> {
    type Error = ErrorKind;
}

impl<T: Write> UartTx for IoUart<T> {
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), ErrorKind> {
        self.port.write_all(data).map_err(|e| e.kind())
    }

    fn flush(&mut self) -> Result<(), ErrorKind> {
        self.port.flush().map_err(|e| e.kind())
    }
}

impl<T: Read + ReadReady> UartRx for IoUart<T> {
    fn try_read_byte(&mut self) -> Result<Option<u8>, ErrorKind> {
        if !self.port.read_ready().map_err(|e| e.kind())? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        match self.port.read(&mut byte).map_err(|e| e.kind())? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}
