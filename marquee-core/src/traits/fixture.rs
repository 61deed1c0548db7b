//! Analog RGB fixture trait

use crate::color::Rgb;

/// Errors from a fixture output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixtureError {
    /// A channel rejected its duty cycle
    Channel,
}

/// A single-color fixture driven by three dimmable channels
///
/// Each channel is 8-bit: 0 is off, 255 is full on.
pub trait RgbFixture {
    /// Drive all three channels
    fn set_rgb(&mut self, color: Rgb) -> Result<(), FixtureError>;

    /// Turn every channel off
    fn off(&mut self) -> Result<(), FixtureError> {
        self.set_rgb(Rgb::default())
    }
}
