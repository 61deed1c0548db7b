//! Configuration type definitions
//!
//! Defaults reproduce the stock cabinet: 115200 baud, a 20 ms color
//! clock and fade, a 1 s heartbeat, and the stock six-region layout.

use heapless::String;

use crate::zone::{GeometryError, ZoneGeometry};

/// Maximum heartbeat text length
pub const MAX_HEARTBEAT_LEN: usize = 16;

/// Bass hue selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BassHue {
    /// Right bass seed if right is lit, else left bass seed, else hue 0,
    /// each with its own offset
    #[default]
    Intended,
    /// Right bass seed, unconditionally and without offset, as the first
    /// cabinet firmware rendered it
    Literal,
}

/// Serial link configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Heartbeat period in milliseconds
    pub heartbeat_ms: u32,
    /// Heartbeat text, sent followed by CRLF
    pub heartbeat_text: String<MAX_HEARTBEAT_LEN>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        let mut heartbeat_text = String::new();
        let _ = heartbeat_text.push_str("alive");
        Self {
            baudrate: 115200,
            heartbeat_ms: 1000,
            heartbeat_text,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationConfig {
    /// Color clock period in milliseconds
    pub clock_period_ms: u32,
    /// Fade period in milliseconds
    pub fade_period_ms: u32,
    /// Fade amount per period (0-255)
    pub fade_by: u8,
    /// Weight of the second hue in the two-zone flash (128 = even)
    pub blend_amount: u8,
    /// Bass hue selection
    pub bass_hue: BassHue,
    /// Hue offset applied to the left bass seed
    pub bass_left_offset: u8,
    /// Hue offset applied to the right bass seed
    pub bass_right_offset: u8,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            clock_period_ms: 20,
            fade_period_ms: 20,
            fade_by: 60,
            blend_amount: 128,
            bass_hue: BassHue::Intended,
            bass_left_offset: 128,
            bass_right_offset: 224,
        }
    }
}

/// Complete lighting configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightConfig {
    pub link: LinkConfig,
    pub animation: AnimationConfig,
    pub geometry: ZoneGeometry,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// A period of zero would fire every iteration
    ZeroPeriod,
    /// Strip geometry is invalid
    Geometry(GeometryError),
}

impl From<GeometryError> for ValidationError {
    fn from(e: GeometryError) -> Self {
        ValidationError::Geometry(e)
    }
}

impl LightConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check timing values
    ///
    /// Geometry is validated when it is built.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.link.heartbeat_ms == 0
            || self.animation.clock_period_ms == 0
            || self.animation.fade_period_ms == 0
        {
            return Err(ValidationError::ZeroPeriod);
        }
        Ok(())
    }
}
