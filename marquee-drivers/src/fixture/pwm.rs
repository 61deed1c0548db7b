//! PWM RGB fixture
//!
//! Three PWM channels, one per color. An 8-bit channel value maps onto the
//! channel's full duty range, so 255 is always 100% whatever the PWM top.

use embedded_hal::pwm::SetDutyCycle;
use marquee_core::traits::{FixtureError, RgbFixture};
use marquee_core::Rgb;

/// Fixture driven by three PWM channels
pub struct PwmFixture<R, G, B> {
    red: R,
    green: G,
    blue: B,
    /// If true, channel full on = duty 0 (common-anode wiring)
    inverted: bool,
    color: Rgb,
}

impl<R, G, B> PwmFixture<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a fixture and switch it off
    ///
    /// A channel that fails to switch off here is ignored; the next
    /// `set_rgb` reports its own errors.
    pub fn new(red: R, green: G, blue: B, inverted: bool) -> Self {
        let mut fixture = Self {
            red,
            green,
            blue,
            inverted,
            color: Rgb::default(),
        };
        let _ = fixture.off();
        fixture
    }

    /// Fixture with active-high channels
    pub fn new_common_cathode(red: R, green: G, blue: B) -> Self {
        Self::new(red, green, blue, false)
    }

    /// Fixture with active-low channels
    pub fn new_common_anode(red: R, green: G, blue: B) -> Self {
        Self::new(red, green, blue, true)
    }

    /// Last color written
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Give back the three channels
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn level(&self, value: u8) -> u16 {
        let value = if self.inverted { 255 - value } else { value };
        u16::from(value)
    }
}

impl<R, G, B> RgbFixture for PwmFixture<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_rgb(&mut self, color: Rgb) -> Result<(), FixtureError> {
        let (r, g, b) = (self.level(color.r), self.level(color.g), self.level(color.b));
        self.red
            .set_duty_cycle_fraction(r, 255)
            .map_err(|_| FixtureError::Channel)?;
        self.green
            .set_duty_cycle_fraction(g, 255)
            .map_err(|_| FixtureError::Channel)?;
        self.blue
            .set_duty_cycle_fraction(b, 255)
            .map_err(|_| FixtureError::Channel)?;
        self.color = color;
        Ok(())
    }
}
