//! Fixed-cadence timers
//!
//! The control loop never sleeps on a timer. Each cadence keeps the time
//! it last fired and is polled once per loop iteration with the current
//! uptime, so it fires at most once per iteration however late the loop
//! runs.

/// A fixed-period trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cadence {
    period_ms: u32,
    last_ms: u32,
}

impl Cadence {
    /// Create a cadence whose first period starts at `now_ms`
    pub fn new(period_ms: u32, now_ms: u32) -> Self {
        Self {
            period_ms,
            last_ms: now_ms,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Returns true (once) when a full period has elapsed since the last fire
    ///
    /// Uptime is compared with wrapping arithmetic, so the `u32`
    /// millisecond counter rolling over is harmless.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_ms) >= self.period_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Free-running 8-bit hue counter
///
/// Advances by one every period and wraps. Nothing resets it; zones sample
/// it when they light up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorClock {
    hue: u8,
    cadence: Cadence,
}

impl ColorClock {
    pub fn new(period_ms: u32, now_ms: u32) -> Self {
        Self {
            hue: 0,
            cadence: Cadence::new(period_ms, now_ms),
        }
    }

    /// Current hue
    pub fn hue(&self) -> u8 {
        self.hue
    }

    /// Advance the clock if its period has elapsed
    ///
    /// Returns true if the hue changed.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if self.cadence.poll(now_ms) {
            self.hue = self.hue.wrapping_add(1);
            true
        } else {
            false
        }
    }
}
