//! Single-loop lighting controller
//!
//! Owns every piece of runtime state. The firmware calls [`Controller::cycle`]
//! once per loop iteration with the current uptime and the serial link, then
//! pushes [`Controller::frame`] to the strip and the returned fixture color
//! to the PWM outputs.
//!
//! One cycle, in order:
//!
//! 1. advance the color clock
//! 2. send the heartbeat if due
//! 3. read at most one byte and feed it to the line decoder; a completed
//!    line updates the zone tracker with the current clock hue
//! 4. idle-flush the link the first cycle all six zones are lit
//! 5. take this cycle's edges, fade if due, and render

use heapless::String;
use marquee_hal::Uart;
use marquee_protocol::{LineDecoder, LineError, ZoneSet};

use crate::color::{Frame, Rgb, BLACK, STRIP_LEN};
use crate::config::{LightConfig, MAX_HEARTBEAT_LEN};
use crate::link::ZoneTracker;
use crate::render::Renderer;
use crate::timing::{Cadence, ColorClock};

/// Heartbeat line terminator
const HEARTBEAT_EOL: &[u8] = b"\r\n";

/// What happened during one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<E> {
    /// Byte read from the link
    pub byte: Option<u8>,
    /// Zone state decoded from a line completed this cycle
    pub decoded: Option<ZoneSet>,
    /// Zones that turned on with that line
    pub edges: ZoneSet,
    /// A line was terminated but dropped
    pub dropped: Option<LineError>,
    /// Heartbeat was sent
    pub heartbeat: bool,
    /// Inbound data was discarded and the outbound side drained
    pub flushed: bool,
    /// Frame was faded
    pub faded: bool,
    /// Color for the analog fixture
    pub fixture: Rgb,
    /// First link error of the cycle
    pub error: Option<E>,
}

impl<E> Cycle<E> {
    fn new() -> Self {
        Self {
            byte: None,
            decoded: None,
            edges: ZoneSet::EMPTY,
            dropped: None,
            heartbeat: false,
            flushed: false,
            faded: false,
            fixture: BLACK,
            error: None,
        }
    }

    /// Keep the value of `result`, or remember its error if none is recorded
    fn record<T>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.error.get_or_insert(e);
                None
            }
        }
    }
}

/// Lighting controller state
#[derive(Debug, Clone)]
pub struct Controller {
    decoder: LineDecoder,
    zones: ZoneTracker,
    clock: ColorClock,
    fade: Cadence,
    heartbeat: Cadence,
    heartbeat_text: String<MAX_HEARTBEAT_LEN>,
    renderer: Renderer,
    frame: Frame,
}

impl Controller {
    /// Create a controller whose cadences start at `now_ms`
    pub fn new(config: &LightConfig, now_ms: u32) -> Self {
        let animation = config.animation;
        Self {
            decoder: LineDecoder::new(),
            zones: ZoneTracker::new(),
            clock: ColorClock::new(animation.clock_period_ms, now_ms),
            fade: Cadence::new(animation.fade_period_ms, now_ms),
            heartbeat: Cadence::new(config.link.heartbeat_ms, now_ms),
            heartbeat_text: config.link.heartbeat_text.clone(),
            renderer: Renderer::new(config.geometry.clone(), animation),
            frame: [BLACK; STRIP_LEN],
        }
    }

    /// Run one loop iteration
    pub fn cycle<L: Uart>(&mut self, now_ms: u32, link: &mut L) -> Cycle<L::Error> {
        let mut report = Cycle::new();

        self.clock.poll(now_ms);

        if self.heartbeat.poll(now_ms) {
            report.heartbeat = report
                .record(link.write_blocking(self.heartbeat_text.as_bytes()))
                .is_some()
                && report.record(link.write_blocking(HEARTBEAT_EOL)).is_some();
        }

        if let Some(Some(byte)) = report.record(link.try_read_byte()) {
            report.byte = Some(byte);
            match self.decoder.feed(byte) {
                Ok(Some(zones)) => {
                    self.zones.apply(zones, self.clock.hue());
                    report.decoded = Some(zones);
                }
                Ok(None) => {}
                Err(e) => report.dropped = Some(e),
            }
        }

        if self.zones.poll_idle_flush() {
            let discarded = report.record(link.discard_pending());
            let drained = report.record(link.flush());
            report.flushed = discarded.is_some() && drained.is_some();
        }

        report.edges = self.zones.take_edges();
        report.faded = self.fade.poll(now_ms);
        report.fixture =
            self.renderer
                .render(&mut self.frame, &self.zones, report.edges, report.faded);

        report
    }

    /// Current strip contents
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Zones lit by the most recent line
    pub fn zones(&self) -> ZoneSet {
        self.zones.active()
    }

    /// Zone tracker, for seeds and edges
    pub fn tracker(&self) -> &ZoneTracker {
        &self.zones
    }

    /// Current color clock hue
    pub fn hue(&self) -> u8 {
        self.clock.hue()
    }
}
