//! Frame renderer
//!
//! One render per loop iteration, in this order:
//!
//! 1. fade the whole frame (only on a fade tick)
//! 2. fill the region of every lit zone with its hue
//! 3. if exactly two marquee zones lit up this cycle, flood the whole
//!    frame with the blend of their hues
//! 4. derive the fixture color: pixel 0 while a bass zone is lit, else off

use marquee_protocol::{Zone, ZoneSet};

use crate::color::{blend_hue, fade_to_black_by, hue_to_rgb, Frame, Rgb, BLACK};
use crate::config::{AnimationConfig, BassHue};
use crate::link::ZoneTracker;
use crate::zone::{RegionHue, ZoneGeometry};

/// Number of same-cycle marquee edges that triggers the flash
const FLASH_EDGE_COUNT: usize = 2;

/// Stateless renderer over a fixed geometry and palette
#[derive(Debug, Clone)]
pub struct Renderer {
    geometry: ZoneGeometry,
    animation: AnimationConfig,
}

impl Renderer {
    pub fn new(geometry: ZoneGeometry, animation: AnimationConfig) -> Self {
        Self {
            geometry,
            animation,
        }
    }

    pub fn geometry(&self) -> &ZoneGeometry {
        &self.geometry
    }

    /// Render one cycle into `frame` and return the fixture color
    pub fn render(
        &self,
        frame: &mut Frame,
        zones: &ZoneTracker,
        edges: ZoneSet,
        fade: bool,
    ) -> Rgb {
        if fade {
            fade_to_black_by(frame, self.animation.fade_by);
        }
        self.fill_zones(frame, zones);
        self.flash(frame, zones, edges);
        self.fixture_color(frame, zones)
    }

    /// Fill the region of every lit zone with its hue
    pub fn fill_zones(&self, frame: &mut Frame, zones: &ZoneTracker) {
        let bass = self.bass_hue(zones);
        for zone in zones.active().iter() {
            let color = hue_to_rgb(self.zone_hue(zone, zones, bass));
            frame[self.geometry.range_for(zone)].fill(color);
        }
    }

    /// Flood the frame with the blend of two marquee zones that lit up
    /// together
    ///
    /// Returns true if the flash was drawn.
    pub fn flash(&self, frame: &mut Frame, zones: &ZoneTracker, edges: ZoneSet) -> bool {
        let marquee_edges = edges.intersection(ZoneSet::MARQUEE);
        if marquee_edges.len() != FLASH_EDGE_COUNT {
            return false;
        }

        let bass = self.bass_hue(zones);
        let mut hues = marquee_edges
            .iter()
            .map(|zone| self.zone_hue(zone, zones, bass));
        let (Some(first), Some(second)) = (hues.next(), hues.next()) else {
            return false;
        };

        let blended = blend_hue(first, second, self.animation.blend_amount);
        frame.fill(hue_to_rgb(blended));
        true
    }

    /// Fixture color for this frame
    pub fn fixture_color(&self, frame: &Frame, zones: &ZoneTracker) -> Rgb {
        if zones.active().intersects(ZoneSet::BASS) {
            frame[0]
        } else {
            BLACK
        }
    }

    /// Hue of a zone: its latched seed shifted by its region's offset, or
    /// the shared bass hue
    pub fn zone_hue(&self, zone: Zone, zones: &ZoneTracker, bass: u8) -> u8 {
        match self.geometry.region_for(zone).hue {
            RegionHue::Offset(offset) => zones.latched_seed(zone).wrapping_add(offset),
            RegionHue::Bass => bass,
        }
    }

    /// Shared hue of the bass regions
    pub fn bass_hue(&self, zones: &ZoneTracker) -> u8 {
        match self.animation.bass_hue {
            BassHue::Literal => zones.latched_seed(Zone::BassRight),
            BassHue::Intended => {
                if let Some(seed) = zones.seed(Zone::BassRight) {
                    seed.wrapping_add(self.animation.bass_right_offset)
                } else if let Some(seed) = zones.seed(Zone::BassLeft) {
                    seed.wrapping_add(self.animation.bass_left_offset)
                } else {
                    0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::STRIP_LEN;

    fn renderer() -> Renderer {
        Renderer::new(ZoneGeometry::default(), AnimationConfig::default())
    }

    fn tracker(bits: u8, hue: u8) -> ZoneTracker {
        let mut tracker = ZoneTracker::new();
        tracker.apply(ZoneSet::from_bits(bits), hue);
        tracker
    }

    #[test]
    fn test_single_zone_fill() {
        let renderer = renderer();
        let mut zones = tracker(0b00_0001, 10);
        let mut frame = [BLACK; STRIP_LEN];

        let edges = zones.take_edges();
        let fixture = renderer.render(&mut frame, &zones, edges, true);

        let expected = hue_to_rgb(10);
        assert!(frame[10..30].iter().all(|p| *p == expected));
        assert!(frame[..10].iter().all(|p| *p == BLACK));
        assert!(frame[30..].iter().all(|p| *p == BLACK));
        assert_eq!(fixture, BLACK);
    }

    #[test]
    fn test_region_offsets() {
        let renderer = renderer();
        let zones = tracker(0b00_1111, 10);
        assert_eq!(renderer.zone_hue(Zone::MarqueeUpLeft, &zones, 0), 10);
        assert_eq!(renderer.zone_hue(Zone::MarqueeUpRight, &zones, 0), 10 + 64);
        assert_eq!(renderer.zone_hue(Zone::MarqueeLowerLeft, &zones, 0), 10 + 96);
        assert_eq!(renderer.zone_hue(Zone::MarqueeLowerRight, &zones, 0), 10 + 160);
    }

    #[test]
    fn test_offset_wraps() {
        let renderer = renderer();
        let zones = tracker(0b00_1000, 200);
        assert_eq!(
            renderer.zone_hue(Zone::MarqueeLowerRight, &zones, 0),
            200u8.wrapping_add(160)
        );
    }

    #[test]
    fn test_bass_hue_intended() {
        let renderer = renderer();

        let left = tracker(0b01_0000, 20);
        assert_eq!(renderer.bass_hue(&left), 20 + 128);

        let right = tracker(0b10_0000, 20);
        assert_eq!(renderer.bass_hue(&right), 20u8.wrapping_add(224));

        let mut both = tracker(0b01_0000, 20);
        both.apply(ZoneSet::from_bits(0b11_0000), 30);
        assert_eq!(renderer.bass_hue(&both), 30u8.wrapping_add(224));

        let none = tracker(0b00_0001, 20);
        assert_eq!(renderer.bass_hue(&none), 0);
    }

    #[test]
    fn test_bass_hue_literal() {
        let animation = AnimationConfig {
            bass_hue: BassHue::Literal,
            ..AnimationConfig::default()
        };
        let renderer = Renderer::new(ZoneGeometry::default(), animation);

        // Left bass alone still takes the right seed, which is unset
        let left = tracker(0b01_0000, 20);
        assert_eq!(renderer.bass_hue(&left), 0);

        // Right seed is used raw, even after release
        let mut right = tracker(0b10_0000, 20);
        right.apply(ZoneSet::EMPTY, 40);
        assert_eq!(renderer.bass_hue(&right), 20);
    }

    #[test]
    fn test_fixture_mirrors_pixel_zero_with_bass() {
        let renderer = renderer();
        let mut zones = tracker(0b01_0000, 20);
        let mut frame = [BLACK; STRIP_LEN];

        let edges = zones.take_edges();
        let fixture = renderer.render(&mut frame, &zones, edges, false);

        assert_eq!(fixture, hue_to_rgb(20 + 128));
        assert_eq!(fixture, frame[0]);
    }

    #[test]
    fn test_fixture_follows_right_bass_from_pixel_zero() {
        let renderer = renderer();
        let zones = tracker(0b10_0000, 20);
        let mut frame = [BLACK; STRIP_LEN];
        frame[0] = Rgb { r: 9, g: 8, b: 7 };

        // Right bass lights the far end; the fixture still reads pixel 0
        let fixture = renderer.render(&mut frame, &zones, ZoneSet::EMPTY, false);
        assert_eq!(fixture, Rgb { r: 9, g: 8, b: 7 });
        assert!(frame[90..].iter().all(|p| *p == hue_to_rgb(20u8.wrapping_add(224))));
    }

    #[test]
    fn test_two_edges_flash_whole_strip() {
        let renderer = renderer();
        let mut zones = tracker(0b00_0011, 10);
        let mut frame = [BLACK; STRIP_LEN];

        let edges = zones.take_edges();
        renderer.render(&mut frame, &zones, edges, false);

        // UpLeft hue 10, UpRight hue 74, even blend lands on 42
        let expected = hue_to_rgb(42);
        assert!(frame.iter().all(|p| *p == expected));
    }

    #[test]
    fn test_other_edge_counts_do_not_flash() {
        let renderer = renderer();
        for bits in [0b00_0001u8, 0b00_0111, 0b00_1111] {
            let mut zones = tracker(bits, 10);
            let mut frame = [BLACK; STRIP_LEN];
            let edges = zones.take_edges();
            renderer.render(&mut frame, &zones, edges, false);

            // Bass regions are untouched, so no whole-strip flood
            assert_eq!(frame[0], BLACK);
            assert_eq!(frame[99], BLACK);
        }
    }

    #[test]
    fn test_bass_edges_do_not_count_toward_flash() {
        let renderer = renderer();
        let mut zones = tracker(0b11_0000, 10);
        let mut frame = [BLACK; STRIP_LEN];
        let edges = zones.take_edges();
        assert!(!renderer.flash(&mut frame, &zones, edges));
    }

    #[test]
    fn test_fill_overrides_fade() {
        let renderer = renderer();
        let zones = tracker(0b00_0001, 10);
        let lit = Rgb { r: 200, g: 200, b: 200 };
        let mut frame = [lit; STRIP_LEN];

        renderer.render(&mut frame, &zones, ZoneSet::EMPTY, true);

        assert!(frame[10..30].iter().all(|p| *p == hue_to_rgb(10)));
        let faded = Rgb { r: 152, g: 152, b: 152 };
        assert!(frame[..10].iter().all(|p| *p == faded));
        assert!(frame[30..].iter().all(|p| *p == faded));
    }
}
