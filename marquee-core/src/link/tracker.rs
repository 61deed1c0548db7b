//! Zone activation tracker
//!
//! Each decoded line overwrites the active set. A zone that was off on the
//! previous line and is on now has an edge: its hue seed is latched from
//! the color clock and held until the zone's next edge. Edges belong to
//! the render that follows the decode and are taken exactly once.

use marquee_protocol::{Zone, ZoneSet, ZONE_COUNT};

/// Activation state for the six zones
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneTracker {
    /// Zones lit by the most recent line
    active: ZoneSet,
    /// Off→on transitions from the most recent line, not yet rendered
    edges: ZoneSet,
    /// Hue latched at each zone's last edge
    seeds: [u8; ZONE_COUNT],
    /// Idle-flush already fired for the current all-active run
    flush_latched: bool,
}

impl ZoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a decoded line
    ///
    /// Latches `hue` as the seed of every zone that just turned on and
    /// returns those zones.
    pub fn apply(&mut self, zones: ZoneSet, hue: u8) -> ZoneSet {
        let rising = zones.rising_from(self.active);
        for zone in rising.iter() {
            self.seeds[zone.index()] = hue;
        }
        self.active = zones;
        self.edges = rising;
        rising
    }

    /// Zones lit by the most recent line
    pub fn active(&self) -> ZoneSet {
        self.active
    }

    pub fn is_active(&self, zone: Zone) -> bool {
        self.active.contains(zone)
    }

    /// Take the pending edges, leaving none
    pub fn take_edges(&mut self) -> ZoneSet {
        core::mem::take(&mut self.edges)
    }

    /// Pending edges without consuming them
    pub fn edges(&self) -> ZoneSet {
        self.edges
    }

    /// Seed of a zone while it is lit
    pub fn seed(&self, zone: Zone) -> Option<u8> {
        self.is_active(zone).then(|| self.seeds[zone.index()])
    }

    /// Last latched seed of a zone, lit or not
    ///
    /// Zero until the zone's first edge.
    pub fn latched_seed(&self, zone: Zone) -> u8 {
        self.seeds[zone.index()]
    }

    /// Returns true on the first check that finds all six zones lit
    ///
    /// Re-arms as soon as any zone is off.
    pub fn poll_idle_flush(&mut self) -> bool {
        if !self.active.is_all() {
            self.flush_latched = false;
            return false;
        }
        if self.flush_latched {
            return false;
        }
        self.flush_latched = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones(bits: u8) -> ZoneSet {
        ZoneSet::from_bits(bits)
    }

    #[test]
    fn test_edge_latches_seed() {
        let mut tracker = ZoneTracker::new();
        let edges = tracker.apply(zones(0b00_0001), 10);

        assert_eq!(edges, zones(0b00_0001));
        assert_eq!(tracker.seed(Zone::MarqueeUpLeft), Some(10));
        assert_eq!(tracker.seed(Zone::MarqueeUpRight), None);
    }

    #[test]
    fn test_seed_held_while_active() {
        let mut tracker = ZoneTracker::new();
        tracker.apply(zones(0b00_0001), 10);
        let edges = tracker.apply(zones(0b00_0001), 42);

        assert!(edges.is_empty());
        assert_eq!(tracker.seed(Zone::MarqueeUpLeft), Some(10));
    }

    #[test]
    fn test_seed_relatched_after_release() {
        let mut tracker = ZoneTracker::new();
        tracker.apply(zones(0b00_0001), 10);
        tracker.apply(zones(0b00_0000), 11);
        assert_eq!(tracker.seed(Zone::MarqueeUpLeft), None);
        assert_eq!(tracker.latched_seed(Zone::MarqueeUpLeft), 10);

        tracker.apply(zones(0b00_0001), 12);
        assert_eq!(tracker.seed(Zone::MarqueeUpLeft), Some(12));
    }

    #[test]
    fn test_edges_taken_once() {
        let mut tracker = ZoneTracker::new();
        tracker.apply(zones(0b00_0011), 0);
        assert_eq!(tracker.take_edges(), zones(0b00_0011));
        assert!(tracker.take_edges().is_empty());
        assert!(tracker.edges().is_empty());
    }

    #[test]
    fn test_new_line_replaces_pending_edges() {
        let mut tracker = ZoneTracker::new();
        tracker.apply(zones(0b00_0001), 0);
        tracker.apply(zones(0b00_0011), 1);
        assert_eq!(tracker.take_edges(), zones(0b00_0010));
    }

    #[test]
    fn test_idle_flush_fires_once_per_all_active_run() {
        let mut tracker = ZoneTracker::new();
        assert!(!tracker.poll_idle_flush());

        tracker.apply(ZoneSet::ALL, 0);
        assert!(tracker.poll_idle_flush());
        assert!(!tracker.poll_idle_flush());
        tracker.apply(ZoneSet::ALL, 0);
        assert!(!tracker.poll_idle_flush());

        tracker.apply(zones(0b01_1111), 0);
        assert!(!tracker.poll_idle_flush());

        tracker.apply(ZoneSet::ALL, 0);
        assert!(tracker.poll_idle_flush());
    }
}
