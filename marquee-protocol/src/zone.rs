//! Logical lighting zones
//!
//! Zone order follows the game's cabinet light order, which is also the
//! bit order on the wire.

use core::fmt;

/// Number of logical zones carried by one sextet
pub const ZONE_COUNT: usize = 6;

/// A logical lighting zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Zone {
    /// Marquee, upper left
    MarqueeUpLeft = 0,
    /// Marquee, upper right
    MarqueeUpRight = 1,
    /// Marquee, lower left
    MarqueeLowerLeft = 2,
    /// Marquee, lower right
    MarqueeLowerRight = 3,
    /// Bass neon, left
    BassLeft = 4,
    /// Bass neon, right
    BassRight = 5,
}

impl Zone {
    /// All zones in wire order
    pub const ALL: [Zone; ZONE_COUNT] = [
        Zone::MarqueeUpLeft,
        Zone::MarqueeUpRight,
        Zone::MarqueeLowerLeft,
        Zone::MarqueeLowerRight,
        Zone::BassLeft,
        Zone::BassRight,
    ];

    /// Bit index of this zone in a sextet
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a zone by bit index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns true for the two bass zones
    pub fn is_bass(self) -> bool {
        matches!(self, Zone::BassLeft | Zone::BassRight)
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of zones, stored as a 6-bit mask (bit `i` = zone `i`)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneSet(u8);

impl ZoneSet {
    const MASK: u8 = (1 << ZONE_COUNT) - 1;

    /// No zones
    pub const EMPTY: ZoneSet = ZoneSet(0);

    /// Every zone
    pub const ALL: ZoneSet = ZoneSet(Self::MASK);

    /// The four marquee zones
    pub const MARQUEE: ZoneSet = ZoneSet(0b00_1111);

    /// The two bass zones
    pub const BASS: ZoneSet = ZoneSet(0b11_0000);

    /// Build a set from raw bits; bits above zone 5 are dropped
    pub const fn from_bits(bits: u8) -> Self {
        ZoneSet(bits & Self::MASK)
    }

    /// Raw 6-bit mask
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, zone: Zone) -> bool {
        self.0 & zone.bit() != 0
    }

    pub fn insert(&mut self, zone: Zone) {
        self.0 |= zone.bit();
    }

    pub fn remove(&mut self, zone: Zone) {
        self.0 &= !zone.bit();
    }

    /// Builder-style insert
    pub fn with(mut self, zone: Zone) -> Self {
        self.insert(zone);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true when all six zones are set
    pub fn is_all(self) -> bool {
        self.0 == Self::MASK
    }

    /// Number of zones in the set
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn intersection(self, other: ZoneSet) -> ZoneSet {
        ZoneSet(self.0 & other.0)
    }

    pub fn intersects(self, other: ZoneSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Zones set in `self` but not in `previous` (off→on transitions)
    pub fn rising_from(self, previous: ZoneSet) -> ZoneSet {
        ZoneSet(self.0 & !previous.0)
    }

    /// Iterate the zones in the set in wire order
    pub fn iter(self) -> impl Iterator<Item = Zone> {
        Zone::ALL.into_iter().filter(move |zone| self.contains(*zone))
    }
}

impl fmt::Debug for ZoneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneSet({:06b})", self.0)
    }
}
