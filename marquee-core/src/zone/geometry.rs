//! Zone to pixel-region mapping
//!
//! The strip is cut into six contiguous regions. Each logical zone lights
//! exactly one region, and each region has a hue rule. Regions must be
//! disjoint and together cover every pixel of the strip.

use core::ops::Range;

use marquee_protocol::{Zone, ZONE_COUNT};

use crate::color::STRIP_LEN;

/// Number of physical regions on the strip
pub const REGION_COUNT: usize = ZONE_COUNT;

/// How a region derives its hue from the zone seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegionHue {
    /// Zone seed plus a fixed offset around the wheel
    Offset(u8),
    /// Shared hue of the bass zones
    Bass,
}

/// A contiguous run of pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    /// First pixel
    pub start: u8,
    /// Number of pixels
    pub length: u8,
    /// Hue rule
    pub hue: RegionHue,
}

impl Region {
    pub const fn new(start: u8, length: u8, hue: RegionHue) -> Self {
        Self { start, length, hue }
    }

    /// Pixel index range covered by this region
    pub fn range(&self) -> Range<usize> {
        let start = usize::from(self.start);
        start..start + usize::from(self.length)
    }
}

/// Geometry validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Region has no pixels
    EmptyRegion(u8),
    /// Region extends past the end of the strip
    OutOfBounds(u8),
    /// Region shares pixels with an earlier region
    Overlap(u8),
    /// Pixel not covered by any region
    Gap(u8),
    /// Zone mapped to a region index that does not exist
    MappingOutOfRange(u8),
    /// Two zones mapped to the same region
    DuplicateMapping(u8),
}

/// Validated strip geometry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneGeometry {
    regions: [Region; REGION_COUNT],
    /// Region index for each logical zone
    mapping: [u8; ZONE_COUNT],
}

impl Default for ZoneGeometry {
    /// Cabinet layout: bass ends, four marquee quadrants between them
    fn default() -> Self {
        Self {
            regions: [
                Region::new(0, 10, RegionHue::Bass),
                Region::new(10, 20, RegionHue::Offset(0)),
                Region::new(30, 20, RegionHue::Offset(160)),
                Region::new(50, 20, RegionHue::Offset(64)),
                Region::new(70, 20, RegionHue::Offset(96)),
                Region::new(90, 10, RegionHue::Bass),
            ],
            mapping: [1, 3, 4, 2, 0, 5],
        }
    }
}

impl ZoneGeometry {
    /// Build a geometry, checking the regions tile the strip exactly and the
    /// mapping is a permutation
    pub fn new(
        regions: [Region; REGION_COUNT],
        mapping: [u8; ZONE_COUNT],
    ) -> Result<Self, GeometryError> {
        let mut covered = [false; STRIP_LEN];

        for (index, region) in regions.iter().enumerate() {
            let index = index as u8;
            if region.length == 0 {
                return Err(GeometryError::EmptyRegion(index));
            }
            let range = region.range();
            if range.end > STRIP_LEN {
                return Err(GeometryError::OutOfBounds(index));
            }
            for pixel in &mut covered[range] {
                if *pixel {
                    return Err(GeometryError::Overlap(index));
                }
                *pixel = true;
            }
        }

        if let Some(gap) = covered.iter().position(|pixel| !pixel) {
            return Err(GeometryError::Gap(gap as u8));
        }

        let mut claimed = [false; REGION_COUNT];
        for &region in &mapping {
            let slot = claimed
                .get_mut(usize::from(region))
                .ok_or(GeometryError::MappingOutOfRange(region))?;
            if *slot {
                return Err(GeometryError::DuplicateMapping(region));
            }
            *slot = true;
        }

        Ok(Self { regions, mapping })
    }

    /// Region lit by a zone
    pub fn region_for(&self, zone: Zone) -> &Region {
        &self.regions[usize::from(self.mapping[zone.index()])]
    }

    /// Pixel range lit by a zone
    pub fn range_for(&self, zone: Zone) -> Range<usize> {
        self.region_for(zone).range()
    }

    pub fn regions(&self) -> &[Region; REGION_COUNT] {
        &self.regions
    }

    pub fn mapping(&self) -> &[u8; ZONE_COUNT] {
        &self.mapping
    }
}
