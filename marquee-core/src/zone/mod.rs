//! Strip geometry
//!
//! Maps logical zones onto contiguous pixel regions of the strip.

pub mod geometry;

pub use geometry::{GeometryError, Region, RegionHue, ZoneGeometry, REGION_COUNT};
