//! Zone state tracking for the inbound lights link
//!
//! Turns the stream of decoded zone sets into per-zone activation edges,
//! latched hue seeds, and the idle-flush trigger.

pub mod tracker;

pub use tracker::ZoneTracker;
