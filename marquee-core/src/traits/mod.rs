//! Output traits
//!
//! Implemented by drivers for the hardware the controller lights.

pub mod fixture;

pub use fixture::{FixtureError, RgbFixture};
