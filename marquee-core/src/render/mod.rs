//! Frame rendering
//!
//! Turns zone state into pixels: fade, per-zone fill, the two-zone flash,
//! and the fixture color.

pub mod renderer;

pub use renderer::Renderer;
