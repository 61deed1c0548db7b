//! Board-agnostic core logic for the cabinet lighting firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - 8-bit color math (fade, hue blend, HSV conversion)
//! - Fixed-cadence timers and the rotating color clock
//! - Zone tracking (edges, hue seeds, idle-flush latch)
//! - Strip geometry and the frame renderer
//! - The single-loop controller tying link and renderer together
//! - Configuration types and the `lights.toml` parser
//! - Output traits implemented by drivers

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod controller;
pub mod link;
pub mod render;
pub mod timing;
pub mod traits;
pub mod zone;

pub use color::{Frame, Rgb, STRIP_LEN};
pub use config::LightConfig;
pub use controller::{Controller, Cycle};
