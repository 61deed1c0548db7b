//! Marquee Hardware Abstraction Layer
//!
//! This crate defines the serial link traits the lighting controller is
//! written against. Chip-specific glue (see `marquee-drivers`) adapts the
//! concrete UART peripheral to them, so the controller logic can be driven
//! by a test double on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Controller (marquee-core)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  marquee-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  marquee-drivers (embedded-io adapter)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

// Re-export key traits at crate root for convenience
pub use uart::{DataBits, ErrorType, Parity, StopBits, Uart, UartConfig, UartRx, UartTx};
