//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in marquee-core and marquee-hal:
//!
//! - PWM-dimmed RGB fixture (`embedded-hal` PWM channels)
//! - Polled serial link over any `embedded-io` port

#![no_std]
#![deny(unsafe_code)]

pub mod fixture;
pub mod serial;
