//! Serial Lights Protocol
//!
//! This crate defines the line protocol between the rhythm game (upstream
//! sender) and the cabinet lighting controller. The game writes one ASCII
//! line per lighting update:
//!
//! ```text
//! ┌────────────┬──────────────────────┬────────┐
//! │ SEXTET     │ IGNORED              │ '\n'   │
//! │ 1B         │ 0–99B                │ 1B     │
//! └────────────┴──────────────────────┴────────┘
//! ```
//!
//! Only the low 6 bits of the first byte carry data: bit `i` set means
//! zone `i` is lit. There is no acknowledgement and no checksum; a line
//! that cannot be decoded is dropped and the next terminator resyncs.

#![no_std]
#![deny(unsafe_code)]

pub mod line;
pub mod sextet;
pub mod zone;

pub use line::{LineDecoder, LineError, LINE_CAPACITY, LINE_TERMINATOR};
pub use sextet::{decode_sextet, encode_line, encode_sextet, SEXTET_MASK};
pub use zone::{Zone, ZoneSet, ZONE_COUNT};
