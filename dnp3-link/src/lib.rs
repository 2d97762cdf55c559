//! Data link layer for the DNP3 protocol
//!
//! This crate turns one transport segment into one wire-ready link frame:
//! a fixed 10-byte header block (sync, length, control, addresses, header CRC)
//! followed by the user data split into CRC-protected blocks of at most
//! 16 bytes.
//!
//! Only the producing direction is implemented. Frames are never parsed here
//! and no link-layer confirmation or retry state is kept.

pub mod datalink;
pub mod error;

pub use datalink::*;
pub use error::{Dnp3Error, Dnp3Result};
