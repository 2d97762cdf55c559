//! Transport layer module for the DNP3 protocol
//!
//! This crate splits an application payload into segments small enough for
//! one link frame each, prefixing a sequence byte when the payload spans
//! more than one segment.

pub mod error;
pub mod fragmenter;
pub mod header;

pub use error::{Dnp3Error, Dnp3Result};
pub use fragmenter::{
    fragment, FragmentParameters, Fragmenter, Segment, SegmentationMode, TransportHeaderPolicy,
    DEFAULT_SEGMENT_CAPACITY, MAX_SEGMENT_CAPACITY,
};
pub use header::TransportHeader;
