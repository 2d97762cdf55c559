//! DNP3 frame builder
//!
//! Turns an arbitrary application payload into the ordered list of
//! wire-ready DNP3 link frames that carry it.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `dnp3-core`: Error handling shared by every layer
//! - `dnp3-transport`: Segmentation and the transport sequence byte
//! - `dnp3-link`: Link header, CRC blocks, addressing, hex dump
//! - `dnp3`: This crate, tying the layers together
//!
//! Building is stateless and synchronous: nothing is transmitted, received
//! or parsed, and no link-layer confirmation is tracked.
//!
//! # Usage
//!
//! ```
//! use dnp3::{build_frames, FrameSequenceBuilder, SegmentationMode};
//!
//! let frames = build_frames(&[0xC0, 0x01], 0x44, 1024, 1)?;
//! assert_eq!(frames.len(), 1);
//!
//! let frames = FrameSequenceBuilder::new()
//!     .control_code(0xC4)
//!     .source(1)
//!     .destination(1024)
//!     .segmentation(SegmentationMode::Legacy)
//!     .build(&[0u8; 600])?;
//! assert_eq!(frames.len(), 3);
//! # Ok::<(), dnp3::Dnp3Error>(())
//! ```

pub mod builder;
pub mod config;

pub use builder::{build_frames, FrameSequenceBuilder};
pub use config::LinkParameters;

// Re-export core types
pub use dnp3_core::{Dnp3Error, Dnp3Result};
pub use dnp3_link::{format_frame, ControlField, HexDump, LinkAddress, LinkFrame};
pub use dnp3_transport::{
    FragmentParameters, Fragmenter, Segment, SegmentationMode, TransportHeader,
    TransportHeaderPolicy,
};

// Re-export layer APIs
pub mod link {
    pub use dnp3_link::*;
}

pub mod transport {
    pub use dnp3_transport::*;
}
