//! Frame sequence builder
//!
//! Runs a payload through the transport layer and wraps every resulting
//! segment in a link frame.
//!
//! # Usage Example
//!
//! ```
//! use dnp3::{FrameSequenceBuilder, TransportHeaderPolicy};
//!
//! let frames = FrameSequenceBuilder::new()
//!     .control_code(0xC4)
//!     .destination(10)
//!     .source(1)
//!     .transport_header(TransportHeaderPolicy::Always)
//!     .build(&[0xC0, 0x01, 0x3C, 0x02, 0x06])?;
//! assert_eq!(frames[0][10], 0xC0);
//! # Ok::<(), dnp3::Dnp3Error>(())
//! ```

use crate::config::LinkParameters;
use bytes::Bytes;
use dnp3_core::Dnp3Result;
use dnp3_link::{ControlField, HexDump, LinkAddress, LinkFrame};
use dnp3_transport::{FragmentParameters, Fragmenter, SegmentationMode, TransportHeaderPolicy};

/// Builder for the frames carrying one payload
///
/// Setters never fail; every value is checked in [`build`](Self::build),
/// which returns either all frames or an error, never a partial list.
#[derive(Debug, Clone, Default)]
pub struct FrameSequenceBuilder {
    params: LinkParameters,
}

impl FrameSequenceBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from loaded parameters
    pub fn from_parameters(params: LinkParameters) -> Self {
        Self { params }
    }

    /// Set the raw control octet
    pub fn control_code(mut self, control_code: u8) -> Self {
        self.params.control_code = control_code;
        self
    }

    /// Set the control octet from its fields
    pub fn control(mut self, control: ControlField) -> Self {
        self.params.control_code = control.to_byte();
        self
    }

    pub fn source(mut self, source: u32) -> Self {
        self.params.source = source;
        self
    }

    pub fn destination(mut self, destination: u32) -> Self {
        self.params.destination = destination;
        self
    }

    /// Set payload bytes per sequenced segment (1..=249)
    pub fn segment_capacity(mut self, capacity: usize) -> Self {
        self.params.fragment.segment_capacity = capacity;
        self
    }

    pub fn segmentation(mut self, mode: SegmentationMode) -> Self {
        self.params.fragment.mode = mode;
        self
    }

    pub fn transport_header(mut self, policy: TransportHeaderPolicy) -> Self {
        self.params.fragment.transport_header = policy;
        self
    }

    pub fn fragment_parameters(mut self, fragment: FragmentParameters) -> Self {
        self.params.fragment = fragment;
        self
    }

    /// Get the current parameters
    pub fn parameters(&self) -> &LinkParameters {
        &self.params
    }

    /// Build the frames for `data`, in transmission order
    ///
    /// # Errors
    /// - [`Dnp3Error::AddressOutOfRange`] for a source or destination above 65535
    /// - [`Dnp3Error::InvalidParameter`] for an unusable segment capacity
    /// - [`Dnp3Error::LengthOverflow`] if a segment does not fit the length octet
    ///
    /// [`Dnp3Error::AddressOutOfRange`]: dnp3_core::Dnp3Error::AddressOutOfRange
    /// [`Dnp3Error::InvalidParameter`]: dnp3_core::Dnp3Error::InvalidParameter
    /// [`Dnp3Error::LengthOverflow`]: dnp3_core::Dnp3Error::LengthOverflow
    pub fn build(&self, data: &[u8]) -> Dnp3Result<Vec<Bytes>> {
        let destination =
            LinkAddress::checked("destination", i64::from(self.params.destination))?;
        let source = LinkAddress::checked("source", i64::from(self.params.source))?;
        let fragmenter = Fragmenter::new(self.params.fragment)?;

        let segments = fragmenter.fragment(Bytes::copy_from_slice(data));
        let count = segments.len();

        segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| -> Dnp3Result<Bytes> {
                let frame = LinkFrame::new(
                    self.params.control_code,
                    destination,
                    source,
                    segment.into_bytes(),
                )?;
                let encoded = frame.encode();
                log::trace!(
                    "Frame {}/{}: {}\n{}",
                    index + 1,
                    count,
                    frame,
                    HexDump(&encoded)
                );
                Ok(encoded)
            })
            .collect()
    }
}

/// Build the frames for `data` with default segmentation
///
/// Equivalent to a [`FrameSequenceBuilder`] with only the control code and
/// addresses set.
pub fn build_frames(
    data: &[u8],
    control_code: u8,
    source: u32,
    destination: u32,
) -> Dnp3Result<Vec<Bytes>> {
    FrameSequenceBuilder::new()
        .control_code(control_code)
        .source(source)
        .destination(destination)
        .build(data)
}
