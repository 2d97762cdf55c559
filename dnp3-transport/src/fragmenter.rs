//! Segmentation of application payloads into transport segments
//!
//! A payload that fits one link frame is passed through untouched. Longer
//! payloads are cut into slices of `segment_capacity` bytes, each prefixed
//! with a [`TransportHeader`] carrying the rolling sequence number and the
//! FIR/FIN boundary flags.

use crate::error::{Dnp3Error, Dnp3Result};
use crate::header::TransportHeader;
use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

/// Payload bytes per sequenced segment (250 minus the header octet)
pub const DEFAULT_SEGMENT_CAPACITY: usize = 249;

/// Largest payload slice that still fits a link frame with its header octet
pub const MAX_SEGMENT_CAPACITY: usize = 249;

/// How the number of segments is derived from the payload length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationMode {
    /// Count segments with the slicing step, so every payload byte is sent
    #[default]
    Contiguous,
    /// Count with `capacity + 1` but slice with `capacity`, as the legacy
    /// frame tool does. Some lengths lose their trailing bytes. Cannot be
    /// combined with [`TransportHeaderPolicy::Always`].
    Legacy,
}

/// When a segment receives a transport header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportHeaderPolicy {
    /// Only when the payload spans more than one segment
    #[default]
    MultiSegmentOnly,
    /// On every segment, including a lone FIR|FIN segment
    Always,
}

/// Segmentation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentParameters {
    /// Payload bytes per sequenced segment, 1..=249
    pub segment_capacity: usize,
    pub mode: SegmentationMode,
    pub transport_header: TransportHeaderPolicy,
}

impl Default for FragmentParameters {
    fn default() -> Self {
        Self {
            segment_capacity: DEFAULT_SEGMENT_CAPACITY,
            mode: SegmentationMode::default(),
            transport_header: TransportHeaderPolicy::default(),
        }
    }
}

impl FragmentParameters {
    /// Check the parameters are usable
    pub fn validate(&self) -> Dnp3Result<()> {
        if self.segment_capacity == 0 || self.segment_capacity > MAX_SEGMENT_CAPACITY {
            return Err(Dnp3Error::InvalidParameter(format!(
                "segment capacity {} is outside 1..={}",
                self.segment_capacity, MAX_SEGMENT_CAPACITY
            )));
        }
        if self.mode == SegmentationMode::Legacy
            && self.transport_header == TransportHeaderPolicy::Always
        {
            return Err(Dnp3Error::InvalidParameter(
                "legacy segmentation only sequences multi-segment payloads".to_string(),
            ));
        }
        Ok(())
    }
}

/// One transport segment, the user data of exactly one link frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    sequenced: bool,
    bytes: Bytes,
}

impl Segment {
    fn unsequenced(payload: Bytes) -> Self {
        Self {
            sequenced: false,
            bytes: payload,
        }
    }

    fn sequenced(header: TransportHeader, payload: &[u8]) -> Self {
        let mut buf = BytesMut::with_capacity(1 + payload.len());
        buf.put_u8(header.to_byte());
        buf.put_slice(payload);
        Self {
            sequenced: true,
            bytes: buf.freeze(),
        }
    }

    /// Transport header, if one was prepended
    pub fn header(&self) -> Option<TransportHeader> {
        self.sequenced.then(|| TransportHeader::from_byte(self.bytes[0]))
    }

    /// Encoded segment, header octet included
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Application payload carried by this segment
    pub fn payload(&self) -> &[u8] {
        if self.sequenced {
            &self.bytes[1..]
        } else {
            &self.bytes
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// Stateless payload segmenter
#[derive(Debug, Clone, Copy, Default)]
pub struct Fragmenter {
    params: FragmentParameters,
}

impl Fragmenter {
    /// Create a fragmenter, validating `params`
    pub fn new(params: FragmentParameters) -> Dnp3Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Get the parameters in use
    pub fn parameters(&self) -> &FragmentParameters {
        &self.params
    }

    /// Number of segments a payload of `len` bytes produces
    pub fn segment_count(&self, len: usize) -> usize {
        let capacity = self.params.segment_capacity;
        let count = match (self.params.mode, self.params.transport_header) {
            (SegmentationMode::Legacy, _) => len.div_ceil(capacity + 1),
            (SegmentationMode::Contiguous, TransportHeaderPolicy::MultiSegmentOnly)
                if len <= capacity + 1 =>
            {
                1
            }
            (SegmentationMode::Contiguous, _) => len.div_ceil(capacity),
        };
        // an empty payload still yields one (empty) segment
        count.max(1)
    }

    /// Split `data` into ordered segments
    pub fn fragment(&self, data: impl Into<Bytes>) -> Vec<Segment> {
        let data = data.into();
        let count = self.segment_count(data.len());

        let sequenced =
            count > 1 || self.params.transport_header == TransportHeaderPolicy::Always;
        if !sequenced {
            log::debug!("Payload of {} bytes fits one segment", data.len());
            return vec![Segment::unsequenced(data)];
        }

        let capacity = self.params.segment_capacity;
        let segments: Vec<Segment> = (0..count)
            .map(|index| {
                let start = (index * capacity).min(data.len());
                let end = ((index + 1) * capacity).min(data.len());
                let header = TransportHeader::new(index, index == 0, index == count - 1);
                Segment::sequenced(header, &data[start..end])
            })
            .collect();

        log::debug!(
            "Fragmented {} bytes into {} segments ({:?})",
            data.len(),
            count,
            self.params.mode
        );
        let carried = (count * capacity).min(data.len());
        if carried < data.len() {
            log::warn!(
                "Legacy segmentation dropped {} trailing payload bytes",
                data.len() - carried
            );
        }

        segments
    }
}

/// Split `data` with the default mode and header policy
pub fn fragment(data: &[u8], segment_capacity: usize) -> Dnp3Result<Vec<Segment>> {
    let fragmenter = Fragmenter::new(FragmentParameters {
        segment_capacity,
        ..FragmentParameters::default()
    })?;
    Ok(fragmenter.fragment(Bytes::copy_from_slice(data)))
}
