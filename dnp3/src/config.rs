//! Frame building configuration

use dnp3_link::OUTSTATION_UNCONFIRMED_USER_DATA;
use dnp3_transport::FragmentParameters;
use serde::{Deserialize, Serialize};

/// Parameters for turning a payload into link frames
///
/// Addresses are kept as plain integers so a configuration can be loaded
/// before it is checked; [`FrameSequenceBuilder::build`] rejects values
/// outside the 16-bit range.
///
/// # Default Settings
/// - Control code: 0x44 (outstation, unconfirmed user data)
/// - Source and destination: 0
/// - Segment capacity: 249, contiguous segmentation, sequence byte only
///   on multi-segment payloads
///
/// [`FrameSequenceBuilder::build`]: crate::FrameSequenceBuilder::build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkParameters {
    pub control_code: u8,
    pub source: u32,
    pub destination: u32,
    pub fragment: FragmentParameters,
}

impl Default for LinkParameters {
    fn default() -> Self {
        Self {
            control_code: OUTSTATION_UNCONFIRMED_USER_DATA,
            source: 0,
            destination: 0,
            fragment: FragmentParameters::default(),
        }
    }
}
