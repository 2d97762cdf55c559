use thiserror::Error;

/// Main error type for DNP3 frame building
///
/// Every variant describes a caller-supplied parameter that cannot be put on
/// the wire as given. No variant is retryable; nothing is ever returned
/// half-built alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Dnp3Error {
    #[error("{field} address {value} is out of range 0..=65535")]
    AddressOutOfRange { field: &'static str, value: i64 },

    #[error("Segment of {length} bytes overflows the length field (max {max})")]
    LengthOverflow { length: usize, max: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Dnp3Error {
    /// Whether this error is a range violation (address or length field)
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Dnp3Error::AddressOutOfRange { .. } | Dnp3Error::LengthOverflow { .. }
        )
    }
}

/// Result type alias for DNP3 operations
pub type Dnp3Result<T> = Result<T, Dnp3Error>;
