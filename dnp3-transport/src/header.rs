//! Transport header (sequence byte)

use std::fmt;

/// Final segment of a message
pub const FIN: u8 = 0x80;

/// First segment of a message
pub const FIR: u8 = 0x40;

/// Rolling sequence number bits
pub const SEQUENCE_MASK: u8 = 0x3F;

/// Sequence modulus
const SEQUENCE_MODULUS: usize = 64;

/// One-octet transport header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransportHeader {
    sequence: u8,
    first: bool,
    last: bool,
}

impl TransportHeader {
    /// Header for the segment at `index`; the sequence wraps modulo 64
    pub fn new(index: usize, first: bool, last: bool) -> Self {
        Self {
            sequence: (index % SEQUENCE_MODULUS) as u8,
            first,
            last,
        }
    }

    pub fn from_byte(value: u8) -> Self {
        Self {
            sequence: value & SEQUENCE_MASK,
            first: value & FIR != 0,
            last: value & FIN != 0,
        }
    }

    pub fn to_byte(&self) -> u8 {
        let mut value = self.sequence;
        if self.first {
            value |= FIR;
        }
        if self.last {
            value |= FIN;
        }
        value
    }

    /// Get the 6-bit sequence number
    pub fn sequence(&self) -> u8 {
        self.sequence
    }

    /// Check if FIR is set
    pub fn is_first(&self) -> bool {
        self.first
    }

    /// Check if FIN is set
    pub fn is_last(&self) -> bool {
        self.last
    }
}

impl fmt::Display for TransportHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seq={} fir={} fin={}",
            self.sequence, self.first as u8, self.last as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert_eq!(TransportHeader::new(0, true, false).to_byte(), 0x40);
        assert_eq!(TransportHeader::new(1, false, true).to_byte(), 0x81);
        assert_eq!(TransportHeader::new(0, true, true).to_byte(), 0xC0);
        assert_eq!(TransportHeader::new(5, false, false).to_byte(), 0x05);
    }

    #[test]
    fn test_sequence_wraps() {
        assert_eq!(TransportHeader::new(63, false, false).sequence(), 63);
        assert_eq!(TransportHeader::new(64, false, false).sequence(), 0);
        assert_eq!(TransportHeader::new(130, false, true).to_byte(), 0x82);
    }

    #[test]
    fn test_from_byte() {
        let header = TransportHeader::from_byte(0xC7);
        assert!(header.is_first());
        assert!(header.is_last());
        assert_eq!(header.sequence(), 7);
        assert_eq!(header.to_byte(), 0xC7);
    }
}
