//! DNP3 link frame structure and encoding

use crate::datalink::address::LinkAddress;
use crate::datalink::checksum::{crc_value, CRC_LENGTH};
use crate::datalink::control::ControlField;
use crate::error::{Dnp3Error, Dnp3Result};
use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;

/// Start octets, constant for every frame
pub const SYNC: [u8; 2] = [0x05, 0x64];

/// Header bytes covered by the header CRC: sync, length, control, addresses
pub const HEADER_LENGTH: usize = 8;

/// Header plus its CRC
pub const HEADER_BLOCK_LENGTH: usize = HEADER_LENGTH + CRC_LENGTH;

/// Control + destination + source, counted by the length field
pub const LENGTH_OVERHEAD: usize = 5;

/// Largest user data that still fits the one-octet length field
pub const MAX_USER_DATA_LENGTH: usize = u8::MAX as usize - LENGTH_OVERHEAD;

/// Maximum user data bytes per CRC-protected block
pub const BLOCK_SIZE: usize = 16;

/// DNP3 link frame
///
/// Holds one transport segment as user data together with its addressing.
/// The user data length is validated on construction, so [`encode`] cannot
/// fail.
///
/// [`encode`]: LinkFrame::encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFrame {
    control: u8,
    destination: LinkAddress,
    source: LinkAddress,
    user_data: Bytes,
}

impl LinkFrame {
    /// Create a new link frame
    ///
    /// # Errors
    /// [`Dnp3Error::LengthOverflow`] if `user_data` is longer than
    /// [`MAX_USER_DATA_LENGTH`].
    pub fn new(
        control: u8,
        destination: LinkAddress,
        source: LinkAddress,
        user_data: impl Into<Bytes>,
    ) -> Dnp3Result<Self> {
        let user_data = user_data.into();
        if user_data.len() > MAX_USER_DATA_LENGTH {
            return Err(Dnp3Error::LengthOverflow {
                length: user_data.len(),
                max: MAX_USER_DATA_LENGTH,
            });
        }

        Ok(Self {
            control,
            destination,
            source,
            user_data,
        })
    }

    /// Value of the length octet. CRCs are never counted.
    pub fn length_field(&self) -> u8 {
        // bounded by MAX_USER_DATA_LENGTH in new()
        (self.user_data.len() + LENGTH_OVERHEAD) as u8
    }

    /// Number of CRC-protected user data blocks
    pub fn block_count(&self) -> usize {
        self.user_data.len().div_ceil(BLOCK_SIZE)
    }

    /// Total number of bytes [`encode`](LinkFrame::encode) produces
    pub fn encoded_len(&self) -> usize {
        HEADER_BLOCK_LENGTH + self.user_data.len() + self.block_count() * CRC_LENGTH
    }

    /// Encode frame to bytes
    ///
    /// Layout: `05 64 | len | ctrl | dst LE | src LE | CRC LE`, then for each
    /// block of up to 16 user data bytes, the block followed by its CRC.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());

        buf.put_slice(&SYNC);
        buf.put_u8(self.length_field());
        buf.put_u8(self.control);
        buf.put_slice(&self.destination.to_le_bytes());
        buf.put_slice(&self.source.to_le_bytes());

        let header_crc = crc_value(&buf[..HEADER_LENGTH]);
        buf.put_u16_le(header_crc);

        for block in self.user_data.chunks(BLOCK_SIZE) {
            buf.put_slice(block);
            buf.put_u16_le(crc_value(block));
        }

        debug_assert_eq!(buf.len(), self.encoded_len());
        buf.freeze()
    }

    /// Get control octet
    pub fn control(&self) -> u8 {
        self.control
    }

    /// Get destination address
    pub fn destination(&self) -> LinkAddress {
        self.destination
    }

    /// Get source address
    pub fn source(&self) -> LinkAddress {
        self.source
    }

    /// Get user data (the transport segment)
    pub fn user_data(&self) -> &Bytes {
        &self.user_data
    }
}

impl fmt::Display for LinkFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DNP3 Frame: ctrl={}, dst={}, src={}, len={}, blocks={}",
            ControlField::from_byte(self.control),
            self.destination,
            self.source,
            self.length_field(),
            self.block_count()
        )
    }
}

/// Build one wire-ready frame around `segment`
pub fn build_frame(
    segment: impl Into<Bytes>,
    control_code: u8,
    destination: LinkAddress,
    source: LinkAddress,
) -> Dnp3Result<Bytes> {
    let frame = LinkFrame::new(control_code, destination, source, segment)?;
    log::trace!("{}", frame);
    Ok(frame.encode())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datalink::checksum::verify_block;

    fn addr(value: u16) -> LinkAddress {
        LinkAddress::new(value)
    }

    #[test]
    fn test_link_status_request() {
        let frame = build_frame(Bytes::new(), 0xC0, addr(1), addr(1024)).unwrap();
        assert_eq!(
            &frame[..],
            &[0x05, 0x64, 0x05, 0xC0, 0x01, 0x00, 0x00, 0x04, 0xE9, 0x21]
        );
    }

    #[test]
    fn test_empty_segment() {
        let frame = LinkFrame::new(0x44, addr(0), addr(0), Bytes::new()).unwrap();
        assert_eq!(frame.length_field(), 5);
        assert_eq!(frame.block_count(), 0);

        let encoded = frame.encode();
        assert_eq!(encoded.len(), HEADER_BLOCK_LENGTH);
        assert_eq!(
            &encoded[..],
            &[0x05, 0x64, 0x05, 0x44, 0x00, 0x00, 0x00, 0x00, 0x15, 0xD7]
        );
    }

    #[test]
    fn test_short_segment() {
        let frame = build_frame(vec![0x01, 0x02, 0x03], 0x44, addr(0), addr(0)).unwrap();
        assert_eq!(
            &frame[..],
            &[
                0x05, 0x64, 0x08, 0x44, 0x00, 0x00, 0x00, 0x00, 0x40, 0xB5, 0x01, 0x02, 0x03,
                0x40, 0xA7
            ]
        );
    }

    #[test]
    fn test_max_addresses() {
        let frame = build_frame(Bytes::new(), 0x44, addr(0xFFFF), addr(0xFFFF)).unwrap();
        assert_eq!(&frame[4..8], &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(&frame[8..10], &[0x65, 0x52]);
    }

    #[test]
    fn test_block_layout() {
        let segment: Vec<u8> = (0..33).collect();
        let frame = LinkFrame::new(0x44, addr(10), addr(20), segment.clone()).unwrap();
        assert_eq!(frame.block_count(), 3);
        assert_eq!(frame.length_field(), 38);

        let encoded = frame.encode();
        assert_eq!(encoded.len(), 10 + 33 + 3 * 2);
        assert!(verify_block(&encoded[..HEADER_BLOCK_LENGTH]));

        let body = &encoded[HEADER_BLOCK_LENGTH..];
        let first = &body[0..18];
        let second = &body[18..36];
        let last = &body[36..];
        assert_eq!(&first[..16], &segment[0..16]);
        assert_eq!(&second[..16], &segment[16..32]);
        assert_eq!(last, &[32, crc_value(&[32]) as u8, (crc_value(&[32]) >> 8) as u8]);
        assert!(verify_block(first));
        assert!(verify_block(second));
        assert!(verify_block(last));

        // each block carries its own CRC, not a running one
        assert_ne!(crc_value(&segment[0..32]), crc_value(&segment[16..32]));
        assert_ne!(&second[16..], &crc_value(&segment[0..32]).to_le_bytes());
    }

    #[test]
    fn test_exact_block_multiple() {
        let frame = LinkFrame::new(0x44, addr(0), addr(0), vec![0xAA; 32]).unwrap();
        assert_eq!(frame.block_count(), 2);
        assert_eq!(frame.encode().len(), 10 + 32 + 4);
    }

    #[test]
    fn test_length_accounting() {
        for len in [0usize, 1, 15, 16, 17, 100, 249, 250] {
            let frame = LinkFrame::new(0x44, addr(1), addr(2), vec![0x5A; len]).unwrap();
            let encoded = frame.encode();
            let user_bytes = encoded.len() - HEADER_BLOCK_LENGTH - frame.block_count() * 2;
            assert_eq!(encoded[2] as usize - LENGTH_OVERHEAD, user_bytes);
            assert_eq!(encoded.len(), frame.encoded_len());
        }
    }

    #[test]
    fn test_length_overflow() {
        let err = LinkFrame::new(0x44, addr(0), addr(0), vec![0u8; 251]).unwrap_err();
        assert_eq!(err, Dnp3Error::LengthOverflow { length: 251, max: 250 });
        assert!(build_frame(vec![0u8; 300], 0x44, addr(0), addr(0)).is_err());
    }

    #[test]
    fn test_display() {
        let frame = LinkFrame::new(0xC4, addr(1), addr(2), vec![0u8; 4]).unwrap();
        assert_eq!(
            frame.to_string(),
            "DNP3 Frame: ctrl=0xC4 (dir=1, prm=1, fcb=0, fcv=0, func=4), dst=1, src=2, len=9, blocks=1"
        );
    }
}
