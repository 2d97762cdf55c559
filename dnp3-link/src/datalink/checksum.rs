//! Cyclic redundancy check for DNP3 link frames
//!
//! DNP3 protects the frame header and every user data block with
//! CRC-16/DNP (poly 0x3D65, reflected, init 0x0000, xorout 0xFFFF). The CRC
//! is transmitted low byte first.

use crc::{Crc, CRC_16_DNP};

/// CRC-16/DNP parameter set
const DNP_CRC: Crc<u16> = Crc::<u16>::new(&CRC_16_DNP);

/// Length of a serialized CRC in bytes
pub const CRC_LENGTH: usize = 2;

/// Compute the CRC value over `data`
///
/// Each call runs a fresh digest from the algorithm's initial state, so no
/// value leaks between the header and the blocks of a frame.
pub fn crc_value(data: &[u8]) -> u16 {
    DNP_CRC.checksum(data)
}

/// Compute the CRC over `data` in wire order (little-endian)
pub fn checksum(data: &[u8]) -> [u8; CRC_LENGTH] {
    crc_value(data).to_le_bytes()
}

/// Check a block whose trailing two bytes are the CRC of the bytes before it
pub fn verify_block(block: &[u8]) -> bool {
    if block.len() < CRC_LENGTH {
        return false;
    }
    let (data, crc) = block.split_at(block.len() - CRC_LENGTH);
    checksum(data) == [crc[0], crc[1]]
}
