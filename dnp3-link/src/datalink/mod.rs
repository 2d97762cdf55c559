//! DNP3 data link layer module

pub mod address;
pub mod checksum;
pub mod control;
pub mod dump;
pub mod frame;

pub use address::{reserved, LinkAddress};
pub use checksum::{checksum, crc_value, verify_block, CRC_LENGTH};
pub use control::{
    function, ControlField, MASTER_UNCONFIRMED_USER_DATA, OUTSTATION_UNCONFIRMED_USER_DATA,
};
pub use dump::{format_frame, HexDump};
pub use frame::{
    build_frame, LinkFrame, BLOCK_SIZE, HEADER_BLOCK_LENGTH, HEADER_LENGTH, LENGTH_OVERHEAD,
    MAX_USER_DATA_LENGTH, SYNC,
};
