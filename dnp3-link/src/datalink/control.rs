//! Link layer control octet

use std::fmt;

/// Control code for unconfirmed user data sent by a master
pub const MASTER_UNCONFIRMED_USER_DATA: u8 = 0xC4;

/// Control code for unconfirmed user data sent by an outstation
pub const OUTSTATION_UNCONFIRMED_USER_DATA: u8 = 0x44;

/// Link function codes (low nibble of the control octet)
pub mod function {
    /// Primary: reset link states
    pub const RESET_LINK_STATES: u8 = 0x00;
    /// Primary: test link states
    pub const TEST_LINK_STATES: u8 = 0x02;
    /// Primary: confirmed user data
    pub const CONFIRMED_USER_DATA: u8 = 0x03;
    /// Primary: unconfirmed user data
    pub const UNCONFIRMED_USER_DATA: u8 = 0x04;
    /// Primary: request link status
    pub const REQUEST_LINK_STATUS: u8 = 0x09;

    /// Secondary: positive acknowledgement
    pub const ACK: u8 = 0x00;
    /// Secondary: negative acknowledgement
    pub const NACK: u8 = 0x01;
    /// Secondary: link status
    pub const LINK_STATUS: u8 = 0x0B;
    /// Secondary: link service not supported
    pub const NOT_SUPPORTED: u8 = 0x0F;
}

const DIR: u8 = 0x80;
const PRM: u8 = 0x40;
const FCB: u8 = 0x20;
const FCV: u8 = 0x10;
const FUNCTION_MASK: u8 = 0x0F;

/// Decomposed control octet
///
/// `fcv` doubles as DFC (data flow control) in secondary frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlField {
    /// Frame travels from the master
    pub dir: bool,
    /// Frame is from the primary station
    pub prm: bool,
    /// Frame count bit
    pub fcb: bool,
    /// Frame count valid / data flow control
    pub fcv: bool,
    /// 4-bit link function code
    pub function: u8,
}

impl ControlField {
    /// Primary frame with the given direction and function
    pub fn primary(from_master: bool, function: u8) -> Self {
        Self {
            dir: from_master,
            prm: true,
            fcb: false,
            fcv: false,
            function: function & FUNCTION_MASK,
        }
    }

    /// Secondary frame with the given direction and function
    pub fn secondary(from_master: bool, function: u8) -> Self {
        Self {
            dir: from_master,
            prm: false,
            fcb: false,
            fcv: false,
            function: function & FUNCTION_MASK,
        }
    }

    pub fn from_byte(value: u8) -> Self {
        Self {
            dir: value & DIR != 0,
            prm: value & PRM != 0,
            fcb: value & FCB != 0,
            fcv: value & FCV != 0,
            function: value & FUNCTION_MASK,
        }
    }

    pub fn to_byte(&self) -> u8 {
        let mut value = self.function & FUNCTION_MASK;
        if self.dir {
            value |= DIR;
        }
        if self.prm {
            value |= PRM;
        }
        if self.fcb {
            value |= FCB;
        }
        if self.fcv {
            value |= FCV;
        }
        value
    }
}

impl From<u8> for ControlField {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<ControlField> for u8 {
    fn from(control: ControlField) -> Self {
        control.to_byte()
    }
}

impl fmt::Display for ControlField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02X} (dir={}, prm={}, fcb={}, fcv={}, func={})",
            self.to_byte(),
            self.dir as u8,
            self.prm as u8,
            self.fcb as u8,
            self.fcv as u8,
            self.function
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codes() {
        assert_eq!(
            ControlField::primary(true, function::UNCONFIRMED_USER_DATA).to_byte(),
            MASTER_UNCONFIRMED_USER_DATA
        );
        assert_eq!(
            ControlField::primary(false, function::UNCONFIRMED_USER_DATA).to_byte(),
            OUTSTATION_UNCONFIRMED_USER_DATA
        );
    }

    #[test]
    fn test_from_byte() {
        let control = ControlField::from_byte(0xF3);
        assert!(control.dir && control.prm && control.fcb && control.fcv);
        assert_eq!(control.function, function::CONFIRMED_USER_DATA);
        assert_eq!(control.to_byte(), 0xF3);

        let status = ControlField::from_byte(0x0B);
        assert!(!status.dir && !status.prm);
        assert_eq!(status.function, function::LINK_STATUS);
    }

    #[test]
    fn test_function_masked() {
        assert_eq!(ControlField::secondary(false, 0x1F).function, 0x0F);
    }
}
