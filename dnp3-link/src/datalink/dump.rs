//! Hex dump of frames in the layout used by the protocol documentation
//!
//! The first line holds the 10-byte header block and every following line
//! holds 18 bytes, one full user data block with its CRC.

use std::fmt;

const FIRST_LINE: usize = 10;
const LINE: usize = 18;

/// Lazily formatted hex dump, suitable for log macros
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let split = self.0.len().min(FIRST_LINE);
        let (head, rest) = self.0.split_at(split);

        let lines = std::iter::once(head)
            .filter(|line| !line.is_empty())
            .chain(rest.chunks(LINE));
        for (n, line) in lines.enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            for (i, byte) in line.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:02X}", byte)?;
            }
        }
        Ok(())
    }
}

/// Render `data` as rows of uppercase hex pairs
pub fn format_frame(data: &[u8]) -> String {
    HexDump(data).to_string()
}
