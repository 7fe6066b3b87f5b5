//! Access-layer opcodes.
//!
//! Opcodes come in three wire formats:
//!
//! ```text
//! 1 octet:  0xxxxxxx                      (0x7F is reserved)
//! 2 octets: 10xxxxxx xxxxxxxx             (big-endian)
//! 3 octets: 11xxxxxx cccccccc cccccccc    (company id, little-endian)
//! ```

use crate::error::{MessageError, Result};
use bytes::BufMut;
use std::fmt;

const VENDOR_FLAG: u8 = 0xC0;
const VENDOR_OPCODE_MASK: u8 = 0x3F;

/// An access-layer opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// 1-octet opcode (0x00-0x7E).
    Single(u8),
    /// 2-octet SIG model opcode (0x8000-0xBFFF).
    Double(u16),
    /// 3-octet vendor opcode.
    Vendor {
        /// 6-bit vendor opcode.
        opcode: u8,
        /// Company identifier assigned by the Bluetooth SIG.
        company_id: u16,
    },
}

impl Opcode {
    /// Create a vendor opcode. The opcode must fit in six bits.
    pub fn vendor(opcode: u8, company_id: u16) -> Result<Self> {
        if opcode > VENDOR_OPCODE_MASK {
            return Err(MessageError::invalid_argument(
                "vendor opcode",
                opcode.into(),
                0,
                VENDOR_OPCODE_MASK.into(),
            ));
        }
        Ok(Opcode::Vendor { opcode, company_id })
    }

    /// Classify a numeric opcode, as it reads when its wire bytes are taken
    /// big-endian.
    pub fn from_value(value: u32) -> Result<Self> {
        match value {
            0x00..=0x7E => Ok(Opcode::Single(value as u8)),
            0x8000..=0xBFFF => Ok(Opcode::Double(value as u16)),
            0xC0_0000..=0xFF_FFFF => Ok(Opcode::Vendor {
                opcode: (value >> 16) as u8 & VENDOR_OPCODE_MASK,
                company_id: u16::from_le_bytes([(value >> 8) as u8, value as u8]),
            }),
            _ => Err(MessageError::InvalidOpcode(value)),
        }
    }

    /// Numeric opcode value.
    pub fn value(self) -> u32 {
        match self {
            Opcode::Single(op) => op.into(),
            Opcode::Double(op) => op.into(),
            Opcode::Vendor { opcode, company_id } => {
                let [a, b, c] = vendor_bytes(opcode, company_id);
                u32::from_be_bytes([0, a, b, c])
            }
        }
    }

    /// Number of bytes the opcode occupies on the wire.
    pub fn wire_len(self) -> usize {
        match self {
            Opcode::Single(_) => 1,
            Opcode::Double(_) => 2,
            Opcode::Vendor { .. } => 3,
        }
    }

    /// Append the wire form of the opcode to `buf`.
    pub fn encode_into(self, buf: &mut impl BufMut) {
        match self {
            Opcode::Single(op) => buf.put_u8(op),
            Opcode::Double(op) => buf.put_u16(op),
            Opcode::Vendor { opcode, company_id } => {
                buf.put_slice(&vendor_bytes(opcode, company_id))
            }
        }
    }

    /// The wire form of the opcode.
    pub fn to_bytes(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.wire_len());
        self.encode_into(&mut buf);
        buf
    }
}

fn vendor_bytes(opcode: u8, company_id: u16) -> [u8; 3] {
    let [lo, hi] = company_id.to_le_bytes();
    [VENDOR_FLAG | (opcode & VENDOR_OPCODE_MASK), lo, hi]
}

impl TryFrom<u16> for Opcode {
    type Error = MessageError;

    /// Accept a 2-octet SIG model opcode.
    fn try_from(opcode: u16) -> Result<Self> {
        match opcode {
            0x8000..=0xBFFF => Ok(Opcode::Double(opcode)),
            _ => Err(MessageError::InvalidOpcode(opcode.into())),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Single(op) => write!(f, "0x{:02X}", op),
            Opcode::Double(op) => write!(f, "0x{:04X}", op),
            Opcode::Vendor { .. } => write!(f, "0x{:06X}", self.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LIGHT_LIGHTNESS_SET;

    #[test]
    fn test_double_opcode_is_big_endian() {
        let op = Opcode::try_from(LIGHT_LIGHTNESS_SET).unwrap();
        assert_eq!(op.to_bytes(), vec![0x82, 0x4C]);
        assert_eq!(op.wire_len(), 2);
        assert_eq!(op.value(), 0x824C);
        assert_eq!(op.to_string(), "0x824C");
    }

    #[test]
    fn test_single_opcode() {
        let op = Opcode::from_value(0x5E).unwrap();
        assert_eq!(op, Opcode::Single(0x5E));
        assert_eq!(op.to_bytes(), vec![0x5E]);
    }

    #[test]
    fn test_vendor_opcode_layout() {
        let op = Opcode::vendor(0x01, 0x0059).unwrap();
        assert_eq!(op.to_bytes(), vec![0xC1, 0x59, 0x00]);
        assert_eq!(op.value(), 0xC1_5900);
        assert_eq!(Opcode::from_value(0xC1_5900).unwrap(), op);
        assert_eq!(op.to_string(), "0xC15900");
    }

    #[test]
    fn test_invalid_opcodes() {
        assert_eq!(Opcode::from_value(0x7F), Err(MessageError::InvalidOpcode(0x7F)));
        assert!(Opcode::from_value(0x0100_0000).is_err());
        assert!(Opcode::from_value(0x4000).is_err());
        assert!(Opcode::vendor(0x40, 0).is_err());
    }

    #[test]
    fn test_double_opcode_from_u16_range() {
        assert_eq!(Opcode::try_from(0x0001u16), Err(MessageError::InvalidOpcode(0x0001)));
        assert_eq!(Opcode::try_from(0xC000u16), Err(MessageError::InvalidOpcode(0xC000)));
        assert_eq!(Opcode::try_from(0x7FFFu16), Err(MessageError::InvalidOpcode(0x7FFF)));

        for code in [0x8000u16, 0x8201, 0xBFFF] {
            let op = Opcode::try_from(code).unwrap();
            assert_eq!(op.to_bytes(), code.to_be_bytes().to_vec());
            assert_eq!(Opcode::from_value(op.value()).unwrap(), op);
        }
    }
}
