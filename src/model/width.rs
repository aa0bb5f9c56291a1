// Mon Aug 24 2026 - Alex

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordWidth {
    W8,
    W16,
    W32,
    W64,
}

impl WordWidth {
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(WordWidth::W8),
            16 => Some(WordWidth::W16),
            32 => Some(WordWidth::W32),
            64 => Some(WordWidth::W64),
            _ => None,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            WordWidth::W8 => 8,
            WordWidth::W16 => 16,
            WordWidth::W32 => 32,
            WordWidth::W64 => 64,
        }
    }

    pub fn bytes(self) -> u64 {
        (self.bits() / 8) as u64
    }
}

impl fmt::Display for WordWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl Serialize for WordWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}
