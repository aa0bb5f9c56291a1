// Mon Aug 24 2026 - Alex

use serde::Serialize;
use std::fmt;

// Inclusive range of bit positions within the backing word, LSB is bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitRange {
    lo: u32,
    hi: u32,
}

impl BitRange {
    pub fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    pub fn lo(&self) -> u32 {
        self.lo
    }

    pub fn hi(&self) -> u32 {
        self.hi
    }

    pub fn width(&self) -> u32 {
        self.hi - self.lo + 1
    }

    pub fn is_single(&self) -> bool {
        self.lo == self.hi
    }

    pub fn bits(&self) -> impl Iterator<Item = u32> {
        self.lo..=self.hi
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.lo)
        } else {
            write!(f, "{}..{}", self.hi, self.lo)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_and_bits() {
        let r = BitRange::new(4, 7);
        assert_eq!(r.width(), 4);
        assert_eq!(r.bits().collect::<Vec<_>>(), vec![4, 5, 6, 7]);
        assert!(!r.is_single());
    }

    #[test]
    fn test_display() {
        assert_eq!(BitRange::new(0, 0).to_string(), "0");
        assert_eq!(BitRange::new(28, 31).to_string(), "31..28");
    }
}
