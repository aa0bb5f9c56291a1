// Mon Aug 24 2026 - Alex

// Largest power-of-two divisor of the byte offset, capped at 64. Purely
// informational metadata on the resolved node; it gates no other check.
pub fn alignment_of(byte_offset: u64) -> u32 {
    let mut i = 1u64;
    while i < 128 {
        if byte_offset % i != 0 {
            return (i >> 1) as u32;
        }
        i <<= 1;
    }
    64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_fully_aligned() {
        assert_eq!(alignment_of(0), 64);
    }

    #[test]
    fn test_power_of_two_divisors() {
        assert_eq!(alignment_of(1), 1);
        assert_eq!(alignment_of(2), 2);
        assert_eq!(alignment_of(6), 2);
        assert_eq!(alignment_of(12), 4);
        assert_eq!(alignment_of(40), 8);
        assert_eq!(alignment_of(96), 32);
    }

    #[test]
    fn test_capped_at_64() {
        assert_eq!(alignment_of(64), 64);
        assert_eq!(alignment_of(128), 64);
        assert_eq!(alignment_of(256), 64);
    }
}
