//! System V `sum` checksum engine.
//!
//! All byte values are summed into a 32-bit accumulator, which is folded down
//! to 16 bits at finalize by adding the high half into the low half until the
//! value fits. Folding is congruent modulo 65535, so the accumulator can also
//! be folded early during long updates without changing the result.

/// Incremental SysV byte-sum state.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sysv {
    sum: u32,
}

impl Sysv {
    /// Creates a new engine with a zero accumulator.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feeds bytes into the running sum.
    pub(crate) fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.sum += u32::from(byte);
            // Fold before the accumulator can overflow on unbounded input.
            if self.sum >= 0xffff_0000 {
                self.sum = (self.sum & 0xffff) + (self.sum >> 16);
            }
        }
    }

    /// Returns the checksum as 2 big-endian bytes without consuming state.
    pub(crate) fn finalize(&self) -> [u8; 2] {
        let folded = (self.sum & 0xffff) + (self.sum >> 16);
        let folded = (folded & 0xffff) + (folded >> 16);
        (folded as u16).to_be_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum(data: &[u8]) -> [u8; 2] {
        let mut engine = Sysv::new();
        engine.update(data);
        engine.finalize()
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(checksum(b""), [0x00, 0x00]);
        assert_eq!(checksum(b"foo"), [0x01, 0x44]);
        assert_eq!(checksum(b"foobar"), [0x02, 0x79]);
    }

    #[test]
    fn test_order_insensitive() {
        // A plain byte sum ignores order.
        assert_eq!(checksum(b"ab"), checksum(b"ba"));
    }

    #[test]
    fn test_early_fold_matches_reference() {
        // Enough 0xFF bytes to trip the early fold many times over.
        let data = vec![0xFFu8; 20_000_000 / 255 * 255];
        let full: u64 = data.iter().map(|&b| u64::from(b)).sum();
        let mut folded = (full & 0xffff) + (full >> 16);
        while folded >> 16 != 0 {
            folded = (folded & 0xffff) + (folded >> 16);
        }
        assert_eq!(checksum(&data), (folded as u16).to_be_bytes());
    }

    #[test]
    fn test_chunked_updates_match_whole() {
        let mut engine = Sysv::new();
        engine.update(b"foo");
        engine.update(b"bar");
        assert_eq!(engine.finalize(), checksum(b"foobar"));
    }
}
