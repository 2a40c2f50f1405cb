//! Classic BSD `sum` checksum engine.
//!
//! For each input byte the 16-bit accumulator is rotated right by one bit,
//! then the byte value is added modulo 2^16. The rotation makes the checksum
//! order-sensitive, unlike a plain byte sum.

/// Incremental BSD rotating-sum state.
#[derive(Debug, Clone, Default)]
pub(crate) struct Bsd {
    sum: u16,
}

impl Bsd {
    /// Creates a new engine with a zero accumulator.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feeds bytes into the rotating sum.
    pub(crate) fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.sum = self.sum.rotate_right(1).wrapping_add(u16::from(byte));
        }
    }

    /// Returns the checksum as 2 big-endian bytes without consuming state.
    pub(crate) fn finalize(&self) -> [u8; 2] {
        self.sum.to_be_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum(data: &[u8]) -> [u8; 2] {
        let mut engine = Bsd::new();
        engine.update(data);
        engine.finalize()
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(checksum(b""), [0x00, 0x00]);
        assert_eq!(checksum(b"foo"), [0x00, 0xc0]);
        assert_eq!(checksum(b"foobar"), [0x00, 0xd3]);
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(checksum(b"ab"), checksum(b"ba"));
    }

    #[test]
    fn test_chunked_updates_match_whole() {
        let mut engine = Bsd::new();
        engine.update(b"foo");
        engine.update(b"bar");
        assert_eq!(engine.finalize(), checksum(b"foobar"));
    }
}
