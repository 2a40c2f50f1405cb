//! POSIX `cksum` engine.
//!
//! A CRC-32 over the non-reflected polynomial 0x04C11DB7, fed MSB-first from
//! a zero seed. After the data, the total input length is fed in as bytes
//! (least-significant byte first, stopping once the remaining length is
//! zero), and the register is complemented. A zero-length input feeds no
//! length bytes, so the empty checksum is `0xffffffff`.

/// Byte-at-a-time lookup table for the non-reflected polynomial.
const fn cksum_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u32) << 24;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000_0000 != 0 {
                (crc << 1) ^ 0x04C1_1DB7
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

static TABLE: [u32; 256] = cksum_table();

fn step(crc: u32, byte: u8) -> u32 {
    (crc << 8) ^ TABLE[((crc >> 24) as u8 ^ byte) as usize]
}

/// Incremental POSIX cksum state.
///
/// Tracks the total byte count alongside the register; the count is mixed in
/// only at finalize, on a copy, so the running state stays update-friendly.
#[derive(Debug, Clone, Default)]
pub(crate) struct Cksum {
    crc: u32,
    length: u64,
}

impl Cksum {
    /// Creates a new engine with a zero seed.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feeds bytes through the shift register.
    pub(crate) fn update(&mut self, data: &[u8]) {
        self.length += data.len() as u64;
        for &byte in data {
            self.crc = step(self.crc, byte);
        }
    }

    /// Returns the checksum as 4 big-endian bytes without consuming state.
    pub(crate) fn finalize(&self) -> [u8; 4] {
        let mut crc = self.crc;
        let mut remaining = self.length;
        while remaining != 0 {
            crc = step(crc, (remaining & 0xff) as u8);
            remaining >>= 8;
        }
        (!crc).to_be_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum(data: &[u8]) -> [u8; 4] {
        let mut engine = Cksum::new();
        engine.update(data);
        engine.finalize()
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(checksum(b""), [0xff, 0xff, 0xff, 0xff]);
        assert_eq!(checksum(b"foo"), [0x93, 0x3b, 0x9e, 0x91]);
        assert_eq!(checksum(b"foobar"), [0x9b, 0x5d, 0x95, 0xd6]);
    }

    #[test]
    fn test_length_is_part_of_the_checksum() {
        // Same register trajectory, different trailing length bytes.
        assert_ne!(checksum(b"\x00"), checksum(b"\x00\x00"));
    }

    #[test]
    fn test_multi_byte_length() {
        // Forces more than one length byte (length 0x123 = two bytes).
        let data = vec![0xA5u8; 0x123];
        let mut split = Cksum::new();
        split.update(&data[..0x100]);
        split.update(&data[0x100..]);
        assert_eq!(split.finalize(), checksum(&data));
    }

    #[test]
    fn test_finalize_does_not_disturb_state() {
        let mut engine = Cksum::new();
        engine.update(b"foo");
        let first = engine.finalize();
        assert_eq!(engine.finalize(), first);

        engine.update(b"bar");
        assert_eq!(engine.finalize(), checksum(b"foobar"));
    }
}
