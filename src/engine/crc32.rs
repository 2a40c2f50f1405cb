//! Standard CRC-32 engine (reflected polynomial 0xEDB88320).
//!
//! The table-driven form processes one byte per lookup. The register starts
//! at all-ones and is complemented on output, so the empty checksum is
//! `0x00000000`.

/// Byte-at-a-time lookup table for the reflected polynomial.
const fn crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

static TABLE: [u32; 256] = crc32_table();

/// Incremental CRC-32 state.
///
/// Holds the raw (uncomplemented) shift register between updates.
#[derive(Debug, Clone)]
pub(crate) struct Crc32 {
    crc: u32,
}

impl Crc32 {
    /// Creates a new engine with the standard all-ones seed.
    pub(crate) fn new() -> Self {
        Self { crc: 0xffff_ffff }
    }

    /// Feeds bytes through the shift register.
    pub(crate) fn update(&mut self, data: &[u8]) {
        for &byte in data {
            let index = (self.crc ^ u32::from(byte)) & 0xff;
            self.crc = (self.crc >> 8) ^ TABLE[index as usize];
        }
    }

    /// Returns the checksum as 4 big-endian bytes without consuming state.
    pub(crate) fn finalize(&self) -> [u8; 4] {
        (!self.crc).to_be_bytes()
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum(data: &[u8]) -> [u8; 4] {
        let mut engine = Crc32::new();
        engine.update(data);
        engine.finalize()
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(checksum(b""), [0x00, 0x00, 0x00, 0x00]);
        assert_eq!(checksum(b"foo"), [0x8c, 0x73, 0x65, 0x21]);
        assert_eq!(checksum(b"foobar"), [0x9e, 0xf6, 0x1f, 0x95]);
    }

    #[test]
    fn test_check_value() {
        // The CRC-32/ISO-HDLC check value for "123456789".
        assert_eq!(checksum(b"123456789"), 0xcbf4_3926u32.to_be_bytes());
    }

    #[test]
    fn test_chunked_updates_match_whole() {
        let mut engine = Crc32::new();
        engine.update(b"foo");
        engine.update(b"bar");
        assert_eq!(engine.finalize(), checksum(b"foobar"));
    }

    #[test]
    fn test_finalize_does_not_disturb_state() {
        let mut engine = Crc32::new();
        engine.update(b"foo");
        let first = engine.finalize();
        assert_eq!(engine.finalize(), first);

        engine.update(b"bar");
        assert_eq!(engine.finalize(), checksum(b"foobar"));
    }
}
