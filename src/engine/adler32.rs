//! Adler-32 checksum engine (RFC 1950).
//!
//! Two 16-bit running sums modulo 65521: `a` accumulates bytes, `b`
//! accumulates `a`. The modulo is deferred across blocks of up to [`NMAX`]
//! bytes, the largest block size that cannot overflow the 32-bit registers.

const MOD_ADLER: u32 = 65521;

/// Largest n such that `255 * n * (n + 1) / 2 + (n + 1) * (MOD_ADLER - 1)`
/// still fits in a u32.
const NMAX: usize = 5552;

/// Incremental Adler-32 state.
///
/// Seeded with `(a, b) = (1, 0)`, so the empty checksum is `0x00000001`.
#[derive(Debug, Clone)]
pub(crate) struct Adler32 {
    a: u32,
    b: u32,
}

impl Adler32 {
    /// Creates a new engine with the standard seed.
    pub(crate) fn new() -> Self {
        Self { a: 1, b: 0 }
    }

    /// Feeds bytes into the running sums.
    pub(crate) fn update(&mut self, data: &[u8]) {
        for block in data.chunks(NMAX) {
            for &byte in block {
                self.a += u32::from(byte);
                self.b += self.a;
            }
            self.a %= MOD_ADLER;
            self.b %= MOD_ADLER;
        }
    }

    /// Returns the checksum as 4 big-endian bytes without consuming state.
    pub(crate) fn finalize(&self) -> [u8; 4] {
        ((self.b << 16) | self.a).to_be_bytes()
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}
