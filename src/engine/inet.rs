//! One's-complement "Internet checksum" engines (RFC 1071 family).
//!
//! Both engines sum the input as 16-bit words with end-around carry; an odd
//! trailing byte is padded with a zero byte. They differ in word byte order
//! and in how the field is finalized:
//!
//! - [`Twoping`] sums big-endian words and complements the folded sum, then
//!   swaps a `0x0000` result to `0xFFFF` (the 2ping protocol's encoding of
//!   "checksum present").
//! - [`Udp`] sums little-endian words and emits the folded sum directly,
//!   with a zero result transmitted as `0xFFFF` — on the wire, zero is
//!   reserved to mean "no checksum".
//!
//! The odd trailing byte is held in `pending` between updates, so split
//! points in the input never change the result.

/// Folds end-around carries until the sum fits in 16 bits.
fn fold(mut sum: u32) -> u16 {
    while sum >> 16 != 0 {
        sum = (sum & 0xffff) + (sum >> 16);
    }
    sum as u16
}

/// Incremental 2ping checksum state.
#[derive(Debug, Clone, Default)]
pub(crate) struct Twoping {
    sum: u32,
    pending: Option<u8>,
}

impl Twoping {
    /// Creates a new engine with a zero sum.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn add_word(&mut self, word: u16) {
        self.sum += u32::from(word);
        self.sum = (self.sum & 0xffff) + (self.sum >> 16);
    }

    /// Feeds bytes into the word sum.
    pub(crate) fn update(&mut self, data: &[u8]) {
        let mut data = data;
        if data.is_empty() {
            return;
        }
        if let Some(high) = self.pending.take() {
            self.add_word(u16::from_be_bytes([high, data[0]]));
            data = &data[1..];
        }
        let mut pairs = data.chunks_exact(2);
        for pair in &mut pairs {
            self.add_word(u16::from_be_bytes([pair[0], pair[1]]));
        }
        self.pending = pairs.remainder().first().copied();
    }

    /// Returns the checksum as 2 big-endian bytes without consuming state.
    pub(crate) fn finalize(&self) -> [u8; 2] {
        let mut sum = self.sum;
        if let Some(high) = self.pending {
            sum += u32::from(u16::from_be_bytes([high, 0]));
        }
        let mut checksum = !fold(sum);
        if checksum == 0 {
            checksum = 0xffff;
        }
        checksum.to_be_bytes()
    }
}

/// Incremental UDP-style checksum state.
#[derive(Debug, Clone, Default)]
pub(crate) struct Udp {
    sum: u32,
    pending: Option<u8>,
}

impl Udp {
    /// Creates a new engine with a zero sum.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn add_word(&mut self, word: u16) {
        self.sum += u32::from(word);
        self.sum = (self.sum & 0xffff) + (self.sum >> 16);
    }

    /// Feeds bytes into the word sum.
    pub(crate) fn update(&mut self, data: &[u8]) {
        let mut data = data;
        if data.is_empty() {
            return;
        }
        if let Some(low) = self.pending.take() {
            self.add_word(u16::from_le_bytes([low, data[0]]));
            data = &data[1..];
        }
        let mut pairs = data.chunks_exact(2);
        for pair in &mut pairs {
            self.add_word(u16::from_le_bytes([pair[0], pair[1]]));
        }
        self.pending = pairs.remainder().first().copied();
    }

    /// Returns the checksum as 2 big-endian bytes without consuming state.
    pub(crate) fn finalize(&self) -> [u8; 2] {
        let mut sum = self.sum;
        if let Some(low) = self.pending {
            sum += u32::from(u16::from_le_bytes([low, 0]));
        }
        let mut checksum = fold(sum);
        if checksum == 0 {
            checksum = 0xffff;
        }
        checksum.to_be_bytes()
    }
}
