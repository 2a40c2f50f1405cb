//! Null digest engine.
//!
//! Always produces all-zero bytes of the configured length. Useful as a
//! placeholder where a digest is structurally required but its value is not.

use bytes::Bytes;

use crate::config::DEFAULT_VARIABLE_DIGEST_SIZE;

/// Null engine state: only the configured output length.
#[derive(Debug, Clone)]
pub(crate) struct Null {
    digest_size: usize,
}

impl Null {
    /// Creates an engine with the default 16-byte output.
    pub(crate) fn new() -> Self {
        Self::with_digest_size(DEFAULT_VARIABLE_DIGEST_SIZE)
    }

    /// Creates an engine with an explicit output length (zero is allowed).
    pub(crate) fn with_digest_size(digest_size: usize) -> Self {
        Self { digest_size }
    }

    /// Input never affects the output.
    pub(crate) fn update(&mut self, _data: &[u8]) {}

    /// Returns `digest_size` zero bytes.
    pub(crate) fn finalize(&self) -> Bytes {
        Bytes::from(vec![0u8; self.digest_size])
    }

    /// Returns the configured output length.
    pub(crate) fn digest_size(&self) -> usize {
        self.digest_size
    }
}

impl Default for Null {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        let engine = Null::new();
        assert_eq!(engine.digest_size(), 16);
        assert_eq!(engine.finalize(), Bytes::from(vec![0u8; 16]));
    }

    #[test]
    fn test_input_is_ignored() {
        let mut engine = Null::with_digest_size(3);
        engine.update(b"anything at all");
        assert_eq!(engine.finalize(), Bytes::from_static(&[0, 0, 0]));
    }

    #[test]
    fn test_zero_length_digest() {
        let engine = Null::with_digest_size(0);
        assert!(engine.finalize().is_empty());
    }
}
