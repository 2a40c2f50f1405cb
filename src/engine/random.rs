//! Random digest engine.
//!
//! Not a checksum: the digest bytes are drawn once at construction and never
//! change for the lifetime of the object. Updates are accepted and ignored,
//! so a `random` object satisfies the same call pattern as any other digest
//! while two independently constructed objects disagree with overwhelming
//! probability.

use bytes::Bytes;
use rand::RngCore;

use crate::config::DEFAULT_VARIABLE_DIGEST_SIZE;

/// Random engine state: the digest drawn at construction.
#[derive(Debug, Clone)]
pub(crate) struct Random {
    digest: Bytes,
}

impl Random {
    /// Creates an engine with the default 16-byte output.
    pub(crate) fn new() -> Self {
        Self::with_digest_size(DEFAULT_VARIABLE_DIGEST_SIZE)
    }

    /// Creates an engine with an explicit output length.
    pub(crate) fn with_digest_size(digest_size: usize) -> Self {
        let mut bytes = vec![0u8; digest_size];
        rand::rng().fill_bytes(&mut bytes);
        Self {
            digest: Bytes::from(bytes),
        }
    }

    /// Input never affects the output.
    pub(crate) fn update(&mut self, _data: &[u8]) {}

    /// Returns the bytes drawn at construction.
    pub(crate) fn finalize(&self) -> Bytes {
        self.digest.clone()
    }

    /// Returns the configured output length.
    pub(crate) fn digest_size(&self) -> usize {
        self.digest.len()
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        assert_eq!(Random::new().digest_size(), 16);
        assert_eq!(Random::new().finalize().len(), 16);
    }

    #[test]
    fn test_stable_within_one_object() {
        let mut engine = Random::new();
        let first = engine.finalize();
        engine.update(b"ignored");
        assert_eq!(engine.finalize(), first);
    }

    #[test]
    fn test_fresh_objects_differ() {
        // 16 random bytes colliding across 8 constructions is beyond
        // astronomically unlikely.
        let digests: Vec<Bytes> = (0..8).map(|_| Random::new().finalize()).collect();
        for (i, a) in digests.iter().enumerate() {
            for b in &digests[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
