//! Checksum engines.
//!
//! One module per algorithm, each a plain value type with `update()` and a
//! non-consuming `finalize()`. [`Engine`] is the closed dispatch enum the
//! [`Digest`](crate::Digest) wrapper drives; because every state is a plain
//! value, cloning an `Engine` is a correct deep copy by construction.
//!
//! Engine contract, relied on throughout the crate:
//!
//! - `update(a); update(b)` reaches the same state as `update(a + b)`
//! - `finalize()` never mutates state, so it can be called repeatedly and
//!   interleaved with further updates

mod adler32;
mod bsd;
mod cksum;
mod crc32;
mod inet;
mod null;
mod random;
mod sysv;

use bytes::Bytes;

use crate::algorithm::Algorithm;

use adler32::Adler32;
use bsd::Bsd;
use cksum::Cksum;
use crc32::Crc32;
use inet::{Twoping, Udp};
use null::Null;
use random::Random;
use sysv::Sysv;

/// Algorithm-specific accumulator state, one variant per [`Algorithm`].
#[derive(Debug, Clone)]
pub(crate) enum Engine {
    Adler32(Adler32),
    Bsd(Bsd),
    Cksum(Cksum),
    Crc32(Crc32),
    Null(Null),
    Random(Random),
    Sysv(Sysv),
    Twoping(Twoping),
    Udp(Udp),
}

impl Engine {
    /// Creates a fresh engine for the algorithm.
    ///
    /// `digest_size` only applies to the variable-size algorithms; callers
    /// validate it against [`Algorithm::supports_digest_size`] first.
    pub(crate) fn new(algorithm: Algorithm, digest_size: Option<usize>) -> Self {
        match algorithm {
            Algorithm::Adler32 => Engine::Adler32(Adler32::new()),
            Algorithm::Bsd => Engine::Bsd(Bsd::new()),
            Algorithm::Cksum => Engine::Cksum(Cksum::new()),
            Algorithm::Crc32 => Engine::Crc32(Crc32::new()),
            Algorithm::Null => Engine::Null(match digest_size {
                Some(size) => Null::with_digest_size(size),
                None => Null::new(),
            }),
            Algorithm::Random => Engine::Random(match digest_size {
                Some(size) => Random::with_digest_size(size),
                None => Random::new(),
            }),
            Algorithm::Sysv => Engine::Sysv(Sysv::new()),
            Algorithm::Twoping => Engine::Twoping(Twoping::new()),
            Algorithm::Udp => Engine::Udp(Udp::new()),
        }
    }

    /// Feeds bytes into the accumulator.
    pub(crate) fn update(&mut self, data: &[u8]) {
        match self {
            Engine::Adler32(engine) => engine.update(data),
            Engine::Bsd(engine) => engine.update(data),
            Engine::Cksum(engine) => engine.update(data),
            Engine::Crc32(engine) => engine.update(data),
            Engine::Null(engine) => engine.update(data),
            Engine::Random(engine) => engine.update(data),
            Engine::Sysv(engine) => engine.update(data),
            Engine::Twoping(engine) => engine.update(data),
            Engine::Udp(engine) => engine.update(data),
        }
    }

    /// Returns the digest of everything fed so far, without consuming state.
    pub(crate) fn finalize(&self) -> Bytes {
        match self {
            Engine::Adler32(engine) => Bytes::copy_from_slice(&engine.finalize()),
            Engine::Bsd(engine) => Bytes::copy_from_slice(&engine.finalize()),
            Engine::Cksum(engine) => Bytes::copy_from_slice(&engine.finalize()),
            Engine::Crc32(engine) => Bytes::copy_from_slice(&engine.finalize()),
            Engine::Null(engine) => engine.finalize(),
            Engine::Random(engine) => engine.finalize(),
            Engine::Sysv(engine) => Bytes::copy_from_slice(&engine.finalize()),
            Engine::Twoping(engine) => Bytes::copy_from_slice(&engine.finalize()),
            Engine::Udp(engine) => Bytes::copy_from_slice(&engine.finalize()),
        }
    }

    /// Returns the digest length in bytes.
    pub(crate) fn digest_size(&self) -> usize {
        match self {
            Engine::Adler32(_) | Engine::Cksum(_) | Engine::Crc32(_) => 4,
            Engine::Bsd(_) | Engine::Sysv(_) | Engine::Twoping(_) | Engine::Udp(_) => 2,
            Engine::Null(engine) => engine.digest_size(),
            Engine::Random(engine) => engine.digest_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_algorithm() {
        for &algorithm in Algorithm::available() {
            let engine = Engine::new(algorithm, None);
            assert_eq!(engine.digest_size(), algorithm.digest_size());
            assert_eq!(engine.finalize().len(), algorithm.digest_size());
        }
    }

    #[test]
    fn test_variable_size_passthrough() {
        assert_eq!(Engine::new(Algorithm::Null, Some(3)).digest_size(), 3);
        assert_eq!(Engine::new(Algorithm::Random, Some(32)).digest_size(), 32);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Engine::new(Algorithm::Crc32, None);
        original.update(b"foo");

        let mut clone = original.clone();
        clone.update(b"bar");

        let mut reference = Engine::new(Algorithm::Crc32, None);
        reference.update(b"foo");
        assert_eq!(original.finalize(), reference.finalize());

        reference.update(b"bar");
        assert_eq!(clone.finalize(), reference.finalize());
    }
}
