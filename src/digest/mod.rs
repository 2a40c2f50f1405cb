//! The uniform digest object.
//!
//! [`Digest`] wraps one engine behind the hashlib-style contract:
//! `update()`, `digest()`, `hexdigest()`, `copy()`. The wrapper is thin; the
//! per-algorithm work lives in [`crate::engine`].

use bytes::Bytes;

use crate::algorithm::Algorithm;
use crate::engine::Engine;
use crate::error::DigestError;

/// One in-progress checksum computation.
///
/// The digest is a pure function of the byte sequence fed via
/// [`Digest::update`] since construction — sensitive to byte order,
/// insensitive to how the bytes were split across calls. The one exception
/// is [`Algorithm::Random`], which ignores input but stays stable for the
/// lifetime of the object.
///
/// # Example
///
/// ```
/// use digestrs::{Algorithm, Digest};
///
/// let mut digest = Digest::new(Algorithm::Bsd);
/// digest.update(b"foo");
///
/// // Snapshot, then diverge.
/// let mut snapshot = digest.copy();
/// snapshot.update(b"bar");
///
/// assert_eq!(digest.hexdigest(), "00c0");
/// assert_eq!(snapshot.hexdigest(), "00d3");
/// ```
#[derive(Debug, Clone)]
pub struct Digest {
    algorithm: Algorithm,
    engine: Engine,
}

impl Digest {
    /// Creates a digest object for the algorithm with default options.
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_engine(algorithm, Engine::new(algorithm, None))
    }

    /// Creates a digest object by algorithm name.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::UnsupportedAlgorithm`] if the name is not in
    /// the supported set.
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::Digest;
    ///
    /// assert!(Digest::by_name("cksum").is_ok());
    /// assert!(Digest::by_name("badalgorithm").is_err());
    /// ```
    pub fn by_name(name: &str) -> Result<Self, DigestError> {
        Ok(Self::new(Algorithm::from_name(name)?))
    }

    pub(crate) fn with_engine(algorithm: Algorithm, engine: Engine) -> Self {
        Self { algorithm, engine }
    }

    /// Convenience method to digest data in one shot.
    ///
    /// # Example
    ///
    /// ```
    /// use digestrs::{Algorithm, Digest};
    ///
    /// let digest = Digest::oneshot(Algorithm::Adler32, b"foobar");
    /// assert_eq!(hex::encode(digest), "08ab027a");
    /// ```
    pub fn oneshot(algorithm: Algorithm, data: impl AsRef<[u8]>) -> Bytes {
        let mut digest = Self::new(algorithm);
        digest.update(data);
        digest.digest()
    }

    /// Creates an `adler32` digest object.
    pub fn adler32() -> Self {
        Self::new(Algorithm::Adler32)
    }

    /// Creates a `bsd` digest object.
    pub fn bsd() -> Self {
        Self::new(Algorithm::Bsd)
    }

    /// Creates a `cksum` digest object.
    pub fn cksum() -> Self {
        Self::new(Algorithm::Cksum)
    }

    /// Creates a `crc32` digest object.
    pub fn crc32() -> Self {
        Self::new(Algorithm::Crc32)
    }

    /// Creates a `null` digest object with the default 16-byte output.
    pub fn null() -> Self {
        Self::new(Algorithm::Null)
    }

    /// Creates a `random` digest object with the default 16-byte output.
    pub fn random() -> Self {
        Self::new(Algorithm::Random)
    }

    /// Creates a `sysv` digest object.
    pub fn sysv() -> Self {
        Self::new(Algorithm::Sysv)
    }

    /// Creates a `twoping` digest object.
    pub fn twoping() -> Self {
        Self::new(Algorithm::Twoping)
    }

    /// Creates a `udp` digest object.
    pub fn udp() -> Self {
        Self::new(Algorithm::Udp)
    }

    /// Returns the algorithm this object computes.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the canonical algorithm name.
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Returns the digest length in bytes.
    pub fn digest_size(&self) -> usize {
        self.engine.digest_size()
    }

    /// Feeds bytes into the digest.
    ///
    /// Accepts any byte sequence, including empty, and never fails. Calling
    /// `update(a)` then `update(b)` is equivalent to `update(a + b)`.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        self.engine.update(data.as_ref());
    }

    /// Returns the digest of all bytes fed so far.
    ///
    /// Repeated calls with no intervening [`Digest::update`] return
    /// identical bytes, and reading the digest never disturbs the running
    /// state.
    pub fn digest(&self) -> Bytes {
        self.engine.finalize()
    }

    /// Returns the digest as a lowercase hex string.
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }

    /// Returns an independent clone of this object.
    ///
    /// The clone carries the same algorithm, digest size, and accumulated
    /// state; mutating either object afterwards never affects the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}
