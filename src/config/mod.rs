//! Configuration for digest construction.
//!
//! [`DigestConfig`] is the one place construction options live. The only
//! recognized option is `digest_size`, and only the `null` and `random`
//! algorithms honor it; every other algorithm rejects it at `build()` time
//! rather than silently ignoring a misconfiguration.
//!
//! # Example
//!
//! ```
//! use digestrs::{Algorithm, DigestConfig};
//!
//! let digest = DigestConfig::new(Algorithm::Random)
//!     .with_digest_size(8)
//!     .build()?;
//! assert_eq!(digest.digest_size(), 8);
//! # Ok::<(), digestrs::DigestError>(())
//! ```

use crate::algorithm::Algorithm;
use crate::digest::Digest;
use crate::engine::Engine;
use crate::error::DigestError;

/// Default digest length for the variable-size algorithms (`null`, `random`).
pub const DEFAULT_VARIABLE_DIGEST_SIZE: usize = 16;

/// Builder for a [`Digest`] with construction options.
///
/// For the common case of default options, [`Digest::new`] is the shorter
/// path; `DigestConfig` exists for the `digest_size` option and for
/// name-based construction with options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestConfig {
    /// The algorithm to construct.
    algorithm: Algorithm,

    /// Requested digest length, if any.
    digest_size: Option<usize>,
}

impl DigestConfig {
    /// Creates a configuration for the given algorithm with default options.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            digest_size: None,
        }
    }

    /// Creates a configuration by algorithm name.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::UnsupportedAlgorithm`] if the name is not in
    /// the supported set.
    pub fn by_name(name: &str) -> Result<Self, DigestError> {
        Ok(Self::new(Algorithm::from_name(name)?))
    }

    /// Requests a digest length in bytes.
    ///
    /// Note: This does not validate the option. Use [`DigestConfig::validate`]
    /// or [`DigestConfig::build`] to check that the algorithm supports a
    /// configurable length.
    pub fn with_digest_size(mut self, size: usize) -> Self {
        self.digest_size = Some(size);
        self
    }

    /// Returns the configured algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the requested digest length, if one was set.
    pub fn digest_size(&self) -> Option<usize> {
        self.digest_size
    }

    /// Validates the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::DigestSizeUnsupported`] if a `digest_size` was
    /// requested for a fixed-size algorithm.
    pub fn validate(&self) -> Result<(), DigestError> {
        if self.digest_size.is_some() && !self.algorithm.supports_digest_size() {
            return Err(DigestError::DigestSizeUnsupported {
                algorithm: self.algorithm.name(),
            });
        }
        Ok(())
    }

    /// Builds the digest object.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::DigestSizeUnsupported`] if a `digest_size` was
    /// requested for a fixed-size algorithm.
    pub fn build(self) -> Result<Digest, DigestError> {
        self.validate()?;
        Ok(Digest::with_engine(
            self.algorithm,
            Engine::new(self.algorithm, self.digest_size),
        ))
    }

    /// Builds the digest object pre-seeded with an initial byte chunk.
    ///
    /// Equivalent to [`DigestConfig::build`] followed by one
    /// [`Digest::update`] call.
    ///
    /// # Errors
    ///
    /// Same as [`DigestConfig::build`].
    pub fn build_with(self, data: impl AsRef<[u8]>) -> Result<Digest, DigestError> {
        let mut digest = self.build()?;
        digest.update(data);
        Ok(digest)
    }
}
