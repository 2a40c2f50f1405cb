//! Error types for digestrs.

use std::fmt;

/// Errors that can occur when constructing a digest object.
///
/// Once a [`Digest`](crate::Digest) is constructed, its operations
/// (`update`, `digest`, `hexdigest`, `copy`) cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The requested algorithm name is not in the supported set.
    UnsupportedAlgorithm {
        /// The name that failed to resolve.
        name: String,
    },

    /// A `digest_size` was requested for an algorithm whose output length
    /// is fixed.
    DigestSizeUnsupported {
        /// The algorithm that rejected the option.
        algorithm: &'static str,
    },
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::UnsupportedAlgorithm { name } => {
                write!(f, "unsupported digest algorithm: {:?}", name)
            }
            DigestError::DigestSizeUnsupported { algorithm } => {
                write!(f, "algorithm {} has a fixed digest size", algorithm)
            }
        }
    }
}

impl std::error::Error for DigestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unsupported_algorithm() {
        let err = DigestError::UnsupportedAlgorithm {
            name: "badalgorithm".to_string(),
        };
        assert!(err.to_string().contains("unsupported digest algorithm"));
        assert!(err.to_string().contains("badalgorithm"));
    }

    #[test]
    fn test_display_digest_size_unsupported() {
        let err = DigestError::DigestSizeUnsupported { algorithm: "crc32" };
        assert!(err.to_string().contains("fixed digest size"));
        assert!(err.to_string().contains("crc32"));
    }
}
