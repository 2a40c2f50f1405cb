//! The algorithm registry.
//!
//! [`Algorithm`] is a closed enum over every checksum this crate supports.
//! The set is fixed at compile time; name lookup is an exhaustive match, not
//! a runtime table, so adding an algorithm without wiring it everywhere is a
//! compile error.

use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_VARIABLE_DIGEST_SIZE;
use crate::error::DigestError;

/// A supported checksum algorithm.
///
/// Every variant maps to one engine with its own accumulator state. Names are
/// canonical lowercase strings and lookup is case-sensitive.
///
/// # Example
///
/// ```
/// use digestrs::Algorithm;
///
/// let algorithm = Algorithm::from_name("crc32")?;
/// assert_eq!(algorithm, Algorithm::Crc32);
/// assert_eq!(algorithm.digest_size(), 4);
/// # Ok::<(), digestrs::DigestError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Adler-32 (RFC 1950), two 16-bit sums mod 65521.
    Adler32,
    /// Classic BSD `sum`: rotate-right-by-one then add, 16-bit.
    Bsd,
    /// POSIX `cksum`: CRC-32 with polynomial 0x04C11DB7, length mixed in.
    Cksum,
    /// Standard CRC-32 (polynomial 0xEDB88320, reflected).
    Crc32,
    /// All-zero digest of configurable length.
    Null,
    /// Random bytes, stable per object, configurable length.
    Random,
    /// System V `sum`: byte sum folded to 16 bits.
    Sysv,
    /// 2ping one's-complement checksum (big-endian words, complemented).
    Twoping,
    /// UDP-style one's-complement checksum (zero reserved on the wire).
    Udp,
}

impl Algorithm {
    /// Every supported algorithm, in canonical name order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Adler32,
        Algorithm::Bsd,
        Algorithm::Cksum,
        Algorithm::Crc32,
        Algorithm::Null,
        Algorithm::Random,
        Algorithm::Sysv,
        Algorithm::Twoping,
        Algorithm::Udp,
    ];

    /// Returns the set of available algorithms.
    pub fn available() -> &'static [Algorithm] {
        &Self::ALL
    }

    /// Returns the algorithms guaranteed on every platform.
    ///
    /// Identical to [`Algorithm::available`]: nothing here is optional or
    /// platform-dependent.
    pub fn guaranteed() -> &'static [Algorithm] {
        &Self::ALL
    }

    /// Returns the canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Adler32 => "adler32",
            Algorithm::Bsd => "bsd",
            Algorithm::Cksum => "cksum",
            Algorithm::Crc32 => "crc32",
            Algorithm::Null => "null",
            Algorithm::Random => "random",
            Algorithm::Sysv => "sysv",
            Algorithm::Twoping => "twoping",
            Algorithm::Udp => "udp",
        }
    }

    /// Resolves a canonical name to an algorithm.
    ///
    /// Lookup is case-sensitive: `"crc32"` resolves, `"CRC32"` does not.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::UnsupportedAlgorithm`] if the name is not in
    /// the supported set.
    pub fn from_name(name: &str) -> Result<Self, DigestError> {
        match name {
            "adler32" => Ok(Algorithm::Adler32),
            "bsd" => Ok(Algorithm::Bsd),
            "cksum" => Ok(Algorithm::Cksum),
            "crc32" => Ok(Algorithm::Crc32),
            "null" => Ok(Algorithm::Null),
            "random" => Ok(Algorithm::Random),
            "sysv" => Ok(Algorithm::Sysv),
            "twoping" => Ok(Algorithm::Twoping),
            "udp" => Ok(Algorithm::Udp),
            _ => Err(DigestError::UnsupportedAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// Returns the default digest length in bytes.
    ///
    /// For [`Algorithm::Null`] and [`Algorithm::Random`] this is the length
    /// used when no explicit `digest_size` is configured.
    pub fn digest_size(self) -> usize {
        match self {
            Algorithm::Adler32 | Algorithm::Cksum | Algorithm::Crc32 => 4,
            Algorithm::Bsd | Algorithm::Sysv | Algorithm::Twoping | Algorithm::Udp => 2,
            Algorithm::Null | Algorithm::Random => DEFAULT_VARIABLE_DIGEST_SIZE,
        }
    }

    /// Returns whether the digest length is configurable at construction.
    ///
    /// Only `null` and `random` accept a `digest_size`; every other
    /// algorithm rejects the option.
    pub fn supports_digest_size(self) -> bool {
        matches!(self, Algorithm::Null | Algorithm::Random)
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
