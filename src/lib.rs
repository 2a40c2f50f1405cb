//! digestrs
//!
//! Incremental digest objects for small non-cryptographic checksums.
//!
//! `digestrs` wraps a family of classic checksum algorithms behind one
//! uniform, hashlib-style object API: feed bytes in with `update()`, read the
//! result out with `digest()` or `hexdigest()`, snapshot in-progress state
//! with `copy()`. Algorithms are interchangeable, so generic code can treat a
//! CRC the same way it treats a real hash function.
//!
//! Supported algorithms: `adler32`, `bsd`, `cksum`, `crc32`, `null`,
//! `random`, `sysv`, `twoping`, `udp`.
//!
//! The crate intentionally:
//! - does NOT provide cryptographic security (these are checksums, not
//!   security digests)
//! - does NOT manage files, readers, or network transports
//! - does NOT manage concurrency
//!
//! It only does one thing: **bytes in → checksum out**
//!
//! # By algorithm
//!
//! ```
//! use digestrs::{Algorithm, Digest};
//!
//! let mut digest = Digest::new(Algorithm::Crc32);
//! digest.update(b"foo");
//! digest.update(b"bar");
//! assert_eq!(digest.hexdigest(), "9ef61f95");
//! ```
//!
//! # By name
//!
//! ```
//! use digestrs::Digest;
//!
//! let mut digest = Digest::by_name("adler32")?;
//! digest.update(b"foo");
//! assert_eq!(digest.hexdigest(), "02820145");
//! # Ok::<(), digestrs::DigestError>(())
//! ```
//!
//! # Configured construction
//!
//! ```
//! use digestrs::{Algorithm, DigestConfig};
//!
//! let digest = DigestConfig::new(Algorithm::Null)
//!     .with_digest_size(3)
//!     .build_with(b"anything")?;
//! assert_eq!(digest.hexdigest(), "000000");
//! # Ok::<(), digestrs::DigestError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod algorithm;
mod config;
mod digest;
mod error;

mod engine; // internal checksum engines

//
// Public surface (intentionally tiny)
//

pub use algorithm::Algorithm;
pub use config::{DEFAULT_VARIABLE_DIGEST_SIZE, DigestConfig};
pub use digest::Digest;
pub use error::DigestError;
