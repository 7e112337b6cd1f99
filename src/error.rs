//! Error taxonomy for the Crypto-PAn anonymiser.

use thiserror::Error;

/// Failure modes of [`crate::anonymiser::Anonymiser`].
///
/// These are the error *kinds* the construction can raise; none of them
/// carry secret material, and none are retried internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CryptoPanError {
    /// The secret is missing or shorter than the required 32 bytes.
    #[error("secret key is missing or shorter than the required 32 bytes")]
    InvalidKey,

    /// The address is null, zero-length, longer than 16 bytes in a context
    /// that forbids truncation, or too short for the declared family.
    #[error("address is null, zero-length, or too short for the declared family")]
    InvalidInput,

    /// A family-tagged entry point was called with a family other than
    /// IPv4 or IPv6.
    #[error("address family is neither IPv4 nor IPv6")]
    InvalidFamily,

    /// The anonymiser was used after `release()`.
    #[error("anonymiser was used after release()")]
    Disposed,

    /// The AES primitive reported a failure. Should not occur with a
    /// well-formed key and a 16-byte block; kept for parity with the
    /// documented error taxonomy and for forward compatibility with
    /// swappable cipher backends.
    #[error("AES primitive reported a failure")]
    Internal,
}
