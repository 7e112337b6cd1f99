//! Address-family dispatch facade.
//!
//! A thin layer over the generic byte-length-`L` cascade that enforces the
//! minimum length a declared family requires. It does not special-case `L`
//! in any way that would change the bytes produced for `L = 4`: the
//! generic byte path and the 4-byte path must agree (see
//! [`crate::anonymiser::Anonymiser::anonymise_ip`]).

use std::str::FromStr;

use crate::error::CryptoPanError;

/// A closed address-family tag, replacing the dynamically-typed overloads
/// of the original interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Minimum byte length this family requires.
    pub fn min_len(self) -> usize {
        match self {
            AddressFamily::V4 => 4,
            AddressFamily::V6 => 16,
        }
    }

    /// Slice `bytes` down to the family's address width, or fail if it is
    /// too short.
    pub fn slice<'a>(self, bytes: &'a [u8]) -> Result<&'a [u8], CryptoPanError> {
        if bytes.len() < self.min_len() {
            return Err(CryptoPanError::InvalidInput);
        }
        Ok(&bytes[..self.min_len()])
    }
}

impl FromStr for AddressFamily {
    type Err = CryptoPanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v4" | "V4" | "IPv4" | "ipv4" => Ok(AddressFamily::V4),
            "v6" | "V6" | "IPv6" | "ipv6" => Ok(AddressFamily::V6),
            _ => Err(CryptoPanError::InvalidFamily),
        }
    }
}
