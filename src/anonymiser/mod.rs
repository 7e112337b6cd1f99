//! The Crypto-PAn anonymiser: construction, lifecycle, and the public
//! entry points built on top of the bit-cascade transform in
//! [`cascade`].
//!
//! # Example
//!
//! ```
//! use crypto_pan::Anonymiser;
//!
//! let key: [u8; 32] = [
//!     21, 34, 23, 141, 51, 164, 207, 128, 19, 10, 91, 22, 73, 144, 125, 16, 216, 152, 143, 131,
//!     121, 121, 101, 39, 98, 87, 76, 45, 42, 132, 34, 2,
//! ];
//! let anonymiser = Anonymiser::new(&key).expect("valid key");
//!
//! let anonymised = anonymiser.anonymise(&[128, 11, 68, 132]).unwrap();
//! assert_eq!(anonymised, vec![135, 242, 180, 132]);
//!
//! let recovered = anonymiser.deanonymise(&anonymised).unwrap();
//! assert_eq!(recovered, vec![128, 11, 68, 132]);
//! ```

mod cascade;
mod family;

#[cfg(test)]
mod tests;

pub use family::AddressFamily;

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use zeroize::Zeroize;

use crate::aes::aes_enc_block;
use crate::error::CryptoPanError;

/// A 6-byte MAC address, in canonical order.
pub type MacAddress = [u8; 6];

/// Prefix-preserving pseudonymisation engine, parameterised at
/// construction by a 32-byte secret.
///
/// Construction splits the secret into a 16-byte AES-128 key `K` and a
/// 16-byte raw pad seed `R`, then derives the working pad `P =
/// AES_ECB_Encrypt(K, R)`. `R` is discarded; `K` and `P` are the only
/// secret state retained, and both are zeroised on [`release`][Self::release]
/// and on drop.
///
/// An `Anonymiser` is not safe for concurrent mutation: all scratch state
/// used by a call lives on the stack for the duration of that call, so
/// distinct instances may be used in parallel without coordination, but a
/// single instance sharing a mutable reference across threads requires
/// external synchronisation.
pub struct Anonymiser {
    key: [u8; 16],
    pad: [u8; 16],
    disposed: bool,
}

impl Anonymiser {
    /// Construct an anonymiser from a 32-byte secret.
    ///
    /// The first 16 bytes become the AES-128 key `K`; the next 16 bytes
    /// are the raw pad seed `R`, encrypted once under `K` to produce the
    /// working pad `P` and then discarded. Fewer than 32 bytes is
    /// rejected with [`CryptoPanError::InvalidKey`].
    pub fn new(secret: &[u8]) -> Result<Self, CryptoPanError> {
        if secret.len() < 32 {
            return Err(CryptoPanError::InvalidKey);
        }

        let mut key = [0u8; 16];
        key.copy_from_slice(&secret[0..16]);

        let mut raw_pad = [0u8; 16];
        raw_pad.copy_from_slice(&secret[16..32]);

        let pad = aes_enc_block(&raw_pad, &key);
        raw_pad.zeroize();

        Ok(Self {
            key,
            pad,
            disposed: false,
        })
    }

    /// Construct an anonymiser from a 32-character ASCII secret, using
    /// each character's byte value directly. Non-ASCII input and
    /// strings shorter than 32 characters are rejected with
    /// [`CryptoPanError::InvalidKey`].
    pub fn from_ascii(secret: &str) -> Result<Self, CryptoPanError> {
        if !secret.is_ascii() {
            return Err(CryptoPanError::InvalidKey);
        }
        Self::new(secret.as_bytes())
    }

    fn ensure_live(&self) -> Result<(), CryptoPanError> {
        if self.disposed {
            Err(CryptoPanError::Disposed)
        } else {
            Ok(())
        }
    }

    /// Anonymise `address` (1..=16 bytes, network byte order). Inputs
    /// longer than 16 bytes are truncated to the first 16.
    pub fn anonymise(&self, address: &[u8]) -> Result<Vec<u8>, CryptoPanError> {
        self.ensure_live()?;
        let address = &address[..address.len().min(16)];
        cascade::forward(address, &self.key, &self.pad)
    }

    /// Recover the original address from `address`, the anonymised bytes.
    pub fn deanonymise(&self, address: &[u8]) -> Result<Vec<u8>, CryptoPanError> {
        self.ensure_live()?;
        let address = &address[..address.len().min(16)];
        cascade::inverse(address, &self.key, &self.pad)
    }

    /// Anonymise `bytes` after checking it satisfies the minimum length
    /// for the declared `family`. Used for dispatch from callers that
    /// tag addresses with an explicit family rather than passing a
    /// parsed address value.
    pub fn anonymise_family(
        &self,
        bytes: &[u8],
        family: AddressFamily,
    ) -> Result<Vec<u8>, CryptoPanError> {
        self.ensure_live()?;
        let slice = family.slice(bytes)?;
        cascade::forward(slice, &self.key, &self.pad)
    }

    /// Inverse of [`anonymise_family`][Self::anonymise_family].
    pub fn deanonymise_family(
        &self,
        bytes: &[u8],
        family: AddressFamily,
    ) -> Result<Vec<u8>, CryptoPanError> {
        self.ensure_live()?;
        let slice = family.slice(bytes)?;
        cascade::inverse(slice, &self.key, &self.pad)
    }

    /// Anonymise a parsed IP address, preserving its family. Always goes
    /// through the generic byte-length-`L` path (`L = 4` for IPv4, `L =
    /// 16` for IPv6): the byte path and the dedicated 4-byte path agree
    /// on 4-byte inputs, so dispatching an IPv4 address through it is
    /// correct and avoids a redundant specialised path.
    pub fn anonymise_ip(&self, addr: IpAddr) -> Result<IpAddr, CryptoPanError> {
        match addr {
            IpAddr::V4(v4) => {
                let out = self.anonymise(&v4.octets())?;
                Ok(IpAddr::V4(Ipv4Addr::new(out[0], out[1], out[2], out[3])))
            }
            IpAddr::V6(v6) => {
                let out = self.anonymise(&v6.octets())?;
                let bytes: [u8; 16] = out.try_into().expect("IPv6 path always yields 16 bytes");
                Ok(IpAddr::V6(Ipv6Addr::from(bytes)))
            }
        }
    }

    /// Inverse of [`anonymise_ip`][Self::anonymise_ip].
    pub fn deanonymise_ip(&self, addr: IpAddr) -> Result<IpAddr, CryptoPanError> {
        match addr {
            IpAddr::V4(v4) => {
                let out = self.deanonymise(&v4.octets())?;
                Ok(IpAddr::V4(Ipv4Addr::new(out[0], out[1], out[2], out[3])))
            }
            IpAddr::V6(v6) => {
                let out = self.deanonymise(&v6.octets())?;
                let bytes: [u8; 16] = out.try_into().expect("IPv6 path always yields 16 bytes");
                Ok(IpAddr::V6(Ipv6Addr::from(bytes)))
            }
        }
    }

    /// Anonymise a 6-byte MAC address. Prefix preservation over the
    /// 6-byte path preserves the OUI (first 3 bytes) across addresses
    /// from the same vendor.
    pub fn anonymise_mac(&self, mac: &MacAddress) -> Result<MacAddress, CryptoPanError> {
        let out = self.anonymise(mac)?;
        Ok(out.try_into().expect("6-byte input yields 6-byte output"))
    }

    /// Inverse of [`anonymise_mac`][Self::anonymise_mac].
    pub fn deanonymise_mac(&self, mac: &MacAddress) -> Result<MacAddress, CryptoPanError> {
        let out = self.deanonymise(mac)?;
        Ok(out.try_into().expect("6-byte input yields 6-byte output"))
    }

    /// Legacy IPv4 entry point taking a host-order 32-bit integer,
    /// retained only for regression tests against the classical
    /// Crypto-PAn reference interface. Produces the same bytes as
    /// [`anonymise`][Self::anonymise] on the network-order octets of
    /// `addr_host`, modulo the endianness conversion performed here.
    pub fn anonymise_v4_host_order(&self, addr_host: u32) -> Result<u32, CryptoPanError> {
        self.ensure_live()?;
        let bytes = addr_host.to_be_bytes();
        let out = cascade::forward(&bytes, &self.key, &self.pad)?;
        let out: [u8; 4] = out.try_into().expect("4-byte input yields 4-byte output");
        Ok(u32::from_be_bytes(out))
    }

    /// Zeroise `K` and `P` and dispose of this anonymiser. Idempotent:
    /// calling it again is a no-op. Any call after release fails with
    /// [`CryptoPanError::Disposed`].
    pub fn release(&mut self) {
        if !self.disposed {
            self.key.zeroize();
            self.pad.zeroize();
            self.disposed = true;
        }
    }

    /// Whether `release()` has already been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[cfg(test)]
    pub(crate) fn working_pad(&self) -> &[u8; 16] {
        &self.pad
    }
}

impl Drop for Anonymiser {
    fn drop(&mut self) {
        self.release();
    }
}
