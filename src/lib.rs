//! Prefix-preserving pseudonymisation of IP and MAC addresses, using the
//! Crypto-PAn construction.
//!
//! Crypto-PAn anonymises an address byte-by-byte with a block cipher used
//! as a pseudorandom function: one AES-128 encryption per bit of the
//! address, each keyed on the bits of the address already fixed by
//! earlier rounds plus a secret pad. The result is a bijection on
//! addresses of a given length that preserves shared prefixes: two
//! addresses that agree on their first `n` bits before anonymisation
//! still agree on their first `n` bits afterwards, which keeps
//! anonymised traffic useful for prefix-based analysis (subnet
//! aggregation, routing-table lookups) without revealing the original
//! addresses.
//!
//! The only public type is [`Anonymiser`], constructed from a 32-byte
//! secret and used for any number of [`anonymise`][Anonymiser::anonymise]
//! / [`deanonymise`][Anonymiser::deanonymise] calls before being released.
//!
//! # Example
//!
//! ```
//! use crypto_pan::Anonymiser;
//! use std::net::IpAddr;
//!
//! let key: [u8; 32] = [
//!     21, 34, 23, 141, 51, 164, 207, 128, 19, 10, 91, 22, 73, 144, 125, 16, 216, 152, 143, 131,
//!     121, 121, 101, 39, 98, 87, 76, 45, 42, 132, 34, 2,
//! ];
//! let anonymiser = Anonymiser::new(&key).expect("valid key");
//!
//! let addr: IpAddr = "127.0.0.1".parse().unwrap();
//! let anonymised = anonymiser.anonymise_ip(addr).unwrap();
//! assert_eq!(anonymised.to_string(), "33.0.243.129");
//! ```
//!
//! # Scope
//!
//! This crate covers only the anonymisation/deanonymisation engine. It
//! does not provide key derivation beyond the trivial byte split above,
//! authenticated encryption, timing-side-channel protection, caching, or
//! IPv4-in-IPv6 address normalisation: a mapped `::ffff:a.b.c.d` address
//! is anonymised as a plain 16-byte address, not as its embedded IPv4
//! form.

mod aes;
mod anonymiser;
mod error;

pub use anonymiser::{AddressFamily, Anonymiser, MacAddress};
pub use error::CryptoPanError;
