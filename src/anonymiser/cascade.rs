//! The Crypto-PAn bit-cascade transform.
//!
//! Both `forward` and `inverse` share the same per-round block construction:
//! round `pos` builds a 16-byte AES input whose first `idx` bytes (and the
//! top `bit` bits of byte `idx`) come from the known prefix, and whose
//! remainder comes from the working pad `P`. They differ only in what they
//! treat as "known": `forward` already has the whole plaintext address,
//! `inverse` only has the bits it has reconstructed so far.

use crate::aes::aes_enc_block;
use crate::error::CryptoPanError;

const MAX_LEN: usize = 16;

/// Build the AES input block for round `pos`, drawing the known prefix
/// from `source` and the rest from `pad`.
fn round_input(pos: usize, source: &[u8], pad: &[u8; 16]) -> [u8; 16] {
    if pos == 0 {
        return *pad;
    }

    let idx = pos / 8;
    let bit = pos % 8;

    let mut x = *pad;
    x[..idx].copy_from_slice(&source[..idx]);

    if bit != 0 {
        let mask = 0xFFu8 << (8 - bit);
        x[idx] = (source[idx] & mask) | (pad[idx] & !mask);
    }
    // bit == 0: byte `idx` comes entirely from the pad, which `x` already holds.

    x
}

fn check_length(len: usize) -> Result<(), CryptoPanError> {
    if len == 0 || len > MAX_LEN {
        Err(CryptoPanError::InvalidInput)
    } else {
        Ok(())
    }
}

/// Forward transform: anonymise `address` (1..=16 bytes, network byte order).
pub fn forward(
    address: &[u8],
    key: &[u8; 16],
    pad: &[u8; 16],
) -> Result<Vec<u8>, CryptoPanError> {
    check_length(address.len())?;
    let l = address.len();

    let mut mask_bits = vec![0u8; l];
    for pos in 0..8 * l {
        let x = round_input(pos, address, pad);
        let y = aes_enc_block(&x, key);
        let bit = y[0] >> 7;
        let idx = pos / 8;
        let shift = 7 - (pos % 8);
        mask_bits[idx] |= bit << shift;
    }

    for (out, a) in mask_bits.iter_mut().zip(address.iter()) {
        *out ^= a;
    }
    Ok(mask_bits)
}

/// Inverse transform: recover the original address from `address` (the
/// anonymised bytes). Reuses the forward machinery, but feeds each round
/// the bits reconstructed so far instead of ciphertext bits.
pub fn inverse(
    address: &[u8],
    key: &[u8; 16],
    pad: &[u8; 16],
) -> Result<Vec<u8>, CryptoPanError> {
    check_length(address.len())?;
    let l = address.len();

    let mut out = address.to_vec();
    for pos in 0..8 * l {
        let x = round_input(pos, &out, pad);
        let y = aes_enc_block(&x, key);
        let bit = y[0] >> 7;
        let idx = pos / 8;
        let shift = 7 - (pos % 8);
        out[idx] ^= bit << shift;
    }
    Ok(out)
}
