//! Key derivation for application key identifiers.
//!
//! The AID is the output of the mesh `k4` function truncated to six bits.
//! `k4` is built from AES-CMAC:
//!
//! ```text
//! SALT = s1("smk4")
//! T    = AES-CMAC(SALT, N)
//! k4   = AES-CMAC(T, "id6" || 0x01) mod 2^6
//! ```
//!
//! where `s1(M) = AES-CMAC(0^128, M)`.

use crate::constants::{AID_MASK, APP_KEY_SIZE};
use crate::error::{MessageError, Result};
use crate::keys::Aid;
use aes::Aes128;
use cmac::{Cmac, Mac};

const K4_SALT_INPUT: &[u8] = b"smk4";
const K4_INFO: &[u8] = b"id6\x01";

// ============================================================================
// AES-CMAC Primitives
// ============================================================================

/// AES-CMAC over `message` keyed with `key`.
pub fn aes_cmac(key: &[u8; 16], message: &[u8]) -> [u8; 16] {
    let mut mac = <Cmac<Aes128> as Mac>::new(&(*key).into());
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Salt generation function `s1`.
pub fn s1(message: &[u8]) -> [u8; 16] {
    aes_cmac(&[0u8; 16], message)
}

// ============================================================================
// AID Derivation
// ============================================================================

/// The `k4` derivation function. Returns the 6-bit AID for `key`.
pub fn k4(key: &[u8; APP_KEY_SIZE]) -> u8 {
    let salt = s1(K4_SALT_INPUT);
    let t = aes_cmac(&salt, key);
    let output = aes_cmac(&t, K4_INFO);
    output[15] & AID_MASK
}

/// Derive the AID from raw application key bytes.
///
/// Fails with [`MessageError::KeyFormat`] unless `key` is exactly 16 bytes.
pub fn derive_aid(key: &[u8]) -> Result<Aid> {
    let key: &[u8; APP_KEY_SIZE] = key.try_into().map_err(|_| MessageError::KeyFormat {
        expected: APP_KEY_SIZE,
        actual: key.len(),
    })?;
    Ok(Aid::new(k4(key)))
}
