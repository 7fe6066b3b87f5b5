//! Application keys and the identifiers derived from them.
//!
//! This module provides:
//! - [`AppKey`] - a 128-bit application key, read-only once constructed
//! - [`Aid`] - the 6-bit application key identifier derived with `k4`
//! - [`AppKeyStore`] - lookup of keys by their 12-bit key index

use crate::constants::{AID_MASK, APP_KEY_SIZE};
use crate::crypto;
use crate::error::{MessageError, Result};
use std::collections::HashMap;
use std::fmt;

/// A 128-bit application key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppKey([u8; APP_KEY_SIZE]);

impl AppKey {
    /// Create a key from its raw bytes.
    pub fn new(bytes: [u8; APP_KEY_SIZE]) -> Self {
        AppKey(bytes)
    }

    /// Create from a slice. Fails unless the slice is exactly 16 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; APP_KEY_SIZE] = slice.try_into().map_err(|_| MessageError::KeyFormat {
            expected: APP_KEY_SIZE,
            actual: slice.len(),
        })?;
        Ok(AppKey(bytes))
    }

    /// Parse a key from 32 hex characters.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| MessageError::KeyHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; APP_KEY_SIZE] {
        &self.0
    }

    /// Get the bytes as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Derive the AID for this key.
    pub fn aid(&self) -> Aid {
        Aid::new(crypto::k4(&self.0))
    }
}

impl From<[u8; APP_KEY_SIZE]> for AppKey {
    fn from(bytes: [u8; APP_KEY_SIZE]) -> Self {
        AppKey(bytes)
    }
}

impl AsRef<[u8]> for AppKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Application key identifier. Always fits in six bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Aid(u8);

impl Aid {
    pub(crate) fn new(raw: u8) -> Self {
        Aid(raw & AID_MASK)
    }

    /// The 6-bit value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Aid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

impl From<Aid> for u8 {
    fn from(aid: Aid) -> Self {
        aid.0
    }
}

/// Source of application keys, indexed by their 12-bit key index.
pub trait AppKeyStore {
    /// Look up the key bound to `index`.
    fn app_key(&self, index: u16) -> Option<&AppKey>;

    /// Look up the key bound to `index`, failing if none is bound.
    fn require_app_key(&self, index: u16) -> Result<&AppKey> {
        self.app_key(index).ok_or(MessageError::UnknownAppKey(index))
    }
}

impl AppKeyStore for HashMap<u16, AppKey> {
    fn app_key(&self, index: u16) -> Option<&AppKey> {
        self.get(&index)
    }
}
