//! Common types used when building access messages.

use crate::constants::*;
use crate::error::{MessageError, Result};
use rand::Rng;

/// Size of the transport MIC protecting an access message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MicSize {
    /// 32-bit MIC (SZMIC = 0).
    #[default]
    Small,
    /// 64-bit MIC (SZMIC = 1).
    Large,
}

impl MicSize {
    /// Parse the aszmic selector bit.
    pub fn from_aszmic(aszmic: u8) -> Result<Self> {
        match aszmic {
            0 => Ok(MicSize::Small),
            1 => Ok(MicSize::Large),
            other => Err(MessageError::invalid_argument("aszmic", other.into(), 0, 1)),
        }
    }

    /// The aszmic selector bit.
    pub fn aszmic(self) -> u8 {
        match self {
            MicSize::Small => 0,
            MicSize::Large => 1,
        }
    }

    /// MIC length in bytes.
    pub fn tag_len(self) -> usize {
        match self {
            MicSize::Small => MIC_SIZE_SMALL,
            MicSize::Large => MIC_SIZE_LARGE,
        }
    }
}

/// Supplies transaction identifiers for messages whose caller did not pick one.
pub trait TransactionIdSource {
    /// Return the next transaction identifier.
    fn next_tid(&mut self) -> u8;
}

impl<F: FnMut() -> u8> TransactionIdSource for F {
    fn next_tid(&mut self) -> u8 {
        self()
    }
}

/// A wrapping transaction identifier counter.
#[derive(Debug, Clone, Default)]
pub struct TransactionCounter {
    next: u8,
}

impl TransactionCounter {
    /// Create a counter whose first identifier is `tid`.
    pub fn starting_at(tid: u8) -> Self {
        TransactionCounter { next: tid }
    }

    /// Create a counter starting at a random identifier.
    pub fn random() -> Self {
        Self::starting_at(rand::thread_rng().gen())
    }

    /// The identifier the next call to [`TransactionIdSource::next_tid`] returns.
    pub fn peek(&self) -> u8 {
        self.next
    }
}

impl TransactionIdSource for TransactionCounter {
    fn next_tid(&mut self) -> u8 {
        let tid = self.next;
        self.next = self.next.wrapping_add(1);
        tid
    }
}
