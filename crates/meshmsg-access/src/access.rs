//! Access message envelopes.
//!
//! An [`AccessMessage`] is what the upper transport layer receives: the
//! opcode and parameters that form the access payload, plus the AID and MIC
//! size it needs to encrypt that payload with the right application key.
//!
//! ```text
//! +----------------+----------------------+
//! | opcode (1-3 B) | parameters (0-379 B) |
//! +----------------+----------------------+
//! ```

use crate::error::Result;
use crate::keys::{Aid, AppKey, AppKeyStore};
use crate::messages::ModelMessage;
use crate::opcode::Opcode;
use crate::types::MicSize;
use bytes::{BufMut, Bytes, BytesMut};

/// An assembled access message, ready for the upper transport layer.
///
/// All fields are computed once in the constructor and are read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessMessage {
    app_key: AppKey,
    mic_size: MicSize,
    opcode: Opcode,
    aid: Aid,
    parameters: Bytes,
}

impl AccessMessage {
    /// Assemble `message` for transmission with `app_key`.
    pub fn new(app_key: &AppKey, mic_size: MicSize, message: &ModelMessage) -> Self {
        let parameters = message.encode_parameters();
        let access = AccessMessage {
            app_key: *app_key,
            mic_size,
            opcode: message.opcode(),
            aid: app_key.aid(),
            parameters,
        };

        log::debug!(
            "assembled {} opcode={} aid={} aszmic={} tid={:?}",
            message.name(),
            access.opcode,
            access.aid,
            mic_size.aszmic(),
            message.tid()
        );
        log::trace!("{} parameters: {}", message.name(), hex::encode(&access.parameters));

        access
    }

    /// Assemble `message` with a key given as raw bytes.
    ///
    /// Fails with [`MessageError::KeyFormat`](crate::MessageError::KeyFormat)
    /// unless the key is exactly 16 bytes.
    pub fn with_raw_key(key: &[u8], mic_size: MicSize, message: &ModelMessage) -> Result<Self> {
        let app_key = AppKey::from_slice(key)?;
        Ok(Self::new(&app_key, mic_size, message))
    }

    /// Assemble `message` with the key bound to `key_index` in `store`.
    pub fn with_key_store(
        store: &impl AppKeyStore,
        key_index: u16,
        mic_size: MicSize,
        message: &ModelMessage,
    ) -> Result<Self> {
        let app_key = store.require_app_key(key_index)?;
        Ok(Self::new(app_key, mic_size, message))
    }

    /// Application key the message is bound to.
    pub fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    /// MIC size selector.
    pub fn mic_size(&self) -> MicSize {
        self.mic_size
    }

    /// The aszmic bit.
    pub fn aszmic(&self) -> u8 {
        self.mic_size.aszmic()
    }

    /// Opcode of the message.
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Application key identifier.
    pub fn aid(&self) -> Aid {
        self.aid
    }

    /// Encoded parameters.
    pub fn parameters(&self) -> &Bytes {
        &self.parameters
    }

    /// The access payload: opcode followed by parameters.
    pub fn payload(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.opcode.wire_len() + self.parameters.len());
        self.opcode.encode_into(&mut buf);
        buf.put_slice(&self.parameters);
        buf.freeze()
    }
}
