//! Printing encoded messages.

use crate::cli::OutputFormat;
use crate::error::CliResult;
use meshmsg_access::{AccessMessage, Aid, ModelMessage};
use serde::Serialize;
use std::fmt::Write as _;

/// Printable view of an encoded access message.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EncodedMessage {
    /// Message kind.
    pub message: &'static str,
    /// Opcode in hex.
    pub opcode: String,
    /// Application key identifier.
    pub aid: Aid,
    /// aszmic bit.
    pub aszmic: u8,
    /// Transaction id, if the message has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<u8>,
    /// Parameters in hex.
    pub parameters: String,
    /// Opcode followed by parameters, in hex.
    pub payload: String,
}

impl EncodedMessage {
    /// Build the view for `access`, which was assembled from `message`.
    pub fn new(message: &ModelMessage, access: &AccessMessage) -> Self {
        EncodedMessage {
            message: message.name(),
            opcode: access.opcode().to_string(),
            aid: access.aid(),
            aszmic: access.aszmic(),
            tid: message.tid(),
            parameters: hex::encode(access.parameters()),
            payload: hex::encode(access.payload()),
        }
    }
}

/// Render an encoded message.
pub fn render_message(encoded: &EncodedMessage, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(encoded)?),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "message:    {}", encoded.message);
            let _ = writeln!(out, "opcode:     {}", encoded.opcode);
            let _ = writeln!(out, "aid:        {}", encoded.aid);
            let _ = writeln!(out, "aszmic:     {}", encoded.aszmic);
            if let Some(tid) = encoded.tid {
                let _ = writeln!(out, "tid:        {}", tid);
            }
            let _ = writeln!(out, "parameters: {}", encoded.parameters);
            let _ = write!(out, "payload:    {}", encoded.payload);
            Ok(out)
        }
    }
}

/// Render an AID on its own.
pub fn render_aid(aid: Aid, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::json!({ "aid": aid }).to_string()),
        OutputFormat::Text => Ok(format!("aid: {}", aid)),
    }
}
