//! Command-line encoder for mesh access-layer messages.
//!
//! The `meshmsg` binary builds one model message from its arguments,
//! assembles it with the selected application key and prints the opcode,
//! AID and parameter bytes the transport layer would receive.
//!
//! # Example
//!
//! ```text
//! $ meshmsg --key 63964771734fbd76e3b40519d1d94a48 lightness-set 255 --tid 2 \
//!       --steps 10 --resolution 1 --delay 20
//! message:    LightLightnessSet
//! opcode:     0x824C
//! aid:        0x26
//! aszmic:     0
//! tid:        2
//! parameters: ff00024a14
//! payload:    824cff00024a14
//! ```

mod cli;
mod config;
mod error;
pub mod logging;
mod render;

pub use cli::*;
pub use config::*;
pub use error::*;
pub use render::*;

use meshmsg_access::{AccessMessage, AppKey, AppKeyStore, MicSize, TransactionCounter};

/// Run the encoder and return the text to print.
pub fn run(cli: &Cli) -> CliResult<String> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let app_key = resolve_app_key(cli, &config)?;

    let mut tids = match config.initial_tid {
        Some(tid) => TransactionCounter::starting_at(tid),
        None => TransactionCounter::random(),
    };
    let Some(message) = cli.command.to_message(&mut tids)? else {
        return render_aid(app_key.aid(), cli.format);
    };

    let mic_size = cli.mic.map(MicSize::from).unwrap_or(config.mic);
    let access = AccessMessage::new(&app_key, mic_size, &message);
    tracing::info!(
        kind = message.name(),
        opcode = %access.opcode(),
        aid = %access.aid(),
        len = access.parameters().len(),
        "encoded access message"
    );

    render_message(&EncodedMessage::new(&message, &access), cli.format)
}

/// Pick the application key: `--key` first, then `--key-index`, then the
/// only key in the configuration if there is exactly one.
fn resolve_app_key(cli: &Cli, config: &CliConfig) -> CliResult<AppKey> {
    if let Some(hex) = &cli.key {
        return Ok(AppKey::from_hex(hex)?);
    }

    let store = config.key_store()?;
    match cli.key_index {
        Some(index) => Ok(*store.require_app_key(index)?),
        None if store.len() == 1 => store.values().next().copied().ok_or(CliError::MissingKey),
        None => Err(CliError::MissingKey),
    }
}
