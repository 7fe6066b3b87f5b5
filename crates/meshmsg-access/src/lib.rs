//! Mesh Access-Layer Message Encoding
//!
//! This crate turns typed model commands ("set lightness to X over 10
//! steps") into the exact byte sequences the mesh access layer puts on the
//! wire, together with the AID and MIC size the upper transport layer needs
//! to encrypt them. Decoding, encryption and framing live elsewhere.
//!
//! # Overview
//!
//! - [`ModelMessage`]: one variant per message kind, with a single
//!   [`encode_parameters`](ModelMessage::encode_parameters) dispatch
//! - [`Transition`]: the optional (steps, resolution, delay) timing block
//! - [`derive_aid`] / [`AppKey::aid`]: the `k4` application key identifier
//! - [`AccessMessage`]: the immutable envelope handed to the transport layer
//!
//! Multi-byte parameters are little-endian; SIG opcodes are big-endian.
//!
//! # Example
//!
//! ```rust
//! use meshmsg_access::{AccessMessage, AppKey, MicSize, ModelMessage, StepResolution, Transition};
//!
//! let key = AppKey::from_hex("63964771734fbd76e3b40519d1d94a48")?;
//! let transition = Transition::new(10, StepResolution::Seconds1, 20)?;
//! let message = ModelMessage::light_lightness_set(0x00FF, 2, Some(transition))?;
//!
//! let access = AccessMessage::new(&key, MicSize::Small, &message);
//! assert_eq!(&access.parameters()[..], &[0xFF, 0x00, 0x02, 0x4A, 0x14]);
//! assert_eq!(&access.payload()[..2], &[0x82, 0x4C]);
//! # Ok::<(), meshmsg_access::MessageError>(())
//! ```

mod access;
mod constants;
mod crypto;
mod error;
mod keys;
mod messages;
mod opcode;
mod transition;
mod types;

pub use access::AccessMessage;
pub use constants::*;
pub use crypto::{aes_cmac, derive_aid, k4, s1};
pub use error::{MessageError, Result};
pub use keys::{Aid, AppKey, AppKeyStore};
pub use messages::ModelMessage;
pub use opcode::Opcode;
pub use transition::{StepResolution, Transition};
pub use types::{MicSize, TransactionCounter, TransactionIdSource};
