//! Protocol constants
//!
//! These constants define the opcodes, parameter lengths and field limits
//! used by the access-layer messages this crate encodes. All 2-octet
//! opcodes are SIG model opcodes and are sent big-endian on the wire.

// ============================================================================
// Generic OnOff Model
// ============================================================================

/// Read the Generic OnOff state.
pub const GENERIC_ON_OFF_GET: u16 = 0x8201;
/// Set the Generic OnOff state, acknowledged.
pub const GENERIC_ON_OFF_SET: u16 = 0x8202;
/// Set the Generic OnOff state, unacknowledged.
pub const GENERIC_ON_OFF_SET_UNACKNOWLEDGED: u16 = 0x8203;

// ============================================================================
// Generic Level Model
// ============================================================================

/// Read the Generic Level state.
pub const GENERIC_LEVEL_GET: u16 = 0x8205;
/// Set the Generic Level state, acknowledged.
pub const GENERIC_LEVEL_SET: u16 = 0x8206;
/// Set the Generic Level state, unacknowledged.
pub const GENERIC_LEVEL_SET_UNACKNOWLEDGED: u16 = 0x8207;
/// Apply a relative change to the Generic Level state, acknowledged.
pub const GENERIC_DELTA_SET: u16 = 0x8209;
/// Apply a relative change to the Generic Level state, unacknowledged.
pub const GENERIC_DELTA_SET_UNACKNOWLEDGED: u16 = 0x820A;
/// Start a continuous Generic Level change, acknowledged.
pub const GENERIC_MOVE_SET: u16 = 0x820B;
/// Start a continuous Generic Level change, unacknowledged.
pub const GENERIC_MOVE_SET_UNACKNOWLEDGED: u16 = 0x820C;

// ============================================================================
// Light Lightness Model
// ============================================================================

/// Read the Light Lightness Actual state.
pub const LIGHT_LIGHTNESS_GET: u16 = 0x824B;
/// Set the Light Lightness Actual state, acknowledged.
pub const LIGHT_LIGHTNESS_SET: u16 = 0x824C;
/// Set the Light Lightness Actual state, unacknowledged.
pub const LIGHT_LIGHTNESS_SET_UNACKNOWLEDGED: u16 = 0x824D;

// ============================================================================
// Scene Model
// ============================================================================

/// Read the current scene.
pub const SCENE_GET: u16 = 0x8241;
/// Recall a stored scene, acknowledged.
pub const SCENE_RECALL: u16 = 0x8242;
/// Recall a stored scene, unacknowledged.
pub const SCENE_RECALL_UNACKNOWLEDGED: u16 = 0x8243;
/// Read the scene register.
pub const SCENE_REGISTER_GET: u16 = 0x8244;
/// Store the current state as a scene, acknowledged.
pub const SCENE_STORE: u16 = 0x8246;
/// Store the current state as a scene, unacknowledged.
pub const SCENE_STORE_UNACKNOWLEDGED: u16 = 0x8247;
/// Delete a stored scene, acknowledged.
pub const SCENE_DELETE: u16 = 0x829E;
/// Delete a stored scene, unacknowledged.
pub const SCENE_DELETE_UNACKNOWLEDGED: u16 = 0x829F;

// ============================================================================
// Parameter Lengths
// ============================================================================

/// Transition time byte plus delay byte.
pub const TRANSITION_PARAMS_LENGTH: usize = 2;
/// OnOff (1) + TID (1).
pub const GENERIC_ON_OFF_SET_PARAMS_LENGTH: usize = 2;
/// Level (2) + TID (1).
pub const GENERIC_LEVEL_SET_PARAMS_LENGTH: usize = 3;
/// Delta level (4) + TID (1).
pub const GENERIC_DELTA_SET_PARAMS_LENGTH: usize = 5;
/// Delta level (2) + TID (1).
pub const GENERIC_MOVE_SET_PARAMS_LENGTH: usize = 3;
/// Lightness (2) + TID (1).
pub const LIGHT_LIGHTNESS_SET_PARAMS_LENGTH: usize = 3;
/// Lightness (2) + TID (1) + transition time (1) + delay (1).
pub const LIGHT_LIGHTNESS_SET_TRANSITION_PARAMS_LENGTH: usize =
    LIGHT_LIGHTNESS_SET_PARAMS_LENGTH + TRANSITION_PARAMS_LENGTH;
/// Scene number (2) + TID (1).
pub const SCENE_RECALL_PARAMS_LENGTH: usize = 3;
/// Scene number (2).
pub const SCENE_STORE_PARAMS_LENGTH: usize = 2;
/// Scene number (2).
pub const SCENE_DELETE_PARAMS_LENGTH: usize = 2;

// ============================================================================
// Field Limits
// ============================================================================

/// Largest number of transition steps (6-bit field).
pub const TRANSITION_STEPS_MAX: u8 = 0x3F;
/// Bit offset of the step resolution inside the transition time byte.
pub const TRANSITION_RESOLUTION_SHIFT: u8 = 6;
/// Duration of one delay step in milliseconds.
pub const DELAY_STEP_MS: u64 = 5;

// ============================================================================
// Keys
// ============================================================================

/// Application key size in bytes.
pub const APP_KEY_SIZE: usize = 16;
/// Mask selecting the 6-bit AID from the k4 output.
pub const AID_MASK: u8 = 0x3F;
/// Largest application key index (12-bit field).
pub const KEY_INDEX_MAX: u16 = 0x0FFF;

// ============================================================================
// Message Integrity Check
// ============================================================================

/// MIC length in bytes when SZMIC is 0.
pub const MIC_SIZE_SMALL: usize = 4;
/// MIC length in bytes when SZMIC is 1.
pub const MIC_SIZE_LARGE: usize = 8;
