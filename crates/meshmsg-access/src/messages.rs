//! Model messages that can be sent to a mesh element.
//!
//! Each variant carries its own field set. Fields are stored in their wire
//! types, so a constructed `ModelMessage` is always encodable; the checked
//! constructors (`light_lightness_set`, `scene_store`, ...) accept raw
//! integers and reject anything outside the protocol range.

use crate::constants::*;
use crate::error::{check_range, Result};
use crate::opcode::Opcode;
use crate::transition::Transition;
use bytes::{BufMut, Bytes, BytesMut};

/// Messages that can be sent to an element's models.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelMessage {
    /// Read the Generic OnOff state.
    GenericOnOffGet,

    /// Set the Generic OnOff state.
    GenericOnOffSet {
        /// Target state.
        on: bool,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition to the target state.
        transition: Option<Transition>,
    },

    /// Set the Generic OnOff state without a status reply.
    GenericOnOffSetUnacknowledged {
        /// Target state.
        on: bool,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition to the target state.
        transition: Option<Transition>,
    },

    /// Read the Generic Level state.
    GenericLevelGet,

    /// Set the Generic Level state.
    GenericLevelSet {
        /// Target level.
        level: i16,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition to the target level.
        transition: Option<Transition>,
    },

    /// Set the Generic Level state without a status reply.
    GenericLevelSetUnacknowledged {
        /// Target level.
        level: i16,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition to the target level.
        transition: Option<Transition>,
    },

    /// Change the Generic Level state by a relative amount.
    GenericDeltaSet {
        /// Level change.
        delta: i32,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition.
        transition: Option<Transition>,
    },

    /// Change the Generic Level state by a relative amount without a status reply.
    GenericDeltaSetUnacknowledged {
        /// Level change.
        delta: i32,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition.
        transition: Option<Transition>,
    },

    /// Move the Generic Level state continuously.
    GenericMoveSet {
        /// Level change per transition period.
        delta: i16,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition; its duration sets the speed of the move.
        transition: Option<Transition>,
    },

    /// Move the Generic Level state continuously without a status reply.
    GenericMoveSetUnacknowledged {
        /// Level change per transition period.
        delta: i16,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition; its duration sets the speed of the move.
        transition: Option<Transition>,
    },

    /// Read the Light Lightness Actual state.
    LightLightnessGet,

    /// Set the Light Lightness Actual state.
    LightLightnessSet {
        /// Target lightness.
        lightness: u16,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition to the target lightness.
        transition: Option<Transition>,
    },

    /// Set the Light Lightness Actual state without a status reply.
    LightLightnessSetUnacknowledged {
        /// Target lightness.
        lightness: u16,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition to the target lightness.
        transition: Option<Transition>,
    },

    /// Read the current scene.
    SceneGet,

    /// Read the scene register.
    SceneRegisterGet,

    /// Recall a stored scene.
    SceneRecall {
        /// Scene to recall.
        scene_number: u16,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition to the scene.
        transition: Option<Transition>,
    },

    /// Recall a stored scene without a status reply.
    SceneRecallUnacknowledged {
        /// Scene to recall.
        scene_number: u16,
        /// Transaction identifier.
        tid: u8,
        /// Optional transition to the scene.
        transition: Option<Transition>,
    },

    /// Store the current state as a scene.
    SceneStore {
        /// Scene to store.
        scene_number: u16,
    },

    /// Store the current state as a scene without a status reply.
    SceneStoreUnacknowledged {
        /// Scene to store.
        scene_number: u16,
    },

    /// Delete a stored scene.
    SceneDelete {
        /// Scene to delete.
        scene_number: u16,
    },

    /// Delete a stored scene without a status reply.
    SceneDeleteUnacknowledged {
        /// Scene to delete.
        scene_number: u16,
    },
}

fn tid_from(tid: i64) -> Result<u8> {
    Ok(check_range("transaction id", tid, 0, u8::MAX.into())? as u8)
}

fn u16_from(field: &'static str, value: i64) -> Result<u16> {
    Ok(check_range(field, value, 0, u16::MAX.into())? as u16)
}

fn i16_from(field: &'static str, value: i64) -> Result<i16> {
    Ok(check_range(field, value, i16::MIN.into(), i16::MAX.into())? as i16)
}

impl ModelMessage {
    // ------------------------------------------------------------------------
    // Checked constructors
    // ------------------------------------------------------------------------

    /// Generic OnOff Set. `on` must be 0 or 1.
    pub fn generic_on_off_set(on: i64, tid: i64, transition: Option<Transition>) -> Result<Self> {
        let on = check_range("onoff", on, 0, 1)? == 1;
        Ok(ModelMessage::GenericOnOffSet {
            on,
            tid: tid_from(tid)?,
            transition,
        })
    }

    /// Generic Level Set. `level` must fit in a signed 16-bit integer.
    pub fn generic_level_set(level: i64, tid: i64, transition: Option<Transition>) -> Result<Self> {
        Ok(ModelMessage::GenericLevelSet {
            level: i16_from("level", level)?,
            tid: tid_from(tid)?,
            transition,
        })
    }

    /// Generic Delta Set. `delta` must fit in a signed 32-bit integer.
    pub fn generic_delta_set(delta: i64, tid: i64, transition: Option<Transition>) -> Result<Self> {
        let delta = check_range("delta level", delta, i32::MIN.into(), i32::MAX.into())? as i32;
        Ok(ModelMessage::GenericDeltaSet {
            delta,
            tid: tid_from(tid)?,
            transition,
        })
    }

    /// Generic Move Set. `delta` must fit in a signed 16-bit integer.
    pub fn generic_move_set(delta: i64, tid: i64, transition: Option<Transition>) -> Result<Self> {
        Ok(ModelMessage::GenericMoveSet {
            delta: i16_from("delta level", delta)?,
            tid: tid_from(tid)?,
            transition,
        })
    }

    /// Light Lightness Set. `lightness` must be between 0x0000 and 0xFFFF.
    pub fn light_lightness_set(
        lightness: i64,
        tid: i64,
        transition: Option<Transition>,
    ) -> Result<Self> {
        Ok(ModelMessage::LightLightnessSet {
            lightness: u16_from("lightness", lightness)?,
            tid: tid_from(tid)?,
            transition,
        })
    }

    /// Scene Recall.
    pub fn scene_recall(scene_number: i64, tid: i64, transition: Option<Transition>) -> Result<Self> {
        Ok(ModelMessage::SceneRecall {
            scene_number: u16_from("scene number", scene_number)?,
            tid: tid_from(tid)?,
            transition,
        })
    }

    /// Scene Store.
    pub fn scene_store(scene_number: i64) -> Result<Self> {
        Ok(ModelMessage::SceneStore {
            scene_number: u16_from("scene number", scene_number)?,
        })
    }

    /// Scene Delete.
    pub fn scene_delete(scene_number: i64) -> Result<Self> {
        Ok(ModelMessage::SceneDelete {
            scene_number: u16_from("scene number", scene_number)?,
        })
    }

    /// The unacknowledged form of this message. Messages without one
    /// (the `Get` family) are returned unchanged.
    pub fn unacknowledged(self) -> Self {
        use ModelMessage::*;
        match self {
            GenericOnOffSet { on, tid, transition } => {
                GenericOnOffSetUnacknowledged { on, tid, transition }
            }
            GenericLevelSet { level, tid, transition } => {
                GenericLevelSetUnacknowledged { level, tid, transition }
            }
            GenericDeltaSet { delta, tid, transition } => {
                GenericDeltaSetUnacknowledged { delta, tid, transition }
            }
            GenericMoveSet { delta, tid, transition } => {
                GenericMoveSetUnacknowledged { delta, tid, transition }
            }
            LightLightnessSet { lightness, tid, transition } => {
                LightLightnessSetUnacknowledged { lightness, tid, transition }
            }
            SceneRecall { scene_number, tid, transition } => {
                SceneRecallUnacknowledged { scene_number, tid, transition }
            }
            SceneStore { scene_number } => SceneStoreUnacknowledged { scene_number },
            SceneDelete { scene_number } => SceneDeleteUnacknowledged { scene_number },
            other => other,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Get the opcode for this message.
    pub fn opcode(&self) -> Opcode {
        use ModelMessage::*;
        let code = match self {
            GenericOnOffGet => GENERIC_ON_OFF_GET,
            GenericOnOffSet { .. } => GENERIC_ON_OFF_SET,
            GenericOnOffSetUnacknowledged { .. } => GENERIC_ON_OFF_SET_UNACKNOWLEDGED,
            GenericLevelGet => GENERIC_LEVEL_GET,
            GenericLevelSet { .. } => GENERIC_LEVEL_SET,
            GenericLevelSetUnacknowledged { .. } => GENERIC_LEVEL_SET_UNACKNOWLEDGED,
            GenericDeltaSet { .. } => GENERIC_DELTA_SET,
            GenericDeltaSetUnacknowledged { .. } => GENERIC_DELTA_SET_UNACKNOWLEDGED,
            GenericMoveSet { .. } => GENERIC_MOVE_SET,
            GenericMoveSetUnacknowledged { .. } => GENERIC_MOVE_SET_UNACKNOWLEDGED,
            LightLightnessGet => LIGHT_LIGHTNESS_GET,
            LightLightnessSet { .. } => LIGHT_LIGHTNESS_SET,
            LightLightnessSetUnacknowledged { .. } => LIGHT_LIGHTNESS_SET_UNACKNOWLEDGED,
            SceneGet => SCENE_GET,
            SceneRegisterGet => SCENE_REGISTER_GET,
            SceneRecall { .. } => SCENE_RECALL,
            SceneRecallUnacknowledged { .. } => SCENE_RECALL_UNACKNOWLEDGED,
            SceneStore { .. } => SCENE_STORE,
            SceneStoreUnacknowledged { .. } => SCENE_STORE_UNACKNOWLEDGED,
            SceneDelete { .. } => SCENE_DELETE,
            SceneDeleteUnacknowledged { .. } => SCENE_DELETE_UNACKNOWLEDGED,
        };
        Opcode::Double(code)
    }

    /// Message name, used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        use ModelMessage::*;
        match self {
            GenericOnOffGet => "GenericOnOffGet",
            GenericOnOffSet { .. } => "GenericOnOffSet",
            GenericOnOffSetUnacknowledged { .. } => "GenericOnOffSetUnacknowledged",
            GenericLevelGet => "GenericLevelGet",
            GenericLevelSet { .. } => "GenericLevelSet",
            GenericLevelSetUnacknowledged { .. } => "GenericLevelSetUnacknowledged",
            GenericDeltaSet { .. } => "GenericDeltaSet",
            GenericDeltaSetUnacknowledged { .. } => "GenericDeltaSetUnacknowledged",
            GenericMoveSet { .. } => "GenericMoveSet",
            GenericMoveSetUnacknowledged { .. } => "GenericMoveSetUnacknowledged",
            LightLightnessGet => "LightLightnessGet",
            LightLightnessSet { .. } => "LightLightnessSet",
            LightLightnessSetUnacknowledged { .. } => "LightLightnessSetUnacknowledged",
            SceneGet => "SceneGet",
            SceneRegisterGet => "SceneRegisterGet",
            SceneRecall { .. } => "SceneRecall",
            SceneRecallUnacknowledged { .. } => "SceneRecallUnacknowledged",
            SceneStore { .. } => "SceneStore",
            SceneStoreUnacknowledged { .. } => "SceneStoreUnacknowledged",
            SceneDelete { .. } => "SceneDelete",
            SceneDeleteUnacknowledged { .. } => "SceneDeleteUnacknowledged",
        }
    }

    /// Whether the receiver answers this message with a status message.
    pub fn is_acknowledged(&self) -> bool {
        use ModelMessage::*;
        !matches!(
            self,
            GenericOnOffSetUnacknowledged { .. }
                | GenericLevelSetUnacknowledged { .. }
                | GenericDeltaSetUnacknowledged { .. }
                | GenericMoveSetUnacknowledged { .. }
                | LightLightnessSetUnacknowledged { .. }
                | SceneRecallUnacknowledged { .. }
                | SceneStoreUnacknowledged { .. }
                | SceneDeleteUnacknowledged { .. }
        )
    }

    /// Transaction identifier, for messages that carry one.
    pub fn tid(&self) -> Option<u8> {
        use ModelMessage::*;
        match self {
            GenericOnOffSet { tid, .. }
            | GenericOnOffSetUnacknowledged { tid, .. }
            | GenericLevelSet { tid, .. }
            | GenericLevelSetUnacknowledged { tid, .. }
            | GenericDeltaSet { tid, .. }
            | GenericDeltaSetUnacknowledged { tid, .. }
            | GenericMoveSet { tid, .. }
            | GenericMoveSetUnacknowledged { tid, .. }
            | LightLightnessSet { tid, .. }
            | LightLightnessSetUnacknowledged { tid, .. }
            | SceneRecall { tid, .. }
            | SceneRecallUnacknowledged { tid, .. } => Some(*tid),
            _ => None,
        }
    }

    /// Transition block, for messages that carry one.
    pub fn transition(&self) -> Option<&Transition> {
        use ModelMessage::*;
        match self {
            GenericOnOffSet { transition, .. }
            | GenericOnOffSetUnacknowledged { transition, .. }
            | GenericLevelSet { transition, .. }
            | GenericLevelSetUnacknowledged { transition, .. }
            | GenericDeltaSet { transition, .. }
            | GenericDeltaSetUnacknowledged { transition, .. }
            | GenericMoveSet { transition, .. }
            | GenericMoveSetUnacknowledged { transition, .. }
            | LightLightnessSet { transition, .. }
            | LightLightnessSetUnacknowledged { transition, .. }
            | SceneRecall { transition, .. }
            | SceneRecallUnacknowledged { transition, .. } => transition.as_ref(),
            _ => None,
        }
    }

    /// Length of the encoded parameters.
    pub fn parameters_len(&self) -> usize {
        use ModelMessage::*;
        let base = match self {
            GenericOnOffGet | GenericLevelGet | LightLightnessGet | SceneGet | SceneRegisterGet => 0,
            GenericOnOffSet { .. } | GenericOnOffSetUnacknowledged { .. } => {
                GENERIC_ON_OFF_SET_PARAMS_LENGTH
            }
            GenericLevelSet { .. } | GenericLevelSetUnacknowledged { .. } => {
                GENERIC_LEVEL_SET_PARAMS_LENGTH
            }
            GenericDeltaSet { .. } | GenericDeltaSetUnacknowledged { .. } => {
                GENERIC_DELTA_SET_PARAMS_LENGTH
            }
            GenericMoveSet { .. } | GenericMoveSetUnacknowledged { .. } => {
                GENERIC_MOVE_SET_PARAMS_LENGTH
            }
            LightLightnessSet { .. } | LightLightnessSetUnacknowledged { .. } => {
                LIGHT_LIGHTNESS_SET_PARAMS_LENGTH
            }
            SceneRecall { .. } | SceneRecallUnacknowledged { .. } => SCENE_RECALL_PARAMS_LENGTH,
            SceneStore { .. } | SceneStoreUnacknowledged { .. } => SCENE_STORE_PARAMS_LENGTH,
            SceneDelete { .. } | SceneDeleteUnacknowledged { .. } => SCENE_DELETE_PARAMS_LENGTH,
        };
        match self.transition() {
            Some(_) => base + TRANSITION_PARAMS_LENGTH,
            None => base,
        }
    }

    // ------------------------------------------------------------------------
    // Encoding
    // ------------------------------------------------------------------------

    /// Encode the message parameters. Multi-byte fields are little-endian.
    pub fn encode_parameters(&self) -> Bytes {
        use ModelMessage::*;
        let mut buf = BytesMut::with_capacity(self.parameters_len());

        match self {
            GenericOnOffGet | GenericLevelGet | LightLightnessGet | SceneGet | SceneRegisterGet => {}

            GenericOnOffSet { on, tid, transition }
            | GenericOnOffSetUnacknowledged { on, tid, transition } => {
                buf.put_u8(u8::from(*on));
                buf.put_u8(*tid);
                put_transition(&mut buf, transition);
            }

            GenericLevelSet { level, tid, transition }
            | GenericLevelSetUnacknowledged { level, tid, transition } => {
                buf.put_i16_le(*level);
                buf.put_u8(*tid);
                put_transition(&mut buf, transition);
            }

            GenericDeltaSet { delta, tid, transition }
            | GenericDeltaSetUnacknowledged { delta, tid, transition } => {
                buf.put_i32_le(*delta);
                buf.put_u8(*tid);
                put_transition(&mut buf, transition);
            }

            GenericMoveSet { delta, tid, transition }
            | GenericMoveSetUnacknowledged { delta, tid, transition } => {
                buf.put_i16_le(*delta);
                buf.put_u8(*tid);
                put_transition(&mut buf, transition);
            }

            LightLightnessSet { lightness, tid, transition }
            | LightLightnessSetUnacknowledged { lightness, tid, transition } => {
                buf.put_u16_le(*lightness);
                buf.put_u8(*tid);
                put_transition(&mut buf, transition);
            }

            SceneRecall { scene_number, tid, transition }
            | SceneRecallUnacknowledged { scene_number, tid, transition } => {
                buf.put_u16_le(*scene_number);
                buf.put_u8(*tid);
                put_transition(&mut buf, transition);
            }

            SceneStore { scene_number }
            | SceneStoreUnacknowledged { scene_number }
            | SceneDelete { scene_number }
            | SceneDeleteUnacknowledged { scene_number } => {
                buf.put_u16_le(*scene_number);
            }
        }

        buf.freeze()
    }
}

fn put_transition(buf: &mut BytesMut, transition: &Option<Transition>) {
    if let Some(transition) = transition {
        transition.encode_into(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessageError;
    use crate::transition::StepResolution;

    fn transition(steps: u8, resolution: StepResolution, delay: u8) -> Option<Transition> {
        Some(Transition::new(steps, resolution, delay).unwrap())
    }

    #[test]
    fn test_light_lightness_set_without_transition() {
        let msg = ModelMessage::light_lightness_set(0x1234, 5, None).unwrap();
        assert_eq!(msg.opcode(), Opcode::Double(0x824C));
        assert_eq!(&msg.encode_parameters()[..], &[0x34, 0x12, 0x05]);
        assert_eq!(msg.parameters_len(), LIGHT_LIGHTNESS_SET_PARAMS_LENGTH);
    }

    #[test]
    fn test_light_lightness_set_with_transition() {
        let msg =
            ModelMessage::light_lightness_set(0x00FF, 2, transition(10, StepResolution::Seconds1, 20))
                .unwrap();
        assert_eq!(&msg.encode_parameters()[..], &[0xFF, 0x00, 0x02, 0x4A, 0x14]);
        assert_eq!(msg.parameters_len(), LIGHT_LIGHTNESS_SET_TRANSITION_PARAMS_LENGTH);
    }

    #[test]
    fn test_light_lightness_out_of_range() {
        for bad in [-1, 0x1_0000] {
            assert!(matches!(
                ModelMessage::light_lightness_set(bad, 0, None),
                Err(MessageError::InvalidArgument {
                    field: "lightness",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_tid_out_of_range() {
        assert!(matches!(
            ModelMessage::light_lightness_set(0, 256, None),
            Err(MessageError::InvalidArgument {
                field: "transaction id",
                ..
            })
        ));
        assert!(ModelMessage::scene_recall(1, -1, None).is_err());
    }

    #[test]
    fn test_scene_store_unacknowledged() {
        let msg = ModelMessage::scene_store(0x0042).unwrap().unacknowledged();
        assert_eq!(msg, ModelMessage::SceneStoreUnacknowledged { scene_number: 0x42 });
        assert_eq!(msg.opcode(), Opcode::Double(SCENE_STORE_UNACKNOWLEDGED));
        assert_eq!(&msg.encode_parameters()[..], &[0x42, 0x00]);
        assert!(!msg.is_acknowledged());
        assert_eq!(msg.tid(), None);
        assert!(msg.transition().is_none());
    }

    #[test]
    fn test_generic_on_off_set() {
        let msg = ModelMessage::generic_on_off_set(1, 7, None).unwrap();
        assert_eq!(&msg.encode_parameters()[..], &[0x01, 0x07]);

        let msg = ModelMessage::generic_on_off_set(0, 7, transition(3, StepResolution::Millis100, 1))
            .unwrap()
            .unacknowledged();
        assert_eq!(msg.opcode(), Opcode::Double(GENERIC_ON_OFF_SET_UNACKNOWLEDGED));
        assert_eq!(&msg.encode_parameters()[..], &[0x00, 0x07, 0x03, 0x01]);

        assert!(ModelMessage::generic_on_off_set(2, 0, None).is_err());
    }

    #[test]
    fn test_generic_level_family() {
        let msg = ModelMessage::generic_level_set(-2, 1, None).unwrap();
        assert_eq!(&msg.encode_parameters()[..], &[0xFE, 0xFF, 0x01]);
        assert!(ModelMessage::generic_level_set(32768, 1, None).is_err());
        assert!(ModelMessage::generic_level_set(-32768, 1, None).is_ok());

        let msg = ModelMessage::generic_delta_set(-1, 9, transition(1, StepResolution::Seconds10, 0))
            .unwrap();
        assert_eq!(
            &msg.encode_parameters()[..],
            &[0xFF, 0xFF, 0xFF, 0xFF, 0x09, 0x81, 0x00]
        );
        assert_eq!(msg.parameters_len(), 7);

        let msg = ModelMessage::generic_move_set(0x0100, 4, None).unwrap().unacknowledged();
        assert_eq!(msg.opcode(), Opcode::Double(GENERIC_MOVE_SET_UNACKNOWLEDGED));
        assert_eq!(&msg.encode_parameters()[..], &[0x00, 0x01, 0x04]);
    }

    #[test]
    fn test_scene_recall_and_delete() {
        let msg = ModelMessage::scene_recall(0x0102, 3, transition(5, StepResolution::Millis100, 0))
            .unwrap();
        assert_eq!(&msg.encode_parameters()[..], &[0x02, 0x01, 0x03, 0x05, 0x00]);
        assert_eq!(msg.tid(), Some(3));

        let msg = ModelMessage::scene_delete(0xFFFF).unwrap();
        assert_eq!(msg.opcode().to_bytes(), vec![0x82, 0x9E]);
        assert_eq!(&msg.encode_parameters()[..], &[0xFF, 0xFF]);
        assert!(ModelMessage::scene_delete(0x1_0000).is_err());
    }

    #[test]
    fn test_get_messages_have_no_parameters() {
        for msg in [
            ModelMessage::GenericOnOffGet,
            ModelMessage::GenericLevelGet,
            ModelMessage::LightLightnessGet,
            ModelMessage::SceneGet,
            ModelMessage::SceneRegisterGet,
        ] {
            assert!(msg.encode_parameters().is_empty());
            assert!(msg.is_acknowledged());
            assert_eq!(msg.clone().unacknowledged(), msg);
        }
    }

    #[test]
    fn test_unacknowledged_preserves_fields() {
        let t = transition(10, StepResolution::Seconds1, 20);
        let msg = ModelMessage::light_lightness_set(0x00FF, 2, t).unwrap();
        let unack = msg.clone().unacknowledged();

        assert_eq!(unack.opcode(), Opcode::Double(LIGHT_LIGHTNESS_SET_UNACKNOWLEDGED));
        assert_eq!(unack.encode_parameters(), msg.encode_parameters());
        assert_eq!(unack.name(), "LightLightnessSetUnacknowledged");
    }
}
