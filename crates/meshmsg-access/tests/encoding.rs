//! End-to-end encoding tests for access messages.

use meshmsg_access::{
    derive_aid, AccessMessage, AppKey, MessageError, MicSize, ModelMessage, Opcode,
    StepResolution, TransactionCounter, TransactionIdSource, Transition,
};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

fn test_key() -> AppKey {
    AppKey::new([
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE,
        0xFF,
    ])
}

#[test]
fn test_lightness_set_no_transition() {
    let msg = ModelMessage::light_lightness_set(0x1234, 5, None).unwrap();
    let access = AccessMessage::new(&test_key(), MicSize::Small, &msg);

    assert_eq!(&access.parameters()[..], &[0x34, 0x12, 0x05]);
}

#[test]
fn test_lightness_set_with_transition() {
    let transition = Transition::new(10, StepResolution::Seconds1, 20).unwrap();
    let msg = ModelMessage::light_lightness_set(0x00FF, 2, Some(transition)).unwrap();
    let access = AccessMessage::new(&test_key(), MicSize::Small, &msg);

    assert_eq!(&access.parameters()[..], &[0xFF, 0x00, 0x02, 0x4A, 0x14]);
}

#[test]
fn test_scene_store_unacknowledged_fixed_size() {
    let msg = ModelMessage::SceneStoreUnacknowledged { scene_number: 0x0042 };
    let access = AccessMessage::new(&test_key(), MicSize::Large, &msg);

    assert_eq!(&access.parameters()[..], &[0x42, 0x00]);
    assert_eq!(access.opcode(), Opcode::Double(0x8247));
    assert_eq!(&access.payload()[..], &[0x82, 0x47, 0x42, 0x00]);
}

#[test]
fn test_lightness_out_of_range_aborts_construction() {
    for value in [-1i64, 0x1_0000] {
        let err = ModelMessage::light_lightness_set(value, 0, None).unwrap_err();
        assert_eq!(
            err,
            MessageError::InvalidArgument {
                field: "lightness",
                value,
                min: 0,
                max: 0xFFFF,
            }
        );
    }
}

#[test]
fn test_default_transaction_ids_from_counter() {
    let mut tids = TransactionCounter::starting_at(9);
    let first = ModelMessage::light_lightness_set(1, tids.next_tid().into(), None).unwrap();
    let second = ModelMessage::light_lightness_set(1, tids.next_tid().into(), None).unwrap();

    assert_eq!(first.tid(), Some(9));
    assert_eq!(second.tid(), Some(10));
}

#[test]
fn test_envelope_readable_from_many_threads() {
    let msg = ModelMessage::light_lightness_set(0xBEEF, 1, None).unwrap();
    let access = Arc::new(AccessMessage::new(&test_key(), MicSize::Small, &msg));
    let expected = access.payload();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let access = Arc::clone(&access);
            thread::spawn(move || (access.aid(), access.payload()))
        })
        .collect();

    for handle in handles {
        let (aid, payload) = handle.join().unwrap();
        assert_eq!(aid, access.aid());
        assert_eq!(payload, expected);
    }
}

#[test]
fn test_aid_same_across_envelopes() {
    let key = test_key();
    let a = AccessMessage::new(&key, MicSize::Small, &ModelMessage::SceneGet);
    let b = AccessMessage::new(&key, MicSize::Large, &ModelMessage::LightLightnessGet);

    assert_eq!(a.aid(), b.aid());
    assert_eq!(a.aid(), derive_aid(key.as_bytes()).unwrap());
}

proptest! {
    #[test]
    fn prop_lightness_without_transition(v in 0i64..=0xFFFF, t in 0i64..=255) {
        let msg = ModelMessage::light_lightness_set(v, t, None).unwrap();
        let bytes = msg.encode_parameters();

        prop_assert_eq!(bytes.len(), 3);
        prop_assert_eq!(&bytes[..2], &(v as u16).to_le_bytes()[..]);
        prop_assert_eq!(bytes[2], (t % 256) as u8);
    }

    #[test]
    fn prop_lightness_with_transition(
        v in 0i64..=0xFFFF,
        t in 0i64..=255,
        steps in 0i64..=63,
        resolution in 0i64..=3,
        delay in 0i64..=255,
    ) {
        let transition = Transition::from_raw(steps, resolution, delay).unwrap();
        let msg = ModelMessage::light_lightness_set(v, t, Some(transition)).unwrap();
        let bytes = msg.encode_parameters();

        prop_assert_eq!(bytes.len(), 5);
        prop_assert_eq!(&bytes[..2], &(v as u16).to_le_bytes()[..]);
        prop_assert_eq!(bytes[2], t as u8);
        prop_assert_eq!(bytes[3], ((resolution << 6) | steps) as u8);
        prop_assert_eq!(bytes[4], delay as u8);
    }

    #[test]
    fn prop_lightness_rejects_out_of_range(v in prop_oneof![i64::MIN..0, 0x1_0000i64..i64::MAX]) {
        let is_invalid_argument = matches!(
            ModelMessage::light_lightness_set(v, 0, None),
            Err(MessageError::InvalidArgument { .. })
        );
        prop_assert!(is_invalid_argument);
    }

    #[test]
    fn prop_aid_is_pure(key in proptest::array::uniform16(any::<u8>())) {
        let first = derive_aid(&key).unwrap();
        prop_assert_eq!(derive_aid(&key).unwrap(), first);
        prop_assert_eq!(AppKey::new(key).aid(), first);
        prop_assert!(first.value() < 64);
    }

    #[test]
    fn prop_scene_store_is_two_bytes(scene in any::<u16>()) {
        let msg = ModelMessage::SceneStoreUnacknowledged { scene_number: scene };
        prop_assert_eq!(&msg.encode_parameters()[..], &scene.to_le_bytes()[..]);
    }
}
