//! Encoder Tests
//!
//! Tests for trace word bit packing.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test encoder_tests

use radio_debug_log::encoder::{
    encode_function_enter, encode_function_exit, encode_global_event, encode_local_event,
    function_identifier,
};
use radio_debug_log::types::{EventId, LogType, ModuleId};

// =============================================================================
// Event Encoding Tests
// =============================================================================

#[test]
fn test_local_event_exact_bits() {
    let word = encode_local_event(ModuleId::new(3), EventId::new(5), 0xABCD);
    let expected = (3 << 28) | (3 << 22) | (5 << 16) | 0xABCD;
    assert_eq!(word.raw(), expected);
    assert_eq!(word.raw(), 0x30C5_ABCD);
}

#[test]
fn test_global_event_exact_bits() {
    let word = encode_global_event(ModuleId::new(63), EventId::new(63), 0xFFFF);
    assert_eq!(word.raw(), 0x4FFF_FFFF);
}

#[test]
fn test_event_fields_round_trip() {
    for module in [0u8, 1, 17, 42, 63] {
        for event in [0u8, 1, 31, 32, 63] {
            for payload in [0u16, 1, 0x00FF, 0x8000, 0xFFFF] {
                let local = encode_local_event(ModuleId::new(module), EventId::new(event), payload);
                assert_eq!(local.log_type(), Some(LogType::LocalEvent));
                assert_eq!(local.module_id().get(), module);
                assert_eq!(local.event_id().get(), event);
                assert_eq!(local.payload(), payload);

                let global =
                    encode_global_event(ModuleId::new(module), EventId::new(event), payload);
                assert_eq!(global.log_type(), Some(LogType::GlobalEvent));
                assert_eq!(global.module_id().get(), module);
                assert_eq!(global.event_id().get(), event);
                assert_eq!(global.payload(), payload);
            }
        }
    }
}

#[test]
fn test_same_local_id_in_two_modules_differs_by_module_field() {
    let a = encode_local_event(ModuleId::new(4), EventId::new(9), 7);
    let b = encode_local_event(ModuleId::new(5), EventId::new(9), 7);
    assert_ne!(a, b);
    assert_eq!(a.event_id(), b.event_id());
    assert_eq!(a.raw() ^ b.raw(), (4 ^ 5) << 22);
}

#[test]
fn test_local_and_global_differ_only_in_type() {
    let local = encode_local_event(ModuleId::new(10), EventId::new(20), 300);
    let global = encode_global_event(ModuleId::new(10), EventId::new(20), 300);
    assert_eq!(local.raw() ^ global.raw(), (3 ^ 4) << 28);
}

// =============================================================================
// Function Enter/Exit Tests
// =============================================================================

#[test]
fn test_function_enter_layout() {
    let word = encode_function_enter(ModuleId::new(2), 0x12_3456);
    assert_eq!(word.raw(), (1 << 28) | (2 << 22) | 0x12_3456);
    assert_eq!(word.log_type(), Some(LogType::FunctionEnter));
    assert_eq!(word.function_id(), 0x12_3456);
}

#[test]
fn test_function_exit_layout() {
    let word = encode_function_exit(ModuleId::new(2), 0x12_3456);
    assert_eq!(word.raw(), (2 << 28) | (2 << 22) | 0x12_3456);
    assert_eq!(word.log_type(), Some(LogType::FunctionExit));
}

#[test]
fn test_function_id_truncated_to_22_bits() {
    let word = encode_function_enter(ModuleId::new(1), 0xFFFF_FFFF);
    assert_eq!(word.function_id(), 0x3F_FFFF);
    assert_eq!(word.module_id().get(), 1);
    assert_eq!(word.log_type(), Some(LogType::FunctionEnter));
}

#[test]
fn test_function_identifier_from_name() {
    static NAME: &str = "driver::rx::on_frame";
    let id = function_identifier(NAME);
    assert!(id < (1 << 22));
    assert_eq!(id, (NAME.as_ptr() as usize as u32) & 0x3F_FFFF);
}

// =============================================================================
// Truncation Tests
// =============================================================================

#[test]
fn test_out_of_range_ids_are_truncated_not_bled() {
    // 0x47 = 0b0100_0111, low 6 bits = 7
    let word = encode_local_event(ModuleId::new(0x47), EventId::new(0xC5), 0x1234);
    assert_eq!(word.log_type(), Some(LogType::LocalEvent));
    assert_eq!(word.module_id().get(), 7);
    assert_eq!(word.event_id().get(), 5);
    assert_eq!(word.payload(), 0x1234);
}

#[test]
fn test_encoding_is_const() {
    const WORD: u32 = encode_global_event(ModuleId::new(1), EventId::new(2), 3).raw();
    assert_eq!(WORD, 0x4042_0003);
}
