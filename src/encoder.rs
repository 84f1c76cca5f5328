//! Trace Word Encoder
//!
//! Packs the fields of a trace event into one 32-bit word. Every function
//! is a `const fn` with no branches: out-of-range inputs are truncated by
//! masking, never rejected.

use crate::config::{
    EVENT_ID_BITPOS, FUNCTION_ID_MASK, MODULE_ID_BITPOS, PAYLOAD_MASK, TYPE_BITPOS,
};
use crate::types::{EventId, LogType, ModuleId, TraceWord};

#[inline(always)]
const fn header(log_type: LogType, module: ModuleId) -> u32 {
    (log_type.code() << TYPE_BITPOS) | ((module.get() as u32) << MODULE_ID_BITPOS)
}

#[inline(always)]
const fn event(log_type: LogType, module: ModuleId, event_id: EventId, payload: u16) -> TraceWord {
    TraceWord::from_raw(
        header(log_type, module)
            | ((event_id.get() as u32) << EVENT_ID_BITPOS)
            | (payload as u32 & PAYLOAD_MASK),
    )
}

/// Encode entry into a function
///
/// `function_id` keeps only its low 22 bits.
#[must_use]
#[inline(always)]
pub const fn encode_function_enter(module: ModuleId, function_id: u32) -> TraceWord {
    TraceWord::from_raw(header(LogType::FunctionEnter, module) | (function_id & FUNCTION_ID_MASK))
}

/// Encode exit from a function
///
/// Same layout as [`encode_function_enter`].
#[must_use]
#[inline(always)]
pub const fn encode_function_exit(module: ModuleId, function_id: u32) -> TraceWord {
    TraceWord::from_raw(header(LogType::FunctionExit, module) | (function_id & FUNCTION_ID_MASK))
}

/// Encode an event whose id is defined by the emitting module
///
/// Two modules may use the same `event_id` for unrelated events; the
/// module field disambiguates them.
#[must_use]
#[inline(always)]
pub const fn encode_local_event(module: ModuleId, event_id: EventId, payload: u16) -> TraceWord {
    event(LogType::LocalEvent, module, event_id, payload)
}

/// Encode an event whose id has the same meaning in every module
#[must_use]
#[inline(always)]
pub const fn encode_global_event(module: ModuleId, event_id: EventId, payload: u16) -> TraceWord {
    event(LogType::GlobalEvent, module, event_id, payload)
}

/// Truncate the address of a function name into a function identifier
///
/// The result is only good for matching against a symbol map offline.
/// Distinct functions may collide once truncated to 22 bits.
#[must_use]
#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
pub fn function_identifier(name: &'static str) -> u32 {
    (name.as_ptr() as usize as u32) & FUNCTION_ID_MASK
}

/// Type name of a value's type, used to name the enclosing function
#[doc(hidden)]
#[must_use]
#[inline(always)]
pub fn type_name_of<T>(_: T) -> &'static str {
    core::any::type_name::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_words_differ_only_in_type() {
        let module = ModuleId::new(12);
        let enter = encode_function_enter(module, 0x2A_BEEF);
        let exit = encode_function_exit(module, 0x2A_BEEF);
        assert_eq!(enter.raw() ^ exit.raw(), (1 ^ 2) << TYPE_BITPOS);
    }

    #[test]
    fn function_identifier_is_22_bits() {
        let id = function_identifier("radio_debug_log::encoder::tests::x");
        assert_eq!(id & !FUNCTION_ID_MASK, 0);
    }

    #[test]
    fn type_name_of_names_the_item() {
        fn probe() {}
        assert!(type_name_of(probe).ends_with("probe"));
    }
}
