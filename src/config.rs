//! Debug log configuration and wire-format constants
//!
//! Build-time configuration (buffer capacity, default verbosity) and the
//! bit layout of a trace word are centralized here. The layout is the
//! format external tooling decodes, so changing it breaks every decoder.

use crate::types::Verbosity;

// Generated by build.rs from RADIO_DEBUG_LOG_BUFFER_LEN
include!(concat!(env!("OUT_DIR"), "/debug_log_config.rs"));

/// Verbosity threshold used by `trace_module!` when none is given
pub const DEFAULT_LOG_VERBOSITY: Verbosity = Verbosity::Low;

/// Bit shift of field "log type" in a trace word
pub const TYPE_BITPOS: u32 = 28;

/// Bit shift of field "module id" in a trace word
pub const MODULE_ID_BITPOS: u32 = 22;

/// Bit shift of field "event id" in a trace word
pub const EVENT_ID_BITPOS: u32 = 16;

/// Width mask of the log type field (4 bits)
pub const TYPE_MASK: u32 = 0xF;

/// Width mask of the module id field (6 bits)
pub const MODULE_ID_MASK: u32 = 0x3F;

/// Width mask of the event id field (6 bits)
pub const EVENT_ID_MASK: u32 = 0x3F;

/// Width mask of the event payload (16 bits)
pub const PAYLOAD_MASK: u32 = 0xFFFF;

/// Width mask of the function identifier (22 bits)
pub const FUNCTION_ID_MASK: u32 = (1 << MODULE_ID_BITPOS) - 1;

/// Largest module id that fits the module field
pub const MAX_MODULE_ID: u8 = MODULE_ID_MASK as u8;

/// Largest event id that fits the event id field
pub const MAX_EVENT_ID: u8 = EVENT_ID_MASK as u8;

const _: () = assert!(DEBUG_LOG_BUFFER_LEN.is_power_of_two());
const _: () = assert!(TYPE_BITPOS + 4 == 32);
const _: () = assert!(MODULE_ID_BITPOS + 6 == TYPE_BITPOS);
const _: () = assert!(EVENT_ID_BITPOS + 6 == MODULE_ID_BITPOS);
