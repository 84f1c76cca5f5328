//! Radio Driver Debug Log
//!
//! An interrupt-safe, fixed-capacity circular trace buffer for embedded
//! radio drivers. Instrumented code records 32-bit encoded trace events
//! from any execution context, including interrupt handlers. The buffer is
//! never drained by firmware: a debugger or host tool reads it out of RAM
//! after the fact.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CALL SITES                              │
//! │  trace_function_enter!  │  trace_local_event!  │  ...        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    VERBOSITY GATE                            │
//! │      requested > NONE && requested <= module threshold       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                       ENCODER                                │
//! │   type(4) │ module(6) │ event id(6) │ payload(16)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     RING WRITER                              │
//! │   RADIO_DEBUG_LOG: [u32; N] + cursor, overwrite oldest       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Build-time configuration
//!
//! - `debug-log`: master switch. Without it the macros expand to nothing.
//! - `blocks-interrupts`: mask interrupts around each append.
//! - `RADIO_DEBUG_LOG_BUFFER_LEN`: buffer capacity in words (power of 2,
//!   default 1024).

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Instrumentation macros
///
/// Exported at the crate root.
#[macro_use]
mod macros;

/// Trace word encoding
///
/// Pure bit packing of event fields into 32-bit words.
pub mod encoder;

/// Circular trace buffer
///
/// Fixed-capacity ring with selectable interrupt masking policy.
pub mod ring;

/// Process-wide debug log
///
/// The exported singleton buffer and the verbosity gate.
pub mod debug_log;

/// Shared types used across modules
pub mod types;

/// Build-time configuration and wire-format constants
pub mod config;

/// Prelude module for instrumented code
pub mod prelude {
    //! Convenient re-exports for instrumented modules.

    pub use crate::debug_log::verbosity_allows;
    pub use crate::types::{EventId, LogType, ModuleId, TraceWord, Verbosity};
    pub use crate::{
        debug_log_write_raw, trace_function_enter, trace_function_exit, trace_global_event,
        trace_local_event, trace_module,
    };
}
