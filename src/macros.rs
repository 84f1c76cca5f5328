//! Instrumentation Macros
//!
//! Call sites record trace events through these macros, never through the
//! ring directly. A module declares its id and verbosity threshold once:
//!
//! ```ignore
//! radio_debug_log::trace_module!(7, Verbosity::High);
//!
//! fn on_frame_received(len: u16) {
//!     trace_function_enter!(Verbosity::Low);
//!     trace_local_event!(Verbosity::High, FRAME_RX, len);
//!     trace_function_exit!(Verbosity::Low);
//! }
//! ```
//!
//! Without the `debug-log` feature every macro except `trace_module!`
//! expands to `()`. Arguments are not evaluated and nothing is emitted.

/// Declare the module id and verbosity threshold for the enclosing scope
///
/// Defines `TRACE_MODULE_ID` and `TRACE_VERBOSITY`, which the recording
/// macros pick up by name. The threshold defaults to
/// [`DEFAULT_LOG_VERBOSITY`](crate::config::DEFAULT_LOG_VERBOSITY).
#[macro_export]
macro_rules! trace_module {
    ($module_id:expr) => {
        $crate::trace_module!($module_id, $crate::config::DEFAULT_LOG_VERBOSITY);
    };
    ($module_id:expr, $verbosity:expr) => {
        #[allow(dead_code)]
        const TRACE_MODULE_ID: $crate::types::ModuleId = $crate::types::ModuleId::new($module_id);
        #[allow(dead_code)]
        const TRACE_VERBOSITY: $crate::types::Verbosity = $verbosity;
    };
}

/// Identifier of the enclosing function
#[doc(hidden)]
#[macro_export]
macro_rules! __trace_function_id {
    () => {{
        fn __trace_here() {}
        $crate::encoder::function_identifier($crate::encoder::type_name_of(__trace_here))
    }};
}

/// Write one word into the debug log, unconditionally
#[cfg(feature = "debug-log")]
#[macro_export]
macro_rules! debug_log_write_raw {
    ($word:expr) => {
        $crate::debug_log::write_raw(::core::convert::Into::<u32>::into($word))
    };
}

/// Record entry into the enclosing function
#[cfg(feature = "debug-log")]
#[macro_export]
macro_rules! trace_function_enter {
    ($verbosity:expr) => {{
        if $crate::debug_log::verbosity_allows($verbosity, TRACE_VERBOSITY) {
            $crate::debug_log::write_raw(
                $crate::encoder::encode_function_enter(
                    TRACE_MODULE_ID,
                    $crate::__trace_function_id!(),
                )
                .raw(),
            );
        }
    }};
}

/// Record exit from the enclosing function
#[cfg(feature = "debug-log")]
#[macro_export]
macro_rules! trace_function_exit {
    ($verbosity:expr) => {{
        if $crate::debug_log::verbosity_allows($verbosity, TRACE_VERBOSITY) {
            $crate::debug_log::write_raw(
                $crate::encoder::encode_function_exit(
                    TRACE_MODULE_ID,
                    $crate::__trace_function_id!(),
                )
                .raw(),
            );
        }
    }};
}

/// Record a module-scoped event with a 16-bit parameter
///
/// `event_id` is a `u8` in 0..=63; `param` is truncated to 16 bits.
#[cfg(feature = "debug-log")]
#[macro_export]
macro_rules! trace_local_event {
    ($verbosity:expr, $event_id:expr, $param:expr) => {{
        if $crate::debug_log::verbosity_allows($verbosity, TRACE_VERBOSITY) {
            $crate::debug_log::write_raw(
                $crate::encoder::encode_local_event(
                    TRACE_MODULE_ID,
                    $crate::types::EventId::new($event_id),
                    $param as u16,
                )
                .raw(),
            );
        }
    }};
}

/// Record a system-wide event with a 16-bit parameter
///
/// `event_id` is a `u8` in 0..=63; `param` is truncated to 16 bits.
#[cfg(feature = "debug-log")]
#[macro_export]
macro_rules! trace_global_event {
    ($verbosity:expr, $event_id:expr, $param:expr) => {{
        if $crate::debug_log::verbosity_allows($verbosity, TRACE_VERBOSITY) {
            $crate::debug_log::write_raw(
                $crate::encoder::encode_global_event(
                    TRACE_MODULE_ID,
                    $crate::types::EventId::new($event_id),
                    $param as u16,
                )
                .raw(),
            );
        }
    }};
}

/// Write one word into the debug log (compiled out)
#[cfg(not(feature = "debug-log"))]
#[macro_export]
macro_rules! debug_log_write_raw {
    ($($args:tt)*) => {
        ()
    };
}

/// Record entry into the enclosing function (compiled out)
#[cfg(not(feature = "debug-log"))]
#[macro_export]
macro_rules! trace_function_enter {
    ($($args:tt)*) => {
        ()
    };
}

/// Record exit from the enclosing function (compiled out)
#[cfg(not(feature = "debug-log"))]
#[macro_export]
macro_rules! trace_function_exit {
    ($($args:tt)*) => {
        ()
    };
}

/// Record a module-scoped event (compiled out)
#[cfg(not(feature = "debug-log"))]
#[macro_export]
macro_rules! trace_local_event {
    ($($args:tt)*) => {
        ()
    };
}

/// Record a system-wide event (compiled out)
#[cfg(not(feature = "debug-log"))]
#[macro_export]
macro_rules! trace_global_event {
    ($($args:tt)*) => {
        ()
    };
}
