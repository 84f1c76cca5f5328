//! Process-wide Debug Log
//!
//! The single trace ring shared by thread mode and every interrupt
//! handler. It is a zero-initialised static that lives for the whole
//! program and is exported under a fixed symbol name so a debugger can
//! locate it in a RAM dump. Code only ever appends to it.

use crate::config::DEBUG_LOG_BUFFER_LEN;
use crate::ring::TraceRing;
use crate::types::Verbosity;

/// Write policy selected by the `blocks-interrupts` feature
#[cfg(feature = "blocks-interrupts")]
pub type ActivePolicy = crate::ring::MaskInterrupts;

/// Write policy selected by the `blocks-interrupts` feature
#[cfg(not(feature = "blocks-interrupts"))]
pub type ActivePolicy = crate::ring::NoMasking;

/// Type of the process-wide debug log
pub type DebugLog = TraceRing<DEBUG_LOG_BUFFER_LEN, ActivePolicy>;

/// The debug log buffer
///
/// Symbol `RADIO_DEBUG_LOG`: `DEBUG_LOG_BUFFER_LEN` words of storage
/// followed by the 32-bit write cursor.
#[cfg(feature = "debug-log")]
#[allow(unsafe_code)] // exported symbol, read by the probe
#[no_mangle]
pub static RADIO_DEBUG_LOG: DebugLog = DebugLog::new();

/// Shared handle to the debug log
#[cfg(feature = "debug-log")]
#[must_use]
#[inline(always)]
pub fn debug_log() -> &'static DebugLog {
    &RADIO_DEBUG_LOG
}

/// Write one word into the debug log
#[cfg(feature = "debug-log")]
#[inline(always)]
pub fn write_raw(word: u32) {
    RADIO_DEBUG_LOG.append_raw(word);
}

/// Whether a call at `requested` verbosity is recorded by a module whose
/// threshold is `threshold`
#[must_use]
#[inline(always)]
pub const fn verbosity_allows(requested: Verbosity, threshold: Verbosity) -> bool {
    requested.level() > 0 && requested.level() <= threshold.level()
}

/// Whether the log is compiled in at all
#[must_use]
pub const fn is_enabled() -> bool {
    cfg!(feature = "debug-log")
}

/// Log the buffer location so a host tool can find it
#[cfg(all(feature = "embedded", feature = "debug-log"))]
pub fn announce() {
    defmt::info!(
        "debug log: {} (irq masking: {})",
        RADIO_DEBUG_LOG.layout(),
        <ActivePolicy as crate::ring::WritePolicy>::MASKS_INTERRUPTS
    );
}
