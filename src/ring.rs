//! Circular Trace Buffer
//!
//! Fixed-capacity ring of 32-bit words with a single operation: append one
//! word, overwriting the oldest entry once the ring is full. The ring is
//! written from thread mode and from interrupt handlers alike, so append
//! never blocks and runs in constant time.
//!
//! How concurrent appends are reconciled is a build-time choice expressed
//! by a [`WritePolicy`]:
//!
//! - [`MaskInterrupts`]: the cursor read-modify-write runs inside a
//!   critical section. Every append lands, in one total order.
//! - [`NoMasking`]: nothing is masked. Each word store is atomic, but an
//!   append that preempts another between the cursor load and the cursor
//!   store makes one of the two entries disappear.
//!
//! Storage and cursor are plain word-sized cells laid out back to back
//! (`#[repr(C)]`) so a debug probe can read them straight from memory.

use core::marker::PhantomData;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::types::TraceWord;

/// Strategy protecting the cursor read-modify-write of an append
pub trait WritePolicy {
    /// Whether the policy excludes preemption for the duration of `f`
    const MASKS_INTERRUPTS: bool;

    /// Run `f`, guarded as the policy requires
    fn guarded<R>(f: impl FnOnce() -> R) -> R;
}

/// Mask interrupts for the duration of the append
///
/// Uses whatever `critical_section` implementation the application links
/// (PRIMASK on single-core Cortex-M via `cortex-m`). An application that
/// needs a narrower mask can register a BASEPRI-based implementation with
/// `critical_section::set_impl!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaskInterrupts;

impl WritePolicy for MaskInterrupts {
    const MASKS_INTERRUPTS: bool = true;

    #[inline(always)]
    fn guarded<R>(f: impl FnOnce() -> R) -> R {
        critical_section::with(|_| f())
    }
}

/// Never mask interrupts; a preempted append may be lost
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMasking;

impl WritePolicy for NoMasking {
    const MASKS_INTERRUPTS: bool = false;

    #[inline(always)]
    fn guarded<R>(f: impl FnOnce() -> R) -> R {
        f()
    }
}

/// Where a ring lives in memory, for host tools reading a RAM dump
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingLayout {
    /// Address of slot 0
    pub base: usize,
    /// Number of 32-bit slots
    pub capacity: usize,
    /// Address of the 32-bit write cursor
    pub cursor: usize,
}

#[cfg(feature = "embedded")]
impl defmt::Format for RingLayout {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ring@{=usize:#010X} len={=usize} cursor@{=usize:#010X}",
            self.base,
            self.capacity,
            self.cursor
        );
    }
}

/// Fixed-capacity overwrite-oldest ring of trace words
///
/// `N` must be a power of two; anything else fails to compile as soon as
/// the ring is constructed.
#[repr(C)]
pub struct TraceRing<const N: usize, P: WritePolicy> {
    storage: [AtomicU32; N],
    cursor: AtomicU32,
    policy: PhantomData<fn() -> P>,
}

impl<const N: usize, P: WritePolicy> TraceRing<N, P> {
    /// Index mask, also the compile-time capacity check
    #[allow(clippy::cast_possible_truncation)]
    const MASK: u32 = {
        assert!(N.is_power_of_two(), "trace ring capacity must be a power of 2");
        assert!(N as u64 <= u32::MAX as u64, "trace ring capacity must fit in 32 bits");
        (N - 1) as u32
    };

    /// Create an empty (all-zero) ring
    #[must_use]
    pub const fn new() -> Self {
        let _ = Self::MASK;
        Self {
            storage: [const { AtomicU32::new(0) }; N],
            cursor: AtomicU32::new(0),
            policy: PhantomData,
        }
    }

    /// Append one word, overwriting the oldest slot when full
    ///
    /// The word is computed by the caller before the policy guard is
    /// entered, so only the cursor load, the slot store and the cursor
    /// store run inside it.
    #[inline(always)]
    pub fn append(&self, word: TraceWord) {
        let raw = word.raw();
        P::guarded(|| self.store(raw, || {}));
    }

    /// Append a raw word
    #[inline(always)]
    pub fn append_raw(&self, raw: u32) {
        P::guarded(|| self.store(raw, || {}));
    }

    /// The unguarded read-modify-write
    ///
    /// `between` runs after the cursor load and before any store. It is a
    /// no-op in production and marks the window in which a preempting
    /// append clobbers this one under [`NoMasking`].
    #[inline(always)]
    fn store(&self, raw: u32, between: impl FnOnce()) {
        let position = self.cursor.load(Ordering::Relaxed);
        between();
        self.storage[(position & Self::MASK) as usize].store(raw, Ordering::Relaxed);
        self.cursor
            .store(position.wrapping_add(1) & Self::MASK, Ordering::Relaxed);
    }

    /// Number of slots
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Index of the slot the next append will write
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Relaxed) as usize
    }

    /// Current contents of a slot, as a probe would see it
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn slot(&self, index: usize) -> TraceWord {
        TraceWord::from_raw(self.storage[index].load(Ordering::Relaxed))
    }

    /// Memory location of the storage and cursor
    #[must_use]
    pub fn layout(&self) -> RingLayout {
        RingLayout {
            base: self.storage.as_ptr() as usize,
            capacity: N,
            cursor: core::ptr::addr_of!(self.cursor) as usize,
        }
    }
}

impl<const N: usize, P: WritePolicy> Default for TraceRing<N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, P: WritePolicy> core::fmt::Debug for TraceRing<N, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TraceRing")
            .field("capacity", &N)
            .field("cursor", &self.cursor())
            .field("masks_interrupts", &P::MASKS_INTERRUPTS)
            .finish()
    }
}
