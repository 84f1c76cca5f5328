//! Shared types used across the debug log
//!
//! Identifiers are small fixed-width newtypes so that the encoder can pack
//! them without range checks. The unchecked constructors truncate, the
//! checked ones reject, mirroring how callers either trust a compile-time
//! constant or validate a runtime value.

use core::fmt;

use crate::config::{
    EVENT_ID_BITPOS, EVENT_ID_MASK, FUNCTION_ID_MASK, MAX_EVENT_ID, MAX_MODULE_ID,
    MODULE_ID_BITPOS, MODULE_ID_MASK, PAYLOAD_MASK, TYPE_BITPOS, TYPE_MASK,
};

/// Category of a trace word, stored in bits 28..=31
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LogType {
    /// Entry into a function
    FunctionEnter = 1,
    /// Exit from a function
    FunctionExit = 2,
    /// Event whose id is scoped to the emitting module
    LocalEvent = 3,
    /// Event whose id has one meaning system-wide
    GlobalEvent = 4,
}

impl LogType {
    /// Raw type code as written into the type field
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Parse a type code, returns None for unassigned codes
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::FunctionEnter),
            2 => Some(Self::FunctionExit),
            3 => Some(Self::LocalEvent),
            4 => Some(Self::GlobalEvent),
            _ => None,
        }
    }

    /// Whether words of this type carry an event id and payload
    #[must_use]
    pub const fn is_event(self) -> bool {
        matches!(self, Self::LocalEvent | Self::GlobalEvent)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LogType {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::FunctionEnter => defmt::write!(f, "ENTER"),
            Self::FunctionExit => defmt::write!(f, "EXIT"),
            Self::LocalEvent => defmt::write!(f, "LOCAL"),
            Self::GlobalEvent => defmt::write!(f, "GLOBAL"),
        }
    }
}

/// Verbosity level of a log call or a module threshold
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Verbosity {
    /// Never recorded
    None = 0,
    /// Recorded unless the module is silenced
    #[default]
    Low = 1,
    /// Recorded only by modules configured for high verbosity
    High = 2,
}

impl Verbosity {
    /// Numeric level
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Verbosity {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::None => defmt::write!(f, "NONE"),
            Self::Low => defmt::write!(f, "LOW"),
            Self::High => defmt::write!(f, "HIGH"),
        }
    }
}

/// Identifier of the driver module that emitted an event (0..=63)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ModuleId(u8);

impl ModuleId {
    /// Create a module id, keeping only the low 6 bits
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id & MODULE_ID_MASK as u8)
    }

    /// Create a module id, returns None if it does not fit 6 bits
    #[must_use]
    pub const fn checked(id: u8) -> Option<Self> {
        if id <= MAX_MODULE_ID {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw id
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ModuleId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "M{}", self.0);
    }
}

/// Identifier of a local or global event (0..=63)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EventId(u8);

impl EventId {
    /// Create an event id, keeping only the low 6 bits
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id & EVENT_ID_MASK as u8)
    }

    /// Create an event id, returns None if it does not fit 6 bits
    #[must_use]
    pub const fn checked(id: u8) -> Option<Self> {
        if id <= MAX_EVENT_ID {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw id
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for EventId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "E{}", self.0);
    }
}

/// One packed 32-bit trace record
///
/// ```text
///  31    28 27      22 21      16 15              0
/// ┌────────┬──────────┬──────────┬─────────────────┐
/// │  type  │  module  │ event id │     payload     │  LocalEvent / GlobalEvent
/// ├────────┼──────────┼──────────┴─────────────────┤
/// │  type  │  module  │  function identifier (22)  │  FunctionEnter / FunctionExit
/// └────────┴──────────┴────────────────────────────┘
/// ```
///
/// The extractors exist for host tooling and tests. Nothing in the crate
/// reads words back out of the ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct TraceWord(u32);

impl TraceWord {
    /// Wrap a raw word, e.g. one read from a memory dump
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw value as stored in the buffer
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Raw contents of the type field
    #[must_use]
    pub const fn type_code(self) -> u32 {
        (self.0 >> TYPE_BITPOS) & TYPE_MASK
    }

    /// Decoded type field, None for unassigned codes (e.g. an empty slot)
    #[must_use]
    pub const fn log_type(self) -> Option<LogType> {
        LogType::from_code(self.type_code())
    }

    /// Module field
    #[must_use]
    pub const fn module_id(self) -> ModuleId {
        ModuleId::new(((self.0 >> MODULE_ID_BITPOS) & MODULE_ID_MASK) as u8)
    }

    /// Event id field (meaningful for local and global events)
    #[must_use]
    pub const fn event_id(self) -> EventId {
        EventId::new(((self.0 >> EVENT_ID_BITPOS) & EVENT_ID_MASK) as u8)
    }

    /// Payload field (meaningful for local and global events)
    #[must_use]
    pub const fn payload(self) -> u16 {
        (self.0 & PAYLOAD_MASK) as u16
    }

    /// Truncated function identifier (meaningful for enter/exit words)
    #[must_use]
    pub const fn function_id(self) -> u32 {
        self.0 & FUNCTION_ID_MASK
    }
}

impl From<TraceWord> for u32 {
    fn from(word: TraceWord) -> Self {
        word.0
    }
}

impl fmt::Debug for TraceWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TraceWord({:#010X})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TraceWord {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u32:#010X}", self.0);
    }
}
