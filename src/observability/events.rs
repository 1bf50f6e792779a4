//! Observable history events
//!
//! Events are explicit and typed.

use std::fmt;

use super::Severity;

/// Observable events in revision history handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A revision value was refused because a required part was absent
    RevisionRejected,
    /// A revision history was sorted and assembled
    RevisionsAssembled,
    /// History configuration loaded from disk
    ConfigLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::RevisionRejected => "REVISION_REJECTED",
            Event::RevisionsAssembled => "REVISIONS_ASSEMBLED",
            Event::ConfigLoaded => "HISTORY_CONFIG_LOADED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RevisionRejected => Severity::Warn,
            Event::RevisionsAssembled => Severity::Trace,
            Event::ConfigLoaded => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
