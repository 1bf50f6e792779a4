//! Observability for revision history handling
//!
//! Structured JSON-line logging of history events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. Logging never fails the operation being logged
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use revhistory::observability::{Logger, Severity, Event, log_event_with_fields};
//!
//! Logger::set_min_severity(Severity::Trace);
//! log_event_with_fields(Event::RevisionRejected, &[("argument", "entity")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a history event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a history event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
