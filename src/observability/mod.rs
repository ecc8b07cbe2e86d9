//! Observability for querycalc
//!
//! - Structured logging (JSON, one event per line)
//! - Typed lifecycle events
//! - Scoped begin/complete tracing with elapsed time
//!
//! Observability is read-only: nothing here affects query results, and a
//! failed log write is ignored.
//!
//! ```ignore
//! use querycalc::observability::{log_event_with_fields, Event, ObservationScope};
//!
//! let scope = ObservationScope::with_fields("SELECT", &[("output", "result")]);
//! log_event_with_fields(Event::BcIndexBuilt, &[("entries", "42")]);
//! scope.complete_with_fields(&[("rows", "10")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
