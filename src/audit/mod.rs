//! Event logging for roster-cli
//!
//! Every mutating registry operation appends one human-readable line to an
//! event log. The sink is a capability injected into the service, so nothing
//! in the crate touches a process-wide log.

pub mod logger;

pub use logger::EventLog;

use crate::error::RosterResult;

/// A sink for registry events
///
/// Implementations must be append-only from the caller's point of view.
pub trait EventSink {
    /// Append one event message to the log
    fn append(&self, message: &str) -> RosterResult<()>;
}

/// In-memory sink for tests; shares its buffer across clones
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemorySink {
    events: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl EventSink for MemorySink {
    fn append(&self, message: &str) -> RosterResult<()> {
        self.events.lock().unwrap().push(message.to_string());
        Ok(())
    }
}
