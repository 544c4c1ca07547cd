//! Admin listing state machine.
//!
//! DESIGN
//! ======
//! The listing distinguishes a failed fetch from an empty collection:
//! `Error` and `Empty` are separate phases, so a backend outage never
//! renders as "no registrations found".

use schema::Registration;

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// Lifecycle of the one-shot fetch on the admin page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListPhase {
    /// Fetch in flight; nothing rendered yet.
    #[default]
    Loading,
    /// Fetch succeeded with zero records.
    Empty,
    /// Fetch failed; the collection is unknown, not empty.
    Error,
    /// Fetch succeeded with at least one record.
    Populated,
}

/// Reactive state for the admin page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub registrations: Vec<Registration>,
    pub phase: ListPhase,
}

impl AdminState {
    /// Fold a fetch result into the phase machine.
    pub fn resolve_fetch(&mut self, result: Result<Vec<Registration>, String>) {
        match result {
            Ok(items) => {
                self.phase = if items.is_empty() { ListPhase::Empty } else { ListPhase::Populated };
                self.registrations = items;
            }
            Err(_) => {
                self.registrations.clear();
                self.phase = ListPhase::Error;
            }
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.registrations.len()
    }
}
