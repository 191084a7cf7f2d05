//! Per-session tallies of observed diagnostic events.

use serde::Serialize;

/// Tallies of the diagnostic events observed by one session.
///
/// Counts are monotonically non-decreasing for the life of the session and
/// never reset; fields are private so nothing outside the session can move
/// them backwards. Counters mean "events observed": an increment survives
/// even when the renderer hook that followed it failed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    warnings: usize,
    errors: usize,
    fatal_errors: usize,
}

impl Counters {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of warning events observed.
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    /// The number of recoverable error events observed.
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// The number of fatal events observed: fatal parse events, internal
    /// failures, schema failures, and directly reported I/O failures.
    pub fn fatal_errors(&self) -> usize {
        self.fatal_errors
    }

    /// Returns `true` if any error or fatal event has been observed.
    pub fn has_errors(&self) -> bool {
        !(self.errors == 0 && self.fatal_errors == 0)
    }

    pub(crate) fn note_warning(&mut self) {
        self.warnings += 1;
    }

    pub(crate) fn note_error(&mut self) {
        self.errors += 1;
    }

    pub(crate) fn note_fatal(&mut self) {
        self.fatal_errors += 1;
    }
}
