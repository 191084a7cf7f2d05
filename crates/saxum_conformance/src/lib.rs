//! Conformance test helpers for the saxum diagnostics adapter.
//!
//! Provides a recording renderer and a driver that runs an event sequence
//! through a fresh session bracketed by `start`/`end`, returning structured
//! results for assertion in integration tests.

#![warn(missing_docs)]

use saxum_diagnostics::{
    DiagnosticEvent, ParseDiagnostic, RenderError, Renderer, Session,
};
use std::io;

/// Closing message used by [`drive`] for a clean document.
pub const SUCCESS_MESSAGE: &str = "The document was checked successfully.";

/// Closing message used by [`drive`] for a document with problems.
pub const FAILURE_MESSAGE: &str = "There were errors.";

/// A renderer that records every hook invocation as `"kind: detail"`.
///
/// Setting `fail_on` makes the named hook fail after recording, for
/// exercising the propagate-without-rollback contract.
#[derive(Default)]
pub struct RecordingRenderer {
    /// Hook invocations in order, formatted as `"kind: detail"`.
    pub hooks: Vec<String>,
    /// Hook kind that should fail after recording, if any.
    pub fail_on: Option<&'static str>,
}

impl RecordingRenderer {
    fn record(&mut self, kind: &'static str, detail: &str) -> Result<(), RenderError> {
        self.hooks.push(format!("{kind}: {detail}"));
        if self.fail_on == Some(kind) {
            Err(RenderError::new(format!("{kind} hook refused")))
        } else {
            Ok(())
        }
    }

    /// The hook kinds invoked so far, in order.
    pub fn kinds(&self) -> Vec<&str> {
        self.hooks
            .iter()
            .map(|h| h.split(':').next().unwrap_or(h.as_str()))
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render_warning(&mut self, diag: &ParseDiagnostic) -> Result<(), RenderError> {
        self.record("warning", &diag.message)
    }

    fn render_error(&mut self, diag: &ParseDiagnostic) -> Result<(), RenderError> {
        self.record("error", &diag.message)
    }

    fn render_fatal(&mut self, diag: &ParseDiagnostic) -> Result<(), RenderError> {
        self.record("fatal", &diag.message)
    }

    fn render_info(&mut self, message: &str) -> Result<(), RenderError> {
        self.record("info", message)
    }

    fn render_io_error(&mut self, err: &io::Error) -> Result<(), RenderError> {
        self.record("io", &err.to_string())
    }

    fn render_internal(&mut self, message: &str) -> Result<(), RenderError> {
        self.record("internal", message)
    }

    fn render_schema(&mut self, description: &str) -> Result<(), RenderError> {
        self.record("schema", description)
    }
}

/// The observable outcome of driving one event sequence to completion.
pub struct Outcome {
    /// Final warning tally.
    pub warnings: usize,
    /// Final error tally.
    pub errors: usize,
    /// Final fatal tally.
    pub fatal_errors: usize,
    /// Whether the session reported problems.
    pub has_errors: bool,
    /// Hook invocations, formatted as `"kind: detail"`.
    pub hooks: Vec<String>,
    /// The closing message selected by `end`.
    pub closing: &'static str,
}

/// Runs `events` through a fresh session bracketed by `start`/`end`.
///
/// Panics if any operation fails; sequences that exercise failure paths
/// should drive a session by hand instead.
pub fn drive(events: &[DiagnosticEvent]) -> Outcome {
    let mut renderer = RecordingRenderer::default();
    let mut session = Session::new(&mut renderer);
    session.start("test:doc").expect("start");
    for event in events {
        session.report(event).expect("report");
    }
    let closing = session.end(SUCCESS_MESSAGE, FAILURE_MESSAGE).expect("end");
    Outcome {
        warnings: session.warnings(),
        errors: session.errors(),
        fatal_errors: session.fatal_errors(),
        has_errors: session.has_errors(),
        closing,
        hooks: renderer.hooks,
    }
}
