//! One document's verification: lifecycle, counting, and renderer dispatch.

use crate::counters::Counters;
use crate::error::{LifecycleError, SessionError};
use crate::event::{DiagnosticEvent, FatalCause, ParseDiagnostic};
use crate::renderer::Renderer;
use std::fmt;
use std::io;

/// Where a session is in its lifecycle.
///
/// A session moves `NotStarted → Started → Ended`, one way only. Events are
/// accepted only while `Started`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    /// Constructed, but [`start`](Session::start) has not been called.
    NotStarted,
    /// Between [`start`](Session::start) and [`end`](Session::end); events
    /// are accepted.
    Started,
    /// Finalized; no further events are accepted.
    Ended,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::NotStarted => write!(f, "not started"),
            SessionState::Started => write!(f, "started"),
            SessionState::Ended => write!(f, "ended"),
        }
    }
}

/// The per-document diagnostics adapter between a parser and a renderer.
///
/// A session owns the [`Counters`] for one document and borrows the
/// [`Renderer`] it dispatches to. Each event operation is a fixed two-step
/// contract: the matching counter is incremented first, then the
/// corresponding renderer hook runs. The two steps are not separable —
/// there is no way to reach a hook through this type without the count
/// having happened — and a hook failure propagates without rolling the
/// count back.
///
/// Sessions are single-use: one per document verification, constructed
/// fresh each time. Counters never reset.
pub struct Session<'r, R: Renderer + ?Sized> {
    counters: Counters,
    state: SessionState,
    document_uri: Option<String>,
    renderer: &'r mut R,
}

impl<'r, R: Renderer + ?Sized> Session<'r, R> {
    /// Creates a session dispatching to the given renderer.
    pub fn new(renderer: &'r mut R) -> Self {
        Self {
            counters: Counters::new(),
            state: SessionState::NotStarted,
            document_uri: None,
            renderer,
        }
    }

    /// Opens the session for the document at `document_uri`.
    ///
    /// Fails with a [`LifecycleError`] unless the session is fresh.
    pub fn start(&mut self, document_uri: &str) -> Result<(), SessionError> {
        if self.state != SessionState::NotStarted {
            return Err(LifecycleError {
                operation: "start",
                state: self.state,
            }
            .into());
        }
        self.document_uri = Some(document_uri.to_string());
        self.state = SessionState::Started;
        Ok(())
    }

    /// Finalizes the session and selects its closing message.
    ///
    /// Returns `failure_message` if any error or fatal event was observed,
    /// `success_message` otherwise. Fails with a [`LifecycleError`] unless
    /// the session is started.
    pub fn end<'m>(
        &mut self,
        success_message: &'m str,
        failure_message: &'m str,
    ) -> Result<&'m str, SessionError> {
        if self.state != SessionState::Started {
            return Err(LifecycleError {
                operation: "end",
                state: self.state,
            }
            .into());
        }
        self.state = SessionState::Ended;
        Ok(if self.counters.has_errors() {
            failure_message
        } else {
            success_message
        })
    }

    /// Reports an advisory condition.
    pub fn warning(&mut self, diag: &ParseDiagnostic) -> Result<(), SessionError> {
        self.expect_started("warning")?;
        self.counters.note_warning();
        self.renderer.render_warning(diag)?;
        Ok(())
    }

    /// Reports a recoverable validity error.
    pub fn error(&mut self, diag: &ParseDiagnostic) -> Result<(), SessionError> {
        self.expect_started("error")?;
        self.counters.note_error();
        self.renderer.render_error(diag)?;
        Ok(())
    }

    /// Reports a fatal parse event.
    ///
    /// A wrapped [`FatalCause::Io`] routes to
    /// [`render_io_error`](Renderer::render_io_error); anything else routes
    /// to [`render_fatal`](Renderer::render_fatal). Either way the fatal
    /// counter moves exactly once.
    pub fn fatal_error(&mut self, diag: &ParseDiagnostic) -> Result<(), SessionError> {
        self.expect_started("fatal_error")?;
        self.counters.note_fatal();
        match &diag.cause {
            Some(FatalCause::Io(err)) => self.renderer.render_io_error(err)?,
            _ => self.renderer.render_fatal(diag)?,
        }
        Ok(())
    }

    /// Reports an informational notice. Not counted.
    pub fn info(&mut self, message: &str) -> Result<(), SessionError> {
        self.expect_started("info")?;
        self.renderer.render_info(message)?;
        Ok(())
    }

    /// Reports an I/O failure directly, outside any fatal parse event.
    pub fn io_error(&mut self, err: &io::Error) -> Result<(), SessionError> {
        self.expect_started("io_error")?;
        self.counters.note_fatal();
        self.renderer.render_io_error(err)?;
        Ok(())
    }

    /// Reports a failure internal to the verifier.
    pub fn internal_error(&mut self, message: &str) -> Result<(), SessionError> {
        self.expect_started("internal_error")?;
        self.counters.note_fatal();
        self.renderer.render_internal(message)?;
        Ok(())
    }

    /// Reports that the validation schema itself is malformed.
    pub fn schema_error(&mut self, description: &str) -> Result<(), SessionError> {
        self.expect_started("schema_error")?;
        self.counters.note_fatal();
        self.renderer.render_schema(description)?;
        Ok(())
    }

    /// Dispatches a tagged event to the matching per-kind operation.
    pub fn report(&mut self, event: &DiagnosticEvent) -> Result<(), SessionError> {
        match event {
            DiagnosticEvent::Warning(diag) => self.warning(diag),
            DiagnosticEvent::Error(diag) => self.error(diag),
            DiagnosticEvent::FatalError(diag) => self.fatal_error(diag),
            DiagnosticEvent::Info(message) => self.info(message),
            DiagnosticEvent::IoError(err) => self.io_error(err),
            DiagnosticEvent::InternalError(message) => self.internal_error(message),
            DiagnosticEvent::SchemaError(description) => self.schema_error(description),
        }
    }

    /// The number of warning events observed.
    pub fn warnings(&self) -> usize {
        self.counters.warnings()
    }

    /// The number of recoverable error events observed.
    pub fn errors(&self) -> usize {
        self.counters.errors()
    }

    /// The number of fatal events observed.
    pub fn fatal_errors(&self) -> usize {
        self.counters.fatal_errors()
    }

    /// Returns `true` if any error or fatal event has been observed.
    pub fn has_errors(&self) -> bool {
        self.counters.has_errors()
    }

    /// The tallies accumulated so far.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// The document URI recorded by [`start`](Session::start), if any.
    pub fn document_uri(&self) -> Option<&str> {
        self.document_uri.as_deref()
    }

    /// Where the session is in its lifecycle.
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn expect_started(&self, operation: &'static str) -> Result<(), LifecycleError> {
        if self.state == SessionState::Started {
            Ok(())
        } else {
            Err(LifecycleError {
                operation,
                state: self.state,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use saxum_source::{Location, SourceRef};

    /// Records which hooks ran; optionally fails every hook.
    #[derive(Default)]
    struct TestRenderer {
        hooks: Vec<&'static str>,
        fail: bool,
    }

    impl TestRenderer {
        fn note(&mut self, hook: &'static str) -> Result<(), RenderError> {
            self.hooks.push(hook);
            if self.fail {
                Err(RenderError::new("forced failure"))
            } else {
                Ok(())
            }
        }
    }

    impl Renderer for TestRenderer {
        fn render_warning(&mut self, _diag: &ParseDiagnostic) -> Result<(), RenderError> {
            self.note("warning")
        }
        fn render_error(&mut self, _diag: &ParseDiagnostic) -> Result<(), RenderError> {
            self.note("error")
        }
        fn render_fatal(&mut self, _diag: &ParseDiagnostic) -> Result<(), RenderError> {
            self.note("fatal")
        }
        fn render_info(&mut self, _message: &str) -> Result<(), RenderError> {
            self.note("info")
        }
        fn render_io_error(&mut self, _err: &io::Error) -> Result<(), RenderError> {
            self.note("io")
        }
        fn render_internal(&mut self, _message: &str) -> Result<(), RenderError> {
            self.note("internal")
        }
        fn render_schema(&mut self, _description: &str) -> Result<(), RenderError> {
            self.note("schema")
        }
    }

    fn diag(message: &str) -> ParseDiagnostic {
        ParseDiagnostic::new(message, SourceRef::at(Location::new(1, 1)))
    }

    #[test]
    fn fresh_session_is_clean() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        assert_eq!(
            (session.warnings(), session.errors(), session.fatal_errors()),
            (0, 0, 0)
        );
        assert!(!session.has_errors());
        assert_eq!(session.document_uri(), Some("doc.xml"));
    }

    #[test]
    fn each_event_moves_its_counter_and_hook() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        session.warning(&diag("w")).unwrap();
        session.error(&diag("e")).unwrap();
        session.fatal_error(&diag("f")).unwrap();
        session.info("note").unwrap();
        session
            .io_error(&io::Error::new(io::ErrorKind::BrokenPipe, "pipe"))
            .unwrap();
        session.internal_error("oops").unwrap();
        session.schema_error("bad schema").unwrap();

        assert_eq!(session.warnings(), 1);
        assert_eq!(session.errors(), 1);
        // fatal + io + internal + schema
        assert_eq!(session.fatal_errors(), 4);
        assert_eq!(
            renderer.hooks,
            vec!["warning", "error", "fatal", "info", "io", "internal", "schema"]
        );
    }

    #[test]
    fn fatal_with_io_cause_takes_io_path_only() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        let cause = FatalCause::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        session
            .fatal_error(&diag("stream died").with_cause(cause))
            .unwrap();
        assert_eq!(session.fatal_errors(), 1);
        assert_eq!(renderer.hooks, vec!["io"]);
    }

    #[test]
    fn fatal_with_other_cause_takes_generic_path() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        session
            .fatal_error(&diag("loop").with_cause(FatalCause::Other("recursion".to_string())))
            .unwrap();
        assert_eq!(session.fatal_errors(), 1);
        assert_eq!(renderer.hooks, vec!["fatal"]);
    }

    #[test]
    fn info_is_not_counted() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        session.info("just saying").unwrap();
        assert_eq!(
            (session.warnings(), session.errors(), session.fatal_errors()),
            (0, 0, 0)
        );
        assert!(!session.has_errors());
    }

    #[test]
    fn event_before_start_is_rejected() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        let err = session.warning(&diag("too early")).unwrap_err();
        assert!(matches!(err, SessionError::Lifecycle(_)));
        assert_eq!(session.warnings(), 0);
        assert!(renderer.hooks.is_empty());
    }

    #[test]
    fn event_after_end_is_rejected() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        session.end("ok", "failed").unwrap();
        let err = session.error(&diag("too late")).unwrap_err();
        assert!(matches!(err, SessionError::Lifecycle(_)));
        assert_eq!(session.errors(), 0);
        assert_eq!(session.state(), SessionState::Ended);
    }

    #[test]
    fn double_start_and_double_end_are_rejected() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        assert!(session.start("doc.xml").is_err());
        session.end("ok", "failed").unwrap();
        assert!(session.end("ok", "failed").is_err());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        assert!(session.end("ok", "failed").is_err());
        assert_eq!(session.state(), SessionState::NotStarted);
    }

    #[test]
    fn end_selects_message_by_outcome() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        session.warning(&diag("advisory")).unwrap();
        assert_eq!(session.end("clean", "has problems").unwrap(), "clean");

        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        session.error(&diag("invalid")).unwrap();
        assert_eq!(session.end("clean", "has problems").unwrap(), "has problems");
    }

    #[test]
    fn hook_failure_propagates_but_count_survives() {
        let mut renderer = TestRenderer {
            fail: true,
            ..TestRenderer::default()
        };
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        let err = session.error(&diag("e")).unwrap_err();
        assert!(matches!(err, SessionError::Render(_)));
        assert_eq!(session.errors(), 1);
        assert!(session.has_errors());
    }

    #[test]
    fn report_dispatches_by_kind() {
        let mut renderer = TestRenderer::default();
        let mut session = Session::new(&mut renderer);
        session.start("doc.xml").unwrap();
        let events = [
            DiagnosticEvent::Warning(diag("w")),
            DiagnosticEvent::Error(diag("e")),
            DiagnosticEvent::FatalError(
                diag("f").with_cause(FatalCause::Io(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "reset",
                ))),
            ),
            DiagnosticEvent::Info("i".to_string()),
            DiagnosticEvent::SchemaError("s".to_string()),
        ];
        for event in &events {
            session.report(event).unwrap();
        }
        assert_eq!(session.warnings(), 1);
        assert_eq!(session.errors(), 1);
        assert_eq!(session.fatal_errors(), 2);
        assert_eq!(renderer.hooks, vec!["warning", "error", "io", "info", "schema"]);
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut renderer = TestRenderer::default();
        let dyn_renderer: &mut dyn Renderer = &mut renderer;
        let mut session = Session::new(dyn_renderer);
        session.start("doc.xml").unwrap();
        session.warning(&diag("w")).unwrap();
        assert_eq!(session.warnings(), 1);
    }
}
