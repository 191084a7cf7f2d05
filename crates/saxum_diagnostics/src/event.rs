//! The diagnostic events a streaming parser reports into a session.

use saxum_source::SourceRef;
use std::io;

/// What a fatal parse event was wrapped around, when anything.
///
/// A parser that aborts because its input stream died reports the same fatal
/// event as one that aborts on malformed markup; the wrapped cause is what
/// tells the two apart. The session routes I/O causes to
/// [`render_io_error`](crate::Renderer::render_io_error) so renderers have a
/// single place to distinguish transport failures from content failures.
#[derive(Debug)]
pub enum FatalCause {
    /// The underlying byte stream failed mid-parse.
    Io(io::Error),
    /// Some other wrapped failure, kept as display text.
    Other(String),
}

impl FatalCause {
    /// Returns `true` if this cause is an I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self, FatalCause::Io(_))
    }
}

/// A diagnostic originating from the parse itself: a message plus where in
/// the document it arose, and optionally the failure it wraps.
#[derive(Debug)]
pub struct ParseDiagnostic {
    /// The human-readable message supplied by the parser.
    pub message: String,
    /// Where in which document the condition was detected.
    pub source: SourceRef,
    /// The wrapped cause, present only on fatal events that carry one.
    pub cause: Option<FatalCause>,
}

impl ParseDiagnostic {
    /// Creates a diagnostic with the given message and source reference.
    pub fn new(message: impl Into<String>, source: SourceRef) -> Self {
        Self {
            message: message.into(),
            source,
            cause: None,
        }
    }

    /// Attaches the wrapped cause of a fatal event.
    pub fn with_cause(mut self, cause: FatalCause) -> Self {
        self.cause = Some(cause);
        self
    }
}

/// A parse-time diagnostic event, tagged by kind.
///
/// The tagged form exists so event sequences can be built up, stored, and
/// replayed; [`Session::report`](crate::Session::report) dispatches each
/// variant to the matching per-kind operation.
#[derive(Debug)]
pub enum DiagnosticEvent {
    /// An advisory condition; parsing continues and the document may still
    /// be valid.
    Warning(ParseDiagnostic),
    /// The document is invalid but parsing may continue.
    Error(ParseDiagnostic),
    /// Parsing cannot continue; the wrapped cause, if any, decides the
    /// renderer path.
    FatalError(ParseDiagnostic),
    /// An informational notice, not counted.
    Info(String),
    /// An I/O failure reported directly rather than wrapped in a fatal
    /// parse event.
    IoError(io::Error),
    /// A failure internal to the verifier, not attributable to the document.
    InternalError(String),
    /// The validation schema itself is malformed.
    SchemaError(String),
}
