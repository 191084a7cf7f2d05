//! The renderer capability a session dispatches classified events to.

use crate::error::RenderError;
use crate::event::ParseDiagnostic;
use std::io;

/// Trait for turning classified diagnostic events into human-visible output.
///
/// One hook per event kind, matching the session's taxonomy one-to-one.
/// Implementations live outside this crate (terminal, markup, or structured
/// output); a session only guarantees that by the time a hook runs, the
/// event has already been counted.
///
/// A hook may fail with a [`RenderError`]; the session propagates the
/// failure to whatever drives the parse, which is expected to abort it.
pub trait Renderer {
    /// Renders an advisory condition.
    fn render_warning(&mut self, diag: &ParseDiagnostic) -> Result<(), RenderError>;

    /// Renders a recoverable validity error.
    fn render_error(&mut self, diag: &ParseDiagnostic) -> Result<(), RenderError>;

    /// Renders a fatal parse event that did not wrap an I/O failure.
    fn render_fatal(&mut self, diag: &ParseDiagnostic) -> Result<(), RenderError>;

    /// Renders an informational notice.
    fn render_info(&mut self, message: &str) -> Result<(), RenderError>;

    /// Renders an I/O failure, whether reported directly or unwrapped from a
    /// fatal parse event.
    fn render_io_error(&mut self, err: &io::Error) -> Result<(), RenderError>;

    /// Renders a failure internal to the verifier.
    fn render_internal(&mut self, message: &str) -> Result<(), RenderError>;

    /// Renders a malformed-schema failure.
    fn render_schema(&mut self, description: &str) -> Result<(), RenderError>;
}
