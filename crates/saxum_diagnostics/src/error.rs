//! Failure types for session operations and renderer hooks.

use crate::session::SessionState;

/// A failure signaled by a [`Renderer`](crate::Renderer) hook.
///
/// The session propagates these to its caller unchanged; it never retries a
/// hook or rolls back the counter increment that preceded it.
#[derive(Debug, thiserror::Error)]
#[error("renderer failed: {message}")]
pub struct RenderError {
    /// Description of what went wrong while rendering.
    pub message: String,
}

impl RenderError {
    /// Creates a new render error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for RenderError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// An event was reported outside the session's `Started` window.
///
/// This indicates a programming error in the code driving the session, not
/// a problem with the document. Counters are left unchanged.
#[derive(Debug, thiserror::Error)]
#[error("{operation} reported while session is {state}")]
pub struct LifecycleError {
    /// The session operation that was invoked out of order.
    pub operation: &'static str,
    /// The state the session was in at the time.
    pub state: SessionState,
}

/// Any failure returned by a [`Session`](crate::Session) operation.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The operation was invoked outside the lifecycle window that permits it.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    /// The delegated renderer hook failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}
