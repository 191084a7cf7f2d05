//! Character-data scrubbing for safe inline display in diagnostics.
//!
//! Raw character data pulled out of a document is not safe to splice into a
//! diagnostic message as-is: it may contain characters that are illegal in
//! the target text model, and it may begin with a combining mark that would
//! visually attach to the message's surrounding punctuation. The
//! [`Scrubber`] applies a pluggable [`ScrubRule`], guards against a leading
//! combining mark, and canonically normalizes the result into
//! [`ScrubbedText`].

#![warn(missing_docs)]

pub mod rule;
pub mod scrub;

pub use rule::{ContentError, ScrubRule, XmlScrubRule};
pub use scrub::{ScrubbedText, Scrubber};
