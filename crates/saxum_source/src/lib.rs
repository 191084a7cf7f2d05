//! Document positions for diagnostics reported against streamed documents.
//!
//! This crate provides [`Location`] for 1-indexed line/column coordinates as
//! reported by a streaming parser's locator, and [`SourceRef`] tying a
//! position to the document it came from for human-readable display.

#![warn(missing_docs)]

pub mod location;
pub mod source_ref;

pub use location::Location;
pub use source_ref::SourceRef;
