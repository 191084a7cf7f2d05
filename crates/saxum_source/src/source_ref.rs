//! References tying a diagnostic to the document and position it arose from.

use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where in which document a diagnostic arose.
///
/// Either part may be missing: a parser may report a condition before its
/// locator is set up (no position), or for an anonymous stream (no system
/// id). [`SourceRef::UNKNOWN`] stands in when nothing is known at all.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourceRef {
    /// The system identifier (URI) of the document, if known.
    pub system_id: Option<String>,
    /// The position within the document, if known.
    pub location: Option<Location>,
}

impl SourceRef {
    /// A reference carrying no document or position information.
    pub const UNKNOWN: SourceRef = SourceRef {
        system_id: None,
        location: None,
    };

    /// Creates a reference with both a system id and a position.
    pub fn new(system_id: impl Into<String>, location: Location) -> Self {
        Self {
            system_id: Some(system_id.into()),
            location: Some(location),
        }
    }

    /// Creates a reference with a position but no system id.
    pub fn at(location: Location) -> Self {
        Self {
            system_id: None,
            location: Some(location),
        }
    }

    /// Returns `true` if neither document nor position is known.
    pub fn is_unknown(&self) -> bool {
        self.system_id.is_none() && self.location.is_none()
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.system_id, &self.location) {
            (Some(id), Some(loc)) => write!(f, "{id}:{loc}"),
            (Some(id), None) => write!(f, "{id}"),
            (None, Some(loc)) => write!(f, "{loc}"),
            (None, None) => write!(f, "<unknown>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_full() {
        let sr = SourceRef::new("http://example.org/doc.xml", Location::new(10, 5));
        assert_eq!(format!("{sr}"), "http://example.org/doc.xml:10:5");
    }

    #[test]
    fn display_position_only() {
        let sr = SourceRef::at(Location::new(3, 1));
        assert_eq!(format!("{sr}"), "3:1");
    }

    #[test]
    fn display_unknown() {
        assert_eq!(format!("{}", SourceRef::UNKNOWN), "<unknown>");
    }

    #[test]
    fn unknown_predicate() {
        assert!(SourceRef::UNKNOWN.is_unknown());
        assert!(!SourceRef::at(Location::new(1, 1)).is_unknown());
    }

    #[test]
    fn serde_roundtrip() {
        let sr = SourceRef::new("doc.xml", Location::new(2, 8));
        let json = serde_json::to_string(&sr).unwrap();
        let back: SourceRef = serde_json::from_str(&json).unwrap();
        assert_eq!(sr, back);
    }
}
