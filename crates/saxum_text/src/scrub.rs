//! The scrubbing pipeline: rule, leading-mark guard, canonical normalization.

use crate::rule::{ContentError, ScrubRule};
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Character data sanitized for inline display in diagnostic messages.
///
/// Guaranteed to contain no characters the scrub rule forbids, to never
/// begin with a combining mark, and to be in Normalization Form C. Only
/// [`Scrubber::scrub`] constructs values of this type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ScrubbedText(String);

impl ScrubbedText {
    /// Returns the sanitized text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the sanitized string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ScrubbedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScrubbedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitizes raw character data through an injected [`ScrubRule`].
///
/// The pipeline runs in a fixed order:
/// 1. the rule strips or replaces characters invalid in the target text model;
/// 2. if the result begins with a combining mark, a single ASCII space is
///    prepended so the mark cannot attach to whatever precedes the text in
///    the rendered message;
/// 3. the result is normalized to NFC.
///
/// Scrubbing is idempotent as long as the rule is (see [`ScrubRule`]):
/// re-scrubbing already-sanitized text returns it unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Scrubber<R> {
    rule: R,
}

impl<R: ScrubRule> Scrubber<R> {
    /// Creates a scrubber around the given rule.
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// Sanitizes `raw` into displayable text.
    ///
    /// Fails only if the rule judges the input unrecoverable.
    pub fn scrub(&self, raw: &str) -> Result<ScrubbedText, ContentError> {
        let cleaned = self.rule.scrub_character_data(raw)?;
        let guarded = if starts_with_combining_mark(&cleaned) {
            let mut s = String::with_capacity(cleaned.len() + 1);
            s.push(' ');
            s.push_str(&cleaned);
            s
        } else {
            cleaned
        };
        Ok(ScrubbedText(guarded.nfc().collect()))
    }
}

impl Default for Scrubber<crate::rule::XmlScrubRule> {
    fn default() -> Self {
        Self::new(crate::rule::XmlScrubRule::new())
    }
}

/// Returns `true` if the first character is a Unicode combining mark.
fn starts_with_combining_mark(s: &str) -> bool {
    s.chars().next().map_or(false, is_combining_mark)
}
