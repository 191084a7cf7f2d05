//! The character-validation capability consumed by the scrubber.

/// Character data that cannot be recovered into displayable text.
///
/// Returned by a [`ScrubRule`] when the input is not representable as valid
/// text at all, as opposed to merely containing characters that can be
/// replaced or dropped.
#[derive(Debug, thiserror::Error)]
#[error("unrecoverable character data: {message}")]
pub struct ContentError {
    /// Description of what made the data unrecoverable.
    pub message: String,
}

impl ContentError {
    /// Creates a new content error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for ContentError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// Trait for judging and repairing raw character data.
///
/// Implementations decide which characters are invalid in the target text
/// model and either repair the string (by replacement or removal) or reject
/// it outright with a [`ContentError`].
///
/// Implementations must be idempotent: scrubbing an already-scrubbed string
/// returns it unchanged. The [`Scrubber`](crate::Scrubber) relies on this to
/// keep its own output stable across repeated rendering stages.
pub trait ScrubRule {
    /// Repairs `raw` into valid character data, or rejects it.
    fn scrub_character_data(&self, raw: &str) -> Result<String, ContentError>;
}

/// The prudent scrub rule for XML-style character data.
///
/// Forbidden characters are the C0 controls other than tab, LF, and CR; DEL
/// and the C1 controls; and the Unicode noncharacters (`U+FDD0..=U+FDEF` and
/// the last two code points of every plane). Each is replaced with `U+FFFD`
/// by default, or dropped entirely in stripping mode.
///
/// This rule never fails on Rust string input, which is always valid UTF-8;
/// the error path of [`ScrubRule`] exists for rules that operate on lossier
/// sources.
#[derive(Clone, Copy, Debug)]
pub struct XmlScrubRule {
    /// Whether forbidden characters are replaced with `U+FFFD` (`true`) or
    /// dropped entirely (`false`).
    pub replace: bool,
}

impl XmlScrubRule {
    /// Creates the default rule, replacing forbidden characters with `U+FFFD`.
    pub fn new() -> Self {
        Self { replace: true }
    }

    /// Creates a rule that drops forbidden characters instead of marking them.
    pub fn stripping() -> Self {
        Self { replace: false }
    }
}

impl Default for XmlScrubRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrubRule for XmlScrubRule {
    fn scrub_character_data(&self, raw: &str) -> Result<String, ContentError> {
        let mut out = String::with_capacity(raw.len());
        for c in raw.chars() {
            if is_forbidden(c) {
                if self.replace {
                    out.push('\u{fffd}');
                }
            } else {
                out.push(c);
            }
        }
        Ok(out)
    }
}

/// Returns `true` for characters illegal in XML-style character data.
fn is_forbidden(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => false,
        c if (c as u32) < 0x20 => true,
        '\u{7f}'..='\u{9f}' => true,
        '\u{fdd0}'..='\u{fdef}' => true,
        c => (c as u32 & 0xfffe) == 0xfffe,
    }
}
