// crates/comment_regex_builder/src/lib.rs

//! Regex wrappers for comment markers: opening, closing and section tags.
//!
//! A tag is a literal string such as `"//region"` or `"<!--"`. The builders
//! here turn one tag (or a left/right pair bracketing a section) into a
//! compiled line matcher that tolerates leading and trailing whitespace and
//! can extract the free text belonging to the tag on that line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Escapes every regex metacharacter in `s` so that the result matches `s`
/// literally when embedded in a larger pattern. Empty input stays empty.
pub fn escape_literal(s: &str) -> String {
    regex::escape(s)
}

/// A compiled line matcher for one comment tag.
///
/// Built by [`create_start_tag`], [`create_end_tag`] or
/// [`create_section_tag`]; immutable afterwards. Cloning shares the compiled
/// program, and a matcher can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    regex: Regex,
}

impl TagMatcher {
    fn from_pattern(pattern: &str) -> Self {
        // Caller literals are escaped before they reach a template, so the
        // assembled pattern is always valid.
        let regex = Regex::new(pattern).expect("tag pattern built from escaped literals");
        TagMatcher { regex }
    }

    /// The matcher's internal compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Shorthand for matching the internal regex against `line`.
    ///
    /// Returns true if the tag is present on the line, false otherwise.
    pub fn test(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// If the tag is found on `line`, returns the text that belongs to it.
    /// Returns `None` when `line` is absent or the tag is not there.
    pub fn inner_text<'a>(&self, line: Option<&'a str>) -> Option<&'a str> {
        let captures = self.regex.captures(line?)?;
        Some(captures.get(1)?.as_str())
    }
}

/// Creates a start tag from a string.
///
/// The matcher accepts the tag after optional leading whitespace and yields
/// the rest of the line as inner text. Equivalent to a section tag whose
/// right part is empty.
pub fn create_start_tag(tag: &str) -> TagMatcher {
    create_section_tag(tag, "")
}

/// Creates an end tag from a string.
///
/// The inner text is the part of the line in front of the tag. The capture
/// is greedy, so when the tag occurs more than once it runs up to the last
/// occurrence. An empty tag degenerates to matching any single line whole.
pub fn create_end_tag(tag: &str) -> TagMatcher {
    TagMatcher::from_pattern(&format!(r"^(.*){}\s*$", escape_literal(tag)))
}

/// Creates a section tag from its left and right parts.
///
/// # Arguments
///
/// * `left` - literal opening the section, e.g. `"<!--"`. May be empty.
/// * `right` - literal closing the section, e.g. `"-->"`. May be empty.
///
/// The matcher accepts `left`, the captured inner text and `right` on a
/// single line, surrounded by optional whitespace. When both parts are empty
/// the matcher accepts blank lines only, since an unanchored capture would
/// claim every line.
pub fn create_section_tag(left: &str, right: &str) -> TagMatcher {
    if left.is_empty() && right.is_empty() {
        return TagMatcher::from_pattern(r"^\s*$");
    }
    TagMatcher::from_pattern(&format!(
        r"^\s*{}(.*){}\s*$",
        escape_literal(left),
        escape_literal(right)
    ))
}

/// Matcher that accepts any line and yields all of it as inner text.
pub static MATCH_ALL_TAG: Lazy<TagMatcher> = Lazy::new(|| TagMatcher::from_pattern(r"^(.*)$"));
