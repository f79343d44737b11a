//! Tag parsing for journal entries.
//!
//! Tags come in from the command line as a single comma-separated string
//! (`"work, urgent,home"`). Parsing turns that into a [`Tags`] set:
//!
//! - Every token is trimmed; empty tokens are dropped (`"a,,b,"` yields `a`, `b`)
//! - Duplicates are removed case-insensitively, keeping the first spelling
//! - Tokens with control characters or longer than [`MAX_TAG_LEN`] are rejected
//!
//! Tags read back from the journal file are not re-normalised: a stored list
//! with blank, padded or duplicate tags fails to deserialize.
//!
//! All tag comparisons elsewhere in the crate (search, filtering, stats) are
//! case-insensitive and go through the helpers here.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_TAG_LEN: usize = 40;

/// An ordered, case-insensitively unique list of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated tag string.
    ///
    /// # Examples
    /// ```
    /// use devjournal::tags::Tags;
    ///
    /// let tags = Tags::parse("Python, testing,,python").unwrap();
    /// assert_eq!(tags.iter().collect::<Vec<_>>(), ["Python", "testing"]);
    ///
    /// assert!(Tags::parse("").unwrap().is_empty());
    /// assert!(Tags::parse("ok,bad\u{7}").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, TagValidationError> {
        let mut tags = Tags::new();
        for token in input.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            validate_tag(token)?;
            tags.push(token);
        }
        Ok(tags)
    }

    /// Adds a tag unless an equal one (ignoring case) is already present.
    fn push(&mut self, tag: &str) {
        if !self.contains(tag) {
            self.0.push(tag.to_string());
        }
    }

    /// Exact, case-insensitive membership.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| eq_lower(t, tag))
    }

    /// True if any tag contains `needle_lower` as a substring.
    /// `needle_lower` must already be lower-cased.
    pub fn any_contains(&self, needle_lower: &str) -> bool {
        self.0.iter().any(|t| t.to_lowercase().contains(needle_lower))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for tag in iter {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() {
                tags.push(tag);
            }
        }
        tags
    }
}

impl TryFrom<Vec<String>> for Tags {
    type Error = TagValidationError;

    fn try_from(raw: Vec<String>) -> Result<Self, Self::Error> {
        let mut tags = Tags::new();
        for tag in raw {
            if tag.is_empty() {
                return Err(TagValidationError::Empty);
            }
            if tag.trim() != tag {
                return Err(TagValidationError::Padded(tag));
            }
            validate_tag(&tag)?;
            if tags.contains(&tag) {
                return Err(TagValidationError::Duplicate(tag));
            }
            tags.0.push(tag);
        }
        Ok(tags)
    }
}

impl From<Tags> for Vec<String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

fn eq_lower(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Normalized key used when counting tags.
pub fn normalize(tag: &str) -> String {
    tag.to_lowercase()
}

fn validate_tag(tag: &str) -> Result<(), TagValidationError> {
    if let Some(ch) = tag.chars().find(|c| c.is_control()) {
        return Err(TagValidationError::ControlCharacter {
            tag: tag.to_string(),
            ch,
        });
    }
    if tag.chars().count() > MAX_TAG_LEN {
        return Err(TagValidationError::TooLong(tag.to_string()));
    }
    Ok(())
}

/// Error type for tag parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag contains a control character (newline, tab, bell, ...)
    ControlCharacter { tag: String, ch: char },
    /// Tag is longer than [`MAX_TAG_LEN`] characters
    TooLong(String),
    /// Stored tag is the empty string
    Empty,
    /// Stored tag has leading or trailing whitespace
    Padded(String),
    /// Stored tag repeats an earlier one, ignoring case
    Duplicate(String),
}

impl fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValidationError::ControlCharacter { tag, ch } => {
                write!(f, "tag {:?} contains control character {:?}", tag, ch)
            }
            TagValidationError::TooLong(tag) => {
                write!(
                    f,
                    "tag {:?} is longer than {} characters",
                    tag, MAX_TAG_LEN
                )
            }
            TagValidationError::Empty => write!(f, "tag is empty"),
            TagValidationError::Padded(tag) => {
                write!(f, "tag {:?} has surrounding whitespace", tag)
            }
            TagValidationError::Duplicate(tag) => write!(f, "tag {:?} is repeated", tag),
        }
    }
}

impl std::error::Error for TagValidationError {}

impl From<TagValidationError> for crate::error::JournalError {
    fn from(err: TagValidationError) -> Self {
        crate::error::JournalError::Validation(format!("Invalid tags: {}", err))
    }
}
