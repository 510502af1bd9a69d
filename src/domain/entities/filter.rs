//! Filter state owned by the caller.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How the free-text query is compared against an entry's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagQueryMode {
    /// A tag matches when the lower-cased tag occurs inside the lower-cased
    /// query. Only tags no longer than the query can match.
    #[default]
    Legacy,
    /// A tag matches when the lower-cased query occurs inside the lower-cased
    /// tag.
    Contains,
}

impl fmt::Display for TagQueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagQueryMode::Legacy => f.write_str("legacy"),
            TagQueryMode::Contains => f.write_str("contains"),
        }
    }
}

impl FromStr for TagQueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(TagQueryMode::Legacy),
            "contains" => Ok(TagQueryMode::Contains),
            other => Err(format!(
                "tag query mode must be 'legacy' or 'contains', got '{other}'"
            )),
        }
    }
}

/// Tag selection plus free-text query. Empty fields impose no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selected_tags: BTreeSet<String>,
    pub text_query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter restricted to the given tags only.
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_tags: tags.into_iter().map(Into::into).collect(),
            text_query: String::new(),
        }
    }

    /// Filter restricted to the given text query only.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            selected_tags: BTreeSet::new(),
            text_query: query.into(),
        }
    }

    pub fn tag_condition_active(&self) -> bool {
        !self.selected_tags.is_empty()
    }

    pub fn text_condition_active(&self) -> bool {
        !self.text_query.is_empty()
    }

    /// Returns true if no condition is active.
    pub fn is_identity(&self) -> bool {
        !self.tag_condition_active() && !self.text_condition_active()
    }
}
