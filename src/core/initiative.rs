//! Initiative values: raw text in, numeric ordering out.
//!
//! The tracker keeps initiative exactly as the user typed it, because a
//! record being edited may legitimately hold an empty or half-typed
//! value. Ordering uses a fixed parse rule instead of loose coercion:
//!
//! - The text is trimmed and parsed as `i64`.
//! - Empty or unparsable text has no numeric value and ranks below
//!   every numeric value.
//! - Roster sorts are descending by parsed value and stable, so ties
//!   keep their existing relative order.

use serde::{Deserialize, Serialize};

/// A turn-order value, stored as raw text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Initiative(String);

impl Initiative {
    /// Create an initiative from raw text.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The empty initiative, as a freshly added record holds.
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Get the raw text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Check if the raw text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the numeric value, if the text holds one.
    ///
    /// Returns `None` for empty or unparsable text. `None` ranks below
    /// every `Some` under [`Option`]'s ordering, which is exactly the
    /// "no value sorts last" rule the roster relies on.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl From<&str> for Initiative {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for Initiative {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for Initiative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
