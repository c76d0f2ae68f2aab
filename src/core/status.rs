//! Country visitation status and its transition cycle.
//!
//! A country is always in exactly one of four states: `None`, `Transited`,
//! `Visited` or `Lived`. Clicking a country advances it one step through
//! that fixed cycle, wrapping from `Lived` back to `None`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visitation status of a single country.
///
/// The four canonical states form a cycle. A fifth variant,
/// `Unrecognized`, exists only to hold status strings read from untrusted
/// imported documents: it preserves the original string on
/// re-serialization but behaves as `None` everywhere else (next-status,
/// colors, statistics, filtering). This keeps unknown values tolerated
/// without ever erroring, while letting every computation match
/// exhaustively.
///
/// Serialized as a plain lowercase string (`"none"`, `"transited"`,
/// `"visited"`, `"lived"`); anything else round-trips through
/// `Unrecognized`.
///
/// # Example
///
/// ```rust
/// use waymark::Status;
///
/// let status = Status::None;
/// assert_eq!(status.next(), Status::Transited);
/// assert_eq!(status.next().next(), Status::Visited);
/// assert_eq!(status.next().next().next(), Status::Lived);
/// assert_eq!(status.next().next().next().next(), Status::None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// Never been there. Not stored explicitly; absence of a map entry
    /// means `None`.
    None,
    /// Passed through without staying.
    Transited,
    /// Stayed at least once.
    Visited,
    /// Lived there.
    Lived,
    /// A status string from an imported document that matches none of the
    /// canonical states. Kept verbatim, treated as `None`.
    Unrecognized(String),
}

impl Status {
    /// Get the status's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Transited => "transited",
            Self::Visited => "visited",
            Self::Lived => "lived",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Advance one step through the fixed cycle
    /// `None -> Transited -> Visited -> Lived -> None`.
    ///
    /// Pure and total: `Unrecognized` input advances as `None` does, so an
    /// imported garbage value clicks straight into `Transited` rather than
    /// erroring.
    pub fn next(&self) -> Status {
        match self {
            Self::None | Self::Unrecognized(_) => Self::Transited,
            Self::Transited => Self::Visited,
            Self::Visited => Self::Lived,
            Self::Lived => Self::None,
        }
    }

    /// Whether this status behaves as `None` (absent or unrecognized).
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None | Self::Unrecognized(_))
    }

    /// The canonical status this value behaves as.
    ///
    /// Identity for the four canonical states; `Unrecognized` degrades to
    /// `None`. Used wherever statuses are compared (filtering) or looked
    /// up (colors).
    pub fn normalized(&self) -> Status {
        match self {
            Self::Unrecognized(_) => Self::None,
            other => other.clone(),
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "none" => Self::None,
            "transited" => Self::Transited,
            "visited" => Self::Visited,
            "lived" => Self::Lived,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Unrecognized(raw) => raw,
            other => other.name().to_owned(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
