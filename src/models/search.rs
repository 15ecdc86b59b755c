use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which field a search filters on. Doubles as the endpoint suffix and the
/// query-string key: `/search_name?name=..`, `/search_loc?loc=..`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Name,
    Loc,
}

impl SearchMode {
    /// The "by name" checkbox is exclusive: checked means name, anything else location.
    #[must_use]
    pub const fn from_checkbox(by_name_checked: bool) -> Self {
        if by_name_checked { Self::Name } else { Self::Loc }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Loc => "loc",
        }
    }

    #[must_use]
    pub fn endpoint(self) -> String {
        format!("/search_{}", self.as_str())
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "loc" | "location" => Ok(Self::Loc),
            other => Err(format!("unknown search mode '{other}' (expected name or loc)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub mode: SearchMode,
    pub term: String,
}

impl SearchQuery {
    /// Normalizes raw search-box text: trimmed, then lower-cased.
    #[must_use]
    pub fn new(mode: SearchMode, raw: &str) -> Self {
        Self {
            mode,
            term: raw.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn from_input(raw: &str, by_name_checked: bool) -> Self {
        Self::new(SearchMode::from_checkbox(by_name_checked), raw)
    }

    /// Request path including the percent-encoded query string.
    #[must_use]
    pub fn path(&self) -> String {
        let term: String = url::form_urlencoded::byte_serialize(self.term.as_bytes()).collect();
        format!("{}?{}={}", self.mode.endpoint(), self.mode.as_str(), term)
    }
}
