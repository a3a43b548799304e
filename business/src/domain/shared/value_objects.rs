use serde::{Deserialize, Serialize};

/// Represents a user identifier issued by the hosted identity provider.
/// Used to isolate client records between users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Opaque browsing-session identifier supplied by the caller.
/// Shopping list state is keyed by it; guests get one without signing in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Active display locale. Name and description selection is a pure
/// function of (record, locale); the shopping list itself is locale-blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    English,
    French,
    Arabic,
}

impl Locale {
    pub fn is_arabic(&self) -> bool {
        matches!(self, Locale::Arabic)
    }

    /// Label prefixed to the SKU in inquiry lines.
    pub fn reference_label(&self) -> &'static str {
        match self {
            Locale::English => "REF",
            Locale::French => "RÉF",
            Locale::Arabic => "مرجع",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::English
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::English => write!(f, "en"),
            Locale::French => write!(f, "fr"),
            Locale::Arabic => write!(f, "ar"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::English),
            "fr" => Ok(Locale::French),
            "ar" => Ok(Locale::Arabic),
            _ => Err(format!("Invalid locale: {}", s)),
        }
    }
}
