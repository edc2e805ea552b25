use chrono::{DateTime, Utc};

/// Placeholder used whenever the vote API leaves a chamber's position out.
pub const NO_VOTE: &str = "No vote";

/// Where the nation id for a delegate comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierSource {
    /// Use this id as-is, case included.
    Explicit(String),
    /// Derive the id from the display name.
    Derive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateEntry {
    pub display_name: String,
    pub identifier: IdentifierSource,
}

impl DelegateEntry {
    pub fn new(display_name: impl Into<String>, identifier: IdentifierSource) -> Self {
        Self {
            display_name: display_name.into(),
            identifier,
        }
    }
}

/// Ordered list of delegates. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<DelegateEntry>,
}

impl Roster {
    pub fn new(entries: Vec<DelegateEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DelegateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteResult {
    pub label: String,
    pub identifier: String,
    pub general_assembly: String,
    pub security_council: String,
    pub fetched_at: DateTime<Utc>,
}

impl VoteResult {
    pub fn summary(&self) -> String {
        format!(
            "GA: {}, SC: {}",
            self.general_assembly, self.security_council
        )
    }
}
