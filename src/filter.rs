//! Directory filter: free-text query plus exact specialty selection.

use crate::models::Profile;

/// Current filter inputs as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    /// Raw query text. Trimmed and lower-cased before matching.
    pub query: String,
    /// Selected specialty. Empty means every specialty.
    pub specialty: String,
}

impl DirectoryFilter {
    pub fn new(query: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            specialty: specialty.into(),
        }
    }

    fn needle(&self) -> String {
        self.query.trim().to_lowercase()
    }

    fn matches_query(needle: &str, profile: &Profile) -> bool {
        needle.is_empty()
            || profile.name_text().to_lowercase().contains(needle)
            || profile.specialty_text().to_lowercase().contains(needle)
    }

    fn matches_specialty(&self, profile: &Profile) -> bool {
        self.specialty.is_empty() || profile.specialty_text() == self.specialty
    }

    /// Whether a single profile passes both predicates.
    pub fn matches(&self, profile: &Profile) -> bool {
        Self::matches_query(&self.needle(), profile) && self.matches_specialty(profile)
    }

    /// Profiles passing the filter, in their stored order.
    pub fn apply<'a>(&self, profiles: &'a [Profile]) -> Vec<&'a Profile> {
        let needle = self.needle();
        profiles
            .iter()
            .filter(|p| Self::matches_query(&needle, p) && self.matches_specialty(p))
            .collect()
    }
}
