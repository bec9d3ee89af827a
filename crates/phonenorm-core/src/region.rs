use std::fmt;

pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Region hint used to resolve numbers without a `+` prefix.
///
/// The text is kept exactly as supplied. Comparisons against the region the
/// phone library derives for a number are byte-for-byte, so `gb` and `GB` are
/// different regions here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, derived: &str) -> bool {
        self.0 == derived
    }
}

impl Default for RegionCode {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// IETF language tag for display output. Carried through settings but not
/// consulted when formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{LanguageTag, RegionCode};

    #[test]
    fn defaults_are_us_and_english() {
        assert_eq!(RegionCode::default().as_str(), "US");
        assert_eq!(LanguageTag::default().as_str(), "en");
    }

    #[test]
    fn region_keeps_raw_text() {
        let region = RegionCode::new("gb");
        assert_eq!(region.as_str(), "gb");
        assert_eq!(region.to_string(), "gb");
    }

    #[test]
    fn region_match_is_case_sensitive() {
        let region = RegionCode::new("gb");
        assert!(region.matches("gb"));
        assert!(!region.matches("GB"));
    }
}
