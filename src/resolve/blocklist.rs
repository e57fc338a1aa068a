//! Releases the resolver refuses to install

use crate::config::DEFAULT_BLOCKLIST;
use crate::version::error::VersionError;
use crate::version::pep440::Version;

/// Known-broken releases, consulted before every install attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocklist {
    versions: Vec<Version>,
}

impl Default for Blocklist {
    fn default() -> Self {
        Self::parse(DEFAULT_BLOCKLIST.iter().copied()).unwrap_or_else(|_| Self::empty())
    }
}

impl Blocklist {
    pub fn new(versions: Vec<Version>) -> Self {
        Self { versions }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse blocklist entries, rejecting any that are not versions
    pub fn parse<I, S>(entries: I) -> Result<Self, VersionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let versions = entries
            .into_iter()
            .map(|entry| entry.as_ref().parse())
            .collect::<Result<Vec<Version>, _>>()?;
        Ok(Self::new(versions))
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.versions.iter().any(|blocked| blocked == version)
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("6.2.2", true)]
    #[case("6.2.4", true)]
    #[case("6.2.2.0", true)] // equal under version ordering
    #[case("6.2.3", false)]
    #[case("6.2.2.post1", false)]
    fn default_blocks_known_broken_releases(#[case] version: &str, #[case] expected: bool) {
        let blocklist = Blocklist::default();
        assert_eq!(blocklist.contains(&version.parse().unwrap()), expected);
    }

    #[test]
    fn parse_rejects_malformed_entry() {
        let result = Blocklist::parse(["1.0.0", "oops"]);
        assert!(matches!(result, Err(VersionError::Invalid { input, .. }) if input == "oops"));
    }

    #[test]
    fn empty_blocks_nothing() {
        let blocklist = Blocklist::empty();
        assert!(blocklist.is_empty());
        assert!(!blocklist.contains(&"6.2.2".parse().unwrap()));
    }
}
