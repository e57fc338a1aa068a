//! PEP 440 version value used throughout resolution

use std::fmt;
use std::str::FromStr;

use pep508_rs::pep440_rs;

use crate::version::error::VersionError;

/// An immutable, totally ordered package version.
///
/// Ordering follows PEP 440, so `1.0.0rc1 < 1.0.0 < 1.0.0.post1 < 1.0.1`
/// and `1.10.0 > 1.9.0` (never lexicographic).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(pep440_rs::Version);

impl Version {
    /// Build a plain release version from its numeric components
    pub fn from_release(components: &[u64]) -> Self {
        Self(pep440_rs::Version::new(components.iter().copied()))
    }

    /// The numeric `major.minor.micro` part, without any pre/post/dev/local qualifier
    pub fn base_version(&self) -> Version {
        Self::from_release(self.0.release())
    }

    pub fn major(&self) -> u64 {
        self.component(0)
    }

    pub fn minor(&self) -> u64 {
        self.component(1)
    }

    pub fn micro(&self) -> u64 {
        self.component(2)
    }

    /// Whether this is a pre-release or development release
    pub fn is_prerelease(&self) -> bool {
        self.0.is_pre() || self.0.is_dev()
    }

    /// Whether both versions share the same base version
    pub fn same_release(&self, other: &Version) -> bool {
        self.base_version() == other.base_version()
    }

    fn component(&self, index: usize) -> u64 {
        self.0.release().get(index).copied().unwrap_or(0)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pep440_rs::Version::from_str(s.trim())
            .map(Self)
            .map_err(|e| VersionError::Invalid {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("1.0.0")]
    #[case("6.2.1")]
    #[case("10.20.30")]
    #[case("0.0.1")]
    #[case("7.0.0rc1")]
    #[case("2.0.0.post3")]
    fn display_round_trips_through_parse(#[case] input: &str) {
        let parsed = v(input);
        assert_eq!(v(&parsed.to_string()), parsed);
    }

    #[rstest]
    #[case("1.0.0", "1.0.1")]
    #[case("1.9.0", "1.10.0")]
    #[case("1.0.0rc1", "1.0.0")]
    #[case("1.0.0", "1.0.0.post1")]
    #[case("6.2.5", "7.0.0")]
    fn orders_versions_numerically(#[case] lower: &str, #[case] higher: &str) {
        assert!(v(lower) < v(higher));
        assert!(v(higher) > v(lower));
    }

    #[rstest]
    #[case("")]
    #[case("not-a-version")]
    #[case("1.2.3.abc")]
    #[case("1..0")]
    fn malformed_input_fails_with_invalid_error(#[case] input: &str) {
        let result = input.parse::<Version>();
        assert!(matches!(result, Err(VersionError::Invalid { .. })));
    }

    #[test]
    fn base_version_drops_qualifiers() {
        assert_eq!(v("7.0.0rc1").base_version(), v("7.0.0"));
        assert_eq!(v("2.1.3.post2").base_version(), v("2.1.3"));
        assert_eq!(v("1.4.0.dev5").base_version(), v("1.4.0"));
    }

    #[test]
    fn components_default_to_zero_when_missing() {
        let version = v("3.1");
        assert_eq!(
            (version.major(), version.minor(), version.micro()),
            (3, 1, 0)
        );
    }

    #[test]
    fn same_release_ignores_qualifiers() {
        assert!(v("7.0.0rc1").same_release(&v("7.0.0")));
        assert!(!v("7.0.1").same_release(&v("7.0.0")));
    }

    #[test]
    fn is_prerelease_detects_pre_and_dev() {
        assert!(v("5.0a1").is_prerelease());
        assert!(v("5.0.dev1").is_prerelease());
        assert!(!v("5.0.post1").is_prerelease());
    }
}
