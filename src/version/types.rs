//! Release set fetched from a registry for one package

use tracing::warn;

use crate::version::pep440::Version;

/// A single published release: the registry's spelling and its parsed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Version string exactly as the registry reported it
    pub raw: String,
    pub version: Version,
}

/// All releases a registry reports as published for a package
///
/// Built fresh for every resolution and never mutated afterwards.
/// Entries that fail to parse are kept aside in [`ReleaseSet::skipped`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSet {
    releases: Vec<Release>,
    skipped: Vec<String>,
}

impl ReleaseSet {
    /// Parse raw registry entries, skipping (and logging) unparsable ones
    pub fn from_raw<I, S>(package_name: &str, raw_versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut releases = Vec::new();
        let mut skipped = Vec::new();

        for raw in raw_versions {
            let raw = raw.into();
            match raw.parse::<Version>() {
                Ok(version) => releases.push(Release { raw, version }),
                Err(e) => {
                    warn!(package = package_name, "Skipping release entry: {}", e);
                    skipped.push(raw);
                }
            }
        }

        Self { releases, skipped }
    }

    /// Drop pre-release and development releases
    pub fn without_prereleases(mut self) -> Self {
        self.releases.retain(|r| !r.version.is_prerelease());
        self
    }

    /// The maximum release under version ordering
    pub fn latest(&self) -> Option<&Release> {
        self.releases.iter().max_by(|a, b| a.version.cmp(&b.version))
    }

    /// Whether a release equal to the base version of `version` was published
    pub fn contains_base(&self, version: &Version) -> bool {
        let base = version.base_version();
        self.releases.iter().any(|r| r.version == base)
    }

    /// Releases in the order the registry reported them
    pub fn iter(&self) -> impl Iterator<Item = &Release> {
        self.releases.iter()
    }

    /// Releases sorted oldest first
    pub fn sorted(&self) -> Vec<&Release> {
        let mut sorted: Vec<&Release> = self.releases.iter().collect();
        sorted.sort_by(|a, b| a.version.cmp(&b.version));
        sorted
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Raw entries that could not be parsed as versions
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}
