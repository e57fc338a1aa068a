//! Read-only view of the registry and the installed environment

use std::sync::Arc;

use tracing::{debug, warn};

use crate::environment::probe::InstalledVersionProbe;
use crate::version::error::{OracleError, ProbeError};
use crate::version::pep440::Version;
use crate::version::registry::Registry;
use crate::version::types::ReleaseSet;

/// Groups the registry and installed-version probe behind the queries the resolver needs
///
/// Nothing is cached: every call goes back to the registry or the environment.
pub struct VersionOracle {
    registry: Arc<dyn Registry>,
    probe: Arc<dyn InstalledVersionProbe>,
    skip_prereleases: bool,
}

impl VersionOracle {
    pub fn new(registry: Arc<dyn Registry>, probe: Arc<dyn InstalledVersionProbe>) -> Self {
        Self {
            registry,
            probe,
            skip_prereleases: false,
        }
    }

    /// Leave pre-release and dev releases out of every release set
    pub fn skip_prereleases(mut self, skip: bool) -> Self {
        self.skip_prereleases = skip;
        self
    }

    /// Fetch every published release of the package
    pub async fn list_releases(&self, package_name: &str) -> Result<ReleaseSet, OracleError> {
        let raw = self.registry.fetch_releases(package_name).await?;
        let releases = ReleaseSet::from_raw(package_name, raw);

        if !releases.skipped().is_empty() {
            warn!(
                package = package_name,
                skipped = releases.skipped().len(),
                "Ignored unparsable release entries"
            );
        }

        let releases = if self.skip_prereleases {
            releases.without_prereleases()
        } else {
            releases
        };

        debug!(
            package = package_name,
            count = releases.len(),
            "Listed releases"
        );
        Ok(releases)
    }

    /// The newest published release by version ordering
    pub async fn latest_release(&self, package_name: &str) -> Result<Version, OracleError> {
        let releases = self.list_releases(package_name).await?;
        latest_of(package_name, &releases)
    }

    /// The version installed in the target environment
    pub async fn installed_version(&self, package_name: &str) -> Result<Version, OracleError> {
        self.probe
            .installed_version(package_name)
            .await
            .map_err(|e| match e {
                ProbeError::NotInstalled(name) => OracleError::PackageNotInstalled(name),
                other => OracleError::ProbeFailed {
                    package: package_name.to_string(),
                    reason: other.to_string(),
                },
            })
    }
}

/// Latest release of an already fetched set
pub fn latest_of(package_name: &str, releases: &ReleaseSet) -> Result<Version, OracleError> {
    releases
        .latest()
        .map(|r| r.version.clone())
        .ok_or_else(|| OracleError::NoReleasesFound(package_name.to_string()))
}
