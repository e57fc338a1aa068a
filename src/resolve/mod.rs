//! Conflict resolution by stepping up through published releases
//!
//! Given an installed version and a candidate that conflicts, [`Resolver`]
//! walks the releases between the installed version and the newest release,
//! oldest first, and keeps the first one that installs cleanly.
//!
//! # Modules
//!
//! - [`blocklist`]: releases that are never attempted
//! - [`window`]: selection of the releases to attempt
//! - [`error`]: resolution failures

pub mod blocklist;
pub mod error;
pub mod window;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::environment::command::PipCommand;
use crate::environment::installer::{Installer, PipInstaller};
use crate::environment::probe::PipShowProbe;
use crate::resolve::blocklist::Blocklist;
use crate::resolve::error::{OrderingViolation, ResolveError};
use crate::resolve::window::candidate_window;
use crate::version::oracle::{VersionOracle, latest_of};
use crate::version::pep440::Version;
use crate::version::registries::PypiRegistry;

/// Minimum package name length (exclusive)
const MIN_PACKAGE_NAME_LEN: usize = 2;

/// Successful result of a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// This release was installed and replaces the previous installed version
    Resolved(Version),
    /// Installed and candidate are the same release; nothing was installed
    NoResolutionNeeded,
}

/// Drives validation, window selection and the install loop
pub struct Resolver {
    oracle: VersionOracle,
    installer: Arc<dyn Installer>,
    blocklist: Blocklist,
}

impl Resolver {
    pub fn new(oracle: VersionOracle, installer: Arc<dyn Installer>) -> Self {
        Self {
            oracle,
            installer,
            blocklist: Blocklist::default(),
        }
    }

    pub fn with_blocklist(mut self, blocklist: Blocklist) -> Self {
        self.blocklist = blocklist;
        self
    }

    /// Build a resolver against PyPI and pip as described by `config`
    pub fn from_config(config: &Config) -> Result<Self, crate::config::ConfigError> {
        let command = PipCommand::from_config(&config.installer);
        let oracle = VersionOracle::new(
            Arc::new(PypiRegistry::from_config(&config.registry)),
            Arc::new(PipShowProbe::new(command.clone())),
        )
        .skip_prereleases(config.resolver.skip_prereleases);
        let blocklist = Blocklist::parse(&config.resolver.blocklist)?;

        Ok(Self::new(oracle, Arc::new(PipInstaller::new(command))).with_blocklist(blocklist))
    }

    pub fn oracle(&self) -> &VersionOracle {
        &self.oracle
    }

    /// Find and install the smallest release above `installed` that installs cleanly
    ///
    /// Install attempts run one at a time, oldest release first, and stop at the
    /// first success. Precondition failures return before anything is installed.
    pub async fn resolve(
        &self,
        package_name: &str,
        installed: &Version,
        candidate: &Version,
    ) -> Result<ResolutionOutcome, ResolveError> {
        let package_name = validate_package_name(package_name)?;
        info!(
            package = package_name,
            %installed,
            %candidate,
            "Resolving version conflict"
        );

        let releases = self.oracle.list_releases(package_name).await?;
        let latest = latest_of(package_name, &releases)?;

        for version in [installed, candidate] {
            if !releases.contains_base(version) {
                return Err(ResolveError::VersionNotPublished {
                    package: package_name.to_string(),
                    version: version.base_version(),
                });
            }
        }

        if candidate.same_release(installed) {
            info!(package = package_name, "No resolution needed");
            return Ok(ResolutionOutcome::NoResolutionNeeded);
        }

        check_ordering(installed, candidate, &latest)?;

        let window = candidate_window(&releases, installed, &latest);
        debug!(
            package = package_name,
            %latest,
            candidates = window.len(),
            "Computed candidate window"
        );

        let mut attempts = 0;
        for release in window {
            if self.blocklist.contains(&release.version) {
                debug!(package = package_name, release = %release.raw, "Skipping blocklisted release");
                continue;
            }

            attempts += 1;
            info!(package = package_name, release = %release.raw, "Attempting install");
            match self.installer.install(package_name, &release.raw).await {
                Ok(()) => {
                    info!(package = package_name, release = %release.raw, "Resolved");
                    return Ok(ResolutionOutcome::Resolved(release.version.clone()));
                }
                Err(e) => {
                    warn!(package = package_name, release = %release.raw, "Install failed: {}", e);
                }
            }
        }

        Err(ResolveError::NoViableVersion {
            package: package_name.to_string(),
            attempts,
        })
    }

    /// Probe the installed version, then [`Resolver::resolve`] towards `candidate`
    pub async fn resolve_installed(
        &self,
        package_name: &str,
        candidate: &Version,
    ) -> Result<ResolutionOutcome, ResolveError> {
        let package_name = validate_package_name(package_name)?;
        let installed = self.oracle.installed_version(package_name).await?;
        self.resolve(package_name, &installed, candidate).await
    }
}

fn validate_package_name(package_name: &str) -> Result<&str, ResolveError> {
    let trimmed = package_name.trim();
    if trimmed.chars().count() <= MIN_PACKAGE_NAME_LEN {
        return Err(ResolveError::InvalidPackageName(package_name.to_string()));
    }
    Ok(trimmed)
}

fn check_ordering(
    installed: &Version,
    candidate: &Version,
    latest: &Version,
) -> Result<(), OrderingViolation> {
    if installed >= latest {
        return Err(OrderingViolation::InstalledNotBelowLatest {
            installed: installed.clone(),
            latest: latest.clone(),
        });
    }
    if candidate > latest {
        return Err(OrderingViolation::CandidateAboveLatest {
            candidate: candidate.clone(),
            latest: latest.clone(),
        });
    }
    if candidate <= installed {
        return Err(OrderingViolation::CandidateNotAboveInstalled {
            candidate: candidate.clone(),
            installed: installed.clone(),
        });
    }
    Ok(())
}
