use thiserror::Error;

use crate::version::error::{OracleError, RegistryError, VersionError};
use crate::version::pep440::Version;

/// Which half of the `installed < candidate <= latest` ordering failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingViolation {
    #[error("installed version {installed} is not below latest release {latest}")]
    InstalledNotBelowLatest { installed: Version, latest: Version },

    #[error("candidate version {candidate} is above latest release {latest}")]
    CandidateAboveLatest { candidate: Version, latest: Version },

    #[error("candidate version {candidate} is not above installed version {installed}")]
    CandidateNotAboveInstalled {
        candidate: Version,
        installed: Version,
    },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid package name: {0:?}")]
    InvalidPackageName(String),

    #[error(transparent)]
    InvalidVersion(#[from] VersionError),

    #[error("Version {version} of {package} is not published")]
    VersionNotPublished { package: String, version: Version },

    #[error("Invalid version ordering: {0}")]
    InvalidVersionOrdering(#[from] OrderingViolation),

    #[error("Registry unavailable: {0}")]
    RegistryUnavailable(#[from] RegistryError),

    #[error("No releases found for package {0}")]
    NoReleasesFound(String),

    #[error("Package {0} is not installed")]
    PackageNotInstalled(String),

    #[error("Installed version probe failed for {package}: {reason}")]
    ProbeFailed { package: String, reason: String },

    #[error("No installable release of {package} after {attempts} attempts")]
    NoViableVersion { package: String, attempts: usize },
}

impl From<OracleError> for ResolveError {
    fn from(e: OracleError) -> Self {
        match e {
            OracleError::RegistryUnavailable(e) => Self::RegistryUnavailable(e),
            OracleError::NoReleasesFound(package) => Self::NoReleasesFound(package),
            OracleError::PackageNotInstalled(package) => Self::PackageNotInstalled(package),
            OracleError::ProbeFailed { package, reason } => Self::ProbeFailed { package, reason },
        }
    }
}
