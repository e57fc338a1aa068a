use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid version '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Package not installed: {0}")]
    NotInstalled(String),

    #[error("Failed to run probe command: {0}")]
    Command(#[from] std::io::Error),

    #[error("Unexpected probe output: {0}")]
    InvalidOutput(#[from] VersionError),
}

/// Failures surfaced by [`crate::version::oracle::VersionOracle`]
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Registry unavailable: {0}")]
    RegistryUnavailable(#[from] RegistryError),

    #[error("No releases found for package {0}")]
    NoReleasesFound(String),

    #[error("Package {0} is not installed")]
    PackageNotInstalled(String),

    #[error("Installed version probe failed for {package}: {reason}")]
    ProbeFailed { package: String, reason: String },
}
