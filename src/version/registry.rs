//! Registry trait for fetching published releases of a package

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for fetching the release history of a package from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches every published version string for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "pytest")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Raw version strings in the order the registry reports them
    /// * `Err(RegistryError)` - If the registry cannot be reached or answers with malformed data
    async fn fetch_releases(&self, package_name: &str) -> Result<Vec<String>, RegistryError>;
}
