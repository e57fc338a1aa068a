//! Installing a single pinned release into the target environment

use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tracing::debug;

use crate::environment::command::PipCommand;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Failed to launch installer: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Installing {package}=={release} failed with {status}")]
    Failed {
        package: String,
        release: String,
        status: ExitStatus,
    },
}

/// Trait for materializing one exact release of a package
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Installer: Send + Sync {
    /// Install `package` pinned to `release` (the registry's spelling)
    async fn install(&self, package: &str, release: &str) -> Result<(), InstallError>;
}

/// Installer running `pip install <package>==<release>`
#[derive(Debug, Clone, Default)]
pub struct PipInstaller {
    command: PipCommand,
}

impl PipInstaller {
    pub fn new(command: PipCommand) -> Self {
        Self { command }
    }
}

#[async_trait]
impl Installer for PipInstaller {
    async fn install(&self, package: &str, release: &str) -> Result<(), InstallError> {
        let requirement = format!("{package}=={release}");
        debug!("Running {}", self.command.display("install", &[requirement.as_str()]));

        let status = self
            .command
            .command("install", &[requirement.as_str()])
            .stdin(Stdio::null())
            .status()
            .await?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::Failed {
                package: package.to_string(),
                release: release.to_string(),
                status,
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    /// `sh -c <script> sh install <requirement>` puts the requirement in `$2`
    fn shell_installer(script: &str) -> PipInstaller {
        PipInstaller::new(PipCommand::new("sh", ["-c", script, "sh"]))
    }

    #[tokio::test]
    async fn install_succeeds_on_zero_exit() {
        let installer = shell_installer(r#"[ "$1" = install ] && [ "$2" = "pytest==6.2.5" ]"#);

        let result = installer.install("pytest", "6.2.5").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn install_fails_on_non_zero_exit() {
        let installer = shell_installer("exit 1");

        let result = installer.install("pytest", "6.2.5").await;

        match result {
            Err(InstallError::Failed {
                package,
                release,
                status,
            }) => {
                assert_eq!(package, "pytest");
                assert_eq!(release, "6.2.5");
                assert_eq!(status.code(), Some(1));
            }
            other => panic!("expected install failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn install_reports_spawn_failure() {
        let installer = PipInstaller::new(PipCommand::new(
            "/nonexistent/version-fallback/python",
            ["-m", "pip"],
        ));

        let result = installer.install("pytest", "6.2.5").await;

        assert!(matches!(result, Err(InstallError::Spawn(_))));
    }
}
