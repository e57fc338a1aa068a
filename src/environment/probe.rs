//! Installed-version probing

use std::process::Stdio;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use regex::Regex;
use tracing::debug;

use crate::environment::command::PipCommand;
use crate::version::error::ProbeError;
use crate::version::pep440::Version;

/// Trait for reporting the version currently installed in the target environment
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InstalledVersionProbe: Send + Sync {
    async fn installed_version(&self, package: &str) -> Result<Version, ProbeError>;
}

/// Probe reading the `Version:` field of `pip show <package>`
#[derive(Debug, Clone)]
pub struct PipShowProbe {
    command: PipCommand,
    version_re: Regex,
}

impl Default for PipShowProbe {
    fn default() -> Self {
        Self::new(PipCommand::default())
    }
}

impl PipShowProbe {
    pub fn new(command: PipCommand) -> Self {
        Self {
            command,
            // `Version: 6.2.1` line, tolerating CRLF output
            version_re: Regex::new(r"(?m)^Version:[ \t]*(\S+)[ \t]*\r?$").unwrap(),
        }
    }

    /// Extract the installed version string from `pip show` output
    pub fn parse_version_field<'a>(&self, output: &'a str) -> Option<&'a str> {
        self.version_re
            .captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[async_trait]
impl InstalledVersionProbe for PipShowProbe {
    async fn installed_version(&self, package: &str) -> Result<Version, ProbeError> {
        debug!("Running {}", self.command.display("show", &[package]));

        let output = self
            .command
            .command("show", &[package])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await?;

        // pip exits non-zero when the package is absent
        if !output.status.success() {
            return Err(ProbeError::NotInstalled(package.to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let Some(raw) = self.parse_version_field(&stdout) else {
            return Err(ProbeError::NotInstalled(package.to_string()));
        };

        Ok(raw.parse::<Version>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PIP_SHOW_PYTEST: &str = "Name: pytest\n\
        Version: 6.2.1\n\
        Summary: pytest: simple powerful testing with Python\n\
        Home-page: https://docs.pytest.org/en/latest/\n\
        Requires: attrs, iniconfig, packaging, pluggy, py, toml\n";

    #[rstest]
    #[case(PIP_SHOW_PYTEST, Some("6.2.1"))]
    #[case("Name: requests\r\nVersion: 2.31.0\r\nSummary: HTTP\r\n", Some("2.31.0"))]
    #[case("Name: black\nVersion:   24.1.0  \n", Some("24.1.0"))]
    #[case("WARNING: Package(s) not found: nothing\n", None)]
    #[case("Name: odd\nMetadata-Version: 2.1\n", None)]
    #[case("", None)]
    fn parse_version_field_extracts_version(
        #[case] output: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            PipShowProbe::default().parse_version_field(output),
            expected
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn installed_version_parses_command_output() {
        let probe = PipShowProbe::new(PipCommand::new(
            "sh",
            ["-c", r#"printf 'Name: %s\nVersion: 6.2.1\n' "$2""#, "sh"],
        ));

        let version = probe.installed_version("pytest").await.unwrap();

        assert_eq!(version, "6.2.1".parse::<Version>().unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn installed_version_reports_missing_package_on_failure_exit() {
        let probe = PipShowProbe::new(PipCommand::new(
            "sh",
            ["-c", "echo 'WARNING: Package(s) not found' >&2; exit 1", "sh"],
        ));

        let result = probe.installed_version("nothing").await;

        assert!(matches!(result, Err(ProbeError::NotInstalled(name)) if name == "nothing"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn installed_version_rejects_unparsable_version() {
        let probe = PipShowProbe::new(PipCommand::new(
            "sh",
            ["-c", "printf 'Name: weird\\nVersion: not.a.version!\\n'", "sh"],
        ));

        let result = probe.installed_version("weird").await;

        assert!(matches!(result, Err(ProbeError::InvalidOutput(_))));
    }
}
