//! Shell-backed stand-in for pip

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use version_fallback::config::{Config, InstallerConfig, RegistryConfig};

/// A fake pip that answers `show` with a fixed version and records every `install`
pub struct FakePip {
    dir: TempDir,
    installed: String,
    accept: Vec<String>,
}

impl FakePip {
    /// `installed` is reported by `pip show`; only `accept` requirements install cleanly
    pub fn new(installed: &str, accept: &[&str]) -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            installed: installed.to_string(),
            accept: accept.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("installs.log")
    }

    /// Requirements passed to `pip install`, in call order
    pub fn installs(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(|l| l.to_string()).collect())
            .unwrap_or_default()
    }

    pub fn installer_config(&self) -> InstallerConfig {
        let accepted = if self.accept.is_empty() {
            "__nothing__".to_string()
        } else {
            self.accept.join("|")
        };
        let script = format!(
            r#"case "$1" in
  show) printf 'Name: %s\nVersion: {installed}\n' "$2" ;;
  install)
    echo "$2" >> '{log}'
    case "$2" in
      {accepted}) exit 0 ;;
      *) exit 1 ;;
    esac ;;
  *) exit 2 ;;
esac"#,
            installed = self.installed,
            log = display(&self.log_path()),
        );

        InstallerConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script, "sh".to_string()],
        }
    }

    /// Full config pointing at `registry_url` and this fake pip
    pub fn config(&self, registry_url: String) -> Config {
        Config {
            registry: RegistryConfig {
                base_url: registry_url,
                timeout_ms: 5_000,
            },
            installer: self.installer_config(),
            ..Config::default()
        }
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
