//! Process prefix shared by the pip installer and probe

use tokio::process::Command;

use crate::config::InstallerConfig;

/// The program and leading arguments used to reach pip
///
/// `python3 -m pip` by default; `uv pip` or a venv interpreter work as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipCommand {
    program: String,
    args: Vec<String>,
}

impl Default for PipCommand {
    fn default() -> Self {
        Self::from_config(&InstallerConfig::default())
    }
}

impl PipCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &InstallerConfig) -> Self {
        Self::new(config.program.clone(), config.args.iter().cloned())
    }

    /// Build a command running `subcommand` with the given trailing arguments
    pub fn command(&self, subcommand: &str, trailing: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(subcommand)
            .args(trailing)
            .kill_on_drop(true);
        command
    }

    /// Human readable form for logs
    pub fn display(&self, subcommand: &str, trailing: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain(std::iter::once(subcommand))
            .chain(trailing.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
