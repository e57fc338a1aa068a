use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use version_fallback::config::{Config, log_path};
use version_fallback::resolve::{ResolutionOutcome, Resolver};
use version_fallback::version::pep440::Version;

#[derive(Parser)]
#[command(name = "version-fallback")]
#[command(version, about = "Find an installable release between the installed and latest version")]
struct Cli {
    /// JSON config file (defaults to $XDG_CONFIG_HOME/version-fallback/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write JSON logs to the data directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Install the smallest release above the installed one that installs cleanly
    Resolve {
        package: String,
        /// Version that conflicts
        candidate: Version,
        /// Installed version; probed with `pip show` when omitted
        #[arg(long)]
        installed: Option<Version>,
    },
    /// List published releases, oldest first
    Releases { package: String },
    /// Print the newest published release
    Latest { package: String },
    /// Print the installed version
    Installed { package: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.then(log_path);
    let _guard = version_fallback::logging::init(log_file.as_deref())
        .context("Failed to initialize logging")?;

    let config = Config::load(cli.config.as_deref())?;
    let resolver = Resolver::from_config(&config)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, resolver))
}

async fn run(command: Command, resolver: Resolver) -> anyhow::Result<()> {
    let oracle = resolver.oracle();

    match command {
        Command::Resolve {
            package,
            candidate,
            installed,
        } => {
            let outcome = match installed {
                Some(installed) => resolver.resolve(&package, &installed, &candidate).await?,
                None => resolver.resolve_installed(&package, &candidate).await?,
            };
            match outcome {
                ResolutionOutcome::Resolved(version) => println!("{package}=={version}"),
                ResolutionOutcome::NoResolutionNeeded => println!("No resolution needed"),
            }
        }
        Command::Releases { package } => {
            let releases = oracle.list_releases(&package).await?;
            for release in releases.sorted() {
                println!("{}", release.raw);
            }
            if !releases.skipped().is_empty() {
                eprintln!("Skipped: {}", releases.skipped().join(", "));
            }
        }
        Command::Latest { package } => {
            println!("{}", oracle.latest_release(&package).await?);
        }
        Command::Installed { package } => {
            println!("{}", oracle.installed_version(&package).await?);
        }
    }

    Ok(())
}
