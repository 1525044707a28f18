mod config;
mod display;
mod populate;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gitseed_core::render::find_placeholders;
use gitseed_core::{RepoPlan, categorize};
use gitseed_sync::{ApiConfig, ContentClient};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{ConfigError, FileConfig, require};
use populate::{Pacing, RunOptions};

#[derive(Parser)]
#[command(
    name = "gitseed",
    version,
    about = "Fill repositories with synthetic files and commit history"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write generated files into each repository through the content API.
    Populate {
        /// Repository names (defaults to `repos` from the config file).
        repos: Vec<String>,

        /// Organisation that owns the repositories.
        #[arg(long)]
        org: Option<String>,

        /// API token.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Content API base URL.
        #[arg(long, env = "GITSEED_API_URL")]
        api_url: Option<String>,

        /// TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,

        /// Seed the random generator for a reproducible run.
        #[arg(long)]
        seed: Option<u64>,

        /// Do not sleep between requests.
        #[arg(long)]
        no_delay: bool,
    },

    /// Print what would be written, without touching the network.
    Plan {
        repos: Vec<String>,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the category each name falls into.
    Classify {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Populate {
            repos,
            org,
            token,
            api_url,
            config,
            yes,
            seed,
            no_delay,
        } => {
            let file = FileConfig::load_optional(config.as_deref())?;
            let org = require(org, file.org.as_ref(), "org")?;
            let token = require(token, None, "token")?;
            let repos = file.repos_or(&repos);
            if repos.is_empty() {
                return Err(ConfigError::Missing("repositories").into());
            }
            let pacing = if no_delay { Pacing::none() } else { file.pacing()? };

            println!("{}", display::banner(&org, repos.len()));
            if !yes && !confirm()? {
                println!("Cancelled.");
                return Ok(());
            }

            let mut api = ApiConfig::new(token);
            if let Some(url) = api_url.or(file.api_url) {
                api = api.with_base_url(url);
            }
            let client = ContentClient::new(api).context("failed to build HTTP client")?;

            let login = client
                .authenticated_login()
                .await
                .context("token verification failed")?;
            info!(login = %login, "authenticated");
            match client.org_accessible(&org).await {
                Ok(true) => info!(org = %org, "organisation found"),
                Ok(false) => warn!(org = %org, "organisation not accessible with this token"),
                Err(e) => warn!(org = %org, error = %e, "organisation check failed"),
            }

            let options = RunOptions {
                pacing,
                ..RunOptions::default()
            };
            let mut rng = rng_for(seed);
            let interrupt = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!(error = %e, "cannot listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            };
            let summary =
                populate::run(&client, &org, &repos, &options, &mut rng, interrupt).await;
            println!("{}", display::summary(&summary));
        }

        Command::Plan {
            repos,
            config,
            seed,
        } => {
            let file = FileConfig::load_optional(config.as_deref())?;
            let repos = file.repos_or(&repos);
            if repos.is_empty() {
                return Err(ConfigError::Missing("repositories").into());
            }
            let mut rng = rng_for(seed);
            for repo in &repos {
                let plan = RepoPlan::generate(repo, &mut rng);
                for f in plan.files() {
                    let leftover = f.content.as_text().map(find_placeholders).unwrap_or_default();
                    if !leftover.is_empty() {
                        warn!(repo = %repo, path = %f.path, ?leftover, "unresolved placeholders");
                    }
                }
                println!("{}", display::plan(&plan));
            }
        }

        Command::Classify { names } => {
            for name in &names {
                println!("{name} -> {}", categorize(name));
            }
        }
    }

    Ok(())
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Ask before any network activity. Defaults to no.
fn confirm() -> anyhow::Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(false)
        .interact()
        .context("confirmation prompt failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn populate_flags_parse() {
        let cli = Cli::try_parse_from([
            "gitseed", "populate", "Django", "Rust", "--org", "acme", "--token", "t", "--yes",
            "--seed", "42", "--no-delay",
        ])
        .unwrap();
        match cli.command {
            Command::Populate {
                repos,
                org,
                yes,
                seed,
                no_delay,
                ..
            } => {
                assert_eq!(repos, vec!["Django", "Rust"]);
                assert_eq!(org.as_deref(), Some("acme"));
                assert!(yes && no_delay);
                assert_eq!(seed, Some(42));
            }
            _ => panic!("expected populate"),
        }
    }

    #[test]
    fn classify_requires_a_name() {
        assert!(Cli::try_parse_from(["gitseed", "classify"]).is_err());
    }
}
