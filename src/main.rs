use anyhow::Result;
use clap::Parser;

use version_gate::config::{self, Overrides};
use version_gate::engine::DecisionEngine;
use version_gate::github::GitHubClient;
use version_gate::output;

#[derive(clap::Parser)]
#[command(
    name = "version-gate",
    about = "Check whether a release version may be published against a repository's tag and release history"
)]
struct Args {
    #[arg(help = "Version to validate (falls back to the INPUT_VERSION variable)")]
    version: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Repository to check, in owner/repo form")]
    repository: Option<String>,

    #[arg(long, help = "Reject versions colliding with existing tags")]
    check_tags: bool,

    #[arg(long, help = "Reject versions colliding with existing releases")]
    check_releases: bool,

    #[arg(long, help = "Literal prefix every conforming name carries")]
    prefix: Option<String>,

    #[arg(long, help = "Literal suffix every conforming name carries")]
    suffix: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Load file-level defaults
    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            output::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let overrides = Overrides {
        version: args.version,
        repository: args.repository,
        prefix: args.prefix,
        suffix: args.suffix,
        check_tags: args.check_tags,
        check_releases: args.check_releases,
    };

    // Resolve and validate the effective inputs
    let inputs = match config::resolve_inputs(&overrides, &file_config) {
        Ok(inputs) => inputs,
        Err(e) => {
            output::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Run the gates; fetch errors abort with no verdict
    let host = GitHubClient::new(inputs.token.clone());
    let verdict = match DecisionEngine::new(&inputs, &host).evaluate() {
        Ok(verdict) => verdict,
        Err(e) => {
            output::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    output::publish_verdict(&verdict)?;
    if verdict.valid {
        output::display_success(&verdict.message);
    } else {
        // A rejected version is a normal, successful run
        output::display_rejection(&verdict.message);
    }

    Ok(())
}
