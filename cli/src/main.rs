//! CLI for the Merged Pull Request Resolver.
//!
//! This tool finds the pull request whose merge produced the current commit
//! and publishes its metadata as GitHub Actions step outputs.

use clap::Parser;
use merged_pr_resolver::{
    report_failure, PullRequestRecord, Repository, Runner, RunnerConfig, RunnerError,
    StepOutputs, DEFAULT_API_URL,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Merged Pull Request Resolver - Publish the pull request behind a merge commit.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub token used to list pull requests.
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Repository in "owner/name" format.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Repository,

    /// Merge commit SHA to resolve.
    #[arg(long, env = "GITHUB_SHA")]
    sha: String,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Maximum number of pages of closed pull requests to inspect.
    #[arg(long, env = "INPUT_MAX_PAGES", default_value_t = 1)]
    max_pages: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Explicitly install aws-lc-rs as the default crypto provider for rustls
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(Some(pull)) => {
            print_summary(&pull);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!("No merged pull request found, no outputs set");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Resolution failed");
            println!("{}", report_failure(&e));
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, leaving stdout
///   to workflow commands
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<Option<PullRequestRecord>, RunnerError> {
    let config = RunnerConfig::new(args.token, args.repository, args.sha)
        .with_api_url(args.api_url)
        .with_max_pages(args.max_pages);
    let runner = Runner::new(config)?;
    runner.run(&StepOutputs::from_env()).await
}

/// Prints the resolved pull request.
fn print_summary(pull: &PullRequestRecord) {
    eprintln!("\nSummary:");
    eprintln!("  Pull request: #{} {}", pull.number, pull.title);
    eprintln!("  Branches: {} -> {}", pull.head_branch, pull.base_branch);
    if let Some(labels) = &pull.labels {
        eprintln!("  Labels: {}", labels.join(", "));
    }
    if let Some(assignees) = &pull.assignees {
        eprintln!("  Assignees: {}", assignees.join(", "));
    }
}
