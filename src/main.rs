//! git-fame - who owns the code in a git repository
//!
//! # Usage
//! ```bash
//! git-fame                                      # Rank authors of HEAD by lines
//! git-fame --repository ~/src/app --order-by commits
//! git-fame --languages rust,go --exclude 'vendor/*' --format json
//! git-fame --use-committer --revision v1.2.0 --cpu-count 4
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use git_fame::fame::OrderBy;
use git_fame::render::{render, Format};
use git_fame::{Config, FameError};

/// git-fame - Per-author lines, commits and files of a git tree
#[derive(Parser)]
#[command(name = "git-fame")]
#[command(about = "Per-author ownership statistics for a git repository", long_about = None)]
struct Cli {
    /// Path to the git repository
    #[arg(long, default_value = ".")]
    repository: PathBuf,

    /// Revision to attribute
    #[arg(long, default_value = "HEAD")]
    revision: String,

    /// Sort key of the report
    #[arg(long, value_enum, default_value_t = OrderBy::Lines)]
    order_by: OrderBy,

    /// Credit committers instead of authors
    #[arg(long)]
    use_committer: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Tabular)]
    format: Format,

    /// File extensions to include, e.g. .go,.rs
    #[arg(long, value_delimiter = ',')]
    extensions: Vec<String>,

    /// Languages to include, e.g. go,rust
    #[arg(long, value_delimiter = ',')]
    languages: Vec<String>,

    /// Glob patterns of files to exclude
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Glob patterns of files to restrict to
    #[arg(long, value_delimiter = ',')]
    restrict_to: Vec<String>,

    /// Number of files attributed concurrently
    #[arg(long, default_value = "16")]
    cpu_count: usize,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            repository: cli.repository,
            revision: cli.revision,
            order_by: cli.order_by,
            use_committer: cli.use_committer,
            format: cli.format,
            extensions: cli.extensions,
            languages: cli.languages,
            exclude: cli.exclude,
            restrict_to: cli.restrict_to,
            concurrency: cli.cpu_count,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a clean report
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(cli);

    let records = match git_fame::report(&config).await {
        Ok(records) => records,
        Err(FameError::FilesFailed(failures)) => {
            for failure in &failures {
                eprintln!("✗ {}", failure);
            }
            eprintln!();
            eprintln!("✗ {} file(s) could not be attributed; no report produced", failures.len());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            eprintln!("  Repository: {}", config.repository.display());
            eprintln!("  Revision:   {}", config.revision);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    render(&records, config.format, &mut stdout.lock())?;

    Ok(())
}
