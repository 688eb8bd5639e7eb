use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use reposnap::cli::Commands;
use reposnap::{
    load_repo_config, CompareSnapshotsUseCase, ConsoleReporter, FsSnapshotStore, GitCloneService,
    ListSnapshotsUseCase, TakeSnapshotUseCase,
};

#[derive(Parser)]
#[command(name = "reposnap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log level to DEBUG and print line diffs for changed files
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.reposnap/snapshots")]
    snapshots_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let snapshots_dir = expand_tilde(&cli.snapshots_dir);
    let store = Arc::new(FsSnapshotStore::new(&snapshots_dir));

    match cli.command {
        Commands::Snapshot { config } => {
            let repos = load_repo_config(Path::new(&config))?;
            let use_case =
                TakeSnapshotUseCase::new(store.clone(), Arc::new(GitCloneService::new()));

            let (snapshot, outcomes) = use_case.execute(&repos).await?;
            for outcome in &outcomes {
                if outcome.succeeded() {
                    println!("Cloned {} successfully", outcome.name());
                } else {
                    println!(
                        "Failed to clone {}: {}",
                        outcome.name(),
                        outcome.error().unwrap_or("unknown error")
                    );
                }
            }
            println!(
                "Snapshot {} created at {}",
                snapshot.name(),
                snapshot.path().display()
            );
        }

        Commands::Compare {
            snapshot_a,
            snapshot_b,
            repo,
            json,
        } => {
            let use_case = CompareSnapshotsUseCase::new(store.clone())
                .with_reporter(Arc::new(ConsoleReporter::new()));

            let report = use_case
                .execute(&snapshot_a, &snapshot_b, cli.verbose, repo.as_deref())
                .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Commands::List => {
            let use_case = ListSnapshotsUseCase::new(store.clone());
            let snapshots = use_case.execute().await?;

            if snapshots.is_empty() {
                println!("No snapshots found.");
            } else {
                for snapshot in snapshots {
                    println!("  {}", snapshot.name());
                }
            }
        }
    }

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
