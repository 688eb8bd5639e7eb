use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Capture a new snapshot by cloning every configured repository
    Snapshot {
        /// JSON file mapping repository names to clone URLs
        #[arg(short, long, default_value = "repos.json")]
        config: String,
    },

    /// Compare two snapshots and report deleted, changed, and added files
    Compare {
        snapshot_a: String,

        snapshot_b: String,

        /// Restrict the comparison to a single repository
        #[arg(short, long)]
        repo: Option<String>,

        /// Print the report as JSON to stdout
        #[arg(long)]
        json: bool,
    },

    /// List snapshots in id order
    List,
}
