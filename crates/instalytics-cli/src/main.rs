use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod report;
mod sample;

#[derive(Debug, Parser)]
#[command(name = "instalytics")]
#[command(about = "Instagram content analytics command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute aggregate metrics and print them as JSON.
    Metrics {
        /// Directory of scraped metadata JSON files. Falls back to
        /// INSTALYTICS_METADATA_DIR.
        #[arg(long)]
        metadata_dir: Option<PathBuf>,
    },
    /// Render natural-language insight lines.
    Insights {
        #[arg(long)]
        metadata_dir: Option<PathBuf>,
        /// Single category to print, e.g. "engagement" or "hashtag".
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the condensed analysis summary.
    Summary {
        #[arg(long)]
        metadata_dir: Option<PathBuf>,
    },
    /// Write a deterministic sample collection for local runs.
    Sample {
        /// Directory to write sample_content.json into.
        #[arg(long)]
        output_dir: PathBuf,
        #[arg(long, default_value_t = 25)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Metrics { metadata_dir } => report::run_metrics(metadata_dir),
        Commands::Insights {
            metadata_dir,
            category,
        } => report::run_insights(metadata_dir, category.as_deref()),
        Commands::Summary { metadata_dir } => report::run_summary(metadata_dir),
        Commands::Sample {
            output_dir,
            count,
            seed,
        } => {
            let path = sample::write_sample_collection(&output_dir, count, seed)?;
            println!("wrote {count} sample items to {}", path.display());
            Ok(())
        }
    }
}
