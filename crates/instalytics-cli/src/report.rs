//! Report command handlers for the CLI.
//!
//! These resolve the metadata directory, run the metrics engine over the
//! loaded collection, and print either raw JSON reports or rendered
//! insight lines.

use std::path::PathBuf;

use instalytics_core::config;
use instalytics_insights::render_all;
use instalytics_metrics::MetricsEngine;

/// Resolve the metadata directory from the flag or the environment.
///
/// # Errors
///
/// Returns an error when the flag is absent and
/// `INSTALYTICS_METADATA_DIR` is not set.
fn resolve_metadata_dir(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => Ok(config::load_app_config()?.metadata_dir),
    }
}

fn build_engine(metadata_dir: Option<PathBuf>) -> anyhow::Result<MetricsEngine> {
    let dir = resolve_metadata_dir(metadata_dir)?;
    let items = instalytics_core::load_content_dir(&dir)?;
    tracing::info!(dir = %dir.display(), items = items.len(), "loaded content collection");
    Ok(MetricsEngine::new(items))
}

/// Print the full aggregate report set as pretty JSON.
///
/// # Errors
///
/// Returns an error if the metadata directory cannot be resolved or read.
pub(crate) fn run_metrics(metadata_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let engine = build_engine(metadata_dir)?;
    let reports = engine.generate_all();
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

/// Print rendered insight lines, either one category or all of them.
///
/// # Errors
///
/// Returns an error if the metadata directory cannot be resolved or read,
/// or if the requested category does not exist.
pub(crate) fn run_insights(
    metadata_dir: Option<PathBuf>,
    category: Option<&str>,
) -> anyhow::Result<()> {
    let engine = build_engine(metadata_dir)?;
    let set = render_all(&engine.generate_all());

    match category {
        Some(name) => {
            let lines = set
                .category(name)
                .ok_or_else(|| anyhow::anyhow!("unknown insight category '{name}'"))?;
            for line in lines {
                println!("{line}");
            }
        }
        None => {
            for (name, lines) in set.categories() {
                println!("[{name}]");
                for line in lines {
                    println!("{line}");
                }
                println!();
            }
        }
    }
    Ok(())
}

/// Print the condensed analysis summary.
///
/// # Errors
///
/// Returns an error if the metadata directory cannot be resolved or read.
pub(crate) fn run_summary(metadata_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let engine = build_engine(metadata_dir)?;
    let set = render_all(&engine.generate_all());
    println!("{}", set.summary.join("\n"));
    Ok(())
}
