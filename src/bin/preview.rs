//! Preview finalized keymap registrations from a mappings file
//!
//! Usage:
//!   bindery-preview mappings.yaml
//!   bindery-preview mappings.yaml --leader ","
//!   bindery-preview            # falls back to the user config file

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bindery::{load_mappings_file, user_mappings_path, MapOpts, MapSet, Recorder, Rhs};

/// Preview the finalized records a mappings file would register
#[derive(Parser, Debug)]
#[command(name = "bindery-preview", version, about)]
struct Args {
    /// Mappings YAML file (defaults to the user config file)
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Override the leader token
    #[arg(long, value_name = "TOKEN")]
    leader: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let path = match args.path {
        Some(path) => path,
        None => user_mappings_path().ok_or_else(|| anyhow!("no user config directory found"))?,
    };

    let config = load_mappings_file(&path)
        .with_context(|| format!("failed to load mappings from {}", path.display()))?;

    let mut maps = MapSet::new();
    config.apply(&mut maps).context("invalid mapping entry")?;
    if let Some(leader) = args.leader {
        maps.set_leader(leader);
    }

    let mut backend = Recorder::new();
    let emitted = maps.register(&mut backend, &MapOpts::new())?;

    let key_width = backend
        .records
        .iter()
        .map(|(k, _)| k.len())
        .max()
        .unwrap_or(3)
        .max(3);

    println!("{:<width$}  {:<4}  {:<7}  {:<6}  rhs / label", "key", "mode", "noremap", "silent", width = key_width);
    for (key, record) in &backend.records {
        let rhs = match &record.rhs {
            Rhs::Str(s) if s.is_empty() => "-".to_string(),
            Rhs::Str(s) => s.clone(),
            Rhs::Func(_) => "<function>".to_string(),
        };
        let label = record.label.as_deref().unwrap_or("");
        println!(
            "{:<width$}  {:<4}  {:<7}  {:<6}  {}  {}",
            key,
            record.mode.map(String::from).unwrap_or_else(|| "-".into()),
            opt_bool(record.noremap),
            opt_bool(record.silent),
            rhs,
            label,
            width = key_width
        );
    }
    println!("\n{} records from {}", emitted, path.display());

    Ok(())
}

fn opt_bool(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "-",
    }
}
