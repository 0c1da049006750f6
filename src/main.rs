mod cli;

use imgconv::{sniff, ConversionRequest};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "imgconv=trace".to_string()
        } else {
            "imgconv=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert {
            dir,
            from,
            to,
            dry_run,
            json,
        } => convert(&dir, &from, &to, dry_run, json),
        Commands::Sniff { file } => sniff_file(&file),
        Commands::Version => {
            println!("imgconv {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn convert(dir: &Path, from: &str, to: &str, dry_run: bool, json: bool) -> Result<()> {
    let request = ConversionRequest::new(dir, from, to)?;

    if dry_run {
        let candidates = request
            .candidates()
            .with_context(|| format!("Failed to scan {:?}", dir))?;

        if json {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        } else {
            for path in &candidates {
                println!("{}", path.display());
            }
            println!(
                "\n[DRY RUN] Would convert {} files from {} to {}",
                candidates.len(),
                from,
                to
            );
        }
        return Ok(());
    }

    let summary = request
        .run()
        .with_context(|| format!("Conversion from {} to {} failed under {:?}", from, to, dir))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for file in &summary.converted {
            println!("{} -> {}", file.source.display(), file.destination.display());
        }
        println!("Converted {} files", summary.len());
    }

    Ok(())
}

fn sniff_file(file: &Path) -> Result<()> {
    let content_type =
        sniff::sniff_path(file).with_context(|| format!("Failed to sniff {:?}", file))?;
    println!("{}", content_type);
    Ok(())
}
