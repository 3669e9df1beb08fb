use anyhow::Result;
use clap::Parser;
use source_splitter::{process_path, Layout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "source-splitter")]
#[command(about = "Split source files into their structural units", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file, or directory to recurse into
    input_path: PathBuf,

    /// Output directory (must exist)
    output_dir: PathBuf,

    /// Prefix named-unit files with `_` instead of keeping natural names
    #[arg(long)]
    flat: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    if !cli.input_path.exists() {
        // per-file failures never abort the process, and neither does a
        // missing input: report and exit cleanly
        log::error!("invalid input path: {}", cli.input_path.display());
        return Ok(());
    }

    let layout = if cli.flat { Layout::Flat } else { Layout::Nested };
    let summary = process_path(&cli.input_path, &cli.output_dir, layout);

    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!(
            "processed {} file(s), skipped {}",
            summary.processed, summary.skipped
        );
    }
    Ok(())
}
