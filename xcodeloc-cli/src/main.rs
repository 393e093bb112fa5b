use std::fs;
use std::path::PathBuf;

use clap::Parser;
use xcodeloc::{Config, Orchestrator, RunReport, Xcodebuild};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Import translations from xliff files into the configured projects
    #[arg(long)]
    import: bool,

    /// Export translations to xliff files for every supported language
    #[arg(long)]
    export: bool,

    /// Path to the project registry
    #[arg(short, long, default_value = "xcodeloc.toml")]
    config: PathBuf,

    /// Write a JSON run report to this path after completion
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(&args.config)?;
    let runner = Xcodebuild::new(&config.tool);
    let orchestrator = Orchestrator::new(&config, &runner);

    let mut report = RunReport::default();
    if args.import {
        orchestrator.import_all(&mut report)?;
    } else if args.export {
        orchestrator.export_all(&mut report)?;
    } else {
        orchestrator.import_all(&mut report)?;
        orchestrator.export_all(&mut report)?;
    }

    if let Some(path) = &args.report {
        let text = serde_json::to_string_pretty(&report)?;
        fs::write(path, text)?;
        println!("Report JSON written: {}", path.display());
    }

    Ok(())
}
