use clap::Parser;
use rge::campaign::{
    default_output_dir, CampaignArchive, CampaignFormat, ExtractOptions, SCENARIO_EXTENSION,
};
use rge::scenario::ScenarioHeader;
use std::error;
use std::path::PathBuf;

/// Extract the scenarios bundled in a campaign archive
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Campaign archive to read
    input: PathBuf,

    /// Directory to write scenarios into [default: <input>_scenarios]
    output: Option<PathBuf>,

    /// Archive layout (scan or directory). Detected from the file when omitted
    #[arg(long)]
    format: Option<CampaignFormat>,

    /// Leave scenarios that already exist in the output directory untouched
    #[arg(long)]
    no_overwrite: bool,
}

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if !args.input.is_file() {
        eprintln!("file not found: {}", args.input.display());
        std::process::exit(1);
    }

    let data = std::fs::read(&args.input)?;
    let format = args
        .format
        .unwrap_or_else(|| CampaignFormat::detect(&data));
    let archive = match CampaignArchive::parse(&data, format) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("unable to read {}: {}", args.input.display(), e);
            std::process::exit(1);
        }
    };

    println!("campaign: {}", args.input.display());
    println!("format: {}", archive.format());
    println!("version: {}", archive.version());
    if let Some(name) = archive.name() {
        println!("name: {}", name);
    }
    if archive.format() == CampaignFormat::DirectoryHeader {
        println!("dependencies: {:?}", archive.dependencies());
    }

    for warning in archive.warnings() {
        println!("warning: {}", warning);
    }

    if archive.entries().is_empty() {
        println!("no scenarios found");
        return Ok(());
    }

    println!("scenarios: {}", archive.entries().len());
    for (i, entry) in archive.entries().iter().enumerate() {
        let version = archive
            .entry_data(i)
            .ok()
            .and_then(|x| ScenarioHeader::from_slice(x).ok())
            .map(|x| x.version())
            .unwrap_or_else(|| String::from("?"));

        println!(
            "  {:>3}: {} ({}) size: {} offset: 0x{:x} version: {}",
            i + 1,
            entry.name(),
            entry.filename(),
            entry.size(),
            entry.offset(),
            version
        );
    }

    let output = args
        .output
        .unwrap_or_else(|| default_output_dir(&args.input));
    let options = ExtractOptions::new(output).overwrite(!args.no_overwrite);
    let report = archive.extract(&options)?;

    for outcome in report.outcomes() {
        match &outcome.result {
            Ok(len) => println!("wrote {} ({} bytes)", outcome.path.display(), len),
            Err(e) => eprintln!("failed {}: {}", outcome.path.display(), e),
        }
    }

    println!(
        "extracted {} of {} scenarios to {}",
        report.outcomes().len() - report.failures(),
        report.outcomes().len(),
        report.output_dir().display()
    );

    if let Some(first) = report.written().next() {
        println!();
        println!("to decompile a scenario, export it to json with the scenario editing library and run:");
        println!(
            "  decompile {} [output.py]",
            first.with_extension("json").display()
        );
        println!("(extracted files use the .{} extension)", SCENARIO_EXTENSION);
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
