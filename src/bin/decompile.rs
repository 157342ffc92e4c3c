use clap::Parser;
use rge::emit::{self, EmitOptions};
use rge::reconstruct::reconstruct;
use std::error;
use std::io::{self, Write};
use std::path::PathBuf;

/// Convert a decoded scenario into a Python program that recreates it
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// JSON export of a decoded scenario
    input: PathBuf,

    /// File to write the program to. Printed to stdout when omitted
    output: Option<PathBuf>,

    /// Scenario file the generated program saves to [default: <input stem>_recreated.aoe2scenario]
    #[arg(long)]
    save_as: Option<String>,
}

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if !args.input.is_file() {
        eprintln!("file not found: {}", args.input.display());
        std::process::exit(1);
    }

    let dump = match rge::scenario::load(&args.input) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("unable to read {}: {}", args.input.display(), e);
            std::process::exit(1);
        }
    };

    let model = reconstruct(&dump);
    for x in model.lint_trigger_refs() {
        log::warn!(
            "trigger {} effect {} refers to trigger {} but only {} triggers exist",
            x.trigger,
            x.effect,
            x.target,
            model.triggers().len()
        );
    }

    let diagnostics = model.diagnostics();
    if !diagnostics.is_clean() {
        log::warn!(
            "unresolved: {} condition codes, {} effect codes, {} object codes, {} invalid players, {} invalid references",
            diagnostics.unknown_conditions().len(),
            diagnostics.unknown_effects().len(),
            diagnostics.unknown_objects().len(),
            diagnostics.invalid_players(),
            diagnostics.invalid_references()
        );
    }

    let mut options = EmitOptions::from_path(&args.input);
    if let Some(name) = args.save_as {
        options = options.with_output_name(name);
    }

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            let mut writer = io::BufWriter::new(file);
            emit::emit(&model, &options, &mut writer)?;
            writer.flush()?;
            println!("Python code saved to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let lock = stdout.lock();
            emit::emit(&model, &options, lock)?;
        }
    }

    Ok(())
}
