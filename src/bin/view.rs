use clap::Parser;
use rge::objects::ObjectRef;
use rge::reconstruct::{reconstruct, Step};
use rge::triggers::{Param, Value};
use std::error;
use std::path::PathBuf;

/// Print a summary of a decoded scenario
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// JSON export of a decoded scenario
    input: PathBuf,
}

const SAMPLE_POSITIONS: usize = 5;
const PREVIEW_CHARS: usize = 50;

fn preview(message: &str) -> String {
    if message.chars().count() > PREVIEW_CHARS {
        let head: String = message.chars().take(PREVIEW_CHARS).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", message)
    }
}

fn type_name(object: &ObjectRef) -> String {
    match &object.object {
        Some(x) => x.name.to_string(),
        None => format!("Unit ID {}", object.code),
    }
}

fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if !args.input.is_file() {
        eprintln!("file not found: {}", args.input.display());
        std::process::exit(1);
    }

    let dump = rge::scenario::load(&args.input)?;
    let model = reconstruct(&dump);
    let rule = "=".repeat(60);

    println!("{}", rule);
    println!("SCENARIO: {}", args.input.display());
    println!("{}", rule);

    println!("\n--- MAP INFO ---");
    println!("Map Size: {} x {}", model.map_size(), model.map_size());

    println!("\n--- UNITS ---");
    for group in model.objects() {
        println!("\n  Player: {} ({} units)", group.player, group.objects.len());
        println!("  {}", "-".repeat(40));

        let mut counts: Vec<(ObjectRef, Vec<(i32, i32)>)> = Vec::new();
        for placed in &group.objects {
            let position = (placed.x as i32, placed.y as i32);
            match counts.iter_mut().find(|(x, _)| x.code == placed.object.code) {
                Some((_, positions)) => positions.push(position),
                None => counts.push((placed.object, vec![position])),
            }
        }

        for (object, positions) in counts {
            let mut sample: Vec<_> = positions
                .iter()
                .take(SAMPLE_POSITIONS)
                .map(|(x, y)| format!("({}, {})", x, y))
                .collect();
            if positions.len() > SAMPLE_POSITIONS {
                sample.push(String::from("..."));
            }

            println!(
                "    {}: {}x at [{}]",
                type_name(&object),
                positions.len(),
                sample.join(", ")
            );
        }
    }

    println!("\n--- TRIGGERS ({} total) ---", model.triggers().len());
    for trigger in model.triggers() {
        println!("\n  [{}] {}", trigger.index + 1, trigger.name);
        println!("      Enabled: {}", trigger.enabled);

        if !trigger.conditions.is_empty() {
            println!("      Conditions ({}):", trigger.conditions.len());
            for step in &trigger.conditions {
                match step {
                    Step::Op(op) => println!("        - {}", op.kind()),
                    Step::Unresolved(code) => println!("        - unknown condition {}", code),
                }
            }
        }

        if !trigger.effects.is_empty() {
            println!("      Effects ({}):", trigger.effects.len());
            for step in &trigger.effects {
                match step {
                    Step::Op(op) => match op.arg(Param::Message) {
                        Some(Value::Text(msg)) => {
                            println!("        - {} - {}", op.kind(), preview(msg))
                        }
                        _ => println!("        - {}", op.kind()),
                    },
                    Step::Unresolved(code) => println!("        - unknown effect {}", code),
                }
            }
        }
    }

    let dangling = model.lint_trigger_refs();
    if !dangling.is_empty() {
        println!("\n--- DANGLING TRIGGER REFERENCES ---");
        for x in dangling {
            println!(
                "  trigger {} effect {} refers to trigger {}",
                x.trigger, x.effect, x.target
            );
        }
    }

    println!("\n{}", rule);
    println!("END OF SCENARIO");
    println!("{}", rule);
    Ok(())
}
