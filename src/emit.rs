//! Renders a reconstructed scenario as a Python program.
//!
//! The program targets the `AoE2ScenarioParser` library and, when run,
//! recreates the scenario: map size, placed objects, then triggers, followed
//! by a save statement. Output is a pure function of the model and options.
//!
//! Anything that could not be resolved is rendered on a line beginning with
//! `# UNRESOLVED` so that degraded spots can be found with a text search.

use crate::{
    objects::ObjectRef,
    reconstruct::{Operation, ScenarioModel, Step},
    triggers::{Argument, Value},
    Error,
};
use std::{collections::BTreeSet, fmt::Write as _, io::Write, path::Path};

/// Prefix of every line that marks something unresolved
pub const UNRESOLVED: &str = "# UNRESOLVED";

const RULE: &str = "# ============================================================";

/// Number of unknown object codes listed in the summary note
const NOTE_LIMIT: usize = 10;

/// Options for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    source_name: String,
    output_name: String,
}

impl EmitOptions {
    /// Options derived from the path of the decoded scenario. The generated
    /// program saves to `<stem>_recreated.aoe2scenario`.
    ///
    /// ```rust
    /// use rge::emit::EmitOptions;
    /// let options = EmitOptions::from_path("maps/siege.json");
    /// assert_eq!(options.source_name(), "siege.json");
    /// assert_eq!(options.output_name(), "siege_recreated.aoe2scenario");
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let source_name = path
            .file_name()
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("scenario"));

        EmitOptions {
            source_name,
            output_name: format!("{}_recreated.aoe2scenario", stem),
        }
    }

    /// Overrides the file the generated program saves to
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }
}

/// Render the model to the writer
pub fn emit<W: Write>(model: &ScenarioModel, options: &EmitOptions, mut writer: W) -> Result<(), Error> {
    writer.write_all(render(model, options).as_bytes())?;
    Ok(())
}

/// Render the model to a string
pub fn render(model: &ScenarioModel, options: &EmitOptions) -> String {
    let mut out = Program::default();
    out.header(model, options);
    out.objects(model);
    out.triggers(model);
    out.save(options);
    out.buf
}

/// Quote a string as a Python literal. Control characters without a short
/// escape are written as `\xNN`.
///
/// ```rust
/// use rge::emit::python_str;
/// assert_eq!(python_str("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// ```
pub fn python_str(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            x if x.is_control() => {
                let _ = write!(result, "\\x{:02x}", x as u32);
            }
            x => result.push(x),
        }
    }
    result.push('"');
    result
}

#[derive(Debug, Default)]
struct Program {
    buf: String,
}

impl Program {
    fn line(&mut self, line: impl AsRef<str>) {
        self.buf.push_str(line.as_ref());
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn section(&mut self, title: &str) {
        self.line(RULE);
        self.line(format!("# {}", title));
        self.line(RULE);
    }

    fn header(&mut self, model: &ScenarioModel, options: &EmitOptions) {
        self.line("\"\"\"");
        self.line(format!("Auto-generated from: {}", options.source_name()));
        self.line("Generated by rge decompile");
        self.line("\"\"\"");
        self.blank();
        self.line("from AoE2ScenarioParser.scenarios.aoe2_de_scenario import AoE2DEScenario");
        self.line("from AoE2ScenarioParser.datasets.players import PlayerId");
        self.line("from AoE2ScenarioParser.datasets.units import UnitInfo");
        self.line("from AoE2ScenarioParser.datasets.buildings import BuildingInfo");
        self.line("from AoE2ScenarioParser.datasets.heroes import HeroInfo");
        self.line("from AoE2ScenarioParser.datasets.other import OtherInfo");
        self.line("from AoE2ScenarioParser.datasets.trigger_lists import *");
        self.line("from AoE2ScenarioParser.datasets.techs import TechInfo");
        self.blank();
        self.line("# Create scenario");
        self.line("scenario = AoE2DEScenario.from_default()");
        self.blank();
        self.line("# Get managers");
        self.line("unit_manager = scenario.unit_manager");
        self.line("trigger_manager = scenario.trigger_manager");
        self.line("map_manager = scenario.map_manager");
        self.blank();
        self.line("# Set map size");
        self.line(format!("map_manager.map_size = {}", model.map_size()));
        self.blank();
    }

    fn objects(&mut self, model: &ScenarioModel) {
        self.section("UNITS AND BUILDINGS");

        let mut unknown = BTreeSet::new();
        for group in model.objects() {
            self.blank();
            self.line(format!(
                "# --- {} ({} units) ---",
                group.player,
                group.objects.len()
            ));

            for placed in &group.objects {
                let statement = format!(
                    "unit_manager.add_unit(PlayerId.{}, unit_const={}, x={:.1}, y={:.1})",
                    group.player, placed.object, placed.x, placed.y
                );

                if placed.object.is_resolved() {
                    self.line(statement);
                } else {
                    unknown.insert(placed.object.code);
                    self.line(format!(
                        "{} unit type {}: {}",
                        UNRESOLVED, placed.object.code, statement
                    ));
                }
            }
        }

        if !unknown.is_empty() {
            let listed: Vec<_> = unknown.iter().take(NOTE_LIMIT).map(|x| x.to_string()).collect();
            let more = if unknown.len() > NOTE_LIMIT { ", ..." } else { "" };
            self.blank();
            self.line(format!(
                "# NOTE: {} unknown unit IDs were commented out: [{}{}]",
                unknown.len(),
                listed.join(", "),
                more
            ));
        }

        self.blank();
    }

    fn triggers(&mut self, model: &ScenarioModel) {
        if model.triggers().is_empty() {
            return;
        }

        self.section("TRIGGERS");
        self.blank();

        for trigger in model.triggers() {
            let var = format!("trigger_{}", trigger.index);
            let name = python_str(&trigger.name);
            self.line(format!("# Trigger: {}", name));
            self.line(format!("{} = trigger_manager.add_trigger({})", var, name));
            if !trigger.enabled {
                self.line(format!("{}.enabled = False", var));
            }

            for step in &trigger.conditions {
                match step {
                    Step::Op(op) => self.operation(&var, "new_condition", op),
                    Step::Unresolved(code) => {
                        self.line(format!("{} condition type {}", UNRESOLVED, code))
                    }
                }
            }

            for step in &trigger.effects {
                match step {
                    Step::Op(op) => self.operation(&var, "new_effect", op),
                    Step::Unresolved(code) => {
                        self.line(format!("{} effect type {}", UNRESOLVED, code))
                    }
                }
            }

            self.blank();
        }
    }

    fn operation<K: std::fmt::Display + Copy>(&mut self, var: &str, builder: &str, op: &Operation<K>) {
        let args: Vec<_> = op.args().iter().map(render_arg).collect();
        let unresolved: Vec<ObjectRef> = op
            .args()
            .iter()
            .filter_map(|x| match &x.value {
                Value::Object(object) if !object.is_resolved() => Some(*object),
                _ => None,
            })
            .collect();

        for object in unresolved {
            self.line(format!("{} object type {} in {}", UNRESOLVED, object.code, op.kind()));
        }

        self.line(format!("{}.{}.{}({})", var, builder, op.kind(), args.join(", ")));
    }

    fn save(&mut self, options: &EmitOptions) {
        let target = python_str(options.output_name());
        self.section("SAVE SCENARIO");
        self.line(format!("scenario.write_to_file({})", target));
        self.blank();
        self.line(format!(
            "print({})",
            python_str(&format!("Scenario saved as: {}", options.output_name()))
        ));
    }
}

fn render_arg(arg: &Argument) -> String {
    let value = match &arg.value {
        Value::Player(player) => format!("PlayerId.{}", player),
        Value::Object(object) => object.to_string(),
        Value::Trigger(x) => x.to_string(),
        Value::Flag(true) => String::from("True"),
        Value::Flag(false) => String::from("False"),
        Value::Int(x) => x.to_string(),
        Value::Text(x) => python_str(x),
    };

    format!("{}={}", arg.param.keyword(), value)
}
