#![cfg(feature = "json")]
use rge::emit::{emit, render, EmitOptions, UNRESOLVED};
use rge::reconstruct::reconstruct;
use rge::scenario::{self, RawCondition, RawTrigger, ScenarioDump};
use rge::triggers::ConditionKind;
use std::path::{Path, PathBuf};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scenario.json")
}

fn fixture_output() -> String {
    let dump = scenario::load(fixture_path()).unwrap();
    render(&reconstruct(&dump), &EmitOptions::from_path(fixture_path()))
}

/// Number of `key=value` arguments in a call statement
fn named_args(line: &str) -> usize {
    let open = line.find('(').unwrap();
    let args = &line[open + 1..line.len() - 1];
    if args.is_empty() {
        0
    } else {
        args.split(", ").filter(|x| x.contains('=')).count()
    }
}

#[test]
fn test_emission_is_idempotent() {
    let dump = scenario::load(fixture_path()).unwrap();
    let options = EmitOptions::from_path(fixture_path());

    let first = render(&reconstruct(&dump), &options);
    let second = render(&reconstruct(&dump), &options);
    assert_eq!(first, second);

    let mut written = Vec::new();
    emit(&reconstruct(&dump), &options, &mut written).unwrap();
    assert_eq!(written, first.as_bytes());
}

#[test]
fn test_fixture_program() {
    let out = fixture_output();
    assert!(out.starts_with("\"\"\"\nAuto-generated from: scenario.json\n"));
    assert!(out.contains("map_manager.map_size = 120\n"));
    assert!(out.contains("# --- GAIA (2 units) ---\n"));
    assert!(out.contains(
        "unit_manager.add_unit(PlayerId.ONE, unit_const=BuildingInfo.TOWN_CENTER.ID, x=60.5, y=60.5)\n"
    ));
    assert!(out.contains("# NOTE: 1 unknown unit IDs were commented out: [1629]\n"));
    assert!(out.contains("trigger_0 = trigger_manager.add_trigger(\"Intro\")\n"));
    assert!(out.contains("trigger_0.new_condition.timer(timer=5)\n"));
    assert!(out.contains(
        "trigger_0.new_effect.display_instructions(source_player=PlayerId.ONE, message=\"Hold the castle until \\\"dawn\\\".\\nGood luck.\", display_time=10)\n"
    ));
    assert!(out.contains("trigger_0.new_effect.activate_trigger(trigger_id=1)\n"));
    assert!(out.contains("trigger_1.enabled = False\n"));
    assert!(out.contains("trigger_1.new_effect.deactivate_trigger(trigger_id=9)\n"));
    assert!(out.contains("trigger_2 = trigger_manager.add_trigger(\"Trigger 2\")\n"));
    assert!(out.ends_with("print(\"Scenario saved as: scenario_recreated.aoe2scenario\")\n"));
}

#[test]
fn test_unknown_codes_are_visible() {
    let out = fixture_output();
    assert!(out.contains(&format!("{} condition type 77\n", UNRESOLVED)));
    assert!(out.contains(&format!("{} effect type 200\n", UNRESOLVED)));
    assert!(out.contains(&format!("{} object type 1629 in create_object\n", UNRESOLVED)));
    assert!(out.contains(&format!("{} unit type 1629: ", UNRESOLVED)));

    // the nop condition leaves no trace
    assert!(!out.contains("type 0"));
}

#[test]
fn test_unset_player_not_emitted() {
    let mut trigger = RawTrigger::new("Regicide");
    trigger.conditions.push(RawCondition {
        unit_object: 3,
        ..RawCondition::new(6)
    });

    let model = reconstruct(&ScenarioDump {
        map_size: 80,
        units: Vec::new(),
        triggers: vec![trigger],
    });
    let out = render(&model, &EmitOptions::from_path("regicide.json"));
    assert!(out.contains("trigger_0.new_condition.destroy_object(unit_object=3)\n"));
    assert!(!out.contains("source_player"));
}

#[test]
fn test_saturated_conditions_stay_within_whitelist() {
    let saturated = |code: u32| RawCondition {
        condition_type: code,
        quantity: 1,
        attribute: 1,
        unit_object: 1,
        next_object: 1,
        object_list: 4,
        source_player: 1,
        target_player: 2,
        technology: 1,
        timer: 1,
        area_x1: 1,
        area_y1: 1,
        area_x2: 1,
        area_y2: 1,
        object_group: 1,
        object_type: 1,
        ai_signal: 1,
        inverted: 0,
        variable: 1,
        comparison: 1,
        unit_ai_action: 1,
        object_state: 1,
        xs_function: String::from("f"),
    };

    let mut trigger = RawTrigger::new("saturated");
    trigger.conditions = (1..=33).map(saturated).collect();
    let model = reconstruct(&ScenarioDump {
        map_size: 10,
        units: Vec::new(),
        triggers: vec![trigger],
    });
    let out = render(&model, &EmitOptions::from_path("saturated.json"));

    let mut checked = 0;
    for line in out.lines().filter(|x| x.starts_with("trigger_0.new_condition.")) {
        let name = &line["trigger_0.new_condition.".len()..line.find('(').unwrap()];
        let kind = ConditionKind::ALL
            .iter()
            .find(|x| x.name() == name)
            .unwrap();
        assert!(named_args(line) <= kind.params().len(), "{}", line);
        checked += 1;
    }

    assert_eq!(checked, 33);
}
