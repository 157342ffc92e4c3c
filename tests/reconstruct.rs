#![cfg(feature = "json")]
use rge::reconstruct::{reconstruct, DanglingTriggerRef, ScenarioModel, Step};
use rge::scenario::{self, Player, RawEffect, RawTrigger, ScenarioDump};
use rge::triggers::{ConditionKind, EffectKind, Param, Value};
use std::path::Path;

fn fixture() -> ScenarioModel {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scenario.json");
    let dump = scenario::load(path).unwrap();
    reconstruct(&dump)
}

#[test]
fn test_fixture_objects() {
    let model = fixture();
    assert_eq!(model.map_size(), 120);

    let players: Vec<_> = model.objects().iter().map(|x| x.player).collect();
    assert_eq!(players, vec![Player::Gaia, Player::One, Player::Two]);

    let gaia: Vec<_> = model.objects()[0]
        .objects
        .iter()
        .map(|x| x.object.to_string())
        .collect();
    assert_eq!(gaia, vec!["OtherInfo.GOLD_MINE.ID", "OtherInfo.TREE_OAK.ID"]);

    let unknown = &model.objects()[2].objects[0];
    assert_eq!(unknown.object.code, 1629);
    assert!(!unknown.object.is_resolved());
}

#[test]
fn test_fixture_triggers_keep_order() {
    let model = fixture();
    let names: Vec<_> = model.triggers().iter().map(|x| x.name.as_str()).collect();
    assert_eq!(names, vec!["Intro", "Ambush", "Trigger 2"]);

    let enabled: Vec<_> = model.triggers().iter().map(|x| x.enabled).collect();
    assert_eq!(enabled, vec![true, false, true]);

    let ambush = &model.triggers()[1];
    assert_eq!(ambush.conditions.len(), 2);
    assert!(matches!(
        &ambush.conditions[0],
        Step::Op(op) if op.kind() == ConditionKind::DestroyObject
    ));
    assert_eq!(ambush.conditions[1], Step::Unresolved(77));
    assert_eq!(ambush.effects[1], Step::Unresolved(200));
}

#[test]
fn test_fixture_whitelist_applied() {
    let model = fixture();
    let Step::Op(instructions) = &model.triggers()[0].effects[0] else {
        panic!("expected display_instructions");
    };

    assert_eq!(instructions.kind(), EffectKind::DisplayInstructions);
    assert!(instructions.args().len() <= instructions.kind().params().len());
    assert_eq!(
        instructions.arg(Param::SourcePlayer),
        Some(&Value::Player(Player::One))
    );
    assert_eq!(instructions.arg(Param::DisplayTime), Some(&Value::Int(10)));
    assert_eq!(instructions.arg(Param::ObjectListUnitId), None);
    assert_eq!(instructions.arg(Param::AreaX1), None);
    assert_eq!(instructions.arg(Param::Quantity), None);
}

#[test]
fn test_fixture_diagnostics() {
    let model = fixture();
    let diagnostics = model.diagnostics();
    assert_eq!(diagnostics.unknown_conditions().get(&77), Some(&1));
    assert_eq!(diagnostics.unknown_effects().get(&200), Some(&1));

    // once as a placed object, once as a create_object argument
    assert_eq!(diagnostics.unknown_objects().get(&1629), Some(&2));
    assert_eq!(diagnostics.invalid_players(), 0);
    assert!(!diagnostics.is_clean());
}

#[test]
fn test_fixture_trigger_refs() {
    let model = fixture();
    assert_eq!(
        model.lint_trigger_refs(),
        vec![DanglingTriggerRef {
            trigger: 1,
            effect: 2,
            target: 9
        }]
    );
}

#[test]
fn test_every_slot_set_stays_within_whitelist() {
    let saturated = |code: u32| RawEffect {
        effect_type: code,
        ai_script_goal: 1,
        quantity: 1,
        tribute_list: 1,
        diplomacy: 1,
        object_list_unit_id: 4,
        source_player: 1,
        target_player: 2,
        technology: 1,
        display_time: 1,
        trigger_id: 0,
        location_x: 1,
        location_y: 1,
        location_object_reference: 1,
        area_x1: 1,
        area_y1: 1,
        area_x2: 1,
        area_y2: 1,
        object_group: 1,
        object_type: 1,
        instruction_panel_position: 1,
        attack_stance: 1,
        time_unit: 1,
        enabled: 1,
        variable: 1,
        timer: 1,
        operation: 1,
        player_color: 1,
        armour_attack_quantity: 1,
        armour_attack_class: 1,
        object_attributes: 1,
        message: String::from("m"),
        sound_name: String::from("s"),
    };

    let mut trigger = RawTrigger::new("saturated");
    trigger.effects = (1..=63).map(saturated).collect();
    let model = reconstruct(&ScenarioDump {
        map_size: 10,
        units: Vec::new(),
        triggers: vec![trigger],
    });

    for step in &model.triggers()[0].effects {
        let Step::Op(op) = step else {
            panic!("every code up to 63 is known");
        };
        assert_eq!(op.args().len(), op.kind().params().len(), "{}", op.kind());
    }
}
