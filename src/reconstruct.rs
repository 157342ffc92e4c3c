//! Rebuilds a typed trigger model from a decoded scenario.
//!
//! Every condition and effect record is resolved through the trigger
//! dictionary. Only the slots whitelisted for the resolved operation are read,
//! and slots holding their unset sentinel are dropped. Codes and identifiers
//! that cannot be resolved are kept in the model so that they remain visible
//! downstream, and are tallied in [`Diagnostics`].

use crate::{
    objects::ObjectRef,
    scenario::{Player, ScenarioHandle},
    triggers::{
        Argument, ConditionKind, EffectKind, Opcode, Param, ParamKind, RawValue, Value, UNSET,
    },
};
use std::collections::BTreeMap;

/// A decoded operation holding only its meaningful arguments.
///
/// Operations are only built by [`reconstruct`], so the arguments are always
/// a subset of the operation's whitelist.
///
/// ```compile_fail
/// use rge::reconstruct::Operation;
/// use rge::triggers::EffectKind;
/// let op = Operation { kind: EffectKind::ActivateTrigger, args: Vec::new(), record: 0 };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Operation<K> {
    kind: K,
    args: Vec<Argument>,
    record: usize,
}

impl<K: Copy> Operation<K> {
    pub fn kind(&self) -> K {
        self.kind
    }
}

impl<K> Operation<K> {
    /// Arguments in whitelist order. A parameter appears at most once.
    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    /// Position of the source record within its trigger, counting the no-op
    /// records that were skipped
    pub fn record(&self) -> usize {
        self.record
    }

    /// The value of the given parameter, if set
    pub fn arg(&self, param: Param) -> Option<&Value> {
        self.args
            .iter()
            .find(|x| x.param == param)
            .map(|x| &x.value)
    }
}

/// One condition or effect in a trigger
#[derive(Debug, Clone, PartialEq)]
pub enum Step<K> {
    Op(Operation<K>),

    /// A type code missing from the dictionary
    Unresolved(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriggerModel {
    /// Position in authoring order. Other triggers refer to this trigger by
    /// this ordinal.
    pub index: usize,
    pub name: String,
    pub enabled: bool,
    pub conditions: Vec<Step<ConditionKind>>,
    pub effects: Vec<Step<EffectKind>>,
}

/// A placed object with its type resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelObject {
    pub object: ObjectRef,
    pub x: f32,
    pub y: f32,
}

/// The objects owned by one player slot
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerObjects {
    pub player: Player,
    pub objects: Vec<ModelObject>,
}

/// Tally of everything that could not be resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    unknown_conditions: BTreeMap<u32, usize>,
    unknown_effects: BTreeMap<u32, usize>,
    unknown_objects: BTreeMap<u32, usize>,
    invalid_players: usize,
    invalid_references: usize,
}

impl Diagnostics {
    /// Unknown condition codes and the number of records using each
    pub fn unknown_conditions(&self) -> &BTreeMap<u32, usize> {
        &self.unknown_conditions
    }

    /// Unknown effect codes and the number of records using each
    pub fn unknown_effects(&self) -> &BTreeMap<u32, usize> {
        &self.unknown_effects
    }

    /// Unknown object type codes and the number of places referencing them,
    /// whether a placed object or an operation argument
    pub fn unknown_objects(&self) -> &BTreeMap<u32, usize> {
        &self.unknown_objects
    }

    /// Number of player slots that held neither the unset sentinel nor a
    /// valid player
    pub fn invalid_players(&self) -> usize {
        self.invalid_players
    }

    /// Number of object type or trigger ordinal slots that held a negative
    /// value other than the unset sentinel
    pub fn invalid_references(&self) -> usize {
        self.invalid_references
    }

    pub fn is_clean(&self) -> bool {
        self.unknown_conditions.is_empty()
            && self.unknown_effects.is_empty()
            && self.unknown_objects.is_empty()
            && self.invalid_players == 0
            && self.invalid_references == 0
    }

    fn object(&mut self, object: &ObjectRef) {
        if !object.is_resolved() {
            *self.unknown_objects.entry(object.code).or_default() += 1;
        }
    }
}

/// An activate or deactivate effect that names a trigger ordinal past the end
/// of the trigger list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingTriggerRef {
    /// Index of the trigger holding the effect
    pub trigger: usize,

    /// Position of the effect record within the trigger, counting no-op
    /// records
    pub effect: usize,

    /// The referenced ordinal
    pub target: u32,
}

/// The reconstructed scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioModel {
    map_size: u32,
    objects: Vec<PlayerObjects>,
    triggers: Vec<TriggerModel>,
    diagnostics: Diagnostics,
}

impl ScenarioModel {
    pub fn map_size(&self) -> u32 {
        self.map_size
    }

    /// Placed objects grouped by player, in player order. Players without
    /// objects are omitted.
    pub fn objects(&self) -> &[PlayerObjects] {
        &self.objects
    }

    pub fn triggers(&self) -> &[TriggerModel] {
        &self.triggers
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Lists trigger references that point past the last trigger.
    ///
    /// Forward references to triggers defined later are legal and are not
    /// reported. The model is left untouched.
    pub fn lint_trigger_refs(&self) -> Vec<DanglingTriggerRef> {
        let count = self.triggers.len();
        let mut result = Vec::new();
        for trigger in &self.triggers {
            for step in &trigger.effects {
                let Step::Op(op) = step else {
                    continue;
                };

                if let Some(Value::Trigger(target)) = op.arg(Param::TriggerId) {
                    if *target as usize >= count {
                        result.push(DanglingTriggerRef {
                            trigger: trigger.index,
                            effect: op.record,
                            target: *target,
                        });
                    }
                }
            }
        }

        result
    }
}

/// Reconstruct the model of a decoded scenario
pub fn reconstruct<H: ScenarioHandle + ?Sized>(handle: &H) -> ScenarioModel {
    let mut diagnostics = Diagnostics::default();

    let mut objects = Vec::new();
    for player in Player::ALL {
        let placed = handle.units_by_player(player);
        if placed.is_empty() {
            continue;
        }

        let placed: Vec<_> = placed
            .iter()
            .map(|x| {
                let object = ObjectRef::new(x.type_code);
                if !object.is_resolved() {
                    log::warn!(
                        "unknown object type {} placed for player {} at ({}, {})",
                        x.type_code,
                        player,
                        x.x,
                        x.y
                    );
                }
                diagnostics.object(&object);
                ModelObject {
                    object,
                    x: x.x,
                    y: x.y,
                }
            })
            .collect();

        objects.push(PlayerObjects {
            player,
            objects: placed,
        });
    }

    let mut triggers = Vec::with_capacity(handle.triggers().len());
    for (index, raw) in handle.triggers().iter().enumerate() {
        let mut conditions = Vec::with_capacity(raw.conditions.len());
        for (record, condition) in raw.conditions.iter().enumerate() {
            match ConditionKind::from_code(condition.condition_type) {
                Opcode::Nop => {}
                Opcode::Known(kind) => conditions.push(Step::Op(operation(
                    kind,
                    record,
                    |x| condition.value(x),
                    &mut diagnostics,
                ))),
                Opcode::Unknown(code) => {
                    log::warn!("trigger {} has unknown condition type {}", index, code);
                    *diagnostics.unknown_conditions.entry(code).or_default() += 1;
                    conditions.push(Step::Unresolved(code));
                }
            }
        }

        let mut effects = Vec::with_capacity(raw.effects.len());
        for (record, effect) in raw.effects.iter().enumerate() {
            match EffectKind::from_code(effect.effect_type) {
                Opcode::Nop => {}
                Opcode::Known(kind) => effects.push(Step::Op(operation(
                    kind,
                    record,
                    |x| effect.value(x),
                    &mut diagnostics,
                ))),
                Opcode::Unknown(code) => {
                    log::warn!("trigger {} has unknown effect type {}", index, code);
                    *diagnostics.unknown_effects.entry(code).or_default() += 1;
                    effects.push(Step::Unresolved(code));
                }
            }
        }

        let name = if raw.name.is_empty() {
            format!("Trigger {}", index)
        } else {
            raw.name.clone()
        };

        triggers.push(TriggerModel {
            index,
            name,
            enabled: raw.enabled,
            conditions,
            effects,
        });
    }

    ScenarioModel {
        map_size: handle.map_size(),
        objects,
        triggers,
        diagnostics,
    }
}

/// Operation kinds with a parameter whitelist
trait Whitelisted: std::fmt::Display + Copy {
    fn whitelist(&self) -> &'static [Param];
}

impl Whitelisted for ConditionKind {
    fn whitelist(&self) -> &'static [Param] {
        self.params()
    }
}

impl Whitelisted for EffectKind {
    fn whitelist(&self) -> &'static [Param] {
        self.params()
    }
}

fn operation<'a, K: Whitelisted>(
    kind: K,
    record: usize,
    slot: impl Fn(Param) -> RawValue<'a>,
    diagnostics: &mut Diagnostics,
) -> Operation<K> {
    let params = kind.whitelist();
    let mut args = Vec::with_capacity(params.len());
    for &param in params {
        let raw = slot(param);
        match param.decode(raw) {
            Some(value) => {
                if let Value::Object(object) = &value {
                    if !object.is_resolved() {
                        log::warn!("{} references unknown object type {}", kind, object.code);
                    }
                    diagnostics.object(object);
                }
                args.push(Argument { param, value });
            }
            None => match raw {
                RawValue::Int(x) if x != UNSET => match param.kind() {
                    ParamKind::Player => {
                        log::warn!("{} has invalid {} {}", kind, param.keyword(), x);
                        diagnostics.invalid_players += 1;
                    }
                    ParamKind::ObjectType | ParamKind::TriggerOrdinal => {
                        log::warn!("{} has invalid {} {}", kind, param.keyword(), x);
                        diagnostics.invalid_references += 1;
                    }
                    _ => {}
                },
                _ => {}
            },
        }
    }

    Operation { kind, args, record }
}
