use super::Player;
use crate::triggers::{Param, RawValue};

/// Structured view of one decoded scenario.
///
/// The scenario editing library owns the decoding of scenario bodies; this
/// trait is the seam through which its result is consumed.
pub trait ScenarioHandle {
    /// Width and height of the square map in tiles. Valid tile coordinates
    /// are `0..map_size` on both axes.
    fn map_size(&self) -> u32;

    /// Objects placed for the given player slot, in stored order
    fn units_by_player(&self, player: Player) -> Vec<PlacedObject>;

    /// Triggers in authoring order
    fn triggers(&self) -> &[RawTrigger];
}

/// A unit, building, hero or decoration placed on the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObject {
    pub player: Player,
    pub type_code: u32,
    pub x: f32,
    pub y: f32,
}

/// A trigger as stored: a name, an enabled flag, and the flat condition and
/// effect records
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct RawTrigger {
    #[cfg_attr(feature = "json", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "json", serde(default = "enabled_by_default"))]
    pub enabled: bool,
    #[cfg_attr(feature = "json", serde(default))]
    pub conditions: Vec<RawCondition>,
    #[cfg_attr(feature = "json", serde(default))]
    pub effects: Vec<RawEffect>,
}

#[cfg(feature = "json")]
fn enabled_by_default() -> bool {
    true
}

impl RawTrigger {
    pub fn new(name: impl Into<String>) -> Self {
        RawTrigger {
            name: name.into(),
            enabled: true,
            conditions: Vec::new(),
            effects: Vec::new(),
        }
    }
}

/// Declares a flat record where every numeric slot defaults to the `-1`
/// sentinel and every text slot defaults to empty, along with the mapping
/// from named parameters to slots.
macro_rules! raw_record {
    (
        $(#[$meta:meta])*
        $name:ident, $code:ident {
            ints { $($int:ident => $iparam:ident,)* }
            texts { $($text:ident => $tparam:ident,)* }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "json", derive(serde::Deserialize), serde(default))]
        pub struct $name {
            pub $code: u32,
            $(pub $int: i32,)*
            $(pub $text: String,)*
        }

        impl Default for $name {
            fn default() -> Self {
                $name {
                    $code: 0,
                    $($int: -1,)*
                    $($text: String::new(),)*
                }
            }
        }

        impl $name {
            /// A record of the given type code with every slot unset
            pub fn new($code: u32) -> Self {
                $name {
                    $code,
                    ..Default::default()
                }
            }

            /// The slot backing a parameter. Parameters that this record
            /// kind has no slot for are absent.
            pub fn value(&self, param: Param) -> RawValue<'_> {
                match param {
                    $(Param::$iparam => RawValue::Int(self.$int),)*
                    $(Param::$tparam => RawValue::Text(&self.$text),)*
                    #[allow(unreachable_patterns)]
                    _ => RawValue::Absent,
                }
            }
        }
    };
}

raw_record! {
    /// A condition record. The record carries every slot any condition
    /// might use; which ones are meaningful depends on the condition type.
    RawCondition, condition_type {
        ints {
            quantity => Quantity,
            attribute => Attribute,
            unit_object => UnitObject,
            next_object => NextObject,
            object_list => ObjectList,
            source_player => SourcePlayer,
            target_player => TargetPlayer,
            technology => Technology,
            timer => Timer,
            area_x1 => AreaX1,
            area_y1 => AreaY1,
            area_x2 => AreaX2,
            area_y2 => AreaY2,
            object_group => ObjectGroup,
            object_type => ObjectType,
            ai_signal => AiSignal,
            inverted => Inverted,
            variable => Variable,
            comparison => Comparison,
            unit_ai_action => UnitAiAction,
            object_state => ObjectState,
        }
        texts {
            xs_function => XsFunction,
        }
    }
}

raw_record! {
    /// An effect record. Like conditions, the record is a superset of the
    /// slots used by any effect type.
    RawEffect, effect_type {
        ints {
            ai_script_goal => AiScriptGoal,
            quantity => Quantity,
            tribute_list => TributeList,
            diplomacy => Diplomacy,
            object_list_unit_id => ObjectListUnitId,
            source_player => SourcePlayer,
            target_player => TargetPlayer,
            technology => Technology,
            display_time => DisplayTime,
            trigger_id => TriggerId,
            location_x => LocationX,
            location_y => LocationY,
            location_object_reference => LocationObjectReference,
            area_x1 => AreaX1,
            area_y1 => AreaY1,
            area_x2 => AreaX2,
            area_y2 => AreaY2,
            object_group => ObjectGroup,
            object_type => ObjectType,
            instruction_panel_position => InstructionPanelPosition,
            attack_stance => AttackStance,
            time_unit => TimeUnit,
            enabled => Enabled,
            variable => Variable,
            timer => Timer,
            operation => Operation,
            player_color => PlayerColor,
            armour_attack_quantity => ArmourAttackQuantity,
            armour_attack_class => ArmourAttackClass,
            object_attributes => ObjectAttributes,
        }
        texts {
            message => Message,
            sound_name => SoundName,
        }
    }
}

/// A placed object as it appears in a scenario export
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct UnitRecord {
    pub player: i32,
    pub unit_const: u32,
    pub x: f32,
    pub y: f32,
}

/// A decoded scenario held in memory, typically deserialized from the JSON
/// export of the scenario editing library
///
/// ```rust
/// use rge::scenario::{Player, ScenarioDump, ScenarioHandle};
/// let dump = ScenarioDump::from_slice(br#"{
///     "map_size": 120,
///     "units": [{ "player": 1, "unit_const": 4, "x": 10.5, "y": 3.0 }],
///     "triggers": [{ "name": "Start", "conditions": [{ "condition_type": 8, "timer": 30 }] }]
/// }"#)?;
/// assert_eq!(dump.map_size(), 120);
/// assert_eq!(dump.units_by_player(Player::One).len(), 1);
/// assert!(dump.triggers()[0].enabled);
/// assert_eq!(dump.triggers()[0].conditions[0].source_player, -1);
/// # Ok::<(), rge::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
pub struct ScenarioDump {
    pub map_size: u32,
    #[cfg_attr(feature = "json", serde(default))]
    pub units: Vec<UnitRecord>,
    #[cfg_attr(feature = "json", serde(default))]
    pub triggers: Vec<RawTrigger>,
}

#[cfg(feature = "json")]
impl ScenarioDump {
    /// Deserialize a scenario export
    pub fn from_slice(data: &[u8]) -> Result<Self, crate::Error> {
        let dump: ScenarioDump = serde_json::from_slice(data)?;
        for unit in dump.units.iter().filter(|x| Player::from_raw(x.player).is_none()) {
            log::warn!(
                "unit {} at ({}, {}) belongs to invalid player slot {}",
                unit.unit_const,
                unit.x,
                unit.y,
                unit.player
            );
        }
        Ok(dump)
    }
}

impl ScenarioHandle for ScenarioDump {
    fn map_size(&self) -> u32 {
        self.map_size
    }

    fn units_by_player(&self, player: Player) -> Vec<PlacedObject> {
        self.units
            .iter()
            .filter(|x| x.player == player.value())
            .map(|x| PlacedObject {
                player,
                type_code: x.unit_const,
                x: x.x,
                y: x.y,
            })
            .collect()
    }

    fn triggers(&self) -> &[RawTrigger] {
        &self.triggers
    }
}

/// Load a scenario export from the file system
#[cfg(feature = "json")]
pub fn load(path: impl AsRef<std::path::Path>) -> Result<ScenarioDump, crate::Error> {
    let data = std::fs::read(path)?;
    ScenarioDump::from_slice(&data)
}
