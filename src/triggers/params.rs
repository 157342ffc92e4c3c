use crate::{objects::ObjectRef, scenario::Player};

/// A named parameter of a condition or effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Param {
    SourcePlayer,
    TargetPlayer,
    Quantity,
    Attribute,
    UnitObject,
    NextObject,
    ObjectList,
    ObjectListUnitId,
    Technology,
    Timer,
    AreaX1,
    AreaY1,
    AreaX2,
    AreaY2,
    LocationX,
    LocationY,
    LocationObjectReference,
    ObjectGroup,
    ObjectType,
    ObjectState,
    AiSignal,
    AiScriptGoal,
    Inverted,
    Variable,
    Comparison,
    Operation,
    UnitAiAction,
    XsFunction,
    TributeList,
    Diplomacy,
    DisplayTime,
    TimeUnit,
    TriggerId,
    InstructionPanelPosition,
    AttackStance,
    Enabled,
    PlayerColor,
    ArmourAttackQuantity,
    ArmourAttackClass,
    ObjectAttributes,
    Message,
    SoundName,
}

/// How a parameter's raw slot is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A player slot number
    Player,

    /// A unit, building, hero or other object type code
    ObjectType,

    /// A 0-based position in the trigger list
    TriggerOrdinal,

    /// A boolean stored as an integer
    Flag,

    /// A duration that is only meaningful when positive
    Duration,

    /// Free text
    Text,

    /// Any other integer
    Int,
}

impl Param {
    /// Keyword the parameter is emitted under
    pub fn keyword(&self) -> &'static str {
        match self {
            Param::SourcePlayer => "source_player",
            Param::TargetPlayer => "target_player",
            Param::Quantity => "quantity",
            Param::Attribute => "attribute",
            Param::UnitObject => "unit_object",
            Param::NextObject => "next_object",
            Param::ObjectList => "object_list",
            Param::ObjectListUnitId => "object_list_unit_id",
            Param::Technology => "technology",
            Param::Timer => "timer",
            Param::AreaX1 => "area_x1",
            Param::AreaY1 => "area_y1",
            Param::AreaX2 => "area_x2",
            Param::AreaY2 => "area_y2",
            Param::LocationX => "location_x",
            Param::LocationY => "location_y",
            Param::LocationObjectReference => "location_object_reference",
            Param::ObjectGroup => "object_group",
            Param::ObjectType => "object_type",
            Param::ObjectState => "object_state",
            Param::AiSignal => "ai_signal",
            Param::AiScriptGoal => "ai_script_goal",
            Param::Inverted => "inverted",
            Param::Variable => "variable",
            Param::Comparison => "comparison",
            Param::Operation => "operation",
            Param::UnitAiAction => "unit_ai_action",
            Param::XsFunction => "xs_function",
            Param::TributeList => "tribute_list",
            Param::Diplomacy => "diplomacy",
            Param::DisplayTime => "display_time",
            Param::TimeUnit => "time_unit",
            Param::TriggerId => "trigger_id",
            Param::InstructionPanelPosition => "instruction_panel_position",
            Param::AttackStance => "attack_stance",
            Param::Enabled => "enabled",
            Param::PlayerColor => "player_color",
            Param::ArmourAttackQuantity => "armour_attack_quantity",
            Param::ArmourAttackClass => "armour_attack_class",
            Param::ObjectAttributes => "object_attributes",
            Param::Message => "message",
            Param::SoundName => "sound_name",
        }
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            Param::SourcePlayer | Param::TargetPlayer => ParamKind::Player,
            Param::ObjectList | Param::ObjectListUnitId => ParamKind::ObjectType,
            Param::TriggerId => ParamKind::TriggerOrdinal,
            Param::Enabled | Param::Inverted => ParamKind::Flag,
            Param::DisplayTime | Param::Timer => ParamKind::Duration,
            Param::Message | Param::SoundName | Param::XsFunction => ParamKind::Text,
            _ => ParamKind::Int,
        }
    }

    /// Interpret a raw slot. Returns `None` when the slot holds its unset
    /// sentinel (or a value that cannot be meaningful for the parameter, such
    /// as a player slot outside of `0..=8`).
    ///
    /// ```rust
    /// use rge::triggers::{Param, RawValue, Value};
    /// use rge::scenario::Player;
    /// assert_eq!(Param::SourcePlayer.decode(RawValue::Int(1)), Some(Value::Player(Player::One)));
    /// assert_eq!(Param::SourcePlayer.decode(RawValue::Int(-1)), None);
    /// assert_eq!(Param::DisplayTime.decode(RawValue::Int(0)), None);
    /// assert_eq!(Param::Message.decode(RawValue::Text("")), None);
    /// ```
    pub fn decode(&self, raw: RawValue) -> Option<Value> {
        let value = match raw {
            RawValue::Absent => return None,
            RawValue::Text(text) if self.kind() == ParamKind::Text && !text.is_empty() => {
                return Some(Value::Text(text.to_string()))
            }
            RawValue::Text(_) => return None,
            RawValue::Int(value) => value,
        };

        if value == UNSET {
            return None;
        }

        match self.kind() {
            ParamKind::Player => Player::from_raw(value).map(Value::Player),
            ParamKind::ObjectType => u32::try_from(value)
                .ok()
                .map(|code| Value::Object(ObjectRef::new(code))),
            ParamKind::TriggerOrdinal => u32::try_from(value).ok().map(Value::Trigger),
            ParamKind::Flag => Some(Value::Flag(value != 0)),
            ParamKind::Duration => (value > 0).then_some(Value::Int(value)),
            ParamKind::Int => Some(Value::Int(value)),
            ParamKind::Text => None,
        }
    }
}

/// Sentinel stored in numeric slots that are not set
pub const UNSET: i32 = -1;

/// The contents of a record slot before interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    /// The record has no slot for the parameter
    Absent,
    Int(i32),
    Text(&'a str),
}

/// An interpreted parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Player(Player),
    Object(ObjectRef),
    Trigger(u32),
    Flag(bool),
    Int(i32),
    Text(String),
}

/// A parameter paired with its value
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub param: Param,
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(Param::TriggerId, RawValue::Int(0), Some(Value::Trigger(0)))]
    #[case(Param::TriggerId, RawValue::Int(57), Some(Value::Trigger(57)))]
    #[case(Param::TriggerId, RawValue::Int(-4), None)]
    #[case(Param::Enabled, RawValue::Int(0), Some(Value::Flag(false)))]
    #[case(Param::Enabled, RawValue::Int(1), Some(Value::Flag(true)))]
    #[case(Param::Quantity, RawValue::Int(0), Some(Value::Int(0)))]
    #[case(Param::AreaX1, RawValue::Int(-1), None)]
    #[case(Param::Timer, RawValue::Int(30), Some(Value::Int(30)))]
    #[case(Param::TargetPlayer, RawValue::Int(9), None)]
    #[case(Param::TargetPlayer, RawValue::Int(0), Some(Value::Player(Player::Gaia)))]
    #[case(Param::Quantity, RawValue::Absent, None)]
    #[case(Param::Quantity, RawValue::Text("5"), None)]
    fn test_decode(#[case] param: Param, #[case] raw: RawValue, #[case] expected: Option<Value>) {
        assert_eq!(param.decode(raw), expected);
    }

    #[test]
    fn test_object_types_are_resolved() {
        let Some(Value::Object(obj)) = Param::ObjectListUnitId.decode(RawValue::Int(4)) else {
            panic!("expected an object reference");
        };
        assert_eq!(obj.code, 4);
        assert!(obj.object.is_some());
    }
}
