use super::{Opcode, Param};

operations! {
    /// Conditions a trigger can wait on
    ConditionKind {
        BringObjectToArea = "bring_object_to_area" [SourcePlayer, UnitObject, AreaX1, AreaY1, AreaX2, AreaY2, Inverted],
        BringObjectToObject = "bring_object_to_object" [SourcePlayer, UnitObject, NextObject, Inverted],
        OwnObjects = "own_objects" [SourcePlayer, Quantity, ObjectList, ObjectGroup, ObjectType, AreaX1, AreaY1, AreaX2, AreaY2, Inverted],
        AccumulateAttribute = "accumulate_attribute" [SourcePlayer, Quantity, Attribute, Inverted],
        ObjectsInArea = "objects_in_area" [SourcePlayer, Quantity, ObjectList, ObjectGroup, ObjectType, AreaX1, AreaY1, AreaX2, AreaY2, ObjectState, Inverted],
        DestroyObject = "destroy_object" [SourcePlayer, UnitObject, Inverted],
        CaptureObject = "capture_object" [SourcePlayer, UnitObject, Inverted],
        Timer = "timer" [Timer, Inverted],
        OwnFewerObjects = "own_fewer_objects" [SourcePlayer, Quantity, ObjectList, ObjectGroup, ObjectType, AreaX1, AreaY1, AreaX2, AreaY2, Inverted],
        ObjectSelected = "object_selected" [UnitObject, Inverted],
        AiSignal = "ai_signal" [AiSignal, Inverted],
        PlayerDefeated = "player_defeated" [SourcePlayer, Inverted],
        ObjectHasTarget = "object_has_target" [UnitObject, NextObject, ObjectList, ObjectGroup, ObjectType, Inverted],
        ObjectVisible = "object_visible" [UnitObject, Inverted],
        ObjectNotVisible = "object_not_visible" [UnitObject, Inverted],
        ResearchingTechnology = "researching_technology" [SourcePlayer, Technology, Inverted],
        TechnologyState = "technology_state" [SourcePlayer, Technology, Quantity, Inverted],
        UnitsGarrisoned = "units_garrisoned" [UnitObject, Quantity, Inverted],
        DifficultyLevel = "difficulty_level" [Quantity, Inverted],
        Chance = "chance" [Quantity],
        VariableValue = "variable_value" [Variable, Comparison, Quantity, Inverted],
        ObjectHp = "object_hp" [UnitObject, Comparison, Quantity, Inverted],
        DiplomacyState = "diplomacy_state" [SourcePlayer, TargetPlayer, Quantity, Inverted],
        ScriptCall = "script_call" [XsFunction],
        ObjectVisibleMultiplayer = "object_visible_multiplayer" [SourcePlayer, UnitObject, Inverted],
        ObjectSelectedMultiplayer = "object_selected_multiplayer" [SourcePlayer, UnitObject, Inverted],
        ObjectHasAction = "object_has_action" [UnitObject, NextObject, ObjectList, ObjectGroup, ObjectType, UnitAiAction, Inverted],
        Or = "or" [],
        AiSignalMultiplayer = "ai_signal_multiplayer" [AiSignal, Inverted],
        XsFunction = "xs_function" [XsFunction],
        VictoryTimer = "victory_timer" [Variable, Comparison, Quantity, Inverted],
    }
}

impl ConditionKind {
    /// Resolve a condition type code
    pub fn from_code(code: u32) -> Opcode<ConditionKind> {
        let kind = match code {
            0 => return Opcode::Nop,
            1 => ConditionKind::BringObjectToArea,
            2 => ConditionKind::BringObjectToObject,
            3 => ConditionKind::OwnObjects,
            4 => ConditionKind::AccumulateAttribute,
            5 => ConditionKind::ObjectsInArea,
            6 => ConditionKind::DestroyObject,
            7 => ConditionKind::CaptureObject,
            8 | 10 => ConditionKind::Timer,
            9 => ConditionKind::OwnFewerObjects,
            11 => ConditionKind::ObjectSelected,
            12 => ConditionKind::AiSignal,
            13 => ConditionKind::PlayerDefeated,
            14 => ConditionKind::ObjectHasTarget,
            15 => ConditionKind::ObjectVisible,
            16 => ConditionKind::ObjectNotVisible,
            17 => ConditionKind::ResearchingTechnology,
            18 | 22 => ConditionKind::TechnologyState,
            19 => ConditionKind::UnitsGarrisoned,
            20 => ConditionKind::DifficultyLevel,
            21 => ConditionKind::Chance,
            23 => ConditionKind::VariableValue,
            24 => ConditionKind::ObjectHp,
            25 => ConditionKind::DiplomacyState,
            26 => ConditionKind::ScriptCall,
            27 => ConditionKind::ObjectVisibleMultiplayer,
            28 => ConditionKind::ObjectSelectedMultiplayer,
            29 => ConditionKind::ObjectHasAction,
            30 => ConditionKind::Or,
            31 => ConditionKind::AiSignalMultiplayer,
            32 => ConditionKind::XsFunction,
            33 => ConditionKind::VictoryTimer,
            x => return Opcode::Unknown(x),
        };

        Opcode::Known(kind)
    }
}
