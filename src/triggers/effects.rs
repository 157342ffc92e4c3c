use super::{Opcode, Param};

operations! {
    /// Effects a trigger performs once its conditions hold
    EffectKind {
        ChangeDiplomacy = "change_diplomacy" [SourcePlayer, TargetPlayer, Diplomacy],
        ResearchTechnology = "research_technology" [SourcePlayer, Technology],
        SendChat = "send_chat" [SourcePlayer, Message, SoundName],
        PlaySound = "play_sound" [SourcePlayer, LocationX, LocationY, LocationObjectReference, SoundName],
        ActivateTrigger = "activate_trigger" [TriggerId],
        DeactivateTrigger = "deactivate_trigger" [TriggerId],
        AiScriptGoal = "ai_script_goal" [AiScriptGoal],
        CreateObject = "create_object" [SourcePlayer, LocationX, LocationY, ObjectListUnitId],
        TaskObject = "task_object" [SourcePlayer, LocationX, LocationY, LocationObjectReference, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        DeclareVictory = "declare_victory" [SourcePlayer, Enabled],
        KillObject = "kill_object" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        RemoveObject = "remove_object" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        ChangeView = "change_view" [SourcePlayer, LocationX, LocationY],
        Unload = "unload" [SourcePlayer, LocationX, LocationY, LocationObjectReference, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        ChangeOwnership = "change_ownership" [SourcePlayer, TargetPlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        Patrol = "patrol" [SourcePlayer, LocationX, LocationY, LocationObjectReference, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        DisplayInstructions = "display_instructions" [SourcePlayer, Message, DisplayTime, InstructionPanelPosition, SoundName],
        ClearInstructions = "clear_instructions" [InstructionPanelPosition],
        FreezeObject = "freeze_object" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        UseAdvancedButtons = "use_advanced_buttons" [],
        DamageObject = "damage_object" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType, Quantity],
        PlaceFoundation = "place_foundation" [SourcePlayer, LocationX, LocationY, ObjectListUnitId],
        ChangeObjectName = "change_object_name" [SourcePlayer, Message, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId],
        ChangeObjectHp = "change_object_hp" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType, Quantity, Operation],
        ChangeObjectAttack = "change_object_attack" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType, Quantity, Operation],
        StopObject = "stop_object" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        AttackMove = "attack_move" [SourcePlayer, LocationX, LocationY, LocationObjectReference, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        ChangeObjectArmor = "change_object_armor" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType, Quantity, Operation, ArmourAttackQuantity, ArmourAttackClass],
        ChangeObjectRange = "change_object_range" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType, Quantity, Operation],
        ChangeObjectSpeed = "change_object_speed" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType, Quantity],
        HealObject = "heal_object" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType, Quantity],
        TeleportObject = "teleport_object" [SourcePlayer, LocationX, LocationY, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        ChangeObjectStance = "change_object_stance" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType, AttackStance],
        DisplayTimer = "display_timer" [SourcePlayer, Message, DisplayTime, TimeUnit, Timer],
        EnableDisableObject = "enable_disable_object" [SourcePlayer, ObjectListUnitId, Enabled],
        EnableDisableTechnology = "enable_disable_technology" [SourcePlayer, Technology, Enabled],
        EnableUnitTargeting = "enable_unit_targeting" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        FlashObjects = "flash_objects" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        ChangePlayerName = "change_player_name" [SourcePlayer, Message],
        ChangeTrainLocation = "change_train_location" [SourcePlayer, ObjectListUnitId, LocationObjectReference],
        ChangeResearchLocation = "change_research_location" [SourcePlayer, Technology, LocationObjectReference],
        ChangeCivilizationName = "change_civilization_name" [SourcePlayer, Message],
        CreateGarrisonedObject = "create_garrisoned_object" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId],
        AcknowledgeAiSignal = "acknowledge_ai_signal" [AiScriptGoal],
        ChangeObjectDescription = "change_object_description" [SourcePlayer, Message, ObjectListUnitId],
        ChangePlayerColor = "change_player_color" [SourcePlayer, PlayerColor],
        Tribute = "tribute" [SourcePlayer, TargetPlayer, Quantity, TributeList],
        UnlockGate = "unlock_gate" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId],
        LockGate = "lock_gate" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId],
        ChangeVariable = "change_variable" [Message, Quantity, Operation, Variable],
        ScriptCall = "script_call" [Message],
        ChangeObjectIcon = "change_object_icon" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        ReplaceObject = "replace_object" [SourcePlayer, TargetPlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType],
        ChangeObjectPlayerColor = "change_object_player_color" [SourcePlayer, AreaX1, AreaY1, AreaX2, AreaY2, ObjectListUnitId, ObjectGroup, ObjectType, PlayerColor],
        DisplayText = "display_text" [SourcePlayer, Message, DisplayTime, SoundName],
        ChangeTechnologyCost = "change_technology_cost" [SourcePlayer, Technology, Quantity],
        ChangeTechnologyResearchTime = "change_technology_research_time" [SourcePlayer, Technology, Quantity, Operation],
        ChangeTechnologyName = "change_technology_name" [SourcePlayer, Technology, Message],
        ChangeTechnologyDescription = "change_technology_description" [SourcePlayer, Technology, Message],
    }
}

impl EffectKind {
    /// Resolve an effect type code
    pub fn from_code(code: u32) -> Opcode<EffectKind> {
        let kind = match code {
            0 => return Opcode::Nop,
            1 => EffectKind::ChangeDiplomacy,
            2 => EffectKind::ResearchTechnology,
            3 => EffectKind::SendChat,
            4 => EffectKind::PlaySound,
            5 | 51 => EffectKind::ActivateTrigger,
            6 | 52 => EffectKind::DeactivateTrigger,
            7 | 53 => EffectKind::AiScriptGoal,
            8 => EffectKind::CreateObject,
            9 => EffectKind::TaskObject,
            10 => EffectKind::DeclareVictory,
            11 => EffectKind::KillObject,
            12 => EffectKind::RemoveObject,
            13 => EffectKind::ChangeView,
            14 => EffectKind::Unload,
            15 => EffectKind::ChangeOwnership,
            16 | 19 => EffectKind::Patrol,
            17 => EffectKind::DisplayInstructions,
            18 => EffectKind::ClearInstructions,
            20 => EffectKind::FreezeObject,
            21 => EffectKind::UseAdvancedButtons,
            22 => EffectKind::DamageObject,
            23 => EffectKind::PlaceFoundation,
            24 => EffectKind::ChangeObjectName,
            25 => EffectKind::ChangeObjectHp,
            26 => EffectKind::ChangeObjectAttack,
            27 => EffectKind::StopObject,
            28 => EffectKind::AttackMove,
            29 => EffectKind::ChangeObjectArmor,
            30 => EffectKind::ChangeObjectRange,
            31 => EffectKind::ChangeObjectSpeed,
            32 => EffectKind::HealObject,
            33 => EffectKind::TeleportObject,
            34 => EffectKind::ChangeObjectStance,
            35 => EffectKind::DisplayTimer,
            36 => EffectKind::EnableDisableObject,
            37 => EffectKind::EnableDisableTechnology,
            38 => EffectKind::EnableUnitTargeting,
            39 => EffectKind::FlashObjects,
            40 => EffectKind::ChangePlayerName,
            41 => EffectKind::ChangeTrainLocation,
            42 => EffectKind::ChangeResearchLocation,
            43 => EffectKind::ChangeCivilizationName,
            44 => EffectKind::CreateGarrisonedObject,
            45 => EffectKind::AcknowledgeAiSignal,
            46 => EffectKind::ChangeObjectDescription,
            47 => EffectKind::ChangePlayerColor,
            48 => EffectKind::Tribute,
            49 => EffectKind::UnlockGate,
            50 => EffectKind::LockGate,
            54 => EffectKind::ChangeVariable,
            55 => EffectKind::ScriptCall,
            56 => EffectKind::ChangeObjectIcon,
            57 => EffectKind::ReplaceObject,
            58 => EffectKind::ChangeObjectPlayerColor,
            59 => EffectKind::DisplayText,
            60 => EffectKind::ChangeTechnologyCost,
            61 => EffectKind::ChangeTechnologyResearchTime,
            62 => EffectKind::ChangeTechnologyName,
            63 => EffectKind::ChangeTechnologyDescription,
            x => return Opcode::Unknown(x),
        };

        Opcode::Known(kind)
    }
}
