//! Symbolic names for object type codes.
//!
//! The scenario editing library groups object types into four catalogs. A code
//! belongs to at most one catalog; codes in none of them are unresolved and
//! are carried through as raw numbers.

use std::fmt;

/// The catalog an object type is listed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Catalog {
    Unit,
    Building,
    Hero,
    Other,
}

impl Catalog {
    /// Every catalog in lookup order
    pub const ALL: [Catalog; 4] = [
        Catalog::Unit,
        Catalog::Building,
        Catalog::Hero,
        Catalog::Other,
    ];

    /// Name of the catalog in the scenario editing library
    pub fn name(&self) -> &'static str {
        match self {
            Catalog::Unit => "UnitInfo",
            Catalog::Building => "BuildingInfo",
            Catalog::Hero => "HeroInfo",
            Catalog::Other => "OtherInfo",
        }
    }

    fn table(&self) -> &'static [(u32, &'static str)] {
        match self {
            Catalog::Unit => UNITS,
            Catalog::Building => BUILDINGS,
            Catalog::Hero => HEROES,
            Catalog::Other => OTHERS,
        }
    }
}

/// A resolved object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectType {
    pub catalog: Catalog,
    pub name: &'static str,
    pub id: u32,
}

impl ObjectType {
    /// Looks up the object type with the given code
    ///
    /// ```rust
    /// use rge::objects::{Catalog, ObjectType};
    /// let knight = ObjectType::lookup(38).unwrap();
    /// assert_eq!(knight.catalog, Catalog::Unit);
    /// assert_eq!(knight.to_string(), "UnitInfo.KNIGHT.ID");
    /// assert!(ObjectType::lookup(99_999).is_none());
    /// ```
    pub fn lookup(code: u32) -> Option<ObjectType> {
        Catalog::ALL.iter().find_map(|catalog| {
            let table = catalog.table();
            let idx = table.binary_search_by_key(&code, |(id, _)| *id).ok()?;
            Some(ObjectType {
                catalog: *catalog,
                name: table[idx].1,
                id: code,
            })
        })
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.ID", self.catalog.name(), self.name)
    }
}

/// An object type code along with its resolution, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub code: u32,
    pub object: Option<ObjectType>,
}

impl ObjectRef {
    pub fn new(code: u32) -> Self {
        ObjectRef {
            code,
            object: ObjectType::lookup(code),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.object.is_some()
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object {
            Some(object) => object.fmt(f),
            None => write!(f, "{}", self.code),
        }
    }
}

// Tables are sorted by id

static UNITS: &[(u32, &str)] = &[
    (4, "ARCHER"),
    (5, "HAND_CANNONEER"),
    (6, "ELITE_SKIRMISHER"),
    (7, "SKIRMISHER"),
    (8, "LONGBOWMAN"),
    (11, "MANGUDAI"),
    (13, "FISHING_SHIP"),
    (17, "TRADE_COG"),
    (21, "WAR_GALLEY"),
    (24, "CROSSBOWMAN"),
    (25, "TEUTONIC_KNIGHT"),
    (35, "BATTERING_RAM"),
    (36, "BOMBARD_CANNON"),
    (38, "KNIGHT"),
    (39, "CAVALRY_ARCHER"),
    (40, "CATAPHRACT"),
    (41, "HUSKARL"),
    (42, "TREBUCHET"),
    (46, "JANISSARY"),
    (48, "WILD_BOAR"),
    (56, "VILLAGER_MALE_FISHERMAN"),
    (57, "VILLAGER_FEMALE_FISHERMAN"),
    (65, "DEER"),
    (73, "CHU_KO_NU"),
    (74, "MILITIA"),
    (75, "MAN_AT_ARMS"),
    (77, "LONG_SWORDSMAN"),
    (83, "VILLAGER_MALE"),
    (93, "SPEARMAN"),
    (118, "VILLAGER_MALE_BUILDER"),
    (120, "VILLAGER_MALE_FORAGER"),
    (122, "VILLAGER_MALE_HUNTER"),
    (123, "VILLAGER_MALE_LUMBERJACK"),
    (124, "VILLAGER_MALE_STONE_MINER"),
    (125, "MONK"),
    (126, "WOLF"),
    (128, "TRADE_CART_EMPTY"),
    (156, "VILLAGER_MALE_REPAIRER"),
    (185, "SLINGER"),
    (204, "TRADE_CART_FULL"),
    (207, "IMPERIAL_CAMEL_RIDER"),
    (212, "VILLAGER_FEMALE_BUILDER"),
    (214, "VILLAGER_FEMALE_FARMER"),
    (216, "VILLAGER_FEMALE_HUNTER"),
    (218, "VILLAGER_FEMALE_LUMBERJACK"),
    (220, "VILLAGER_FEMALE_STONE_MINER"),
    (232, "WOAD_RAIDER"),
    (239, "WAR_ELEPHANT"),
    (250, "LONGBOAT"),
    (259, "VILLAGER_MALE_FARMER"),
    (279, "SCORPION"),
    (280, "MANGONEL"),
    (281, "THROWING_AXEMAN"),
    (282, "MAMELUKE"),
    (283, "CAVALIER"),
    (286, "MONK_WITH_RELIC"),
    (291, "SAMURAI"),
    (293, "VILLAGER_FEMALE"),
    (305, "LLAMA"),
    (329, "CAMEL_RIDER"),
    (330, "HEAVY_CAMEL_RIDER"),
    (331, "TREBUCHET_PACKED"),
    (354, "VILLAGER_FEMALE_FORAGER"),
    (358, "PIKEMAN"),
    (359, "HALBERDIER"),
    (420, "CANNON_GALLEON"),
    (422, "CAPPED_RAM"),
    (434, "KING"),
    (440, "PETARD"),
    (441, "HUSSAR"),
    (442, "GALLEON"),
    (448, "SCOUT_CAVALRY"),
    (473, "TWO_HANDED_SWORDSMAN"),
    (474, "HEAVY_CAVALRY_ARCHER"),
    (492, "ARBALESTER"),
    (527, "DEMOLITION_SHIP"),
    (528, "HEAVY_DEMOLITION_SHIP"),
    (529, "FIRE_SHIP"),
    (530, "ELITE_LONGBOWMAN"),
    (531, "ELITE_THROWING_AXEMAN"),
    (532, "FAST_FIRE_SHIP"),
    (533, "ELITE_LONGBOAT"),
    (534, "ELITE_WOAD_RAIDER"),
    (539, "GALLEY"),
    (542, "HEAVY_SCORPION"),
    (545, "TRANSPORT_SHIP"),
    (546, "LIGHT_CAVALRY"),
    (548, "SIEGE_RAM"),
    (550, "ONAGER"),
    (553, "ELITE_CATAPHRACT"),
    (554, "ELITE_TEUTONIC_KNIGHT"),
    (555, "ELITE_HUSKARL"),
    (556, "ELITE_MAMELUKE"),
    (557, "ELITE_JANISSARY"),
    (558, "ELITE_WAR_ELEPHANT"),
    (559, "ELITE_CHU_KO_NU"),
    (560, "ELITE_SAMURAI"),
    (561, "ELITE_MANGUDAI"),
    (567, "CHAMPION"),
    (569, "PALADIN"),
    (579, "VILLAGER_MALE_GOLD_MINER"),
    (581, "VILLAGER_FEMALE_GOLD_MINER"),
    (588, "SIEGE_ONAGER"),
    (594, "SHEEP"),
    (691, "ELITE_CANNON_GALLEON"),
    (692, "BERSERK"),
    (694, "ELITE_BERSERK"),
    (725, "JAGUAR_WARRIOR"),
    (726, "ELITE_JAGUAR_WARRIOR"),
    (751, "EAGLE_SCOUT"),
    (752, "ELITE_EAGLE_WARRIOR"),
    (753, "EAGLE_WARRIOR"),
    (755, "TARKAN"),
    (757, "ELITE_TARKAN"),
    (763, "PLUMED_ARCHER"),
    (765, "ELITE_PLUMED_ARCHER"),
    (771, "CONQUISTADOR"),
    (773, "ELITE_CONQUISTADOR"),
    (775, "MISSIONARY"),
    (810, "IRON_BOAR"),
    (812, "JAGUAR"),
    (822, "JAVELINA"),
    (827, "WAR_WAGON"),
    (829, "ELITE_WAR_WAGON"),
    (831, "TURTLE_SHIP"),
    (832, "ELITE_TURTLE_SHIP"),
    (833, "TURKEY"),
    (866, "GENOESE_CROSSBOWMAN"),
    (868, "ELITE_GENOESE_CROSSBOWMAN"),
    (869, "MAGYAR_HUSZAR"),
    (871, "ELITE_MAGYAR_HUSZAR"),
    (873, "ELEPHANT_ARCHER"),
    (875, "ELITE_ELEPHANT_ARCHER"),
    (876, "BOYAR"),
    (878, "ELITE_BOYAR"),
    (879, "KAMAYUK"),
    (881, "ELITE_KAMAYUK"),
    (882, "CONDOTTIERO"),
    (1001, "ORGAN_GUN"),
    (1003, "ELITE_ORGAN_GUN"),
    (1004, "CARAVEL"),
    (1006, "ELITE_CARAVEL"),
    (1007, "CAMEL_ARCHER"),
    (1009, "ELITE_CAMEL_ARCHER"),
    (1010, "GENITOUR"),
    (1012, "ELITE_GENITOUR"),
    (1013, "GBETO"),
    (1015, "ELITE_GBETO"),
    (1016, "SHOTEL_WARRIOR"),
    (1018, "ELITE_SHOTEL_WARRIOR"),
    (1060, "GOAT"),
    (1103, "FIRE_GALLEY"),
    (1104, "DEMOLITION_RAFT"),
    (1105, "SIEGE_TOWER"),
    (1120, "BALLISTA_ELEPHANT"),
    (1122, "ELITE_BALLISTA_ELEPHANT"),
    (1123, "KARAMBIT_WARRIOR"),
    (1125, "ELITE_KARAMBIT_WARRIOR"),
    (1126, "ARAMBAI"),
    (1128, "ELITE_ARAMBAI"),
    (1129, "RATTAN_ARCHER"),
    (1131, "ELITE_RATTAN_ARCHER"),
    (1132, "BATTLE_ELEPHANT"),
    (1134, "ELITE_BATTLE_ELEPHANT"),
    (1155, "IMPERIAL_SKIRMISHER"),
    (1225, "KONNIK"),
    (1227, "ELITE_KONNIK"),
    (1228, "KESHIK"),
    (1230, "ELITE_KESHIK"),
    (1231, "KIPCHAK"),
    (1233, "ELITE_KIPCHAK"),
    (1234, "LEITIS"),
    (1236, "ELITE_LEITIS"),
    (1263, "FLAMING_CAMEL"),
    (1370, "STEPPE_LANCER"),
    (1372, "ELITE_STEPPE_LANCER"),
    (1570, "XOLOTL_WARRIOR"),
    (1655, "COUSTILLIER"),
    (1657, "ELITE_COUSTILLIER"),
    (1658, "SERJEANT"),
    (1659, "ELITE_SERJEANT"),
    (1701, "OBUCH"),
    (1703, "ELITE_OBUCH"),
    (1704, "HUSSITE_WAGON"),
    (1706, "ELITE_HUSSITE_WAGON"),
    (1707, "WINGED_HUSSAR"),
    (1709, "HOUFNICE"),
];

static BUILDINGS: &[(u32, &str)] = &[
    (12, "BARRACKS"),
    (45, "DOCK"),
    (49, "SIEGE_WORKSHOP"),
    (50, "FARM"),
    (68, "MILL"),
    (70, "HOUSE"),
    (72, "PALISADE_WALL"),
    (79, "WATCH_TOWER"),
    (82, "CASTLE"),
    (84, "MARKET"),
    (87, "ARCHERY_RANGE"),
    (101, "STABLE"),
    (103, "BLACKSMITH"),
    (104, "MONASTERY"),
    (109, "TOWN_CENTER"),
    (110, "TRADE_WORKSHOP"),
    (117, "STONE_WALL"),
    (155, "FORTIFIED_WALL"),
    (199, "FISH_TRAP"),
    (209, "UNIVERSITY"),
    (234, "GUARD_TOWER"),
    (235, "KEEP"),
    (236, "BOMBARD_TOWER"),
    (276, "WONDER"),
    (487, "GATE"),
    (562, "LUMBER_CAMP"),
    (584, "MINING_CAMP"),
    (598, "OUTPOST"),
    (1021, "FEITORIA"),
    (1251, "KREPOST"),
    (1665, "DONJON"),
    (1754, "CARAVANSERAI"),
];

static HEROES: &[(u32, &str)] = &[
    (629, "JOAN_OF_ARC"),
    (637, "LA_HIRE"),
    (731, "GENGHIS_KHAN"),
    (824, "EL_CID"),
    (1034, "WILLIAM_WALLACE"),
    (1067, "CHARLES_MARTEL"),
    (1081, "TARIQ_IBN_ZIYAD"),
];

static OTHERS: &[(u32, &str)] = &[
    (59, "FORAGE_BUSH"),
    (66, "GOLD_MINE"),
    (69, "SHORE_FISH"),
    (102, "STONE_MINE"),
    (264, "CLIFF_DEFAULT_1"),
    (265, "CLIFF_DEFAULT_2"),
    (266, "CLIFF_DEFAULT_3"),
    (267, "CLIFF_DEFAULT_4"),
    (268, "CLIFF_DEFAULT_5"),
    (269, "CLIFF_DEFAULT_6"),
    (270, "CLIFF_DEFAULT_7"),
    (271, "CLIFF_DEFAULT_8"),
    (272, "CLIFF_DEFAULT_9"),
    (285, "RELIC"),
    (304, "BONFIRE"),
    (310, "MOUNTAIN_2"),
    (311, "MOUNTAIN_1"),
    (345, "RUINS"),
    (348, "TREE_BAMBOO_FOREST"),
    (349, "TREE_OAK"),
    (350, "TREE_PALM_FOREST"),
    (351, "TREE_PINE_FOREST"),
    (399, "TREE_A"),
    (400, "TREE_B"),
    (401, "TREE_C"),
    (402, "TREE_D"),
    (403, "TREE_E"),
    (404, "TREE_F"),
    (405, "TREE_G"),
    (406, "TREE_H"),
    (407, "TREE_I"),
    (408, "TREE_J"),
    (409, "TREE_K"),
    (410, "TREE_L"),
    (413, "TREE_SNOW_PINE"),
    (414, "TREE_JUNGLE"),
    (450, "GREAT_FISH_MARLIN"),
    (455, "FISH_DORADO"),
    (456, "FISH_SALMON"),
    (457, "FISH_TUNA"),
    (458, "FISH_SNAPPER"),
    (600, "FLAG_A"),
    (601, "FLAG_B"),
    (602, "FLAG_C"),
    (603, "FLAG_D"),
    (604, "FLAG_E"),
    (623, "ROCK_1"),
    (744, "MOUNTAIN_3"),
    (745, "MOUNTAIN_4"),
    (858, "BROKEN_CART"),
    (862, "SIGN"),
];
