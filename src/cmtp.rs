use crate::cfg;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Player {
    pub id: u32,
    pub area: usize,
    pub state: PlayerState,
    pub action: PlayerAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlayerState {
    MakingTurn,
    Dead,
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::MakingTurn
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    None,
    GoToUp,
    GoToDown,
    GoToLeft,
    GoToRight,
    GoToUpLeft,
    GoToUpRight,
    GoToDownLeft,
    GoToDownRight,
    SkipTurn,
    PickUp(usize),
    Equip(usize),
    Unequip(Slot),
    DropItem(usize),
}

impl Default for PlayerAction {
    fn default() -> Self {
        PlayerAction::None
    }
}

/// A cell of the level and its properties
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub glyph: char,
    pub block_move: bool,
    pub block_sight: bool,
}

impl Tile {
    pub fn wall() -> Self {
        Tile {
            glyph: cfg::WALL_GLYPH,
            block_move: true,
            block_sight: true,
        }
    }

    pub fn floor() -> Self {
        Tile {
            glyph: cfg::FLOOR_GLYPH,
            block_move: false,
            block_sight: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CreatureKind {
    Player,
    Monster,
}

impl Default for CreatureKind {
    fn default() -> Self {
        CreatureKind::Monster
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Intelligence,
    Agility,
    Wisdom,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Attribute::Strength => write!(f, "strength"),
            Attribute::Intelligence => write!(f, "intelligence"),
            Attribute::Agility => write!(f, "agility"),
            Attribute::Wisdom => write!(f, "wisdom"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Class {
    Unknown,
    Warrior,
    Wizard,
    Thief,
    Cleric,
}

impl Default for Class {
    fn default() -> Self {
        Class::Unknown
    }
}

impl Class {
    /// The ability score a character of this class depends on.
    pub fn essential_attribute(self) -> Option<Attribute> {
        match self {
            Class::Unknown => None,
            Class::Warrior => Some(Attribute::Strength),
            Class::Wizard => Some(Attribute::Intelligence),
            Class::Thief => Some(Attribute::Agility),
            Class::Cleric => Some(Attribute::Wisdom),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Class::Unknown => write!(f, "Unknown"),
            Class::Warrior => write!(f, "Warrior"),
            Class::Wizard => write!(f, "Wizard"),
            Class::Thief => write!(f, "Thief"),
            Class::Cleric => write!(f, "Cleric"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub intelligence: i32,
    pub agility: i32,
    pub wisdom: i32,
}

impl Attributes {
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::Agility => self.agility,
            Attribute::Wisdom => self.wisdom,
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Attributes {
            strength: cfg::PLAYER_ATTRIBUTE,
            intelligence: cfg::PLAYER_ATTRIBUTE,
            agility: cfg::PLAYER_ATTRIBUTE,
            wisdom: cfg::PLAYER_ATTRIBUTE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub species: String,
    pub kind: CreatureKind,
    pub class: Class,
    pub row: i32,
    pub col: i32,
    pub glyph: char,
    pub stats: Stats,
    pub attributes: Attributes,
    pub heal_rate: i32,
    pub heal_counter: i32,
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
    /// Index of the area this creature lives in, see `World::areas`.
    pub area: usize,
}

impl Creature {
    pub fn is_player(&self) -> bool {
        self.kind == CreatureKind::Player
    }

    pub fn is_alive(&self) -> bool {
        self.stats.hp > 0
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Head,
    Neck,
    Torso,
    MainHand,
    OffHand,
    Legs,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Head,
        Slot::Neck,
        Slot::Torso,
        Slot::MainHand,
        Slot::OffHand,
        Slot::Legs,
    ];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Slot::Head => write!(f, "head"),
            Slot::Neck => write!(f, "neck"),
            Slot::Torso => write!(f, "torso"),
            Slot::MainHand => write!(f, "main hand"),
            Slot::OffHand => write!(f, "off hand"),
            Slot::Legs => write!(f, "legs"),
        }
    }
}

/// Content of one equipment slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Worn {
    Empty,
    Occupied(Item),
}

impl Default for Worn {
    fn default() -> Self {
        Worn::Empty
    }
}

impl Worn {
    pub fn item(&self) -> Option<&Item> {
        match self {
            Worn::Empty => None,
            Worn::Occupied(item) => Some(item),
        }
    }

    pub fn item_mut(&mut self) -> Option<&mut Item> {
        match self {
            Worn::Empty => None,
            Worn::Occupied(item) => Some(item),
        }
    }

    pub fn take(&mut self) -> Option<Item> {
        match std::mem::take(self) {
            Worn::Empty => None,
            Worn::Occupied(item) => Some(item),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Equipment {
    pub head: Worn,
    pub neck: Worn,
    pub torso: Worn,
    pub main_hand: Worn,
    pub off_hand: Worn,
    pub legs: Worn,
}

impl Equipment {
    pub fn slot(&self, slot: Slot) -> &Worn {
        match slot {
            Slot::Head => &self.head,
            Slot::Neck => &self.neck,
            Slot::Torso => &self.torso,
            Slot::MainHand => &self.main_hand,
            Slot::OffHand => &self.off_hand,
            Slot::Legs => &self.legs,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut Worn {
        match slot {
            Slot::Head => &mut self.head,
            Slot::Neck => &mut self.neck,
            Slot::Torso => &mut self.torso,
            Slot::MainHand => &mut self.main_hand,
            Slot::OffHand => &mut self.off_hand,
            Slot::Legs => &mut self.legs,
        }
    }

    /// returns all equipped items
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        Slot::ALL.iter().filter_map(move |&slot| self.slot(slot).item())
    }

    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub row: i32,
    pub col: i32,
    pub glyph: char,
    /// `Some(area index)` while lying on the ground, `None` while carried.
    pub area: Option<usize>,
    pub slot: Option<Slot>,
    pub equippable: bool,
    pub broken: bool,
    pub durability_current: i32,
    pub durability_maximum: i32,
    pub purchase_price: i32,
    pub sell_price: i32,
    pub weight: i32,
    pub attack_bonus: i32,
    pub defense_bonus: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MessageKind {
    Info,
    Combat,
    Warning,
    Death,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogMessage(pub String, pub MessageKind);
