use super::asset::{CreatureType, ItemType};
use crate::cfg;
use crate::cmtp::{Attributes, Class, Creature, CreatureKind, Equipment, Item, Stats};

pub struct Builder {
    creature: Creature,
}

impl Builder {
    pub(super) fn new(id: u32) -> Self {
        Builder {
            creature: Creature {
                id,
                name: String::new(),
                species: String::new(),
                kind: CreatureKind::Monster,
                class: Class::Unknown,
                row: 0,
                col: 0,
                glyph: '?',
                stats: Stats::default(),
                attributes: Attributes::default(),
                heal_rate: cfg::HEAL_RATE,
                heal_counter: 0,
                inventory: vec![],
                equipment: Equipment::default(),
                area: 0,
            },
        }
    }

    pub fn create(self) -> Creature {
        self.creature
    }

    /// copies name, looks and stats of a type-table entry
    pub fn add_template(mut self, template: &CreatureType) -> Self {
        self.creature.name = template.name.clone();
        self.creature.species = template.species.clone();
        self.creature.glyph = template.glyph;
        self.creature.stats = template.stats;
        self.creature.attributes = template.attributes;
        self.creature.heal_rate = template.heal_rate;
        self
    }

    pub fn add_name(mut self, name: impl Into<String>, species: impl Into<String>) -> Self {
        self.creature.name = name.into();
        self.creature.species = species.into();
        self
    }

    pub fn add_kind(mut self, kind: CreatureKind) -> Self {
        self.creature.kind = kind;
        self
    }

    pub fn add_class(mut self, class: Class) -> Self {
        self.creature.class = class;
        self
    }

    pub fn add_glyph(mut self, glyph: char) -> Self {
        self.creature.glyph = glyph;
        self
    }

    pub fn add_stats(mut self, stats: Stats) -> Self {
        self.creature.stats = stats;
        self
    }

    pub fn add_attributes(mut self, attributes: Attributes) -> Self {
        self.creature.attributes = attributes;
        self
    }

    pub fn add_heal_rate(mut self, heal_rate: i32) -> Self {
        self.creature.heal_rate = heal_rate;
        self
    }

    pub fn add_position(mut self, area: usize, row: i32, col: i32) -> Self {
        self.creature.area = area;
        self.creature.row = row;
        self.creature.col = col;
        self
    }

    pub fn add_inventory(mut self, items: Vec<Item>) -> Self {
        self.creature.inventory.extend(items);
        self
    }
}

/// A carried (not yet placed) item made from a type-table entry.
pub fn item_from_template(template: &ItemType) -> Item {
    Item {
        name: template.name.clone(),
        category: template.category.clone(),
        row: 0,
        col: 0,
        glyph: template.glyph,
        area: None,
        slot: template.slot,
        equippable: template.equippable,
        broken: false,
        durability_current: template.durability,
        durability_maximum: template.durability,
        purchase_price: template.purchase_price,
        sell_price: template.sell_price,
        weight: template.weight,
        attack_bonus: template.attack_bonus,
        defense_bonus: template.defense_bonus,
    }
}

/// The remains of a creature that carried nothing.
pub fn corpse(name: &str, area: usize, row: i32, col: i32, price: i32) -> Item {
    Item {
        name: format!("{} corpse", name),
        category: String::from(cfg::CORPSE_CATEGORY),
        row,
        col,
        glyph: cfg::CORPSE_GLYPH,
        area: Some(area),
        slot: None,
        equippable: false,
        broken: false,
        durability_current: 1,
        durability_maximum: 1,
        purchase_price: price,
        sell_price: price / 2,
        weight: cfg::CORPSE_WEIGHT,
        attack_bonus: 0,
        defense_bonus: 0,
    }
}
