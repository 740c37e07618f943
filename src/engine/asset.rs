use crate::cfg;
use crate::cmtp::{Attributes, Slot, Stats};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::{error::Error, fs, io, io::Read as _};

/// Template of a spawnable creature.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatureType {
    pub name: String,
    pub species: String,
    pub glyph: char,
    pub stats: Stats,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default = "default_heal_rate")]
    pub heal_rate: i32,
    /// item type ids the creature carries when spawned
    #[serde(default)]
    pub inventory: Vec<String>,
}

/// Template of an item.
#[derive(Clone, Debug, Deserialize)]
pub struct ItemType {
    pub name: String,
    pub category: String,
    pub glyph: char,
    #[serde(default)]
    pub slot: Option<Slot>,
    #[serde(default)]
    pub equippable: bool,
    pub durability: i32,
    #[serde(default)]
    pub purchase_price: i32,
    #[serde(default)]
    pub sell_price: i32,
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub attack_bonus: i32,
    #[serde(default)]
    pub defense_bonus: i32,
}

fn default_heal_rate() -> i32 {
    cfg::HEAL_RATE
}

fn read_asset(path: &str) -> Result<String, Box<dyn Error>> {
    let mut toml_asset = String::new();
    let mut file = fs::File::open(path)?;
    file.read_to_string(&mut toml_asset)?;
    Ok(toml_asset)
}

fn parse_table<T: serde::de::DeserializeOwned>(
    toml_table: &str,
) -> Result<BTreeMap<String, T>, Box<dyn Error>> {
    let values: BTreeMap<String, serde_json::Value> = toml::from_str(toml_table)?;
    let mut table = BTreeMap::new();
    for (id, value) in values {
        let entry = serde_json::from_value::<T>(value).map_err(|err| {
            io::Error::new(io::ErrorKind::InvalidData, format!("{}: {}", id, err))
        })?;
        table.insert(id, entry);
    }
    Ok(table)
}

#[derive(Debug, Default)]
pub struct CreatureTypes {
    types: BTreeMap<String, CreatureType>,
}

impl CreatureTypes {
    pub fn load() -> Result<CreatureTypes, Box<dyn Error>> {
        CreatureTypes::from_toml_str(&read_asset("assets/creatures.toml")?)
    }

    pub fn from_toml_str(toml_table: &str) -> Result<CreatureTypes, Box<dyn Error>> {
        let types = parse_table(toml_table)?;
        Ok(CreatureTypes { types })
    }

    pub fn get(&self, id: &str) -> Option<&CreatureType> {
        self.types.get(id)
    }

    /// type ids in a stable order
    pub fn ids(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ItemTypes {
    types: BTreeMap<String, ItemType>,
}

impl ItemTypes {
    pub fn load() -> Result<ItemTypes, Box<dyn Error>> {
        ItemTypes::from_toml_str(&read_asset("assets/items.toml")?)
    }

    pub fn from_toml_str(toml_table: &str) -> Result<ItemTypes, Box<dyn Error>> {
        let types = parse_table(toml_table)?;
        Ok(ItemTypes { types })
    }

    pub fn get(&self, id: &str) -> Option<&ItemType> {
        self.types.get(id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
