use super::area::Area;
use super::asset::{CreatureTypes, ItemTypes};
use super::entity;
use super::error::{Result, SimError};
use crate::cfg::Config;
use crate::cmtp::{Creature, LogMessage, MessageKind, Player, PlayerState};
use rand::rngs::StdRng;
use rand::SeedableRng as _;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Everything the simulation works on. Passed explicitly to every system.
#[derive(Debug, Serialize, Deserialize)]
pub struct World {
    pub id_count: u32,
    pub config: Config,
    #[serde(skip, default = "fresh_rng")]
    pub rng: StdRng,
    #[serde(skip)]
    pub creature_types: CreatureTypes,
    #[serde(skip)]
    pub item_types: ItemTypes,
    pub areas: Vec<Area>,
    pub player: Player,
    pub log: Vec<LogMessage>,
}

fn fresh_rng() -> StdRng {
    StdRng::from_entropy()
}

impl World {
    pub fn new(config: Config, creature_types: CreatureTypes, item_types: ItemTypes) -> World {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => fresh_rng(),
        };
        World {
            id_count: 0,
            config,
            rng,
            creature_types,
            item_types,
            areas: vec![],
            player: Player::default(),
            log: vec![],
        }
    }

    /// reads the config and both type tables from `assets/`
    pub fn load() -> std::result::Result<World, Box<dyn Error>> {
        let config = Config::load()?;
        let creature_types = CreatureTypes::load()?;
        let item_types = ItemTypes::load()?;
        if creature_types.is_empty() {
            log::warn!("World::load() --> no creature types, levels stay empty");
        }
        if item_types.is_empty() {
            log::warn!("World::load() --> no item types, creatures spawn empty-handed");
        }
        Ok(World::new(config, creature_types, item_types))
    }

    pub fn new_creature(&mut self) -> entity::Builder {
        self.id_count += 1;
        entity::Builder::new(self.id_count)
    }

    pub fn area(&self, index: usize) -> Result<&Area> {
        self.areas.get(index).ok_or(SimError::UnknownArea(index))
    }

    pub fn area_mut(&mut self, index: usize) -> Result<&mut Area> {
        self.areas.get_mut(index).ok_or(SimError::UnknownArea(index))
    }

    /// (area index, index in that area's creature list)
    pub fn locate(&self, id: u32) -> Option<(usize, usize)> {
        self.areas.iter().enumerate().find_map(|(area_index, area)| {
            area.creatures
                .iter()
                .position(|creature| creature.id == id)
                .map(|creature_index| (area_index, creature_index))
        })
    }

    pub fn creature(&self, id: u32) -> Option<&Creature> {
        self.locate(id)
            .map(|(area_index, creature_index)| &self.areas[area_index].creatures[creature_index])
    }

    pub fn creature_mut(&mut self, id: u32) -> Option<&mut Creature> {
        let (area_index, creature_index) = self.locate(id)?;
        Some(&mut self.areas[area_index].creatures[creature_index])
    }

    pub fn player_creature(&self) -> Option<&Creature> {
        self.creature(self.player.id)
    }

    pub fn player_is_alive(&self) -> bool {
        self.player.state != PlayerState::Dead
            && self
                .player_creature()
                .map_or(false, |player| player.is_alive())
    }

    pub fn add_log(&mut self, kind: MessageKind, message: impl Into<String>) {
        let msg = message.into();
        log::info!("game log: \"{}\"", &msg);
        self.log.push(LogMessage(msg, kind));
    }
}

/// return the distance between two points
pub fn distance_to(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> f64 {
    let d_row = to_row - from_row;
    let d_col = to_col - from_col;
    ((d_row.pow(2) + d_col.pow(2)) as f64).sqrt()
}

#[cfg(test)]
mod world_tests {
    use super::*;

    fn seeded_world() -> World {
        let config = Config {
            seed: Some(11),
            ..Default::default()
        };
        World::new(config, CreatureTypes::default(), ItemTypes::default())
    }

    #[test]
    fn creature_ids_are_unique_and_increasing() {
        let mut world = seeded_world();
        let first = world.new_creature().create();
        let second = world.new_creature().create();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn locate_finds_creatures_across_areas() {
        let mut world = seeded_world();
        world.areas.push(Area::from_rows(&["...", "..."]));
        world.areas.push(Area::from_rows(&["...", "..."]));
        let creature = world.new_creature().add_position(1, 1, 2).create();
        let id = creature.id;
        world.areas[1].creatures.push(creature);
        assert_eq!(world.locate(id), Some((1, 0)));
        assert_eq!(world.creature(id).unwrap().position(), (1, 2));
        assert!(world.locate(id + 1).is_none());
    }

    #[test]
    fn unknown_area_is_an_error() {
        let world = seeded_world();
        assert_eq!(world.area(3).err(), Some(SimError::UnknownArea(3)));
    }

    #[test]
    fn no_player_means_not_alive() {
        let world = seeded_world();
        assert!(!world.player_is_alive());
    }

    #[test]
    fn add_log_keeps_messages_in_order() {
        let mut world = seeded_world();
        world.add_log(MessageKind::Info, "first");
        world.add_log(MessageKind::Combat, String::from("second"));
        let texts: Vec<_> = world.log.iter().map(|LogMessage(text, _)| text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance_to(0, 0, 3, 4), 5.0);
        assert_eq!(distance_to(2, 2, 2, 2), 0.0);
    }

    #[test]
    fn load_reads_both_tables() {
        let world = World::load().unwrap();
        assert!(!world.creature_types.is_empty());
        assert!(!world.item_types.is_empty());
    }

    #[test]
    fn world_serializes_without_rng_or_tables() {
        let mut world = seeded_world();
        world.areas.push(Area::from_rows(&["#.#"]));
        let json = serde_json::to_string(&world).unwrap();
        let restored: World = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.areas[0].tiles, world.areas[0].tiles);
        assert!(restored.creature_types.is_empty());
    }
}
