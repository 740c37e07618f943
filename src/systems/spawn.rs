use crate::cfg;
use crate::engine::entity;
use crate::engine::error::{Result, SimError};
use crate::engine::game;
use rand::seq::SliceRandom as _;
use rand::Rng as _;

/// Creates a creature from the named template at (row, col) of an area and
/// returns its id.
pub fn spawn_creature(
    world: &mut game::World,
    type_id: &str,
    area_index: usize,
    row: i32,
    col: i32,
) -> Result<u32> {
    let area = world.area(area_index)?;
    if !area.in_bounds(row, col) {
        log::warn!("spawn_creature() --> ({},{}) is outside the area", row, col);
        return Err(SimError::OutOfBounds { row, col });
    }
    let template = world
        .creature_types
        .get(type_id)
        .cloned()
        .ok_or_else(|| {
            log::warn!("spawn_creature() --> unknown creature type {:?}", type_id);
            SimError::UnknownCreatureType(type_id.to_string())
        })?;
    let mut inventory = vec![];
    for item_id in &template.inventory {
        let item_type = world.item_types.get(item_id).ok_or_else(|| {
            log::warn!("spawn_creature() --> {} carries unknown {:?}", type_id, item_id);
            SimError::UnknownItemType(item_id.clone())
        })?;
        inventory.push(entity::item_from_template(item_type));
    }
    let creature = world
        .new_creature()
        .add_template(&template)
        .add_position(area_index, row, col)
        .add_inventory(inventory)
        .create();
    let id = creature.id;
    world.areas[area_index].creatures.push(creature);
    Ok(id)
}

/// Number of creatures `populate` aims for.
pub fn target_count(height: i32, width: i32) -> usize {
    ((height / 10).max(0) * (width / 10).max(0)) as usize
}

/// Fills an area with creatures, once. Spawn points are drawn at random and
/// redrawn when already used, walled, crowded by walls or occupied. Returns
/// how many creatures were placed.
pub fn populate(world: &mut game::World, area_index: usize) -> Result<usize> {
    let area = world.area(area_index)?;
    if area.populated {
        log::warn!("populate() --> area {} is already populated", area_index);
        return Err(SimError::AlreadyPopulated(area_index));
    }
    let (height, width) = (area.height, area.width);
    let target = target_count(height, width);

    let type_ids: Vec<String> = match &world.config.spawn_species {
        Some(species) if world.creature_types.get(species).is_some() => vec![species.clone()],
        Some(species) => {
            log::warn!("populate() --> unknown creature type {:?}", species);
            vec![]
        }
        None => world
            .creature_types
            .ids()
            .into_iter()
            .map(String::from)
            .collect(),
    };
    world.area_mut(area_index)?.populated = true;
    if type_ids.is_empty() {
        log::debug!("populate() --> no creature types, area {} stays empty", area_index);
        return Ok(0);
    }

    let crowd_limit = world.config.crowd_limit;
    let mut used: Vec<(i32, i32)> = vec![];
    let mut attempts = target * cfg::SPAWN_ATTEMPTS_PER_CREATURE;
    while used.len() < target && attempts > 0 {
        attempts -= 1;
        let row = world.rng.gen_range(0, height);
        let col = world.rng.gen_range(0, width);
        let area = &world.areas[area_index];
        let rejected = used.contains(&(row, col))
            || area.tile(row, col).map_or(true, |tile| tile.block_move)
            || area.blocking_around(row, col) >= crowd_limit
            || area.creature_at(row, col).is_some();
        if rejected {
            continue;
        }
        let type_id = match type_ids.choose(&mut world.rng) {
            Some(type_id) => type_id.clone(),
            None => break,
        };
        spawn_creature(world, &type_id, area_index, row, col)?;
        used.push((row, col));
    }
    log::debug!(
        "populate() --> placed {} of {} creatures in area {}",
        used.len(),
        target,
        area_index
    );
    Ok(used.len())
}

#[cfg(test)]
mod spawn_tests {
    use super::*;
    use crate::cfg::Config;
    use crate::engine::area::{self, Area};
    use crate::engine::asset::{CreatureTypes, ItemTypes};

    fn world_with(config: Config, creature_types: CreatureTypes) -> game::World {
        game::World::new(config, creature_types, ItemTypes::load().unwrap())
    }

    fn seeded(seed: u64) -> Config {
        Config {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn open_rows(height: usize, width: usize) -> Vec<String> {
        vec![".".repeat(width); height]
    }

    fn push_open_area(world: &mut game::World, height: usize, width: usize) {
        let rows = open_rows(height, width);
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        world.areas.push(Area::from_rows(&rows));
    }

    #[test]
    fn target_is_tenths_multiplied() {
        assert_eq!(target_count(50, 50), 25);
        assert_eq!(target_count(240, 250), 600);
        assert_eq!(target_count(9, 300), 0);
        assert_eq!(target_count(-20, 30), 0);
    }

    #[test]
    fn generated_cave_gets_valid_spawns() {
        let mut world = world_with(seeded(42), CreatureTypes::load().unwrap());
        let config = world.config.clone();
        let (cave, ..) = area::generate(50, 50, &config, &mut world.rng).unwrap();
        world.areas.push(cave);
        let placed = populate(&mut world, 0).unwrap();
        let area = &world.areas[0];
        assert!(placed > 0);
        assert!(placed <= 25);
        assert_eq!(area.creatures.len(), placed);
        for (i, creature) in area.creatures.iter().enumerate() {
            let (row, col) = creature.position();
            assert!(!area.tile(row, col).unwrap().block_move);
            assert!(area.blocking_around(row, col) < 2);
            for other in &area.creatures[i + 1..] {
                assert_ne!(creature.position(), other.position());
            }
        }
    }

    #[test]
    fn open_floor_reaches_target() {
        let mut world = world_with(seeded(3), CreatureTypes::load().unwrap());
        push_open_area(&mut world, 20, 20);
        assert_eq!(populate(&mut world, 0).unwrap(), 4);
        assert!(world.areas[0].populated);
    }

    #[test]
    fn second_populate_is_rejected() {
        let mut world = world_with(seeded(4), CreatureTypes::load().unwrap());
        push_open_area(&mut world, 20, 20);
        let placed = populate(&mut world, 0).unwrap();
        assert_eq!(
            populate(&mut world, 0).err(),
            Some(SimError::AlreadyPopulated(0))
        );
        assert_eq!(world.areas[0].creatures.len(), placed);
    }

    #[test]
    fn fixed_species_mode_spawns_one_kind() {
        let config = Config {
            spawn_species: Some(String::from("dog")),
            ..seeded(8)
        };
        let mut world = world_with(config, CreatureTypes::load().unwrap());
        push_open_area(&mut world, 30, 30);
        assert_eq!(populate(&mut world, 0).unwrap(), 9);
        assert!(world.areas[0]
            .creatures
            .iter()
            .all(|creature| creature.species == "canine"));
    }

    #[test]
    fn unknown_species_or_empty_table_spawns_nothing() {
        let config = Config {
            spawn_species: Some(String::from("dragon")),
            ..seeded(8)
        };
        let mut world = world_with(config, CreatureTypes::load().unwrap());
        push_open_area(&mut world, 30, 30);
        assert_eq!(populate(&mut world, 0).unwrap(), 0);
        assert!(world.areas[0].populated);

        let mut world = world_with(seeded(8), CreatureTypes::default());
        push_open_area(&mut world, 30, 30);
        assert_eq!(populate(&mut world, 0).unwrap(), 0);
        assert!(world.areas[0].creatures.is_empty());
    }

    #[test]
    fn populate_unknown_area_is_an_error() {
        let mut world = world_with(seeded(1), CreatureTypes::load().unwrap());
        assert_eq!(populate(&mut world, 2).err(), Some(SimError::UnknownArea(2)));
    }

    #[test]
    fn spawned_creature_copies_its_template() {
        let mut world = world_with(seeded(1), CreatureTypes::load().unwrap());
        push_open_area(&mut world, 5, 5);
        let id = spawn_creature(&mut world, "goblin", 0, 2, 3).unwrap();
        let goblin = world.creature(id).unwrap();
        let template = world.creature_types.get("goblin").unwrap();
        assert_eq!(goblin.stats, template.stats);
        assert_eq!(goblin.glyph, template.glyph);
        assert_eq!(goblin.position(), (2, 3));
        assert_eq!(goblin.area, 0);
        assert_eq!(goblin.inventory.len(), 1);
        assert_eq!(goblin.inventory[0].area, None);
    }

    #[test]
    fn spawn_rejects_bad_requests() {
        let mut world = world_with(seeded(1), CreatureTypes::load().unwrap());
        push_open_area(&mut world, 5, 5);
        assert_eq!(
            spawn_creature(&mut world, "dragon", 0, 1, 1).err(),
            Some(SimError::UnknownCreatureType(String::from("dragon")))
        );
        assert_eq!(
            spawn_creature(&mut world, "dog", 0, 5, 1).err(),
            Some(SimError::OutOfBounds { row: 5, col: 1 })
        );
        assert!(world.areas[0].creatures.is_empty());
    }
}
