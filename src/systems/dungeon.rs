use super::spawn;
use crate::cfg;
use crate::cmtp::{Attributes, Class, CreatureKind, MessageKind, PlayerState, Stats};
use crate::engine::area;
use crate::engine::error::Result;
use crate::engine::game;

/// Creates the player character at (row, col) of an area. A blank name
/// becomes the default one, an unknown class becomes a warrior.
pub fn spawn_player(
    world: &mut game::World,
    name: &str,
    class: Class,
    area_index: usize,
    row: i32,
    col: i32,
) -> Result<u32> {
    world.area(area_index)?.tile_info(row, col)?;
    let name = match name.trim() {
        "" => cfg::PLAYER_DEFAULT_NAME,
        name => name,
    };
    let class = match class {
        Class::Unknown => Class::Warrior,
        class => class,
    };
    let player = world
        .new_creature()
        .add_name(name, "human")
        .add_kind(CreatureKind::Player)
        .add_class(class)
        .add_glyph(cfg::PLAYER_GLYPH)
        .add_stats(Stats {
            hp: cfg::PLAYER_HP,
            max_hp: cfg::PLAYER_HP,
            attack: cfg::PLAYER_ATTACK,
            defense: cfg::PLAYER_DEFENSE,
        })
        .add_attributes(Attributes::default())
        .add_heal_rate(cfg::HEAL_RATE)
        .add_position(area_index, row, col)
        .create();
    let id = player.id;
    world.areas[area_index].creatures.push(player);
    world.player.id = id;
    world.player.area = area_index;
    world.player.state = PlayerState::MakingTurn;
    log::debug!("spawn_player() --> {} the {} is {}", name, class, id);
    Ok(id)
}

/// Generates a level of the configured size, puts the player on its spawn
/// point (creating the player on the first level) and populates it.
/// Returns the index of the new area.
pub fn new_level(world: &mut game::World, name: &str, class: Class) -> Result<usize> {
    let config = world.config.clone();
    let (area, row, col) = area::generate(config.map_height, config.map_width, &config, &mut world.rng)?;
    world.areas.push(area);
    let area_index = world.areas.len() - 1;

    match world.locate(world.player.id) {
        Some((old_area, creature_index)) => {
            let mut player = world.areas[old_area].creatures.remove(creature_index);
            player.area = area_index;
            player.row = row;
            player.col = col;
            world.areas[area_index].creatures.push(player);
            world.player.area = area_index;
            world.add_log(MessageKind::Info, "You descend deeper into the caves.");
        }
        None => {
            spawn_player(world, name, class, area_index, row, col)?;
            world.add_log(
                MessageKind::Info,
                "Welcome stranger! Prepare to perish in the caves below.",
            );
        }
    }
    let placed = spawn::populate(world, area_index)?;
    log::info!("new_level() --> area {} with {} creatures", area_index, placed);
    Ok(area_index)
}
