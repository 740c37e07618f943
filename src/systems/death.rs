use crate::cfg;
use crate::cmtp::{MessageKind, PlayerState, Slot};
use crate::engine::entity;
use crate::engine::error::{Result, SimError};
use crate::engine::game;

/// What a death left behind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Remains {
    /// the player died, nothing else happens
    GameOver,
    Corpse,
    /// number of carried items now lying on the ground
    Dropped(usize),
}

/// Removes a dead creature from its area and leaves its loot where it
/// fell: everything it carried or wore, or a corpse if that was nothing.
pub fn die(world: &mut game::World, id: u32) -> Result<Remains> {
    let (area_index, creature_index) = world.locate(id).ok_or_else(|| {
        log::warn!("die() --> no creature with id {}", id);
        SimError::UnknownCreature(id)
    })?;
    if world.areas[area_index].creatures[creature_index].is_player() {
        world.player.state = PlayerState::Dead;
        world.add_log(MessageKind::Death, "You died!");
        return Ok(Remains::GameOver);
    }

    let mut dead = world.areas[area_index].creatures.remove(creature_index);
    let (row, col) = dead.position();
    let mut loot = std::mem::take(&mut dead.inventory);
    for &slot in Slot::ALL.iter() {
        loot.extend(dead.equipment.slot_mut(slot).take());
    }
    let corpse_price = world.config.corpse_price;
    let area = &mut world.areas[area_index];
    let remains = if loot.is_empty() {
        area.items
            .push(entity::corpse(&dead.name, area_index, row, col, corpse_price));
        Remains::Corpse
    } else {
        let count = loot.len();
        for mut item in loot {
            item.row = row;
            item.col = col;
            item.glyph = cfg::CORPSE_GLYPH;
            item.area = Some(area_index);
            area.items.push(item);
        }
        Remains::Dropped(count)
    };
    log::debug!("die() --> {} at ({},{}) left {:?}", dead.name, row, col, remains);
    world.add_log(MessageKind::Death, format!("The {} dies.", dead.name));
    Ok(remains)
}
