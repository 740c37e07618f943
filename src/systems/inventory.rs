use crate::cmtp::{Creature, MessageKind, Slot, Worn};
use crate::engine::error::{Result, SimError};
use crate::engine::game;

fn creature_mut(world: &mut game::World, id: u32) -> Result<&mut Creature> {
    world
        .creature_mut(id)
        .ok_or(SimError::UnknownCreature(id))
}

fn tell_player(world: &mut game::World, id: u32, message: String) {
    if id == world.player.id {
        world.add_log(MessageKind::Info, message);
    }
}

/// Picks up the `nth` item lying where the creature stands.
pub fn pick_up(world: &mut game::World, id: u32, nth: usize) -> Result<()> {
    let (area_index, creature_index) = world.locate(id).ok_or(SimError::UnknownCreature(id))?;
    let area = &mut world.areas[area_index];
    let position = area.creatures[creature_index].position();
    let item_index = area
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| (item.row, item.col) == position)
        .map(|(index, _)| index)
        .nth(nth)
        .ok_or(SimError::NoSuchGroundItem(nth))?;
    let mut item = area.items.remove(item_index);
    item.area = None;
    let name = item.name.clone();
    area.creatures[creature_index].inventory.push(item);
    tell_player(world, id, format!("You picked up a {}.", name));
    Ok(())
}

/// Puts an inventory item on the ground at the creature's position.
pub fn drop_item(world: &mut game::World, id: u32, inventory_index: usize) -> Result<()> {
    let (area_index, creature_index) = world.locate(id).ok_or(SimError::UnknownCreature(id))?;
    let area = &mut world.areas[area_index];
    let creature = &mut area.creatures[creature_index];
    if inventory_index >= creature.inventory.len() {
        return Err(SimError::NoSuchInventoryItem(inventory_index));
    }
    let mut item = creature.inventory.remove(inventory_index);
    let (row, col) = creature.position();
    item.row = row;
    item.col = col;
    item.area = Some(area_index);
    let name = item.name.clone();
    area.items.push(item);
    tell_player(world, id, format!("You dropped a {}.", name));
    Ok(())
}

/// Moves an inventory item into the slot it belongs to. Whatever was worn
/// there goes back to the inventory.
pub fn equip(world: &mut game::World, id: u32, inventory_index: usize) -> Result<()> {
    let creature = creature_mut(world, id)?;
    let item = creature
        .inventory
        .get(inventory_index)
        .ok_or(SimError::NoSuchInventoryItem(inventory_index))?;
    let slot = match item.slot {
        Some(slot) if item.equippable && !item.broken => slot,
        _ => return Err(SimError::NotEquippable(item.name.clone())),
    };
    let item = creature.inventory.remove(inventory_index);
    let name = item.name.clone();
    let worn = creature.equipment.slot_mut(slot);
    let previous = worn.take();
    *worn = Worn::Occupied(item);
    creature.inventory.extend(previous);
    tell_player(world, id, format!("Equipped {} on {}.", name, slot));
    Ok(())
}

pub fn unequip(world: &mut game::World, id: u32, slot: Slot) -> Result<()> {
    let creature = creature_mut(world, id)?;
    let item = creature
        .equipment
        .slot_mut(slot)
        .take()
        .ok_or(SimError::SlotEmpty(slot))?;
    let name = item.name.clone();
    creature.inventory.push(item);
    tell_player(world, id, format!("Dequipped {} from {}.", name, slot));
    Ok(())
}
