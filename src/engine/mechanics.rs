use super::error::{Result, SimError};
use super::game;
use crate::cfg;
use crate::cmtp::{Creature, Item, MessageKind, Slot, Stats};
use crate::systems::death;

/// What a call to `move_by` ended up doing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    Moved,
    Attacked(Attack),
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attack {
    pub target: u32,
    pub damage: i32,
    pub killed: bool,
}

/// attack including the bonuses of everything equipped
pub fn power(creature: &Creature) -> i32 {
    let bonus: i32 = creature
        .equipment
        .items()
        .filter(|item| !item.broken)
        .map(|item| item.attack_bonus)
        .sum();
    creature.stats.attack + bonus
}

/// defense including the bonuses of everything equipped
pub fn defense(creature: &Creature) -> i32 {
    let bonus: i32 = creature
        .equipment
        .items()
        .filter(|item| !item.broken)
        .map(|item| item.defense_bonus)
        .sum();
    creature.stats.defense + bonus
}

pub fn take_damage(stats: &mut Stats, damage: i32) -> bool {
    if damage > 0 {
        stats.hp -= damage;
    }
    stats.hp <= 0
}

/// Describes remaining health. The exact-full case is checked first, the
/// other bounds are strict.
pub fn condition(stats: &Stats) -> &'static str {
    if stats.hp == stats.max_hp {
        "unscathed"
    } else if stats.hp * 2 > stats.max_hp {
        "slightly injured"
    } else if stats.hp * 4 > stats.max_hp {
        "injured"
    } else {
        "severely injured"
    }
}

/// Advances the heal counter by one move. Healing happens only on the tick
/// the counter wraps back to zero. A heal rate below one never heals.
pub fn tick_healing(creature: &mut Creature) {
    if creature.heal_rate < 1 {
        return;
    }
    creature.heal_counter += 1;
    if creature.heal_counter >= creature.heal_rate {
        creature.heal_counter = 0;
    }
    if creature.heal_counter == 0 && creature.stats.hp < creature.stats.max_hp {
        creature.stats.hp += 1;
    }
}

/// Changes durability by `amount`, never above the maximum. Returns true
/// when this call broke the item.
pub fn adjust_durability(item: &mut Item, amount: i32) -> bool {
    let was_broken = item.broken;
    item.durability_current = (item.durability_current + amount).min(item.durability_maximum);
    if item.durability_current < 1 {
        item.broken = true;
        item.equippable = false;
    }
    item.broken && !was_broken
}

/// wears whatever sits in `slot` by one point, returns its name if it broke
fn wear(creature: &mut Creature, slot: Slot) -> Option<String> {
    let item = creature.equipment.slot_mut(slot).item_mut()?;
    if item.broken {
        return None;
    }
    if adjust_durability(item, -1) {
        Some(item.name.clone())
    } else {
        None
    }
}

fn delta_in_range(delta: i32, max_delta: i32) -> bool {
    delta <= max_delta && delta >= -max_delta
}

/// Moves a creature by the given delta. The destination is checked before
/// anything is written: walls block, a live creature there gets attacked.
pub fn move_by(world: &mut game::World, id: u32, d_row: i32, d_col: i32) -> Result<MoveOutcome> {
    let max_delta = world.config.max_move_delta;
    if !delta_in_range(d_row, max_delta) || !delta_in_range(d_col, max_delta) {
        log::warn!("move_by() --> delta ({},{}) rejected for {}", d_row, d_col, id);
        return Err(SimError::DeltaOutOfRange { d_row, d_col });
    }
    let (area_index, creature_index) = world.locate(id).ok_or_else(|| {
        log::warn!("move_by() --> no creature with id {}", id);
        SimError::UnknownCreature(id)
    })?;
    let area = &world.areas[area_index];
    let mover = &area.creatures[creature_index];
    let is_player = mover.is_player();
    let (row, col) = (mover.row + d_row, mover.col + d_col);

    let (glyph, blocks, occupant, item_count) = match area.tile_info(row, col) {
        Ok(info) => (info.glyph, info.blocks, info.creature, info.items.len()),
        Err(err) => {
            log::warn!("move_by() --> {} cannot leave the area: {}", mover.name, err);
            return Err(err);
        }
    };
    if blocks {
        if is_player {
            if glyph == cfg::WALL_GLYPH {
                world.add_log(
                    MessageKind::Warning,
                    "The wall is solid and damp, and you cannot move past.",
                );
            } else {
                world.add_log(
                    MessageKind::Warning,
                    "Something here is blocking, and you cannot move past.",
                );
            }
        } else {
            log::debug!("move_by() --> {} is blocked at ({},{})", id, row, col);
        }
        return Ok(MoveOutcome::Blocked);
    }
    if let Some(target) = occupant.filter(|&target| target != id) {
        return attack_by(world, id, target).map(MoveOutcome::Attacked);
    }

    let mover = &mut world.areas[area_index].creatures[creature_index];
    mover.row = row;
    mover.col = col;
    tick_healing(mover);
    if is_player {
        match item_count {
            0 => {}
            1 => world.add_log(MessageKind::Info, "There is an item here."),
            n => world.add_log(MessageKind::Info, format!("There are {} items here.", n)),
        }
    }
    Ok(MoveOutcome::Moved)
}

/// Melee attack. Damage is never negative; a defender brought to zero
/// health or below is handed to the death handler.
pub fn attack_by(world: &mut game::World, attacker_id: u32, defender_id: u32) -> Result<Attack> {
    let attacker = world
        .creature(attacker_id)
        .ok_or(SimError::UnknownCreature(attacker_id))?;
    let defender = world
        .creature(defender_id)
        .ok_or(SimError::UnknownCreature(defender_id))?;
    let damage = (power(attacker) - defense(defender)).max(0);
    let attacker_name = attacker.name.clone();
    let attacker_is_player = attacker.is_player();
    let defender_name = defender.name.clone();
    let defender_is_player = defender.is_player();

    let mut broken = vec![];
    if damage > 0 {
        if let Some(attacker) = world.creature_mut(attacker_id) {
            broken.extend(wear(attacker, Slot::MainHand));
        }
    }
    let defender = world
        .creature_mut(defender_id)
        .ok_or(SimError::UnknownCreature(defender_id))?;
    let killed = take_damage(&mut defender.stats, damage);
    if damage > 0 {
        broken.extend(wear(defender, Slot::Torso));
    }
    let defender_stats = defender.stats;

    if attacker_is_player {
        world.add_log(
            MessageKind::Combat,
            format!("You hit the {} for {} damage.", defender_name, damage),
        );
        if !killed {
            world.add_log(
                MessageKind::Combat,
                format!("The {} is {}.", defender_name, condition(&defender_stats)),
            );
        }
    } else if defender_is_player {
        world.add_log(
            MessageKind::Combat,
            format!("The {} hits you for {} damage.", attacker_name, damage),
        );
        if !killed {
            world.add_log(
                MessageKind::Combat,
                format!("You are {}.", condition(&defender_stats)),
            );
        }
    } else {
        log::debug!(
            "attack_by() --> {} hits {} for {}",
            attacker_name,
            defender_name,
            damage
        );
    }
    if attacker_is_player || defender_is_player {
        for name in broken {
            world.add_log(MessageKind::Warning, format!("The {} breaks.", name));
        }
    }

    if killed {
        death::die(world, defender_id)?;
    }
    Ok(Attack {
        target: defender_id,
        damage,
        killed,
    })
}
