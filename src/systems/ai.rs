use crate::engine::error::{Result, SimError};
use crate::engine::game;
use crate::engine::mechanics;
use rand::seq::SliceRandom as _;
use rand::Rng as _;

const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One step along the vector (d_row, d_col), each component rounded half
/// away from zero. `None` when there is nowhere to go.
pub fn pursuit_step(d_row: i32, d_col: i32) -> Option<(i32, i32)> {
    let distance = game::distance_to(0, 0, d_row, d_col).round();
    if distance == 0.0 {
        return None;
    }
    let step_row = (d_row as f64 / distance).round() as i32;
    let step_col = (d_col as f64 / distance).round() as i32;
    Some((step_row, step_col))
}

/// Lets every other creature in the player's area take its turn, in the
/// order of the area's creature list. Later creatures see the moves of
/// earlier ones.
pub fn update(world: &mut game::World) -> Result<()> {
    if !world.player_is_alive() {
        return Ok(());
    }
    let player_id = world.player.id;
    let area_index = match world.player_creature() {
        Some(player) => player.area,
        None => return Ok(()),
    };
    let ids: Vec<u32> = world
        .area(area_index)?
        .creatures
        .iter()
        .filter(|creature| creature.id != player_id && creature.is_alive())
        .map(|creature| creature.id)
        .collect();
    for id in ids {
        if !world.player_is_alive() {
            break;
        }
        take_turn(world, id)?;
    }
    Ok(())
}

fn take_turn(world: &mut game::World, id: u32) -> Result<()> {
    let (player_row, player_col) = match world.player_creature() {
        Some(player) => player.position(),
        None => return Ok(()),
    };
    // killed earlier in this tick
    let (row, col) = match world.creature(id).filter(|creature| creature.is_alive()) {
        Some(creature) => creature.position(),
        None => return Ok(()),
    };
    let (d_row, d_col) = (player_row - row, player_col - col);
    if (d_row, d_col) == (0, 0) {
        return Ok(());
    }
    let distance = game::distance_to(row, col, player_row, player_col);
    let step = if distance > world.config.perception_radius {
        // out of sight: idle or wander
        if world.rng.gen_bool(0.5) {
            None
        } else {
            NEIGHBOURS.choose(&mut world.rng).copied()
        }
    } else {
        pursuit_step(d_row, d_col)
    };
    let (step_row, step_col) = match step {
        Some(step) => step,
        None => return Ok(()),
    };
    log::debug!(
        "ai --> {} at ({},{}) distance {:.2} steps ({},{})",
        id,
        row,
        col,
        distance,
        step_row,
        step_col
    );
    match mechanics::move_by(world, id, step_row, step_col) {
        Ok(_) => Ok(()),
        Err(SimError::OutOfBounds { .. }) => Ok(()),
        Err(err) => Err(err),
    }
}
