use super::{ai, inventory};
use crate::cmtp::{PlayerAction, PlayerState};
use crate::engine::error::{Result, SimError};
use crate::engine::game;
use crate::engine::mechanics::{self, MoveOutcome};

/// (row, col) delta of a movement action
fn direction(action: PlayerAction) -> Option<(i32, i32)> {
    match action {
        PlayerAction::GoToUp => Some((-1, 0)),
        PlayerAction::GoToDown => Some((1, 0)),
        PlayerAction::GoToLeft => Some((0, -1)),
        PlayerAction::GoToRight => Some((0, 1)),
        PlayerAction::GoToUpLeft => Some((-1, -1)),
        PlayerAction::GoToUpRight => Some((-1, 1)),
        PlayerAction::GoToDownLeft => Some((1, -1)),
        PlayerAction::GoToDownRight => Some((1, 1)),
        PlayerAction::SkipTurn => Some((0, 0)),
        _ => None,
    }
}

/// Runs one turn: performs the pending player action, then, if the action
/// used up the turn, lets every other creature act. Returns whether the
/// turn was used up. Inventory handling and blocked moves cost nothing.
pub fn update(world: &mut game::World) -> Result<bool> {
    if world.player.state == PlayerState::Dead || !world.player_is_alive() {
        return Err(SimError::GameOver);
    }
    let action = std::mem::take(&mut world.player.action);
    let player_id = world.player.id;
    let turn_taken = match action {
        PlayerAction::PickUp(nth) => inventory::pick_up(world, player_id, nth).map(|_| false)?,
        PlayerAction::Equip(index) => inventory::equip(world, player_id, index).map(|_| false)?,
        PlayerAction::Unequip(slot) => inventory::unequip(world, player_id, slot).map(|_| false)?,
        PlayerAction::DropItem(index) => {
            inventory::drop_item(world, player_id, index).map(|_| false)?
        }
        action => match direction(action) {
            Some((d_row, d_col)) => {
                mechanics::move_by(world, player_id, d_row, d_col)? != MoveOutcome::Blocked
            }
            None => false,
        },
    };
    if turn_taken && world.player_is_alive() {
        ai::update(world)?;
    }
    Ok(turn_taken)
}

#[cfg(test)]
mod turn_tests {
    use super::*;
    use crate::cfg::Config;
    use crate::cmtp::{CreatureKind, Stats};
    use crate::engine::area::Area;
    use crate::engine::asset::{CreatureTypes, ItemTypes};
    use crate::engine::entity;

    fn world(rows: &[&str]) -> (game::World, u32) {
        let config = Config {
            seed: Some(9),
            ..Default::default()
        };
        let mut world = game::World::new(config, CreatureTypes::default(), ItemTypes::load().unwrap());
        world.areas.push(Area::from_rows(rows));
        let player = world
            .new_creature()
            .add_name("Anonymous", "human")
            .add_kind(CreatureKind::Player)
            .add_stats(Stats {
                hp: 30,
                max_hp: 30,
                attack: 10,
                defense: 5,
            })
            .add_position(0, 1, 1)
            .create();
        let id = player.id;
        world.player.id = id;
        world.areas[0].creatures.push(player);
        (world, id)
    }

    fn add_rat(world: &mut game::World, row: i32, col: i32) -> u32 {
        let rat = world
            .new_creature()
            .add_name("rat", "rodent")
            .add_stats(Stats {
                hp: 8,
                max_hp: 8,
                attack: 3,
                defense: 0,
            })
            .add_position(0, row, col)
            .create();
        let id = rat.id;
        world.areas[0].creatures.push(rat);
        id
    }

    #[test]
    fn move_takes_a_turn_and_wakes_the_ai() {
        let (mut world, id) = world(&["#######", "#.....#", "#######"]);
        let rat = add_rat(&mut world, 1, 5);
        world.player.action = PlayerAction::GoToRight;
        assert!(update(&mut world).unwrap());
        assert_eq!(world.creature(id).unwrap().position(), (1, 2));
        assert_eq!(world.creature(rat).unwrap().position(), (1, 4));
        assert_eq!(world.player.action, PlayerAction::None);
    }

    #[test]
    fn blocked_move_costs_nothing() {
        let (mut world, _) = world(&["#######", "#.....#", "#######"]);
        let rat = add_rat(&mut world, 1, 5);
        world.player.action = PlayerAction::GoToUp;
        assert!(!update(&mut world).unwrap());
        assert_eq!(world.creature(rat).unwrap().position(), (1, 5));
    }

    #[test]
    fn skipping_lets_monsters_close_in() {
        let (mut world, id) = world(&["#######", "#.....#", "#######"]);
        let rat = add_rat(&mut world, 1, 3);
        world.player.action = PlayerAction::SkipTurn;
        assert!(update(&mut world).unwrap());
        assert_eq!(world.creature(id).unwrap().position(), (1, 1));
        assert_eq!(world.creature(rat).unwrap().position(), (1, 2));
        world.player.action = PlayerAction::SkipTurn;
        update(&mut world).unwrap();
        assert_eq!(world.creature(id).unwrap().stats.hp, 30);
    }

    #[test]
    fn inventory_actions_do_not_advance_the_ai() {
        let (mut world, id) = world(&["#######", "#.....#", "#######"]);
        let rat = add_rat(&mut world, 1, 5);
        let sword = entity::item_from_template(world.item_types.get("sword").unwrap());
        world.creature_mut(id).unwrap().inventory.push(sword);
        world.player.action = PlayerAction::Equip(0);
        assert!(!update(&mut world).unwrap());
        assert_eq!(world.creature(rat).unwrap().position(), (1, 5));
        world.player.action = PlayerAction::Equip(3);
        assert_eq!(
            update(&mut world).err(),
            Some(SimError::NoSuchInventoryItem(3))
        );
    }

    #[test]
    fn killing_a_rat_leaves_a_corpse() {
        let (mut world, id) = world(&["#####", "#...#", "#####"]);
        let rat = add_rat(&mut world, 1, 2);
        world.player.action = PlayerAction::GoToRight;
        assert!(update(&mut world).unwrap());
        assert!(world.creature(rat).is_none());
        assert_eq!(world.creature(id).unwrap().position(), (1, 1));
        assert_eq!(world.areas[0].items_at(1, 2).count(), 1);

        world.player.action = PlayerAction::GoToRight;
        update(&mut world).unwrap();
        world.player.action = PlayerAction::PickUp(0);
        assert!(!update(&mut world).unwrap());
        assert_eq!(world.creature(id).unwrap().inventory[0].name, "rat corpse");
    }

    #[test]
    fn only_moves_and_skips_have_a_direction() {
        assert_eq!(direction(PlayerAction::GoToDownLeft), Some((1, -1)));
        assert_eq!(direction(PlayerAction::SkipTurn), Some((0, 0)));
        assert_eq!(direction(PlayerAction::None), None);
        assert_eq!(direction(PlayerAction::PickUp(0)), None);
    }

    #[test]
    fn idle_action_costs_nothing() {
        let (mut world, id) = world(&["#######", "#.....#", "#######"]);
        let rat = add_rat(&mut world, 1, 5);
        assert!(!update(&mut world).unwrap());
        assert_eq!(world.creature(id).unwrap().position(), (1, 1));
        assert_eq!(world.creature(rat).unwrap().position(), (1, 5));
    }

    #[test]
    fn dead_player_cannot_act() {
        let (mut world, _) = world(&["#####", "#...#", "#####"]);
        world.player.state = PlayerState::Dead;
        world.player.action = PlayerAction::GoToRight;
        assert_eq!(update(&mut world).err(), Some(SimError::GameOver));
    }
}
