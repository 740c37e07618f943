pub mod ai;
pub mod death;
pub mod dungeon;
pub mod inventory;
pub mod player_action;
pub mod spawn;
