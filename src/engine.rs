pub mod area;
pub mod asset;
pub mod entity;
pub mod error;
pub mod game;
pub mod mechanics;

pub use error::{Result, SimError};
pub use game::World;
pub use mechanics::{attack_by, move_by};
