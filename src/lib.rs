//! Simulation core of a turn-based dungeon crawl: cave generation, creature
//! placement, pursuit, melee and loot.

pub mod cfg;
pub mod cmtp;
pub mod engine;
pub mod systems;
