use serde::{Deserialize, Serialize};
use std::{error::Error, fs, io::Read as _};

// size of the generated level
pub const MAP_HEIGHT: i32 = 240;
pub const MAP_WIDTH: i32 = 250;

// parameters for the cave generator
pub const WALL_CHANCE: f64 = 0.30;
pub const GENERATION_PASSES: u32 = 4;
pub const WALL_THRESHOLD: u32 = 4;
// the cell itself counts this much towards the wall score
pub const SELF_WEIGHT: u32 = 2;

// a spawn point is rejected with this many blocking tiles around it
pub const CROWD_LIMIT: u32 = 2;
// give up placing creatures after target * this many draws
pub const SPAWN_ATTEMPTS_PER_CREATURE: usize = 100;

pub const PERCEPTION_RADIUS: f64 = 6.0;
pub const MAX_MOVE_DELTA: i32 = 32767;

pub const WALL_GLYPH: char = '#';
pub const FLOOR_GLYPH: char = '.';
pub const CORPSE_GLYPH: char = '%';
pub const CORPSE_CATEGORY: &str = "corpse";
pub const CORPSE_PRICE: i32 = 10;
pub const CORPSE_WEIGHT: i32 = 5000;

// player template
pub const PLAYER_GLYPH: char = '@';
pub const PLAYER_DEFAULT_NAME: &str = "Anonymous";
pub const PLAYER_HP: i32 = 30;
pub const PLAYER_ATTACK: i32 = 10;
pub const PLAYER_DEFENSE: i32 = 5;
pub const PLAYER_ATTRIBUTE: i32 = 10;
pub const HEAL_RATE: i32 = 10;

/// Tunables of the simulation, read from `assets/config.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub map_height: i32,
    pub map_width: i32,
    pub wall_chance: f64,
    pub generation_passes: u32,
    pub wall_threshold: u32,
    pub crowd_limit: u32,
    pub perception_radius: f64,
    pub max_move_delta: i32,
    pub corpse_price: i32,
    pub seed: Option<u64>,
    /// When set, every placed creature uses this template name.
    pub spawn_species: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            map_height: MAP_HEIGHT,
            map_width: MAP_WIDTH,
            wall_chance: WALL_CHANCE,
            generation_passes: GENERATION_PASSES,
            wall_threshold: WALL_THRESHOLD,
            crowd_limit: CROWD_LIMIT,
            perception_radius: PERCEPTION_RADIUS,
            max_move_delta: MAX_MOVE_DELTA,
            corpse_price: CORPSE_PRICE,
            seed: None,
            spawn_species: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn Error>> {
        let mut toml_config = String::new();
        let mut file = fs::File::open("assets/config.toml")?;
        file.read_to_string(&mut toml_config)?;
        Config::from_toml_str(&toml_config)
    }

    pub fn from_toml_str(toml_config: &str) -> Result<Config, Box<dyn Error>> {
        let config: Config = toml::from_str(toml_config)?;
        Ok(config)
    }
}
