use super::error::{Result, SimError};
use crate::cfg;
use crate::cmtp::{Creature, Item, Tile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One dungeon level: terrain plus everything living or lying on it.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Area {
    pub tiles: Vec<Tile>,
    pub creatures: Vec<Creature>,
    pub items: Vec<Item>,
    pub height: i32,
    pub width: i32,
    pub populated: bool,
}

/// Everything found at one coordinate.
#[derive(Debug)]
pub struct TileInfo<'a> {
    pub glyph: char,
    pub blocks: bool,
    pub creature: Option<u32>,
    pub items: Vec<&'a Item>,
}

impl Area {
    /// Builds an area from text rows, `#` being wall and anything else floor.
    pub fn from_rows(rows: &[&str]) -> Area {
        let height = rows.len() as i32;
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as i32;
        let mut tiles = vec![Tile::wall(); (height * width) as usize];
        for (row, line) in rows.iter().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                if glyph != cfg::WALL_GLYPH {
                    tiles[row * width as usize + col] = Tile::floor();
                }
            }
        }
        Area {
            tiles,
            height,
            width,
            ..Default::default()
        }
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.height && col >= 0 && col < self.width
    }

    fn index(&self, row: i32, col: i32) -> usize {
        (row * self.width + col) as usize
    }

    pub fn tile(&self, row: i32, col: i32) -> Option<&Tile> {
        if self.in_bounds(row, col) {
            self.tiles.get(self.index(row, col))
        } else {
            None
        }
    }

    pub fn tile_info(&self, row: i32, col: i32) -> Result<TileInfo<'_>> {
        let tile = self
            .tile(row, col)
            .ok_or(SimError::OutOfBounds { row, col })?;
        Ok(TileInfo {
            glyph: tile.glyph,
            blocks: tile.block_move,
            creature: self.creature_at(row, col).map(|creature| creature.id),
            items: self.items_at(row, col).collect(),
        })
    }

    /// the live creature standing at (row, col), if any
    pub fn creature_at(&self, row: i32, col: i32) -> Option<&Creature> {
        self.creatures
            .iter()
            .find(|creature| creature.is_alive() && creature.position() == (row, col))
    }

    pub fn items_at(&self, row: i32, col: i32) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| (item.row, item.col) == (row, col))
    }

    pub fn creature(&self, id: u32) -> Option<&Creature> {
        self.creatures.iter().find(|creature| creature.id == id)
    }

    /// Blocking tiles in the 3x3 block centred on (row, col). Cells outside
    /// the area count as blocking.
    pub fn blocking_around(&self, row: i32, col: i32) -> u32 {
        let mut count = 0;
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                let blocks = self
                    .tile(row + d_row, col + d_col)
                    .map_or(true, |tile| tile.block_move);
                if blocks {
                    count += 1;
                }
            }
        }
        count
    }
}

fn is_border(row: i32, col: i32, height: i32, width: i32) -> bool {
    row == 0 || row == height - 1 || col == 0 || col == width - 1
}

/// Wall score of a cell in the previous pass: the cell itself weighs
/// `SELF_WEIGHT`, each of its 8 neighbours weighs one.
fn wall_score(previous: &[Tile], row: i32, col: i32, height: i32, width: i32) -> u32 {
    let is_wall = |row: i32, col: i32| {
        row >= 0
            && row < height
            && col >= 0
            && col < width
            && previous[(row * width + col) as usize].block_move
    };
    let mut score = 0;
    if is_wall(row, col) {
        score += cfg::SELF_WEIGHT;
    }
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if (d_row, d_col) != (0, 0) && is_wall(row + d_row, col + d_col) {
                score += 1;
            }
        }
    }
    score
}

/// Builds a cave level by seeding random walls and smoothing them.
/// Returns the area together with the spawn point: the last floor cell of
/// the final pass in row-major order.
pub fn generate<R: Rng>(
    height: i32,
    width: i32,
    config: &cfg::Config,
    rng: &mut R,
) -> Result<(Area, i32, i32)> {
    // cell indexes are computed in i32, so the cell count must fit there
    let cells = match height.checked_mul(width) {
        Some(cells) if height >= 1 && width >= 1 => cells as usize,
        _ => {
            log::warn!("generate() --> invalid dimensions {}x{}", height, width);
            return Err(SimError::InvalidDimensions { height, width });
        }
    };
    let wall_chance = config.wall_chance.max(0.0).min(1.0);
    // seeding pass
    let mut tiles: Vec<Tile> = (0..cells)
        .map(|_| {
            if rng.gen_bool(wall_chance) {
                Tile::wall()
            } else {
                Tile::floor()
            }
        })
        .collect();
    // smoothing passes
    for _ in 1..config.generation_passes.max(1) {
        let mut next = Vec::with_capacity(cells);
        for row in 0..height {
            for col in 0..width {
                if is_border(row, col, height, width)
                    || wall_score(&tiles, row, col, height, width) >= config.wall_threshold
                {
                    next.push(Tile::wall());
                } else {
                    next.push(Tile::floor());
                }
            }
        }
        tiles = next;
    }
    let (spawn_row, spawn_col) = match tiles.iter().rposition(|tile| !tile.block_move) {
        Some(index) => (index as i32 / width, index as i32 % width),
        None => {
            log::warn!("generate() --> no floor left in a {}x{} area", height, width);
            (0, 0)
        }
    };
    log::debug!(
        "generate() --> {}x{} area, spawn at ({},{})",
        height,
        width,
        spawn_row,
        spawn_col
    );
    let area = Area {
        tiles,
        height,
        width,
        ..Default::default()
    };
    Ok((area, spawn_row, spawn_col))
}
