use thiserror::Error;

/// Reasons a simulation call is rejected. A rejected call leaves the world untouched.
#[derive(Error, Debug, PartialEq)]
pub enum SimError {
    #[error("invalid area dimensions {height}x{width}")]
    InvalidDimensions { height: i32, width: i32 },

    #[error("area {0} does not exist")]
    UnknownArea(usize),

    #[error("creature {0} does not exist")]
    UnknownCreature(u32),

    #[error("coordinate ({row},{col}) is outside the area")]
    OutOfBounds { row: i32, col: i32 },

    #[error("movement delta ({d_row},{d_col}) is out of range")]
    DeltaOutOfRange { d_row: i32, d_col: i32 },

    #[error("area {0} has already been populated")]
    AlreadyPopulated(usize),

    #[error("undefined creature type: {0}")]
    UnknownCreatureType(String),

    #[error("undefined item type: {0}")]
    UnknownItemType(String),

    #[error("no item at inventory index {0}")]
    NoSuchInventoryItem(usize),

    #[error("no item on the ground at index {0}")]
    NoSuchGroundItem(usize),

    #[error("{0} cannot be equipped")]
    NotEquippable(String),

    #[error("nothing is equipped on {0}")]
    SlotEmpty(crate::cmtp::Slot),

    #[error("the player is dead")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, SimError>;
