use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DoorError;

/// One of the three doors on stage.
///
/// Doors are numbered 1 through 3 and serialize as that bare number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Door {
    /// Door 1
    One = 1,
    /// Door 2
    Two = 2,
    /// Door 3
    Three = 3,
}

impl Door {
    pub const ALL: [Door; 3] = [Door::One, Door::Two, Door::Three];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// The two doors that are not `self`, in ascending order.
    pub fn others(self) -> [Door; 2] {
        match self {
            Door::One => [Door::Two, Door::Three],
            Door::Two => [Door::One, Door::Three],
            Door::Three => [Door::One, Door::Two],
        }
    }
}

impl TryFrom<u8> for Door {
    type Error = DoorError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Door::One),
            2 => Ok(Door::Two),
            3 => Ok(Door::Three),
            other => Err(DoorError::InvalidDoor(other)),
        }
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door.number()
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
