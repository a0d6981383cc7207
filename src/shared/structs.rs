/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::source::ElevatorSource;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/**
 * Read-only mirror of one collaborator elevator.
 *
 * `position` and `occupancy` only change through `refresh_position` and
 * `refresh_occupancy`; nothing infers them.
 *
 * # Fields
 * - `name`:        Stable key of the elevator, also used as display label.
 * - `position`:    Floor number last read from the collaborator.
 * - `occupancy`:   Passengers inside the elevator, last read from the collaborator.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub name: String,
    pub position: i32,
    pub occupancy: usize,
}

impl ElevatorSnapshot {
    pub fn new(source: &dyn ElevatorSource) -> ElevatorSnapshot {
        ElevatorSnapshot {
            name: source.name().to_string(),
            position: source.current_floor(),
            occupancy: source.queue_size(),
        }
    }

    pub fn refresh_position(&mut self, source: &dyn ElevatorSource) {
        self.position = source.current_floor();
    }

    pub fn refresh_occupancy(&mut self, source: &dyn ElevatorSource) {
        self.occupancy = source.queue_size();
    }
}

/// Number of people waiting on one floor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorWaiting {
    pub floor: i32,
    pub waiting: usize,
}

/// Emitted by the dispatcher after a movement command reached its collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandApplied {
    pub index: usize,
    pub name: String,
    pub direction: Direction,
}
