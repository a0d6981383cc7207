use std::time::Duration;

use crate::shared::{ElevatorSnapshot, FloorWaiting};

/// Totals shown in the statistics panel, derived from the current snapshots on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStats {
    pub total_waiting: usize,
    pub total_in_elevators: usize,
    pub total_people: usize,
    pub elapsed: Duration,
}

impl SceneStats {
    pub fn collect(snapshots: &[ElevatorSnapshot], waiting: &[FloorWaiting], elapsed: Duration) -> SceneStats {
        let total_waiting = waiting.iter().map(|floor| floor.waiting).sum();
        let total_in_elevators = snapshots.iter().map(|snapshot| snapshot.occupancy).sum();

        SceneStats {
            total_waiting,
            total_in_elevators,
            total_people: total_waiting + total_in_elevators,
            elapsed,
        }
    }

    pub fn lines(&self) -> [String; 4] {
        [
            format!("Total Waiting on Floors: {}", self.total_waiting),
            format!("Total In Elevators: {}", self.total_in_elevators),
            format!("Total People: {}", self.total_people),
            format!("Elapsed Time: {}", format_elapsed(self.elapsed)),
        ]
    }
}

/// Whole minutes and the remaining whole seconds, sub-second part dropped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{}m {}s", seconds / 60, seconds % 60)
}
