pub mod macros;
pub mod structs;

pub use structs::CommandApplied;
pub use structs::Direction;
pub use structs::ElevatorSnapshot;
pub use structs::FloorWaiting;
