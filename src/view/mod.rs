pub mod clock;
pub mod stats;
pub mod view_model;

pub use clock::{Clock, SystemClock};
pub use stats::SceneStats;
pub use view_model::{ViewError, ViewModel};
