pub mod building_layout;

pub use building_layout::{BuildingLayout, LayoutError, SceneGeometry};
