/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::HashSet;
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::control::CommandObserver;
use crate::layout::{BuildingLayout, LayoutError, SceneGeometry};
use crate::shared::{CommandApplied, ElevatorSnapshot, FloorWaiting};
use crate::source::{SharedElevator, SharedFloor};
use crate::surface::{Color, Font, Point, RectStyle, RenderSurface};
use crate::view::{Clock, SceneStats};

/***************************************/
/*               Palette               */
/***************************************/
const BUILDING_STYLE: RectStyle = RectStyle {
    outline: Some(Color("#333")),
    fill: Some(Color("#F0F0F0")),
    stroke_width: 2,
};
const SHAFT_STYLE: RectStyle = RectStyle {
    outline: Some(Color("#555")),
    fill: Some(Color("#E0E0E0")),
    stroke_width: 2,
};
const BAND_STYLE: RectStyle = RectStyle {
    outline: Some(Color("#BBB")),
    fill: Some(Color("#FFFFFF")),
    stroke_width: 2,
};
const CAR_STYLE: RectStyle = RectStyle {
    outline: Some(Color("#444")),
    fill: Some(Color("#777")),
    stroke_width: 2,
};
const CAR_PANEL_STYLE: RectStyle = RectStyle {
    outline: None,
    fill: Some(Color("#999")),
    stroke_width: 0,
};

const SHAFT_LABEL_RISE: i32 = 25;
const CAR_PANEL_INSET: i32 = 20;

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("unknown elevator: {0}")]
    UnknownElevator(String),
    #[error("elevator name used twice: {0}")]
    DuplicateElevator(String),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Mirror of the elevator bank and owner of its picture.
 *
 * State is pulled from the collaborators only by the `refresh_*` operations.
 * `render` draws the current snapshots and never changes them.
 *
 * # Fields
 * - `elevators`:       Collaborator elevators, in display order.
 * - `floors`:          Collaborator floors, in the order they were supplied.
 * - `num_floors`:      Number of floors in the building.
 * - `snapshots`:       One snapshot per elevator, same order as `elevators`.
 * - `waiting`:         Waiting count per floor, same order as `floors`.
 * - `layout`:          Geometry engine for the building diagram.
 * - `surface`:         Where frames are drawn.
 * - `clock`:           Time source for the elapsed time display.
 * - `activated_at`:    Set while the view is active.
 */
pub struct ViewModel<S: RenderSurface> {
    elevators: Vec<SharedElevator>,
    floors: Vec<SharedFloor>,
    num_floors: u32,
    snapshots: Vec<ElevatorSnapshot>,
    waiting: Vec<FloorWaiting>,
    layout: BuildingLayout,
    surface: S,
    clock: Box<dyn Clock>,
    activated_at: Option<Instant>,
}

impl<S: RenderSurface> ViewModel<S> {
    pub fn new(
        num_floors: u32,
        elevators: Vec<SharedElevator>,
        floors: Vec<SharedFloor>,
        layout: BuildingLayout,
        surface: S,
        clock: Box<dyn Clock>,
    ) -> Result<ViewModel<S>, ViewError> {
        layout.compute(num_floors, elevators.len())?;

        let mut names = HashSet::new();
        let mut snapshots = Vec::with_capacity(elevators.len());
        for elevator in elevators.iter() {
            let snapshot = ElevatorSnapshot::new(&*elevator.borrow());
            if !names.insert(snapshot.name.clone()) {
                return Err(ViewError::DuplicateElevator(snapshot.name));
            }
            snapshots.push(snapshot);
        }

        let mut view = ViewModel {
            elevators,
            floors,
            num_floors,
            snapshots,
            waiting: Vec::new(),
            layout,
            surface,
            clock,
            activated_at: None,
        };
        view.refresh_waiting_counts();

        Ok(view)
    }

    /// Starts the elapsed time, sizes the surface and draws the first frame.
    pub fn activate(&mut self) {
        let now = self.clock.now();
        if self.activated_at.is_some() {
            log::debug!("View activated again, elapsed time restarts");
        }
        self.activated_at = Some(now);

        match self.geometry() {
            Ok(geometry) => self.surface.resize(geometry.canvas_width, geometry.canvas_height),
            Err(e) => log::error!("Cannot size the surface: {}", e),
        }
        log::info!(
            "View active: {} floors, {} elevators",
            self.num_floors,
            self.snapshots.len()
        );

        self.render();
    }

    /// Clears the surface. Renders draw nothing until the next `activate`.
    pub fn shutdown(&mut self) {
        self.surface.clear();
        self.activated_at = None;
        log::info!("View shut down");
    }

    pub fn is_active(&self) -> bool {
        self.activated_at.is_some()
    }

    /// An unknown name leaves every snapshot untouched.
    pub fn refresh_elevator_position(&mut self, name: &str) {
        match self.index_of(name) {
            Some(index) => {
                let elevator = self.elevators[index].borrow();
                self.snapshots[index].refresh_position(&*elevator);
            }
            None => log::debug!("Position refresh for unknown elevator {}", name),
        }
    }

    pub fn refresh_elevator_occupancy(&mut self, name: &str) -> Result<(), ViewError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| ViewError::UnknownElevator(name.to_string()))?;
        let elevator = self.elevators[index].borrow();
        self.snapshots[index].refresh_occupancy(&*elevator);
        Ok(())
    }

    pub fn refresh_elevator(&mut self, name: &str) -> Result<(), ViewError> {
        self.refresh_elevator_position(name);
        self.refresh_elevator_occupancy(name)
    }

    /// Replaces every waiting count with what the floors report now.
    pub fn refresh_waiting_counts(&mut self) {
        self.waiting = self
            .floors
            .iter()
            .map(|floor| {
                let floor = floor.borrow();
                FloorWaiting {
                    floor: floor.floor_number(),
                    waiting: floor.num_waiting(),
                }
            })
            .collect();
    }

    pub fn refresh_all(&mut self) {
        for (snapshot, elevator) in self.snapshots.iter_mut().zip(self.elevators.iter()) {
            let elevator = elevator.borrow();
            snapshot.refresh_position(&*elevator);
            snapshot.refresh_occupancy(&*elevator);
        }
        self.refresh_waiting_counts();
    }

    #[cfg(test)]
    pub fn snapshots(&self) -> &[ElevatorSnapshot] {
        &self.snapshots
    }

    #[cfg(test)]
    pub fn snapshot(&self, name: &str) -> Option<&ElevatorSnapshot> {
        self.snapshots.iter().find(|snapshot| snapshot.name == name)
    }

    #[cfg(test)]
    pub fn waiting_counts(&self) -> &[FloorWaiting] {
        &self.waiting
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Statistics as the next render would draw them.
    pub fn stats(&self) -> SceneStats {
        SceneStats::collect(&self.snapshots, &self.waiting, self.elapsed())
    }

    /// Redraws the whole scene from the current snapshots.
    pub fn render(&mut self) {
        if !self.is_active() {
            log::debug!("Render skipped, view is not active");
            return;
        }
        let geometry = match self.geometry() {
            Ok(geometry) => geometry,
            Err(e) => {
                log::error!("Render skipped: {}", e);
                return;
            }
        };

        self.surface.clear();
        self.surface.draw_rect(geometry.building, BUILDING_STYLE);
        self.draw_shafts(&geometry);
        self.draw_floors(&geometry);
        self.draw_stats(&geometry);

        if let Some(bounds) = self.surface.content_bounds() {
            self.surface.set_scroll_region(bounds);
        }
    }

    /***************************************/
    /*          Private functions          */
    /***************************************/
    fn geometry(&self) -> Result<SceneGeometry, LayoutError> {
        self.layout.compute(self.num_floors, self.snapshots.len())
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.snapshots.iter().position(|snapshot| snapshot.name == name)
    }

    fn elapsed(&self) -> Duration {
        match self.activated_at {
            Some(start) => self.clock.now().saturating_duration_since(start),
            None => Duration::ZERO,
        }
    }

    fn draw_shafts(&mut self, geometry: &SceneGeometry) {
        for (snapshot, shaft) in self.snapshots.iter().zip(geometry.shafts.iter()) {
            self.surface.draw_rect(*shaft, SHAFT_STYLE);
            self.surface.draw_text(
                Point::new(shaft.center_x(), shaft.top - SHAFT_LABEL_RISE),
                &capitalize(&snapshot.name),
                Font::bold(16),
                Color("#222"),
            );
        }
    }

    fn draw_floors(&mut self, geometry: &SceneGeometry) {
        let label_x = geometry.building.left;
        let waiting_x = geometry.building.center_x();

        for floor in self.waiting.iter() {
            let band = match geometry.band(floor.floor) {
                Some(band) => band,
                None => {
                    log::warn!("Floor {} is outside the building, not drawn", floor.floor);
                    continue;
                }
            };
            let middle = band.top + band.height() / 2;

            self.surface.draw_rect(band, BAND_STYLE);
            self.surface.draw_text(
                Point::new(label_x, middle),
                &format!("F{}", floor.floor),
                Font::bold(14),
                Color("#333"),
            );

            for (index, snapshot) in self.snapshots.iter().enumerate() {
                if snapshot.position != floor.floor {
                    continue;
                }
                if let Some(car) = geometry.car(index, floor.floor) {
                    self.surface.draw_rect(car, CAR_STYLE);
                    self.surface
                        .draw_rect(car.inset(CAR_PANEL_INSET, CAR_PANEL_INSET), CAR_PANEL_STYLE);
                    self.surface.draw_text(
                        Point::new(car.center_x(), car.bottom - CAR_PANEL_INSET),
                        &format!("Inside: {}", snapshot.occupancy),
                        Font::regular(14),
                        Color("#FFF"),
                    );
                }
            }

            self.surface.draw_text(
                Point::new(waiting_x, middle),
                &format!("Waiting: {}", floor.waiting),
                Font::regular(14),
                Color("#444"),
            );
        }
    }

    fn draw_stats(&mut self, geometry: &SceneGeometry) {
        let stats = self.stats();
        for (line, text) in stats.lines().iter().enumerate() {
            self.surface
                .draw_text(geometry.stats_line(line), text, Font::bold(14), Color("#222"));
        }
    }
}

impl<S: RenderSurface> CommandObserver for ViewModel<S> {
    fn command_applied(&mut self, event: &CommandApplied) {
        if let Err(e) = self.refresh_elevator(&event.name) {
            log::error!("Command on {} left the view out of sync: {}", event.name, e);
        }
        self.render();
    }
}

/// Upper case first letter, rest lower case.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
