/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::LayoutConfig;
use crate::surface::{Point, Rect};

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("a building needs at least one floor")]
    NoFloors,
    #[error("{0} floors do not fit on a canvas")]
    TooManyFloors(u32),
}

/***************************************/
/*       Public data structures        */
/***************************************/

/**
 * Placement of everything in one frame of the building diagram.
 *
 * Recomputed for every render and never kept between renders.
 *
 * # Fields
 * - `num_floors`:      Number of floor bands, floors are numbered `1..=num_floors`.
 * - `building`:        Building outline.
 * - `shafts`:          One shaft per elevator, left to right in elevator order.
 * - `stats_anchor`:    Centre of the first statistics line.
 * - `canvas_width`:    Width the drawing surface needs.
 * - `canvas_height`:   Height the drawing surface needs.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGeometry {
    pub num_floors: u32,
    pub building: Rect,
    pub shafts: Vec<Rect>,
    pub stats_anchor: Point,
    pub canvas_width: i32,
    pub canvas_height: i32,
    band_x: i32,
    band_width: i32,
    band_height: i32,
    stats_line_height: i32,
}

impl SceneGeometry {
    /// Horizontal band of `floor`. Higher floors lie further up; floors outside the building have no band.
    pub fn band(&self, floor: i32) -> Option<Rect> {
        if floor < 1 || floor > self.num_floors as i32 {
            return None;
        }
        let top = self.building.top + (self.num_floors as i32 - floor) * self.band_height;
        Some(Rect::new(
            self.band_x,
            top,
            self.band_x + self.band_width,
            top + self.band_height,
        ))
    }

    /// Part of `shaft` level with the band of `floor`.
    pub fn car(&self, shaft: usize, floor: i32) -> Option<Rect> {
        let shaft = self.shafts.get(shaft)?;
        let band = self.band(floor)?;
        Some(Rect::new(shaft.left, band.top, shaft.right, band.bottom))
    }

    /// Anchor of the `line`th statistics line, counting from zero.
    pub fn stats_line(&self, line: usize) -> Point {
        Point::new(
            self.stats_anchor.x,
            self.stats_anchor.y + line as i32 * self.stats_line_height,
        )
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Pure geometry of the building diagram, a function of the floor and elevator counts only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildingLayout {
    config: LayoutConfig,
}

impl BuildingLayout {
    pub fn new(config: LayoutConfig) -> BuildingLayout {
        BuildingLayout { config }
    }

    pub fn compute(&self, num_floors: u32, elevator_count: usize) -> Result<SceneGeometry, LayoutError> {
        if num_floors == 0 {
            return Err(LayoutError::NoFloors);
        }
        let c = &self.config;

        let too_many = || LayoutError::TooManyFloors(num_floors);
        let building_height = i32::try_from(num_floors)
            .ok()
            .and_then(|floors| floors.checked_mul(c.band_height))
            .ok_or_else(too_many)?;
        let building_bottom = c.building_y.checked_add(building_height).ok_or_else(too_many)?;
        let canvas_height = (c.margin_top + c.margin_bottom)
            .checked_add(building_height)
            .ok_or_else(too_many)?;
        let building = Rect::new(
            c.building_x,
            c.building_y,
            c.building_x + c.building_width,
            building_bottom,
        );

        let first_shaft_left = building.right + c.first_shaft_offset;
        let shafts: Vec<Rect> = (0..elevator_count as i32)
            .map(|index| {
                let left = first_shaft_left + index * (c.shaft_width + c.shaft_spacing);
                Rect::new(left, building.top, left + c.shaft_width, building.bottom)
            })
            .collect();

        // Without shafts the panel sits where it would next to an empty shaft region
        let stats_x = match shafts.last() {
            Some(last) => last.right + c.stats_gap,
            None => first_shaft_left + c.stats_gap,
        };
        let stats_anchor = Point::new(stats_x, building.top + c.stats_top_offset);

        Ok(SceneGeometry {
            num_floors,
            building,
            shafts,
            stats_anchor,
            canvas_width: c.min_canvas_width.max(stats_x + c.stats_panel_width),
            canvas_height,
            band_x: c.band_x,
            band_width: c.band_width,
            band_height: c.band_height,
            stats_line_height: c.stats_line_height,
        })
    }
}
