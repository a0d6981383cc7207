pub mod ascii;
pub mod recording;

pub use ascii::AsciiSurface;
pub use recording::RecordingSurface;

use serde::Serialize;

/***************************************/
/*         Drawing primitives          */
/***************************************/
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

/// Axis aligned rectangle given by its top left and bottom right corners.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> i32 {
        self.left + self.width() / 2
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right - dx,
            bottom: self.bottom - dy,
        }
    }
}

/// Hex colour string such as `#333`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub family: &'static str,
    pub size: u32,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size: u32) -> Font {
        Font {
            family: "Arial",
            size,
            bold: false,
        }
    }

    pub const fn bold(size: u32) -> Font {
        Font {
            family: "Arial",
            size,
            bold: true,
        }
    }
}

/// `None` for outline or fill means that part is not drawn.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectStyle {
    pub outline: Option<Color>,
    pub fill: Option<Color>,
    pub stroke_width: u32,
}

/***************************************/
/*          Rendering backend          */
/***************************************/

/**
 * Drawing target for the building view.
 *
 * The view only ever clears the scene, draws rectangles and text, and then asks
 * the surface to fit its scroll region to what was drawn. Text is anchored at
 * its centre.
 */
pub trait RenderSurface {
    fn clear(&mut self);
    fn draw_rect(&mut self, rect: Rect, style: RectStyle);
    fn draw_text(&mut self, position: Point, content: &str, font: Font, color: Color);
    /// Bounding box of everything drawn since the last clear.
    fn content_bounds(&self) -> Option<Rect>;
    fn set_scroll_region(&mut self, region: Rect);
    fn resize(&mut self, width: i32, height: i32);
}
