use serde::Serialize;

use super::{Color, Font, Point, Rect, RectStyle, RenderSurface};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Rect {
        rect: Rect,
        style: RectStyle,
    },
    Text {
        position: Point,
        content: String,
        font: Font,
        color: Color,
    },
}

/**
 * Surface that keeps every draw call since the last clear.
 *
 * Used headless: the `--snapshot` mode prints its JSON, and tests read it back
 * to check what a render produced and how often the scene was cleared.
 *
 * # Fields
 * - `ops`:             Draw calls since the last clear, in call order.
 * - `clears`:          Number of `clear` calls so far.
 * - `scroll_region`:   Last region passed to `set_scroll_region`.
 * - `size`:            Last size passed to `resize`.
 */
#[derive(Serialize, Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    clears: usize,
    scroll_region: Option<Rect>,
    size: Option<(i32, i32)>,
}

impl RecordingSurface {
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    #[cfg(test)]
    pub fn clears(&self) -> usize {
        self.clears
    }

    #[cfg(test)]
    pub fn scroll_region(&self) -> Option<Rect> {
        self.scroll_region
    }

    pub fn size(&self) -> Option<(i32, i32)> {
        self.size
    }

    #[cfg(test)]
    pub fn rects(&self) -> Vec<(Rect, RectStyle)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, style } => Some((*rect, *style)),
                DrawOp::Text { .. } => None,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn texts(&self) -> Vec<(Point, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    position, content, ..
                } => Some((*position, content.as_str())),
                DrawOp::Rect { .. } => None,
            })
            .collect()
    }

    #[cfg(test)]
    /// Position of the first text whose content equals `content`.
    pub fn find_text(&self, content: &str) -> Option<Point> {
        self.texts()
            .into_iter()
            .find(|(_, text)| *text == content)
            .map(|(position, _)| position)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.clears += 1;
    }

    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        self.ops.push(DrawOp::Rect { rect, style });
    }

    fn draw_text(&mut self, position: Point, content: &str, font: Font, color: Color) {
        self.ops.push(DrawOp::Text {
            position,
            content: content.to_string(),
            font,
            color,
        });
    }

    fn content_bounds(&self) -> Option<Rect> {
        self.ops
            .iter()
            .map(|op| match op {
                DrawOp::Rect { rect, .. } => *rect,
                DrawOp::Text {
                    position, content, font, ..
                } => text_bounds(*position, content, *font),
            })
            .reduce(|acc, rect| acc.union(&rect))
    }

    fn set_scroll_region(&mut self, region: Rect) {
        self.scroll_region = Some(region);
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.size = Some((width, height));
    }
}

// Rough extent of centred text: glyphs are taken as 0.6 em wide.
pub(crate) fn text_bounds(position: Point, content: &str, font: Font) -> Rect {
    let half_width = (content.chars().count() as i32 * font.size as i32 * 3) / 10;
    let half_height = font.size as i32 / 2 + 1;
    Rect::new(
        position.x - half_width,
        position.y - half_height,
        position.x + half_width,
        position.y + half_height,
    )
}
