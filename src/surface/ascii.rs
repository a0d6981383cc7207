use super::recording::text_bounds;
use super::{Color, Font, Point, Rect, RectStyle, RenderSurface};

/**
 * Terminal backend that rasterizes the scene onto a character grid.
 *
 * Every `px_per_column` pixels map to one column and every `px_per_row`
 * pixels to one row. Rectangle outlines are drawn with `+`, `-` and `|`;
 * fills are not drawn. Text is centred on its anchor and clipped to the grid.
 * Only the part of the grid inside the scroll region is shown by `frame`.
 */
pub struct AsciiSurface {
    px_per_column: i32,
    px_per_row: i32,
    grid: Vec<Vec<char>>,
    bounds: Option<Rect>,
    scroll_region: Option<Rect>,
}

impl AsciiSurface {
    pub fn new(px_per_column: i32, px_per_row: i32) -> AsciiSurface {
        AsciiSurface {
            px_per_column: px_per_column.max(1),
            px_per_row: px_per_row.max(1),
            grid: Vec::new(),
            bounds: None,
            scroll_region: None,
        }
    }

    /// Rows of the visible picture, trailing blanks removed.
    pub fn frame(&self) -> String {
        let (first_row, last_row, first_col, last_col) = match self.scroll_region {
            Some(region) => (
                self.row(region.top).max(0) as usize,
                self.row(region.bottom).max(0) as usize,
                self.column(region.left).max(0) as usize,
                self.column(region.right).max(0) as usize,
            ),
            None => (0, self.grid.len(), 0, usize::MAX),
        };

        self.grid
            .iter()
            .enumerate()
            .filter(|(i, _)| *i >= first_row && *i <= last_row)
            .map(|(_, line)| {
                let visible: String = line
                    .iter()
                    .skip(first_col)
                    .take(last_col.saturating_sub(first_col).saturating_add(1))
                    .collect();
                visible.trim_end().to_string()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn column(&self, x: i32) -> i32 {
        x.div_euclid(self.px_per_column)
    }

    fn row(&self, y: i32) -> i32 {
        y.div_euclid(self.px_per_row)
    }

    fn put(&mut self, column: i32, row: i32, c: char) {
        if column < 0 || row < 0 {
            return;
        }
        if let Some(cell) = self
            .grid
            .get_mut(row as usize)
            .and_then(|line| line.get_mut(column as usize))
        {
            *cell = c;
        }
    }

    fn grow_bounds(&mut self, rect: Rect) {
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.union(&rect),
            None => rect,
        });
    }
}

impl RenderSurface for AsciiSurface {
    fn clear(&mut self) {
        for line in self.grid.iter_mut() {
            line.iter_mut().for_each(|cell| *cell = ' ');
        }
        self.bounds = None;
    }

    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        self.grow_bounds(rect);
        if style.outline.is_none() {
            return;
        }

        let (left, right) = (self.column(rect.left), self.column(rect.right));
        let (top, bottom) = (self.row(rect.top), self.row(rect.bottom));

        for column in left..=right {
            self.put(column, top, '-');
            self.put(column, bottom, '-');
        }
        for row in top..=bottom {
            self.put(left, row, '|');
            self.put(right, row, '|');
        }
        for (column, row) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            self.put(column, row, '+');
        }
    }

    fn draw_text(&mut self, position: Point, content: &str, font: Font, _color: Color) {
        self.grow_bounds(text_bounds(position, content, font));

        let row = self.row(position.y);
        let start = self.column(position.x) - content.chars().count() as i32 / 2;
        for (offset, c) in content.chars().enumerate() {
            self.put(start + offset as i32, row, c);
        }
    }

    fn content_bounds(&self) -> Option<Rect> {
        self.bounds
    }

    fn set_scroll_region(&mut self, region: Rect) {
        self.scroll_region = Some(region);
    }

    fn resize(&mut self, width: i32, height: i32) {
        let columns = (self.column(width.max(0)) + 1) as usize;
        let rows = (self.row(height.max(0)) + 1) as usize;
        self.grid = vec![vec![' '; columns]; rows];
    }
}
