//! In-memory [`Canvas`] that records drawing primitives.
//!
//! `RecordingCanvas` tracks the cursor, page count and page-break state the
//! same way a PDF writer does, but instead of emitting content it keeps a
//! list of [`DrawOp`]s. It is useful for dry-run layout (how many pages will
//! this table take?) and for inspecting exactly what a table draws.
//!
//! Measurements go through a [`FontMetrics`] implementation, so the numbers
//! are only as good as the metrics supplied.

use super::canvas::{Canvas, CellAlign, CellBorder, Colour, Orientation};
use super::font_metrics::{wrap_text, FontMetrics, SimpleFontMetrics};
use crate::geometry::{Point, Rect};

/// Page size and margins, in the writer's user unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width in portrait orientation
    pub width: f32,
    /// Page height in portrait orientation
    pub height: f32,
    /// Left margin
    pub left_margin: f32,
    /// Top margin
    pub top_margin: f32,
    /// Right margin
    pub right_margin: f32,
    /// Distance from the bottom edge at which a page break is triggered
    pub break_margin: f32,
    /// Horizontal padding inside cells
    pub cell_margin: f32,
    /// Font size used for measuring text
    pub font_size: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    /// A4 in millimetres with 1 cm margins and a 2 cm page-break margin.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            left_margin: 10.0,
            top_margin: 10.0,
            right_margin: 10.0,
            break_margin: 20.0,
            cell_margin: 1.0,
            font_size: 12.0 * 25.4 / 72.0, // 12pt
        }
    }

    /// US Letter in millimetres with the same margins as [`a4`](Self::a4).
    pub fn letter() -> Self {
        Self {
            width: 215.9,
            height: 279.4,
            ..Self::a4()
        }
    }

    /// Set the page size.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set left, top and right margins.
    pub fn with_margins(mut self, left: f32, top: f32, right: f32) -> Self {
        self.left_margin = left;
        self.top_margin = top;
        self.right_margin = right;
        self
    }

    /// Set the page-break margin.
    pub fn with_break_margin(mut self, margin: f32) -> Self {
        self.break_margin = margin;
        self
    }

    /// Set the font size used for measuring.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    fn oriented_size(&self, orientation: Orientation) -> (f32, f32) {
        match orientation {
            Orientation::Portrait => (self.width, self.height),
            Orientation::Landscape => (self.height, self.width),
        }
    }
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Single-line cell
    Cell {
        /// Area covered by the cell
        rect: Rect,
        /// Cell text
        text: String,
        /// Border drawn
        border: CellBorder,
    },
    /// Wrapped text block
    MultiCell {
        /// Area covered by the block
        rect: Rect,
        /// Lines after wrapping
        lines: Vec<String>,
        /// Horizontal alignment
        align: CellAlign,
        /// Whether the background was filled
        fill: bool,
    },
    /// Stroked rectangle
    Rect(Rect),
    /// Fill colour change
    SetFillColour(Colour),
    /// New page (1-based page number)
    AddPage {
        /// Number of the page just started
        page: usize,
        /// Its orientation
        orientation: Orientation,
    },
}

/// A canvas that records what would be drawn.
#[derive(Debug, Clone)]
pub struct RecordingCanvas<M = SimpleFontMetrics> {
    geometry: PageGeometry,
    metrics: M,
    orientation: Orientation,
    page: usize,
    x: f32,
    y: f32,
    last_height: f32,
    fill_colour: Colour,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas<SimpleFontMetrics> {
    /// Canvas on a single A4 portrait page, measuring with [`SimpleFontMetrics`].
    pub fn new() -> Self {
        Self::with_geometry(PageGeometry::default())
    }

    /// Canvas on a single page of the given geometry.
    pub fn with_geometry(geometry: PageGeometry) -> Self {
        Self::with_metrics(geometry, SimpleFontMetrics::default())
    }
}

impl Default for RecordingCanvas<SimpleFontMetrics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FontMetrics> RecordingCanvas<M> {
    /// Canvas on a single page, measuring with `metrics`.
    pub fn with_metrics(geometry: PageGeometry, metrics: M) -> Self {
        Self {
            geometry,
            metrics,
            orientation: Orientation::Portrait,
            page: 1,
            x: geometry.left_margin,
            y: geometry.top_margin,
            last_height: 0.0,
            fill_colour: Colour::Grey(255),
            ops: Vec::new(),
        }
    }

    /// Page geometry.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Number of pages started so far.
    pub fn page_count(&self) -> usize {
        self.page
    }

    /// Current cursor.
    pub fn cursor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Current fill colour.
    pub fn fill_colour(&self) -> Colour {
        self.fill_colour
    }

    /// Everything drawn so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the list empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Recorded rectangles.
    pub fn rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Fill flags of the recorded multi-line cells, in drawing order.
    pub fn multi_cell_fills(&self) -> Vec<bool> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::MultiCell { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect()
    }

    fn page_height(&self) -> f32 {
        self.geometry.oriented_size(self.orientation).1
    }
}

impl<M: FontMetrics> Canvas for RecordingCanvas<M> {
    fn cell(&mut self, width: f32, height: f32, text: &str, border: CellBorder) {
        let width = if width == 0.0 {
            self.page_width() - self.geometry.right_margin - self.x
        } else {
            width
        };
        self.ops.push(DrawOp::Cell {
            rect: Rect::new(self.x, self.y, width, height),
            text: text.to_string(),
            border,
        });
        self.last_height = height;
        self.x += width;
    }

    fn multi_cell(
        &mut self,
        width: f32,
        line_height: f32,
        text: &str,
        border: CellBorder,
        align: CellAlign,
        fill: bool,
    ) {
        let width = if width == 0.0 {
            self.page_width() - self.geometry.right_margin - self.x
        } else {
            width
        };
        let wrap_width = width - 2.0 * self.geometry.cell_margin;
        let lines = wrap_text(text, wrap_width, self.geometry.font_size, &self.metrics);
        let height = line_height * lines.len() as f32;
        let rect = Rect::new(self.x, self.y, width, height);

        if border != CellBorder::None {
            self.ops.push(DrawOp::Rect(rect));
        }
        self.ops.push(DrawOp::MultiCell {
            rect,
            lines,
            align,
            fill,
        });
        self.last_height = line_height;
        self.x = self.geometry.left_margin;
        self.y += height;
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::Rect(Rect::new(x, y, width, height)));
    }

    fn string_width(&self, text: &str) -> f32 {
        self.metrics.text_width(text, self.geometry.font_size)
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn set_xy(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn ln(&mut self, height: Option<f32>) {
        self.x = self.geometry.left_margin;
        self.y += height.unwrap_or(self.last_height);
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill_colour = colour;
        self.ops.push(DrawOp::SetFillColour(colour));
    }

    fn page_break_trigger(&self) -> f32 {
        self.page_height() - self.geometry.break_margin
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn add_page(&mut self, orientation: Orientation) {
        self.page += 1;
        self.orientation = orientation;
        self.x = self.geometry.left_margin;
        self.y = self.geometry.top_margin;
        self.ops.push(DrawOp::AddPage {
            page: self.page,
            orientation,
        });
    }

    fn page_width(&self) -> f32 {
        self.geometry.oriented_size(self.orientation).0
    }

    fn right_margin(&self) -> f32 {
        self.geometry.right_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_geometry() {
        let canvas = RecordingCanvas::new();
        assert_eq!(canvas.page_count(), 1);
        assert_eq!(canvas.cursor(), Point::new(10.0, 10.0));
        assert_eq!(canvas.page_break_trigger(), 277.0);
        assert_eq!(canvas.page_width(), 210.0);
        assert_eq!(canvas.right_margin(), 10.0);
    }

    #[test]
    fn test_cell_advances_x() {
        let mut canvas = RecordingCanvas::new();
        canvas.cell(40.0, 7.0, "Name", CellBorder::Bottom);
        assert_eq!(canvas.x(), 50.0);
        assert_eq!(canvas.y(), 10.0);
        canvas.ln(None);
        assert_eq!(canvas.cursor(), Point::new(10.0, 17.0));
    }

    #[test]
    fn test_multi_cell_ends_below_block() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_xy(50.0, 20.0);
        canvas.multi_cell(40.0, 7.0, "Bob\nSmith", CellBorder::None, CellAlign::Left, false);
        assert_eq!(canvas.cursor(), Point::new(10.0, 34.0));
        match &canvas.ops()[0] {
            DrawOp::MultiCell { rect, lines, .. } => {
                assert_eq!(*rect, Rect::new(50.0, 20.0, 40.0, 14.0));
                assert_eq!(lines.len(), 2);
            },
            other => panic!("unexpected op: {:?}", other),
        }
    }

    #[test]
    fn test_landscape_page_swaps_dimensions() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_xy(10.0, 200.0);
        canvas.add_page(Orientation::Landscape);
        assert_eq!(canvas.page_count(), 2);
        assert_eq!(canvas.orientation(), Orientation::Landscape);
        assert_eq!(canvas.page_width(), 297.0);
        assert_eq!(canvas.page_break_trigger(), 190.0);
        assert_eq!(canvas.cursor(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_fill_colour_recorded() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_fill_colour(Colour::Grey(220));
        assert_eq!(canvas.fill_colour(), Colour::Grey(220));
        assert_eq!(canvas.take_ops(), vec![DrawOp::SetFillColour(Colour::Grey(220))]);
        assert!(canvas.ops().is_empty());
    }
}
