//! Drawing capability consumed by the table renderer.
//!
//! [`Canvas`] is the slice of a PDF writer that table layout needs: single
//! and multi-line cells, rectangles, string measurement, the cursor, and the
//! page-break state. The page-break trigger and the current orientation are
//! part of the trait so a writer can expose them without being wrapped.

use serde::{Deserialize, Serialize};

/// Horizontal alignment for cell content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    /// Align to the left
    #[default]
    Left,
    /// Center horizontally
    Center,
    /// Align to the right
    Right,
}

/// Which edges of a cell get a border line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellBorder {
    /// No border
    #[default]
    None,
    /// Full frame around the cell
    Frame,
    /// Bottom edge only
    Bottom,
}

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Taller than wide
    #[default]
    Portrait,
    /// Wider than tall
    Landscape,
}

/// A fill colour as the writer understands it (0-255 components).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    /// Single grey level
    Grey(u8),
    /// Red, green, blue
    Rgb(u8, u8, u8),
}

/// PDF drawing primitives used to lay out a table.
///
/// Coordinates are in the writer's user unit with the origin at the top-left
/// of the page and y growing downwards.
pub trait Canvas {
    /// Draw a single-line cell and move the cursor right by `width`.
    fn cell(&mut self, width: f32, height: f32, text: &str, border: CellBorder);

    /// Draw a block of text wrapped to `width`, one line per `line_height`.
    ///
    /// The cursor ends at the bottom-left of the block.
    fn multi_cell(
        &mut self,
        width: f32,
        line_height: f32,
        text: &str,
        border: CellBorder,
        align: CellAlign,
        fill: bool,
    );

    /// Stroke a rectangle.
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Width of `text` in the current font.
    fn string_width(&self, text: &str) -> f32;

    /// Current cursor abscissa.
    fn x(&self) -> f32;

    /// Current cursor ordinate.
    fn y(&self) -> f32;

    /// Move the cursor.
    fn set_xy(&mut self, x: f32, y: f32);

    /// Line break: back to the left margin and down by `height`, or by the
    /// height of the last cell drawn when `None`.
    fn ln(&mut self, height: Option<f32>);

    /// Set the colour used by filled cells.
    fn set_fill_colour(&mut self, colour: Colour);

    /// Ordinate beyond which content must move to a new page.
    fn page_break_trigger(&self) -> f32;

    /// Orientation of the current page.
    fn orientation(&self) -> Orientation;

    /// Start a new page.
    fn add_page(&mut self, orientation: Orientation);

    /// Width of the current page.
    fn page_width(&self) -> f32;

    /// Right page margin.
    fn right_margin(&self) -> f32;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn cell(&mut self, width: f32, height: f32, text: &str, border: CellBorder) {
        (**self).cell(width, height, text, border)
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
        (**self).multi_cell(width, line_height, text, border, align, fill)
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        (**self).rect(x, y, width, height)
    }

    fn string_width(&self, text: &str) -> f32 {
        (**self).string_width(text)
    }

    fn x(&self) -> f32 {
        (**self).x()
    }

    fn y(&self) -> f32 {
        (**self).y()
    }

    fn set_xy(&mut self, x: f32, y: f32) {
        (**self).set_xy(x, y)
    }

    fn ln(&mut self, height: Option<f32>) {
        (**self).ln(height)
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        (**self).set_fill_colour(colour)
    }

    fn page_break_trigger(&self) -> f32 {
        (**self).page_break_trigger()
    }

    fn orientation(&self) -> Orientation {
        (**self).orientation()
    }

    fn add_page(&mut self, orientation: Orientation) {
        (**self).add_page(orientation)
    }

    fn page_width(&self) -> f32 {
        (**self).page_width()
    }

    fn right_margin(&self) -> f32 {
        (**self).right_margin()
    }
}
