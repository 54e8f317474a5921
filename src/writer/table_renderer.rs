//! Table rendering on top of a [`Canvas`].
//!
//! The renderer draws a header row and then data rows, one call per row, in
//! document order. Each row is measured first (how many wrapped lines its
//! tallest cell needs), moved to a new page if it would cross the page-break
//! trigger, and only then drawn, so a row is never split across pages.
//!
//! # Example
//!
//! ```
//! use pdf_table::config::TableConfig;
//! use pdf_table::writer::{RecordingCanvas, TableRenderer};
//!
//! # fn main() -> pdf_table::Result<()> {
//! let config = TableConfig::builder()
//!     .column_widths(vec![40.0, 40.0, 40.0])
//!     .header_titles(vec!["Name", "Surname", "Team"])
//!     .build()?;
//!
//! let mut canvas = RecordingCanvas::new();
//! let mut table = TableRenderer::new(&mut canvas, config);
//! table.draw_header()?;
//! table.draw_row(&["Alice", "Bob\nSmith", "Carol"])?;
//! # Ok(())
//! # }
//! ```

use super::canvas::{Canvas, CellBorder};
use crate::config::TableConfig;
use crate::error::{Error, Result};

/// Height of the header row.
pub const HEADER_HEIGHT: f32 = 7.0;

/// Number of lines `text` takes when wrapped in a column `width` wide.
///
/// Explicit line breaks win: text with `k` newlines takes `k + 1` lines
/// whatever its width. Otherwise the estimate is the measured string width
/// divided by `width - 1`, rounded up, and never less than one line. A
/// width of `0` stands for the space left between the cursor and the right
/// margin.
pub fn nb_lines<C: Canvas + ?Sized>(canvas: &C, width: f32, text: &str) -> Result<u32> {
    let width = if width == 0.0 {
        let remaining = canvas.page_width() - canvas.right_margin() - canvas.x();
        log::debug!("Zero-width column measured against remaining width {}", remaining);
        remaining
    } else {
        width
    };

    let newlines = text.matches('\n').count();
    if newlines > 0 {
        return Ok(newlines as u32 + 1);
    }

    if !(width > 1.0) {
        return Err(Error::invalid_dimension("effective column width", width));
    }

    let lines = (canvas.string_width(text) / (width - 1.0)).ceil();
    Ok((lines as u32).max(1))
}

/// Draws striped, optionally bordered tables onto a canvas.
///
/// The renderer keeps one piece of state between rows: the fill flag used for
/// striping. It flips after every row, including rows drawn while striping is
/// off, so turning striping off and back on continues the alternation where
/// the unfilled rows left it.
#[derive(Debug)]
pub struct TableRenderer<C: Canvas> {
    canvas: C,
    config: TableConfig,
    fill: bool,
}

impl<C: Canvas> TableRenderer<C> {
    /// Create a renderer drawing on `canvas`.
    pub fn new(canvas: C, config: TableConfig) -> Self {
        Self {
            canvas,
            config,
            fill: false,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Replace the configuration. The fill flag is kept.
    pub fn set_config(&mut self, config: TableConfig) {
        self.config = config;
    }

    /// Fill flag the next striped row will use.
    pub fn fill(&self) -> bool {
        self.fill
    }

    /// Start the stripe alternation over with an unfilled row.
    pub fn reset_fill(&mut self) {
        self.fill = false;
    }

    /// The canvas being drawn on.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Mutable access to the canvas, e.g. to draw between tables.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Give the canvas back.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Number of lines `text` needs in a column `width` wide, at the current cursor.
    pub fn nb_lines(&self, width: f32, text: &str) -> Result<u32> {
        nb_lines(&self.canvas, width, text)
    }

    /// Draw the header row.
    ///
    /// Does nothing when the table has no header titles. Header cells are
    /// [`HEADER_HEIGHT`] tall and always underlined, framed table or not.
    pub fn draw_header(&mut self) -> Result<()> {
        let titles = self.config.header_titles();
        if titles.is_empty() {
            return Ok(());
        }

        let widths = self.config.column_widths();
        if titles.len() > widths.len() {
            return Err(Error::mismatch("header titles", widths.len(), titles.len()));
        }

        for (title, &width) in titles.iter().zip(widths) {
            self.canvas.cell(width, HEADER_HEIGHT, title, CellBorder::Bottom);
        }
        self.canvas.ln(None);

        Ok(())
    }

    /// Draw one data row.
    ///
    /// `data` must hold one entry per column; an empty row draws nothing but
    /// still advances the stripe alternation.
    pub fn draw_row<S: AsRef<str>>(&mut self, data: &[S]) -> Result<()> {
        let widths = self.config.column_widths();
        if !data.is_empty() && data.len() != widths.len() {
            return Err(Error::mismatch("row data", widths.len(), data.len()));
        }

        let mut nb = 0;
        for (text, &width) in data.iter().zip(widths) {
            nb = nb.max(nb_lines(&self.canvas, width, text.as_ref())?);
        }
        let row_height = self.config.row_height() as f32;
        let height = row_height * nb as f32;
        log::debug!("Row of {} columns: {} lines, height {}", data.len(), nb, height);

        if self.config.striped() {
            self.canvas.set_fill_colour(self.config.stripe_colour().to_colour());
        } else {
            self.fill = false;
        }

        check_page_break(&mut self.canvas, height);

        for (i, (text, &width)) in data.iter().zip(widths).enumerate() {
            let x = self.canvas.x();
            let y = self.canvas.y();
            if self.config.bordered() {
                self.canvas.rect(x, y, width, height);
            }
            self.canvas.multi_cell(
                width,
                row_height,
                text.as_ref(),
                CellBorder::None,
                self.config.align(i),
                self.fill,
            );
            self.canvas.set_xy(x + width, y);
        }

        self.fill = !self.fill;
        self.canvas.ln(Some(height));

        Ok(())
    }

    /// Draw rows in order, stopping at the first one that fails.
    pub fn draw_rows<R, S>(&mut self, rows: impl IntoIterator<Item = R>) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        for row in rows {
            self.draw_row(row.as_ref())?;
        }
        Ok(())
    }

    /// Draw the header followed by every row.
    pub fn draw_table<R, S>(&mut self, rows: impl IntoIterator<Item = R>) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.draw_header()?;
        self.draw_rows(rows)
    }
}

// Start a new page if a row `height` tall would cross the trigger.
fn check_page_break<C: Canvas + ?Sized>(canvas: &mut C, height: f32) {
    if canvas.y() + height > canvas.page_break_trigger() {
        log::info!(
            "Row of height {} at y={} crosses page break trigger {}, adding page",
            height,
            canvas.y(),
            canvas.page_break_trigger()
        );
        let orientation = canvas.orientation();
        canvas.add_page(orientation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::writer::{CellAlign, Colour, DrawOp, PageGeometry, RecordingCanvas};

    fn config(widths: Vec<f32>) -> TableConfig {
        TableConfig::builder().column_widths(widths).build().unwrap()
    }

    #[test]
    fn test_nb_lines_counts_newlines() {
        let canvas = RecordingCanvas::new();
        assert_eq!(nb_lines(&canvas, 40.0, "Bob\nSmith").unwrap(), 2);
        assert_eq!(nb_lines(&canvas, 40.0, "a\n\n\nb").unwrap(), 4);
        // explicit breaks are trusted even if a line would overflow
        let long = "x".repeat(200);
        assert_eq!(nb_lines(&canvas, 40.0, &format!("{}\n", long)).unwrap(), 2);
    }

    #[test]
    fn test_nb_lines_by_width() {
        let canvas = RecordingCanvas::with_geometry(PageGeometry::a4().with_font_size(2.0));
        // one char is 1.0 wide
        assert_eq!(nb_lines(&canvas, 11.0, "0123456789").unwrap(), 1);
        assert_eq!(nb_lines(&canvas, 11.0, "0123456789a").unwrap(), 2);
        assert_eq!(nb_lines(&canvas, 6.0, "0123456789a").unwrap(), 3);
    }

    #[test]
    fn test_nb_lines_empty_text_is_one_line() {
        let canvas = RecordingCanvas::new();
        assert_eq!(nb_lines(&canvas, 40.0, "").unwrap(), 1);
    }

    #[test]
    fn test_nb_lines_zero_width_uses_remaining_space() {
        let canvas = RecordingCanvas::with_geometry(PageGeometry::a4().with_font_size(2.0));
        // remaining = 210 - 10 - 10 = 190, divisor 189
        assert_eq!(nb_lines(&canvas, 0.0, &"x".repeat(189)).unwrap(), 1);
        assert_eq!(nb_lines(&canvas, 0.0, &"x".repeat(190)).unwrap(), 2);
    }

    #[test]
    fn test_nb_lines_zero_width_with_no_room() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_xy(199.5, 10.0);
        let err = nb_lines(&canvas, 0.0, "Hello").unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. }));
    }

    #[test]
    fn test_header_noop_without_titles() {
        let mut canvas = RecordingCanvas::new();
        let mut table = TableRenderer::new(&mut canvas, config(vec![40.0]));
        table.draw_header().unwrap();
        assert!(canvas.ops().is_empty());
        assert_eq!(canvas.y(), 10.0);
    }

    #[test]
    fn test_header_is_underlined() {
        let mut canvas = RecordingCanvas::new();
        let cfg = config(vec![30.0, 50.0])
            .to_builder()
            .header_titles(vec!["A", "B"])
            .build()
            .unwrap();
        TableRenderer::new(&mut canvas, cfg).draw_header().unwrap();

        assert_eq!(
            canvas.ops(),
            &[
                DrawOp::Cell {
                    rect: Rect::new(10.0, 10.0, 30.0, 7.0),
                    text: "A".to_string(),
                    border: CellBorder::Bottom,
                },
                DrawOp::Cell {
                    rect: Rect::new(40.0, 10.0, 50.0, 7.0),
                    text: "B".to_string(),
                    border: CellBorder::Bottom,
                },
            ]
        );
        assert_eq!(canvas.x(), 10.0);
        assert_eq!(canvas.y(), 17.0);
    }

    #[test]
    fn test_row_cells_share_top_edge() {
        let mut canvas = RecordingCanvas::new();
        let cfg = config(vec![40.0, 40.0, 40.0])
            .to_builder()
            .column_align(2, CellAlign::Right)
            .build()
            .unwrap();
        TableRenderer::new(&mut canvas, cfg)
            .draw_row(&["Alice", "Bob\nSmith", "Carol"])
            .unwrap();

        assert_eq!(
            canvas.rects(),
            vec![
                Rect::new(10.0, 10.0, 40.0, 14.0),
                Rect::new(50.0, 10.0, 40.0, 14.0),
                Rect::new(90.0, 10.0, 40.0, 14.0),
            ]
        );
        let aligns: Vec<CellAlign> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::MultiCell { align, .. } => Some(*align),
                _ => None,
            })
            .collect();
        assert_eq!(aligns, vec![CellAlign::Left, CellAlign::Left, CellAlign::Right]);
        assert_eq!(canvas.y(), 24.0);
        assert_eq!(canvas.x(), 10.0);
    }

    #[test]
    fn test_unbordered_row_draws_no_rects() {
        let mut canvas = RecordingCanvas::new();
        let cfg = config(vec![40.0]).to_builder().bordered(false).build().unwrap();
        TableRenderer::new(&mut canvas, cfg).draw_row(&["x"]).unwrap();
        assert!(canvas.rects().is_empty());
    }

    #[test]
    fn test_striped_row_sets_fill_colour() {
        let mut canvas = RecordingCanvas::new();
        let cfg = config(vec![40.0])
            .to_builder()
            .stripe_colour(200, Some(220), Some(240))
            .build()
            .unwrap();
        TableRenderer::new(&mut canvas, cfg).draw_row(&["x"]).unwrap();
        assert_eq!(canvas.ops()[0], DrawOp::SetFillColour(Colour::Rgb(200, 220, 240)));
    }

    #[test]
    fn test_row_data_mismatch() {
        let mut canvas = RecordingCanvas::new();
        let mut table = TableRenderer::new(&mut canvas, config(vec![40.0, 40.0]));
        assert!(matches!(
            table.draw_row(&["a", "b", "c"]),
            Err(Error::ConfigurationMismatch { expected: 2, found: 3, .. })
        ));
        assert!(matches!(
            table.draw_row(&["a"]),
            Err(Error::ConfigurationMismatch { expected: 2, found: 1, .. })
        ));
        assert!(!table.fill());
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_empty_row_toggles_fill_only() {
        let mut canvas = RecordingCanvas::new();
        let mut table = TableRenderer::new(&mut canvas, config(vec![40.0]));
        let empty: [&str; 0] = [];
        table.draw_row(&empty).unwrap();
        assert!(table.fill());
        assert_eq!(table.canvas().y(), 10.0);
    }

    #[test]
    fn test_fill_survives_config_swap() {
        let mut canvas = RecordingCanvas::new();
        let mut table = TableRenderer::new(&mut canvas, config(vec![40.0]));
        table.draw_row(&["a"]).unwrap();
        table.set_config(config(vec![60.0]));
        assert!(table.fill());
        table.reset_fill();
        assert!(!table.fill());
    }
}
