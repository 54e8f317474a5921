//! Table drawing on top of a PDF writer.
//!
//! ## Architecture
//!
//! ```text
//! TableConfig (widths, aligns, header, striping)
//!     ↓
//! [TableRenderer] (line estimation, page breaks, fill alternation)
//!     ↓
//! [Canvas] (cell / multi_cell / rect / cursor / add_page)
//!     ↓
//! your PDF writer, or [RecordingCanvas] for a dry run
//! ```

mod canvas;
mod font_metrics;
mod recording_canvas;
mod table_renderer;

pub use canvas::{Canvas, CellAlign, CellBorder, Colour, Orientation};
pub use font_metrics::{FontMetrics, SimpleFontMetrics};
pub use recording_canvas::{DrawOp, PageGeometry, RecordingCanvas};
pub use table_renderer::{nb_lines, TableRenderer, HEADER_HEIGHT};
