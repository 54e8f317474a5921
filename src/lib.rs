// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

//! # PDF Table
//!
//! Striped, bordered tables for an existing PDF writer.
//!
//! ## Features
//! - **Column layout**: fixed widths, per-column alignment, a zero-width
//!   "rest of the line" column
//! - **Wrapped cells**: rows grow to the tallest cell, explicit `\n` honoured
//! - **Page breaks**: a row that would cross the page-break trigger starts a
//!   new page first, so rows are never split
//! - **Striping**: alternate rows filled with a grey or RGB colour
//! - **Writer agnostic**: everything is drawn through the [`writer::Canvas`]
//!   trait; [`writer::RecordingCanvas`] records a dry run
//!
//! ## Quick Start
//!
//! ```
//! use pdf_table::config::TableConfig;
//! use pdf_table::writer::{CellAlign, RecordingCanvas, TableRenderer};
//!
//! # fn main() -> pdf_table::Result<()> {
//! let config = TableConfig::builder()
//!     .column_widths(vec![60.0, 30.0])
//!     .column_align(1, CellAlign::Right)
//!     .header_titles(vec!["Item", "Price"])
//!     .build()?;
//!
//! let mut canvas = RecordingCanvas::new();
//! let mut table = TableRenderer::new(&mut canvas, config);
//! table.draw_table(vec![vec!["Coffee", "2.50"], vec!["Tea", "2.00"]])?;
//! assert_eq!(canvas.page_count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Layout primitives
pub mod geometry;

// Table drawing
pub mod writer;

// Re-exports
pub use config::{StripeColour, TableConfig, TableConfigBuilder};
pub use error::{Error, Result};
pub use writer::{Canvas, TableRenderer};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
