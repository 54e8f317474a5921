//! Table configuration.
//!
//! A [`TableConfig`] is an immutable, validated value. Build one with
//! [`TableConfig::builder`], or derive a variant of an existing table with
//! [`TableConfig::to_builder`].
//!
//! ```
//! use pdf_table::config::TableConfig;
//! use pdf_table::writer::CellAlign;
//!
//! let config = TableConfig::builder()
//!     .column_widths(vec![40.0, 40.0, 40.0])
//!     .column_align(2, CellAlign::Right)
//!     .header_titles(vec!["Name", "Role", "Score"])
//!     .row_height(7)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.num_columns(), 3);
//! assert_eq!(config.align(1), CellAlign::Left);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::writer::{CellAlign, Colour};

/// Default unit line height.
pub const DEFAULT_ROW_HEIGHT: u32 = 7;

/// Default stripe grey level.
pub const DEFAULT_STRIPE_GREY: u8 = 220;

/// Stripe fill colour.
///
/// With `g` unset the colour is the grey level `r`. With `g` set and `b`
/// unset, blue is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripeColour {
    /// Red component, or grey level when `g` is unset
    pub r: u8,
    /// Green component
    #[serde(default)]
    pub g: Option<u8>,
    /// Blue component
    #[serde(default)]
    pub b: Option<u8>,
}

impl Default for StripeColour {
    fn default() -> Self {
        Self::grey(DEFAULT_STRIPE_GREY)
    }
}

impl StripeColour {
    /// Create a stripe colour from possibly unset components.
    pub fn new(r: u8, g: Option<u8>, b: Option<u8>) -> Self {
        Self { r, g, b }
    }

    /// Grey stripe.
    pub fn grey(level: u8) -> Self {
        Self::new(level, None, None)
    }

    /// RGB stripe.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, Some(g), Some(b))
    }

    /// Resolve to the colour handed to the canvas.
    pub fn to_colour(self) -> Colour {
        match self.g {
            None => Colour::Grey(self.r),
            Some(g) => Colour::Rgb(self.r, g, self.b.unwrap_or(0)),
        }
    }
}

/// Validated table configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableConfigBuilder", into = "TableConfigBuilder")]
pub struct TableConfig {
    column_widths: Vec<f32>,
    column_aligns: BTreeMap<usize, CellAlign>,
    header_titles: Vec<String>,
    row_height: u32,
    bordered: bool,
    striped: bool,
    stripe_colour: StripeColour,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            column_widths: Vec::new(),
            column_aligns: BTreeMap::new(),
            header_titles: Vec::new(),
            row_height: DEFAULT_ROW_HEIGHT,
            bordered: true,
            striped: true,
            stripe_colour: StripeColour::default(),
        }
    }
}

impl TableConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> TableConfigBuilder {
        TableConfigBuilder::new()
    }

    /// Builder seeded with this configuration.
    pub fn to_builder(&self) -> TableConfigBuilder {
        TableConfigBuilder::from(self.clone())
    }

    /// Load and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let builder: TableConfigBuilder = serde_json::from_str(json)?;
        builder.build()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Column widths; `0.0` means "remaining page width".
    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.column_widths.len()
    }

    /// Alignment of column `index`, `Left` when unset.
    pub fn align(&self, index: usize) -> CellAlign {
        self.column_aligns.get(&index).copied().unwrap_or_default()
    }

    /// Explicit per-column alignments.
    pub fn column_aligns(&self) -> &BTreeMap<usize, CellAlign> {
        &self.column_aligns
    }

    /// Header titles; empty when the table has no header row.
    pub fn header_titles(&self) -> &[String] {
        &self.header_titles
    }

    /// Unit line height.
    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    /// Whether cells are framed.
    pub fn bordered(&self) -> bool {
        self.bordered
    }

    /// Whether alternate rows are filled.
    pub fn striped(&self) -> bool {
        self.striped
    }

    /// Stripe fill colour.
    pub fn stripe_colour(&self) -> StripeColour {
        self.stripe_colour
    }
}

/// Builder for [`TableConfig`]. Nothing is checked until [`build`](Self::build).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfigBuilder {
    column_widths: Vec<f32>,
    column_aligns: BTreeMap<usize, CellAlign>,
    header_titles: Vec<String>,
    row_height: u32,
    bordered: bool,
    striped: bool,
    stripe_colour: StripeColour,
}

impl Default for TableConfigBuilder {
    fn default() -> Self {
        Self::from(TableConfig::default())
    }
}

impl From<TableConfig> for TableConfigBuilder {
    fn from(config: TableConfig) -> Self {
        Self {
            column_widths: config.column_widths,
            column_aligns: config.column_aligns,
            header_titles: config.header_titles,
            row_height: config.row_height,
            bordered: config.bordered,
            striped: config.striped,
            stripe_colour: config.stripe_colour,
        }
    }
}

impl TryFrom<TableConfigBuilder> for TableConfig {
    type Error = Error;

    fn try_from(builder: TableConfigBuilder) -> Result<Self> {
        builder.build()
    }
}

impl TableConfigBuilder {
    /// Create a builder holding the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column widths.
    pub fn column_widths(mut self, widths: Vec<f32>) -> Self {
        self.column_widths = widths;
        self
    }

    /// Replace all column alignments.
    pub fn column_aligns(mut self, aligns: BTreeMap<usize, CellAlign>) -> Self {
        self.column_aligns = aligns;
        self
    }

    /// Set the alignment of one column.
    pub fn column_align(mut self, index: usize, align: CellAlign) -> Self {
        self.column_aligns.insert(index, align);
        self
    }

    /// Set the header titles.
    pub fn header_titles<S: Into<String>>(mut self, titles: Vec<S>) -> Self {
        self.header_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Set the unit line height.
    pub fn row_height(mut self, height: u32) -> Self {
        self.row_height = height;
        self
    }

    /// Set the unit line height from a fractional value, truncated toward zero.
    pub fn row_height_f32(mut self, height: f32) -> Self {
        self.row_height = height as u32;
        self
    }

    /// Frame every cell.
    pub fn bordered(mut self, enable: bool) -> Self {
        self.bordered = enable;
        self
    }

    /// Fill alternate rows.
    pub fn striped(mut self, enable: bool) -> Self {
        self.striped = enable;
        self
    }

    /// Set the stripe colour; `g == None` means grey level `r`.
    pub fn stripe_colour(mut self, r: u8, g: Option<u8>, b: Option<u8>) -> Self {
        self.stripe_colour = StripeColour::new(r, g, b);
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<TableConfig> {
        if self.row_height == 0 {
            return Err(Error::invalid_dimension("row height", 0.0));
        }

        for (i, &width) in self.column_widths.iter().enumerate() {
            // 0 is the remaining-width sentinel; anything else is divided by (width - 1)
            if !width.is_finite() || (width != 0.0 && width <= 1.0) {
                return Err(Error::invalid_dimension(format!("column width [{}]", i), width));
            }
        }

        let num_cols = self.column_widths.len();
        if let Some((&index, _)) = self.column_aligns.range(num_cols..).next_back() {
            return Err(Error::mismatch("column alignments", num_cols, index + 1));
        }
        if self.header_titles.len() > num_cols {
            return Err(Error::mismatch("header titles", num_cols, self.header_titles.len()));
        }

        Ok(TableConfig {
            column_widths: self.column_widths,
            column_aligns: self.column_aligns,
            header_titles: self.header_titles,
            row_height: self.row_height,
            bordered: self.bordered,
            striped: self.striped,
            stripe_colour: self.stripe_colour,
        })
    }
}
