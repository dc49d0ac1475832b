//! Grid geometry and occupancy storage for menu layouts.
//!
//! Coordinates come in two flavors: [`Cell`] is the 0-based index pair used
//! internally, while [`MenuCoord`] is the 1-based "counting number" pair that
//! hosts supply at the API boundary. Conversion happens exactly once, at that
//! boundary.

use core::fmt;

use crate::item::ItemId;

/// Configuration failures raised while building a menu grid.
///
/// Both variants are fatal to the construction call; the caller must supply
/// a well-formed layout and rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("grid dimensions {rows}x{columns} must both be at least 1")]
    NonPositiveDimensions { rows: u32, columns: u32 },

    #[error("cell count {actual} does not match {rows}x{columns} grid")]
    ShapeMismatch {
        rows: u32,
        columns: u32,
        actual: usize,
    },
}

/// 0-based grid coordinate, row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub column: u32,
}

impl Cell {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Offsets the cell by signed deltas, returning `None` when either axis
    /// would go below zero. The upper bound is checked against
    /// [`GridDimensions::contains`] by the caller.
    pub fn offset(self, row_delta: i32, column_delta: i32) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(row_delta)?,
            column: self.column.checked_add_signed(column_delta)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// 1-based coordinate pair as supplied by hosts ("row 1, column 1" is the
/// top-left cell). Layout files and all public setters speak this form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuCoord {
    pub row: u32,
    pub column: u32,
}

impl MenuCoord {
    /// Fallback default position when a layout declares none.
    pub const FIRST: Self = Self { row: 1, column: 1 };

    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Converts to the 0-based form; `None` when either component is zero.
    pub fn to_cell(self) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_sub(1)?,
            column: self.column.checked_sub(1)?,
        })
    }
}

impl Default for MenuCoord {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<Cell> for MenuCoord {
    fn from(cell: Cell) -> Self {
        Self {
            row: cell.row + 1,
            column: cell.column + 1,
        }
    }
}

impl fmt::Display for MenuCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Fixed size of a menu grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub rows: u32,
    pub columns: u32,
}

impl GridDimensions {
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    /// True when the 1-based coordinate lies within `[1, rows] x [1, columns]`.
    pub fn contains_coord(&self, coord: MenuCoord) -> bool {
        coord.to_cell().is_some_and(|cell| self.contains(cell))
    }
}

/// Row-major grid of optional item handles.
///
/// A cell may be empty only at the ragged trailing edge of its row or column;
/// the grid itself does not enforce that invariant (construction is driven by
/// the layout layer, which validates it), but the selector's no-skip movement
/// guarantee relies on it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuGrid {
    dimensions: GridDimensions,
    cells: Vec<Option<ItemId>>,
}

impl MenuGrid {
    /// Builds a grid from row-major cells.
    ///
    /// Fails when either dimension is zero or the cell vector does not have
    /// exactly `rows * columns` entries.
    pub fn new(dimensions: GridDimensions, cells: Vec<Option<ItemId>>) -> Result<Self, ConfigError> {
        if dimensions.rows < 1 || dimensions.columns < 1 {
            return Err(ConfigError::NonPositiveDimensions {
                rows: dimensions.rows,
                columns: dimensions.columns,
            });
        }
        let expected = dimensions.rows as usize * dimensions.columns as usize;
        if cells.len() != expected {
            return Err(ConfigError::ShapeMismatch {
                rows: dimensions.rows,
                columns: dimensions.columns,
                actual: cells.len(),
            });
        }
        Ok(Self { dimensions, cells })
    }

    /// Builds a fully empty grid of the given size.
    pub fn empty(dimensions: GridDimensions) -> Result<Self, ConfigError> {
        let len = dimensions.rows as usize * dimensions.columns as usize;
        Self::new(dimensions, vec![None; len])
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Returns the item handle at `cell`, or `None` for an empty or
    /// out-of-grid cell.
    pub fn item_at(&self, cell: Cell) -> Option<ItemId> {
        if !self.dimensions.contains(cell) {
            return None;
        }
        let index = cell.row as usize * self.dimensions.columns as usize + cell.column as usize;
        self.cells[index]
    }

    /// Places an item handle at `cell`, returning the previous occupant.
    /// No-op returning `None` when the cell is outside the grid.
    pub fn place(&mut self, cell: Cell, item: ItemId) -> Option<ItemId> {
        if !self.dimensions.contains(cell) {
            return None;
        }
        let index = cell.row as usize * self.dimensions.columns as usize + cell.column as usize;
        self.cells[index].replace(item)
    }
}
