//! Menu layout loader.
//!
//! Loads a declarative menu description from a RON file: grid size, an
//! optional default position, and the placed items with their 1-based grid
//! coordinates and screen bounds.

use std::path::Path;

use menu_core::{Cell, GridDimensions, ItemBounds, MenuCoord, MenuGrid};
use serde::{Deserialize, Serialize};

use crate::item::{ItemKind, ItemSprite, ItemTable};
use crate::loaders::{LoadResult, read_file};

/// Layout data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuLayoutRon {
    rows: u32,
    columns: u32,
    /// Optional 1-based (row, column) default position.
    #[serde(default)]
    default: Option<(u32, u32)>,
    items: Vec<LayoutItemRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutItemRon {
    row: u32,
    column: u32,
    #[serde(default)]
    kind: ItemKind,
    /// (x, y, width, height) in host screen coordinates.
    bounds: (f32, f32, f32, f32),
}

/// A fully validated menu ready to hand to a selector: the occupancy grid,
/// the table resolving its handles, and the declared default position.
#[derive(Clone, Debug)]
pub struct LoadedMenu {
    pub grid: MenuGrid,
    pub items: ItemTable,
    pub default: Option<MenuCoord>,
}

/// Loader for menu layouts from RON files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a menu layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<LoadedMenu> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load layout {}: {}", path.display(), e))
    }

    /// Parse a menu layout from RON text.
    ///
    /// Rejects layouts that would break the selector's movement guarantee:
    /// items outside the declared grid, two items on one cell, and interior
    /// gaps (every row and every column must be occupied as a prefix).
    pub fn from_str(content: &str) -> LoadResult<LoadedMenu> {
        let data: MenuLayoutRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout RON: {}", e))?;

        let dimensions = GridDimensions::new(data.rows, data.columns);
        let mut grid = MenuGrid::empty(dimensions)
            .map_err(|e| anyhow::anyhow!("Invalid layout dimensions: {}", e))?;
        let mut items = ItemTable::new();

        for entry in &data.items {
            let coord = MenuCoord::new(entry.row, entry.column);
            let cell = coord
                .to_cell()
                .filter(|cell| dimensions.contains(*cell))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Item at {} is outside the {}x{} grid",
                        coord,
                        data.rows,
                        data.columns
                    )
                })?;

            let (x, y, width, height) = entry.bounds;
            let id = items.insert(ItemSprite::new(
                entry.kind,
                ItemBounds::new(x, y, width, height),
            ));
            if grid.place(cell, id).is_some() {
                anyhow::bail!("Duplicate item at {}", coord);
            }
        }

        validate_prefix_occupancy(&grid)?;

        let default = data
            .default
            .map(|(row, column)| MenuCoord::new(row, column));
        if let Some(default) = default {
            let cell = default
                .to_cell()
                .filter(|cell| dimensions.contains(*cell))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Default position {} is outside the {}x{} grid",
                        default,
                        data.rows,
                        data.columns
                    )
                })?;
            if grid.item_at(cell).is_none() {
                anyhow::bail!("Default position {} names an empty cell", default);
            }
        }

        Ok(LoadedMenu {
            grid,
            items,
            default,
        })
    }
}

/// Enforces the ragged-edge rule: in every row and every column, occupied
/// cells form a prefix — gaps may appear only at the trailing edge.
fn validate_prefix_occupancy(grid: &MenuGrid) -> LoadResult<()> {
    let dimensions = grid.dimensions();

    for row in 0..dimensions.rows {
        let mut gap_at = None;
        for column in 0..dimensions.columns {
            let cell = Cell::new(row, column);
            match (grid.item_at(cell), gap_at) {
                (None, None) => gap_at = Some(column),
                (Some(_), Some(gap)) => anyhow::bail!(
                    "Row {} has a gap at column {} before an item at column {}",
                    row + 1,
                    gap + 1,
                    column + 1
                ),
                _ => {}
            }
        }
    }

    for column in 0..dimensions.columns {
        let mut gap_at = None;
        for row in 0..dimensions.rows {
            let cell = Cell::new(row, column);
            match (grid.item_at(cell), gap_at) {
                (None, None) => gap_at = Some(row),
                (Some(_), Some(gap)) => anyhow::bail!(
                    "Column {} has a gap at row {} before an item at row {}",
                    column + 1,
                    gap + 1,
                    row + 1
                ),
                _ => {}
            }
        }
    }

    Ok(())
}
