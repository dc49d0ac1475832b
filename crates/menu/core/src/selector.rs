//! Selection state machine over a [`MenuGrid`].

use crate::grid::{Cell, GridDimensions, MenuCoord, MenuGrid};
use crate::item::ItemId;

/// Selection failures raised when a supplied coordinate lies outside the
/// grid. Recoverable: the caller should re-supply an in-range coordinate;
/// the current selection is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectError {
    #[error("position {coord} is outside the {rows}x{columns} grid")]
    OutOfRange {
        coord: MenuCoord,
        rows: u32,
        columns: u32,
    },
}

/// One-step movement command for the selection cursor.
///
/// Rows grow downward and columns grow rightward, so `Up` decreases the row
/// index and `Left` decreases the column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Up,
        MoveDirection::Down,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// Signed `(row, column)` delta of a single step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            MoveDirection::Up => (-1, 0),
            MoveDirection::Down => (1, 0),
            MoveDirection::Left => (0, -1),
            MoveDirection::Right => (0, 1),
        }
    }
}

/// Tracks the currently selected cell of a menu grid.
///
/// Movement commands are total: they either commit a one-step move or leave
/// the selection unchanged. A step is refused at the grid edge (clamp) and
/// when the target cell holds no item (the ragged-edge rule); neither case is
/// an error. Directional movement therefore never lands on an empty cell —
/// only [`GridSelector::set_position`] and an empty default cell can put the
/// selection on one.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSelector {
    grid: MenuGrid,
    selected: Cell,
    default: MenuCoord,
}

impl GridSelector {
    /// Creates a selector over `grid`, seeding the selection from `default`
    /// (or cell `(1, 1)` when absent).
    ///
    /// Fails with [`SelectError::OutOfRange`] when the default lies outside
    /// the grid.
    pub fn new(grid: MenuGrid, default: Option<MenuCoord>) -> Result<Self, SelectError> {
        let default = default.unwrap_or(MenuCoord::FIRST);
        let selected = checked_cell(grid.dimensions(), default)?;
        Ok(Self {
            grid,
            selected,
            default,
        })
    }

    pub fn grid(&self) -> &MenuGrid {
        &self.grid
    }

    /// Current selection in 1-based host coordinates.
    pub fn selection(&self) -> MenuCoord {
        MenuCoord::from(self.selected)
    }

    /// Current selection in 0-based grid coordinates.
    pub fn selected_cell(&self) -> Cell {
        self.selected
    }

    /// Item handle at the current selection; `None` when the selection was
    /// placed on an empty cell via `set_position` or an empty default.
    pub fn current_item(&self) -> Option<ItemId> {
        self.grid.item_at(self.selected)
    }

    pub fn default_position(&self) -> MenuCoord {
        self.default
    }

    /// Updates the default row. 1-based; validated at the next reset.
    pub fn set_default_row(&mut self, row: u32) {
        self.default.row = row;
    }

    /// Updates the default column. 1-based; validated at the next reset.
    pub fn set_default_column(&mut self, column: u32) {
        self.default.column = column;
    }

    /// Updates both default coordinates. 1-based; validated at the next reset.
    pub fn set_default_position(&mut self, row: u32, column: u32) {
        self.default = MenuCoord::new(row, column);
    }

    /// Moves the selection back to the stored default position.
    ///
    /// Fails with [`SelectError::OutOfRange`] when the default lies outside
    /// the grid, leaving the selection where it was. A default that names an
    /// empty cell is a caller error; the selection still lands there and
    /// [`GridSelector::current_item`] reports `None`.
    pub fn reset_to_default(&mut self) -> Result<(), SelectError> {
        self.selected = checked_cell(self.grid.dimensions(), self.default)?;
        Ok(())
    }

    /// Attempts a one-step move; returns whether the selection changed.
    ///
    /// The same routine serves all four directions: clamp at the boundary,
    /// tentatively advance, and refuse the step when the target cell is
    /// empty.
    pub fn step(&mut self, direction: MoveDirection) -> bool {
        let (row_delta, column_delta) = direction.delta();
        let Some(target) = self.selected.offset(row_delta, column_delta) else {
            // Clamped at the zero edge.
            return false;
        };
        if !self.grid.dimensions().contains(target) {
            // Clamped at the far edge.
            return false;
        }
        if self.grid.item_at(target).is_none() {
            // Ragged edge: the step is blocked, not an error.
            return false;
        }
        self.selected = target;
        true
    }

    pub fn move_up(&mut self) -> bool {
        self.step(MoveDirection::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.step(MoveDirection::Down)
    }

    pub fn move_left(&mut self) -> bool {
        self.step(MoveDirection::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.step(MoveDirection::Right)
    }

    /// Jumps the selection to `coord` with no occupancy check — the caller
    /// must guarantee the target cell holds an item. This asymmetry with the
    /// directional commands is deliberate: hosts use it to restore a known
    /// position without the gap rules interfering.
    pub fn set_position(&mut self, coord: MenuCoord) -> Result<(), SelectError> {
        self.selected = checked_cell(self.grid.dimensions(), coord)?;
        Ok(())
    }
}

fn checked_cell(dimensions: GridDimensions, coord: MenuCoord) -> Result<Cell, SelectError> {
    coord
        .to_cell()
        .filter(|cell| dimensions.contains(*cell))
        .ok_or(SelectError::OutOfRange {
            coord,
            rows: dimensions.rows,
            columns: dimensions.columns,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridDimensions;

    /// Builds a grid where `occupied[r]` is the number of leading occupied
    /// columns in row `r`; handles are assigned row-major.
    fn ragged_grid(columns: u32, occupied: &[u32]) -> MenuGrid {
        let dimensions = GridDimensions::new(occupied.len() as u32, columns);
        let mut grid = MenuGrid::empty(dimensions).unwrap();
        let mut next = 0;
        for (row, &len) in occupied.iter().enumerate() {
            for column in 0..len {
                grid.place(Cell::new(row as u32, column), ItemId(next));
                next += 1;
            }
        }
        grid
    }

    fn full_grid(rows: u32, columns: u32) -> MenuGrid {
        ragged_grid(columns, &vec![columns; rows as usize])
    }

    #[test]
    fn right_movement_clamps_at_last_column() {
        let mut selector = GridSelector::new(full_grid(2, 4), None).unwrap();
        for _ in 0..3 {
            assert!(selector.move_right());
        }
        // Already at the edge: repeated attempts stay put.
        assert!(!selector.move_right());
        assert!(!selector.move_right());
        assert_eq!(selector.selection(), MenuCoord::new(1, 4));
    }

    #[test]
    fn up_at_top_edge_is_a_no_op() {
        let mut selector = GridSelector::new(full_grid(3, 3), None).unwrap();
        for _ in 0..5 {
            assert!(!selector.move_up());
        }
        assert_eq!(selector.selection(), MenuCoord::new(1, 1));
    }

    #[test]
    fn opposite_moves_round_trip() {
        let mut selector =
            GridSelector::new(full_grid(4, 4), Some(MenuCoord::new(2, 2))).unwrap();
        let origin = selector.selection();
        for direction in MoveDirection::ALL {
            let back = match direction {
                MoveDirection::Up => MoveDirection::Down,
                MoveDirection::Down => MoveDirection::Up,
                MoveDirection::Left => MoveDirection::Right,
                MoveDirection::Right => MoveDirection::Left,
            };
            assert!(selector.step(direction));
            assert!(selector.step(back));
            assert_eq!(selector.selection(), origin);
        }
    }

    #[test]
    fn step_into_ragged_gap_is_refused() {
        // Row 3 has only 2 of 3 columns occupied.
        let grid = ragged_grid(3, &[3, 3, 2]);
        let mut selector = GridSelector::new(grid, Some(MenuCoord::new(3, 2))).unwrap();
        assert!(!selector.move_right());
        assert_eq!(selector.selection(), MenuCoord::new(3, 2));
        // The blocked step never disturbs the committed selection.
        assert!(selector.current_item().is_some());
    }

    #[test]
    fn directional_movement_never_lands_on_a_gap() {
        let grid = ragged_grid(4, &[4, 3, 1]);
        let mut selector = GridSelector::new(grid, None).unwrap();
        let walk = [
            MoveDirection::Right,
            MoveDirection::Down,
            MoveDirection::Right,
            MoveDirection::Down,
            MoveDirection::Down,
            MoveDirection::Left,
            MoveDirection::Right,
            MoveDirection::Down,
        ];
        for direction in walk {
            selector.step(direction);
            assert!(selector.current_item().is_some());
        }
    }

    #[test]
    fn reset_returns_to_default_item() {
        let grid = full_grid(2, 2);
        let first = grid.item_at(Cell::new(0, 0));
        let mut selector = GridSelector::new(grid, Some(MenuCoord::FIRST)).unwrap();
        selector.move_right();
        selector.move_down();
        selector.reset_to_default().unwrap();
        assert_eq!(selector.current_item(), first);
    }

    #[test]
    fn reset_rejects_out_of_range_default() {
        let mut selector = GridSelector::new(full_grid(2, 2), None).unwrap();
        selector.move_down();
        let before = selector.selection();
        selector.set_default_position(5, 1);
        assert_eq!(
            selector.reset_to_default(),
            Err(SelectError::OutOfRange {
                coord: MenuCoord::new(5, 1),
                rows: 2,
                columns: 2,
            })
        );
        // Failed reset leaves the selection untouched.
        assert_eq!(selector.selection(), before);
    }

    #[test]
    fn new_rejects_out_of_range_default() {
        let err = GridSelector::new(full_grid(2, 2), Some(MenuCoord::new(0, 1))).unwrap_err();
        assert!(matches!(err, SelectError::OutOfRange { .. }));
    }

    #[test]
    fn set_position_skips_occupancy_check() {
        let grid = ragged_grid(3, &[3, 2]);
        let target = grid.item_at(Cell::new(1, 1));
        let mut selector = GridSelector::new(grid, None).unwrap();

        selector.set_position(MenuCoord::new(2, 2)).unwrap();
        assert_eq!(selector.current_item(), target);

        // Jumping onto an empty cell is permitted; the query reports absent.
        selector.set_position(MenuCoord::new(2, 3)).unwrap();
        assert_eq!(selector.current_item(), None);

        // But out-of-grid jumps are rejected.
        assert!(selector.set_position(MenuCoord::new(3, 1)).is_err());
    }

    #[test]
    fn default_setters_apply_on_next_reset() {
        let mut selector = GridSelector::new(full_grid(3, 3), None).unwrap();
        selector.set_default_row(2);
        selector.set_default_column(3);
        selector.reset_to_default().unwrap();
        assert_eq!(selector.selection(), MenuCoord::new(2, 3));
        assert_eq!(selector.default_position(), MenuCoord::new(2, 3));
    }
}
