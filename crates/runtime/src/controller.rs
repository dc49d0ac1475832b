//! Menu controller binding the selection core to host rendering concerns.

use menu_content::{ItemSprite, ItemTable, LoadedMenu};
use menu_core::{GridSelector, MenuCoord, MoveDirection, SelectError, SelectableItem};

/// Errors surfaced by the controller. All wrap core selection errors; the
/// selection state is untouched whenever one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Select(#[from] SelectError),
}

/// Screen position for the top-left corner of the selection marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerAnchor {
    pub x: f32,
    pub y: f32,
}

/// Owns a [`GridSelector`] plus the item table resolving its handles, and
/// derives everything a host needs to draw the menu: where the marker goes
/// and whether the menu and marker are visible.
///
/// The marker starts hidden and is revealed once the default position has
/// been applied, so a host never draws it over an unselected menu.
#[derive(Clone, Debug)]
pub struct MenuController {
    selector: GridSelector,
    items: ItemTable,
    marker_width: f32,
    marker_height: f32,
    menu_visible: bool,
    marker_visible: bool,
}

impl MenuController {
    /// Builds a controller from a loaded layout and the marker's size.
    ///
    /// Seeds the selection from the layout's default position (cell `(1, 1)`
    /// when the layout declares none) and leaves the menu visible with the
    /// marker shown over the default item.
    pub fn from_layout(
        menu: LoadedMenu,
        marker_width: f32,
        marker_height: f32,
    ) -> Result<Self, ControllerError> {
        let selector = GridSelector::new(menu.grid, menu.default)?;
        tracing::debug!(selection = %selector.selection(), "menu controller initialized");
        Ok(Self {
            selector,
            items: menu.items,
            marker_width,
            marker_height,
            menu_visible: true,
            marker_visible: true,
        })
    }

    /// Current selection in 1-based host coordinates.
    pub fn selection(&self) -> MenuCoord {
        self.selector.selection()
    }

    /// Item definition under the selection; `None` when the selection sits
    /// on an empty cell.
    pub fn current_sprite(&self) -> Option<&ItemSprite> {
        self.items.get(self.selector.current_item()?)
    }

    /// Attempts a one-step move; returns whether the selection changed.
    pub fn move_selection(&mut self, direction: MoveDirection) -> bool {
        let moved = self.selector.step(direction);
        if moved {
            tracing::debug!(%direction, selection = %self.selector.selection(), "selection moved");
        } else {
            tracing::trace!(%direction, selection = %self.selector.selection(), "move blocked");
        }
        moved
    }

    pub fn move_up(&mut self) -> bool {
        self.move_selection(MoveDirection::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_selection(MoveDirection::Down)
    }

    pub fn move_left(&mut self) -> bool {
        self.move_selection(MoveDirection::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_selection(MoveDirection::Right)
    }

    /// Jumps the selection without an occupancy check; see
    /// [`GridSelector::set_position`] for the contract.
    pub fn set_position(&mut self, row: u32, column: u32) -> Result<(), ControllerError> {
        self.selector.set_position(MenuCoord::new(row, column))?;
        Ok(())
    }

    pub fn set_default_row(&mut self, row: u32) {
        self.selector.set_default_row(row);
    }

    pub fn set_default_column(&mut self, column: u32) {
        self.selector.set_default_column(column);
    }

    pub fn set_default_position(&mut self, row: u32, column: u32) {
        self.selector.set_default_position(row, column);
    }

    /// Moves the selection back to the default position and reveals the
    /// marker. An out-of-range default is rejected and logged; the selection
    /// and marker visibility are left as they were.
    pub fn reset_to_default(&mut self) -> Result<(), ControllerError> {
        if let Err(e) = self.selector.reset_to_default() {
            tracing::warn!(error = %e, "reset to default rejected");
            return Err(e.into());
        }
        self.marker_visible = true;
        tracing::debug!(selection = %self.selector.selection(), "selection reset to default");
        Ok(())
    }

    /// Screen anchor centering the marker on the selected item, or `None`
    /// when the selection sits on an empty cell.
    pub fn marker_anchor(&self) -> Option<MarkerAnchor> {
        let bounds = self.current_sprite()?.bounds();
        Some(MarkerAnchor {
            x: bounds.center_x() - ((self.marker_width - bounds.width) / 2.0).abs(),
            y: bounds.center_y() - ((self.marker_height - bounds.height) / 2.0).abs(),
        })
    }

    pub fn set_menu_visible(&mut self, visible: bool) {
        self.menu_visible = visible;
    }

    pub fn is_menu_visible(&self) -> bool {
        self.menu_visible
    }

    pub fn set_marker_visible(&mut self, visible: bool) {
        self.marker_visible = visible;
    }

    pub fn is_marker_visible(&self) -> bool {
        self.marker_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_content::{ItemKind, ItemTable};
    use menu_core::{Cell, GridDimensions, ItemBounds, MenuGrid};

    fn one_item_menu(bounds: ItemBounds) -> LoadedMenu {
        let mut items = ItemTable::new();
        let id = items.insert(ItemSprite::new(ItemKind::Image, bounds));
        let mut grid = MenuGrid::empty(GridDimensions::new(1, 1)).unwrap();
        grid.place(Cell::new(0, 0), id);
        LoadedMenu {
            grid,
            items,
            default: None,
        }
    }

    #[test]
    fn marker_centers_on_smaller_item() {
        // Item 20x10 at (100, 50); marker 30x30.
        let menu = one_item_menu(ItemBounds::new(100.0, 50.0, 20.0, 10.0));
        let controller = MenuController::from_layout(menu, 30.0, 30.0).unwrap();
        let anchor = controller.marker_anchor().unwrap();
        assert_eq!(anchor.x, 110.0 - 5.0);
        assert_eq!(anchor.y, 55.0 - 10.0);
    }

    #[test]
    fn marker_offset_uses_absolute_size_difference() {
        // Marker smaller than the item: the offset still subtracts.
        let menu = one_item_menu(ItemBounds::new(0.0, 0.0, 40.0, 40.0));
        let controller = MenuController::from_layout(menu, 20.0, 20.0).unwrap();
        let anchor = controller.marker_anchor().unwrap();
        assert_eq!(anchor.x, 20.0 - 10.0);
        assert_eq!(anchor.y, 20.0 - 10.0);
    }
}
