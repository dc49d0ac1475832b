//! Pure grid-selection state machine shared across hosts.
//!
//! `menu-core` defines the canonical selection rules for a 2D menu: a grid of
//! optional item handles, a current selection, and movement commands that
//! clamp at the grid edges and refuse to land on empty cells. All state
//! mutation flows through [`GridSelector`]; layout construction and rendering
//! live in supporting crates that depend on the types re-exported here.
pub mod grid;
pub mod item;
pub mod selector;

pub use grid::{Cell, ConfigError, GridDimensions, MenuCoord, MenuGrid};
pub use item::{ItemBounds, ItemId, SelectableItem};
pub use selector::{GridSelector, MoveDirection, SelectError};
