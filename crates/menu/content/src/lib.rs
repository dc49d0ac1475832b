//! Concrete menu item definitions and layout loaders.
//!
//! This crate houses the data-driven side of the menu system:
//! - Concrete item kinds ([`ItemSprite`]) behind the core's capability trait
//! - The [`ItemTable`] that maps grid handles back to item definitions
//! - A RON layout loader that builds a validated grid from declarative data
//!
//! Layouts are consumed by the runtime controller and never appear in the
//! core selection state.

pub mod item;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use item::{ItemKind, ItemSprite, ItemTable};

#[cfg(feature = "loaders")]
pub use loaders::{LayoutLoader, LoadedMenu};
