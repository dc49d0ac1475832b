//! Concrete selectable items and the handle table that owns them.

use menu_core::{ItemBounds, ItemId, SelectableItem};

/// Visual kind of a menu item.
///
/// The selection core never inspects the kind; it exists so hosts can pick a
/// rendering path per item.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    /// Composite item (buttons, nested groups)
    #[default]
    Composite,
    /// Plain image item
    Image,
    /// Text label item
    Label,
}

/// A placed, renderable menu item: kind plus placement geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSprite {
    pub kind: ItemKind,
    pub bounds: ItemBounds,
}

impl ItemSprite {
    pub const fn new(kind: ItemKind, bounds: ItemBounds) -> Self {
        Self { kind, bounds }
    }
}

impl SelectableItem for ItemSprite {
    fn bounds(&self) -> ItemBounds {
        self.bounds
    }
}

/// Dense store of item definitions keyed by [`ItemId`].
///
/// Handles are allocated in insertion order, so a table built alongside a
/// grid resolves every handle the grid holds.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTable {
    items: Vec<ItemSprite>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an item and returns its freshly allocated handle.
    pub fn insert(&mut self, item: ItemSprite) -> ItemId {
        let id = ItemId::new(self.items.len() as u32);
        self.items.push(item);
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemSprite> {
        self.items.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
