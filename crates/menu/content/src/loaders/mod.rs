//! Layout loaders for reading menu definitions from files.
//!
//! Loaders convert RON layout files into validated grids plus item tables.
//! Validation is strict here so the selection core can rely on the
//! ragged-edge occupancy invariant without re-checking it.

pub mod layout;

pub use layout::{LayoutLoader, LoadedMenu};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
