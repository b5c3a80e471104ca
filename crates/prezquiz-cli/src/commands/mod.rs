pub mod list;
pub mod play;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use prezquiz_core::catalog::EntityCatalog;
use prezquiz_core::dataset;

/// Load the catalog from a TOML file, or fall back to the built-in table.
pub(crate) fn load_catalog(path: Option<PathBuf>) -> Result<EntityCatalog> {
    match path {
        Some(path) => dataset::load_catalog(&path),
        None => Ok(dataset::builtin_catalog()?),
    }
}

/// Turn an optional `--range START END` pair into concrete bounds.
pub(crate) fn range_bounds(range: Option<Vec<u32>>, max: u32) -> (u32, u32) {
    match range.as_deref() {
        Some([start, end, ..]) => (*start, *end),
        _ => (1, max),
    }
}
