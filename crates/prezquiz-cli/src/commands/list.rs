//! The `prezquiz list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(range: Option<Vec<u32>>, dataset: Option<PathBuf>) -> Result<()> {
    let catalog = super::load_catalog(dataset)?;
    let (start, end) = super::range_bounds(range, catalog.max_order());
    let view = catalog.range_view(start, end)?;

    let mut table = Table::new();
    table.set_header(vec!["#", "President", "Year", "Nickname"]);
    for entity in view {
        table.add_row(vec![
            Cell::new(entity.order),
            Cell::new(&entity.name),
            Cell::new(entity.year),
            Cell::new(entity.nickname.as_deref().unwrap_or("")),
        ]);
    }

    println!("{table}");
    println!("{} presidents", view.len());
    Ok(())
}
