//! The `prezquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use prezquiz_core::dataset;

pub fn execute(dataset_path: PathBuf) -> Result<()> {
    let catalog = dataset::load_catalog(&dataset_path)?;
    println!(
        "Dataset: {} ({} presidents)",
        dataset_path.display(),
        catalog.len()
    );

    let warnings = dataset::validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .order
            .map(|o| format!("  [#{o}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Dataset valid.");
    } else {
        println!("\nDataset valid with {} warning(s).", warnings.len());
    }

    Ok(())
}
