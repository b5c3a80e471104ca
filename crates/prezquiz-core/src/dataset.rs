//! Dataset loading: the built-in president table and TOML files.
//!
//! The built-in table covers all 47 orders. Grover Cleveland and Donald
//! Trump each appear twice under their own display name, which is what
//! exercises the ambiguity machinery. External TOML datasets go through
//! the same `EntityCatalog::build` validation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{Entity, EntityCatalog};
use crate::error::QuizError;

/// (order, name, year, nickname)
const BUILTIN: &[(u32, &str, i32, Option<&str>)] = &[
    (1, "George Washington", 1789, None),
    (2, "John Adams", 1797, None),
    (3, "Thomas Jefferson", 1801, None),
    (4, "James Madison", 1809, None),
    (5, "James Monroe", 1817, None),
    (6, "John Quincy Adams", 1825, None),
    (7, "Andrew Jackson", 1829, None),
    (8, "Martin Van Buren", 1837, None),
    (9, "William Henry Harrison", 1841, None),
    (10, "John Tyler", 1841, None),
    (11, "James K. Polk", 1845, None),
    (12, "Zachary Taylor", 1849, None),
    (13, "Millard Fillmore", 1850, None),
    (14, "Franklin Pierce", 1853, None),
    (15, "James Buchanan", 1857, None),
    (16, "Abraham Lincoln", 1861, None),
    (17, "Andrew Johnson", 1865, None),
    (18, "Ulysses S. Grant", 1869, None),
    (19, "Rutherford B. Hayes", 1877, None),
    (20, "James A. Garfield", 1881, None),
    (21, "Chester A. Arthur", 1881, None),
    (22, "Grover Cleveland", 1885, None),
    (23, "Benjamin Harrison", 1889, None),
    (24, "Grover Cleveland", 1893, None),
    (25, "William McKinley", 1897, None),
    (26, "Theodore Roosevelt", 1901, Some("Teddy")),
    (27, "William Howard Taft", 1909, None),
    (28, "Woodrow Wilson", 1913, None),
    (29, "Warren G. Harding", 1921, None),
    (30, "Calvin Coolidge", 1923, None),
    (31, "Herbert Hoover", 1929, None),
    (32, "Franklin D. Roosevelt", 1933, Some("FDR")),
    (33, "Harry S. Truman", 1945, None),
    (34, "Dwight D. Eisenhower", 1953, None),
    (35, "John F. Kennedy", 1961, Some("JFK")),
    (36, "Lyndon B. Johnson", 1963, None),
    (37, "Richard Nixon", 1969, None),
    (38, "Gerald Ford", 1974, None),
    (39, "Jimmy Carter", 1977, None),
    (40, "Ronald Reagan", 1981, None),
    (41, "George H. W. Bush", 1989, None),
    (42, "Bill Clinton", 1993, None),
    (43, "George W. Bush", 2001, None),
    (44, "Barack Obama", 2009, None),
    (45, "Donald Trump", 2017, None),
    (46, "Joe Biden", 2021, None),
    (47, "Donald Trump", 2025, None),
];

/// Build the catalog from the built-in president table.
pub fn builtin_catalog() -> Result<EntityCatalog, QuizError> {
    let entities = BUILTIN
        .iter()
        .map(|&(order, name, year, nickname)| match nickname {
            Some(nick) => Entity::with_nickname(order, name, year, nick),
            None => Entity::new(order, name, year),
        })
        .collect();
    EntityCatalog::build(entities)
}

/// Intermediate TOML structure for dataset files.
#[derive(Debug, Deserialize)]
struct TomlDatasetFile {
    #[serde(default)]
    dataset: TomlDatasetHeader,
    #[serde(default)]
    presidents: Vec<TomlPresident>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlDatasetHeader {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlPresident {
    order: u32,
    name: String,
    year: i32,
    #[serde(default)]
    nickname: Option<String>,
}

/// Load and validate a catalog from a TOML dataset file.
pub fn load_catalog(path: &Path) -> Result<EntityCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file: {}", path.display()))?;
    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a validated catalog (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<EntityCatalog> {
    let parsed: TomlDatasetFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    if !parsed.dataset.name.is_empty() {
        tracing::debug!("loading dataset '{}'", parsed.dataset.name);
    }

    let entities = parsed
        .presidents
        .into_iter()
        .map(|p| Entity {
            order: p.order,
            name: p.name,
            year: p.year,
            nickname: p.nickname,
        })
        .collect();

    EntityCatalog::build(entities)
        .with_context(|| format!("invalid dataset: {}", source_path.display()))
}

/// A non-fatal finding from dataset validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The order number concerned, if any.
    pub order: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Check a built catalog for non-fatal oddities: inauguration years that
/// go backwards, and names that need disambiguation.
pub fn validate_catalog(catalog: &EntityCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for pair in catalog.entities().windows(2) {
        if pair[1].year < pair[0].year {
            warnings.push(ValidationWarning {
                order: Some(pair[1].order),
                message: format!(
                    "year {} at order {} is earlier than year {} at order {}",
                    pair[1].year, pair[1].order, pair[0].year, pair[0].order
                ),
            });
        }
    }

    for (key, orders) in catalog.ambiguous_entries() {
        let orders = orders
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        warnings.push(ValidationWarning {
            order: None,
            message: format!("name '{key}' is shared by orders {orders} (needs --allow-ambiguity)"),
        });
    }

    warnings
}
