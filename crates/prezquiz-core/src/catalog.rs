//! The president catalog and ambiguity-aware name resolution.
//!
//! The catalog is built once at startup and shared read-only with the
//! session. Besides the ordered entity list it carries a derived index
//! from normalized answer keys (full name, surname, nickname) to the
//! orders that answer would name, which is what makes "Bush" ambiguous
//! and "George W. Bush" not.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// One president: order number, display name, inauguration year.
///
/// Names may repeat across orders — Grover Cleveland and Donald Trump
/// each hold two non-consecutive orders and appear twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Order number, 1-based, contiguous across the catalog.
    pub order: u32,
    /// Full display name (e.g. "George H. W. Bush").
    pub name: String,
    /// Year the term began.
    pub year: i32,
    /// Accepted shorthand (e.g. "Teddy", "FDR").
    #[serde(default)]
    pub nickname: Option<String>,
}

impl Entity {
    pub fn new(order: u32, name: &str, year: i32) -> Self {
        Self {
            order,
            name: name.to_string(),
            year,
            nickname: None,
        }
    }

    pub fn with_nickname(order: u32, name: &str, year: i32, nickname: &str) -> Self {
        Self {
            order,
            name: name.to_string(),
            year,
            nickname: Some(nickname.to_string()),
        }
    }

    /// Last whitespace-separated token of the display name.
    pub fn surname(&self) -> &str {
        self.name.split_whitespace().next_back().unwrap_or(&self.name)
    }

    /// All normalized keys under which an answer names this entity.
    fn answer_keys(&self) -> Vec<String> {
        let mut keys = vec![normalize(&self.name), normalize(self.surname())];
        if let Some(nick) = &self.nickname {
            keys.push(normalize(nick));
        }
        keys.dedup();
        keys
    }
}

/// Normalize free-text input for matching: trim, lowercase, strip
/// periods, collapse internal whitespace.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The full ordered president list plus the derived ambiguity index.
#[derive(Debug, Clone)]
pub struct EntityCatalog {
    entities: Vec<Entity>,
    ambiguity: HashMap<String, Vec<u32>>,
}

impl EntityCatalog {
    /// Build a catalog, re-validating that orders form exactly `1..=N`.
    pub fn build(mut entities: Vec<Entity>) -> Result<Self, QuizError> {
        if entities.is_empty() {
            return Err(QuizError::InvalidCatalog("dataset is empty".into()));
        }

        entities.sort_by_key(|e| e.order);
        for (i, entity) in entities.iter().enumerate() {
            let expected = i as u32 + 1;
            if entity.order != expected {
                let reason = if i > 0 && entities[i - 1].order == entity.order {
                    format!("duplicate order {}", entity.order)
                } else {
                    format!("expected order {expected}, found {}", entity.order)
                };
                return Err(QuizError::InvalidCatalog(reason));
            }
        }

        let mut ambiguity: HashMap<String, Vec<u32>> = HashMap::new();
        for entity in &entities {
            for key in entity.answer_keys() {
                let orders = ambiguity.entry(key).or_default();
                if !orders.contains(&entity.order) {
                    orders.push(entity.order);
                }
            }
        }

        Ok(Self { entities, ambiguity })
    }

    /// Number of entities (equals the highest order).
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn max_order(&self) -> u32 {
        self.entities.len() as u32
    }

    /// Look up an entity by order number.
    pub fn get(&self, order: u32) -> Option<&Entity> {
        self.entities.get(order.checked_sub(1)? as usize)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// The entities with `start <= order <= end`, in ascending order.
    pub fn range_view(&self, start: u32, end: u32) -> Result<&[Entity], QuizError> {
        if start < 1 || start > end || end > self.max_order() {
            return Err(QuizError::InvalidRange {
                start,
                end,
                max: self.max_order(),
            });
        }
        Ok(&self.entities[(start - 1) as usize..end as usize])
    }

    /// Returns `true` if this answer text names more than one order.
    pub fn is_ambiguous(&self, text: &str) -> bool {
        self.ambiguity
            .get(&normalize(text))
            .is_some_and(|orders| orders.len() > 1)
    }

    /// All answer keys naming more than one order, with the orders they
    /// name. Sorted by key for stable output.
    pub fn ambiguous_entries(&self) -> Vec<(&str, &[u32])> {
        let mut entries: Vec<(&str, &[u32])> = self
            .ambiguity
            .iter()
            .filter(|(_, orders)| orders.len() > 1)
            .map(|(key, orders)| (key.as_str(), orders.as_slice()))
            .collect();
        entries.sort_by_key(|(key, _)| *key);
        entries
    }

    /// Resolve a free-text name answer to the orders it could mean.
    ///
    /// With `allow_ambiguity` unset, an answer naming several orders is
    /// rejected outright — the learner must give the unambiguous full
    /// name. With it set, every order sharing the key matches.
    pub fn resolve_name(&self, text: &str, allow_ambiguity: bool) -> Vec<u32> {
        let key = normalize(text);
        let Some(orders) = self.ambiguity.get(&key) else {
            return Vec::new();
        };
        if orders.len() > 1 && !allow_ambiguity {
            tracing::warn!("ambiguous name provided: '{key}'");
            return Vec::new();
        }
        if orders.len() > 1 {
            tracing::debug!("ambiguous name '{key}' admitted (ambiguity allowed)");
        }
        orders.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bush_era() -> Vec<Entity> {
        vec![
            Entity::new(1, "Ronald Reagan", 1981),
            Entity::new(2, "George H. W. Bush", 1989),
            Entity::new(3, "Bill Clinton", 1993),
            Entity::new(4, "George W. Bush", 2001),
        ]
    }

    #[test]
    fn build_accepts_contiguous_orders() {
        let catalog = EntityCatalog::build(bush_era()).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(2).unwrap().name, "George H. W. Bush");
    }

    #[test]
    fn build_rejects_gap() {
        let mut entities = bush_era();
        entities.remove(1);
        let err = EntityCatalog::build(entities).unwrap_err();
        assert!(matches!(err, QuizError::InvalidCatalog(_)));
    }

    #[test]
    fn build_rejects_duplicate_order() {
        let mut entities = bush_era();
        entities[2].order = 2;
        let err = EntityCatalog::build(entities).unwrap_err();
        assert!(err.to_string().contains("duplicate order 2"));
    }

    #[test]
    fn build_rejects_empty() {
        assert!(EntityCatalog::build(Vec::new()).is_err());
    }

    #[test]
    fn range_view_exact_bounds() {
        let catalog = EntityCatalog::build(bush_era()).unwrap();
        let view = catalog.range_view(2, 3).unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].order, 2);
        assert_eq!(view[1].order, 3);
    }

    #[test]
    fn range_view_full_and_single() {
        let catalog = EntityCatalog::build(bush_era()).unwrap();
        assert_eq!(catalog.range_view(1, 4).unwrap().len(), 4);
        assert_eq!(catalog.range_view(3, 3).unwrap().len(), 1);
    }

    #[test]
    fn range_view_rejects_bad_bounds() {
        let catalog = EntityCatalog::build(bush_era()).unwrap();
        assert!(catalog.range_view(0, 2).is_err());
        assert!(catalog.range_view(3, 2).is_err());
        assert!(catalog.range_view(1, 5).is_err());
    }

    #[test]
    fn normalize_strips_case_periods_whitespace() {
        assert_eq!(normalize("  George  W.  Bush "), "george w bush");
        assert_eq!(normalize("FDR"), "fdr");
    }

    #[test]
    fn surname_is_last_token() {
        assert_eq!(Entity::new(1, "George H. W. Bush", 1989).surname(), "Bush");
        assert_eq!(Entity::new(2, "Woodrow Wilson", 1913).surname(), "Wilson");
    }

    #[test]
    fn bare_surname_rejected_when_ambiguity_disallowed() {
        let catalog = EntityCatalog::build(bush_era()).unwrap();
        assert!(catalog.is_ambiguous("Bush"));
        assert!(catalog.resolve_name("Bush", false).is_empty());
        assert!(catalog.resolve_name("bush", false).is_empty());
    }

    #[test]
    fn bare_surname_matches_both_when_allowed() {
        let catalog = EntityCatalog::build(bush_era()).unwrap();
        let orders = catalog.resolve_name(" Bush ", true);
        assert_eq!(orders, vec![2, 4]);
    }

    #[test]
    fn full_name_is_always_unambiguous() {
        let catalog = EntityCatalog::build(bush_era()).unwrap();
        assert_eq!(catalog.resolve_name("george w bush", false), vec![4]);
        assert_eq!(catalog.resolve_name("George H. W. Bush", false), vec![2]);
        assert!(!catalog.is_ambiguous("George W. Bush"));
    }

    #[test]
    fn unique_surname_resolves_without_flag() {
        let catalog = EntityCatalog::build(bush_era()).unwrap();
        assert_eq!(catalog.resolve_name("Clinton", false), vec![3]);
        assert_eq!(catalog.resolve_name("reagan", false), vec![1]);
    }

    #[test]
    fn nickname_resolves() {
        let catalog = EntityCatalog::build(vec![Entity::with_nickname(
            1,
            "Theodore Roosevelt",
            1901,
            "Teddy",
        )])
        .unwrap();
        assert_eq!(catalog.resolve_name("teddy", false), vec![1]);
    }

    #[test]
    fn repeated_full_name_is_ambiguous() {
        // Cleveland holds two orders under the same display name.
        let catalog = EntityCatalog::build(vec![
            Entity::new(1, "Grover Cleveland", 1885),
            Entity::new(2, "Benjamin Harrison", 1889),
            Entity::new(3, "Grover Cleveland", 1893),
        ])
        .unwrap();
        assert!(catalog.resolve_name("Grover Cleveland", false).is_empty());
        assert_eq!(catalog.resolve_name("Grover Cleveland", true), vec![1, 3]);
    }

    #[test]
    fn unknown_name_resolves_to_nothing() {
        let catalog = EntityCatalog::build(bush_era()).unwrap();
        assert!(catalog.resolve_name("Millard Fillmore", true).is_empty());
        assert!(catalog.resolve_name("", true).is_empty());
    }
}
