use std::collections::{BTreeSet, HashMap};

use crate::error::PlaybookError;
use crate::{PlaybookRecord, PlaybookSummary};

/// Immutable, id-keyed collection of playbooks.
///
/// Records keep their registration order so listings and the not-found
/// response are deterministic.
#[derive(Debug, Clone)]
pub struct Registry {
    records: Vec<PlaybookRecord>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new(records: Vec<PlaybookRecord>) -> Result<Self, PlaybookError> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), pos).is_some() {
                return Err(PlaybookError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, index })
    }

    /// The built-in catalog shipped with the server.
    pub fn builtin() -> Result<Self, PlaybookError> {
        Self::new(crate::catalog::builtin_playbooks())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Result<&PlaybookRecord, PlaybookError> {
        self.index
            .get(id)
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| PlaybookError::NotFound(id.to_string()))
    }

    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn all_summaries(&self) -> Vec<PlaybookSummary> {
        self.records.iter().map(PlaybookSummary::from).collect()
    }

    pub fn distinct_categories(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.category.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, category: &str) -> PlaybookRecord {
        PlaybookRecord {
            id: id.to_string(),
            name: format!("{id} name"),
            description: format!("{id} description"),
            category: category.to_string(),
            template: json!({ "title": id }),
        }
    }

    fn fixture() -> Registry {
        Registry::new(vec![
            record("alpha", "Docs"),
            record("beta", "Dev"),
            record("gamma", "Docs"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Registry::new(vec![record("alpha", "Docs"), record("alpha", "Dev")]).unwrap_err();
        assert_eq!(err, PlaybookError::DuplicateId("alpha".to_string()));
    }

    #[test]
    fn exists_and_get() {
        let registry = fixture();
        assert!(registry.exists("beta"));
        assert!(!registry.exists("delta"));
        assert_eq!(registry.get("gamma").unwrap().category, "Docs");
        assert_eq!(
            registry.get("delta").unwrap_err(),
            PlaybookError::NotFound("delta".to_string())
        );
    }

    #[test]
    fn ids_follow_registration_order() {
        assert_eq!(fixture().ids(), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn summaries_cover_every_record_once() {
        let registry = fixture();
        let summaries = registry.all_summaries();
        assert_eq!(summaries.len(), registry.len());
        let ids: BTreeSet<_> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains("alpha") && ids.contains("beta") && ids.contains("gamma"));
    }

    #[test]
    fn categories_collapse_duplicates() {
        let categories = fixture().distinct_categories();
        assert_eq!(categories.into_iter().collect::<Vec<_>>(), vec!["Dev", "Docs"]);
    }

    #[test]
    fn builtin_catalog_loads() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.len(), 6);
        assert!(registry.exists("comprehensive_wiki"));
        assert!(registry.exists("code_review"));
    }
}
