use crate::{augment, PlaybookDetail, PlaybookListing, PlaybookLookup, Registry};

pub fn list_playbooks(registry: &Registry) -> PlaybookListing {
    let playbooks = registry.all_summaries();
    PlaybookListing {
        total_playbooks: playbooks.len(),
        playbooks,
        categories: registry.distinct_categories(),
    }
}

/// Look up one playbook. Unknown ids produce [`PlaybookLookup::NotFound`]
/// listing every registered id.
pub fn get_playbook(registry: &Registry, playbook_id: &str) -> PlaybookLookup {
    let record = match registry.get(playbook_id) {
        Ok(record) => record,
        Err(e) => {
            tracing::info!(playbook_id, "unknown playbook requested");
            return PlaybookLookup::NotFound {
                error: e.to_string(),
                available_playbooks: registry.ids(),
            };
        }
    };

    let aug = augment::for_id(playbook_id);
    let folder_structure = aug.include_folder_structure.then(|| {
        record
            .template
            .get("folder_structure")
            .cloned()
            .unwrap_or_else(|| serde_json::json!({}))
    });

    PlaybookLookup::Found(PlaybookDetail {
        id: record.id.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        category: record.category.clone(),
        template: record.template.clone(),
        usage_instructions: aug.usage_instructions.iter().map(|s| s.to_string()).collect(),
        folder_structure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlaybookRecord, PlaybookSummary};
    use serde_json::json;
    use std::collections::BTreeSet;

    fn builtin() -> Registry {
        Registry::builtin().unwrap()
    }

    fn found(lookup: PlaybookLookup) -> PlaybookDetail {
        match lookup {
            PlaybookLookup::Found(detail) => detail,
            other => panic!("expected a playbook, got {other:?}"),
        }
    }

    #[test]
    fn every_registered_id_resolves() {
        let registry = builtin();
        for id in registry.ids() {
            let detail = found(get_playbook(&registry, &id));
            assert_eq!(detail.id, id);
            assert_eq!(&detail.template, &registry.get(&id).unwrap().template);
        }
    }

    #[test]
    fn unknown_id_lists_every_playbook() {
        let registry = builtin();
        match get_playbook(&registry, "nonexistent") {
            PlaybookLookup::NotFound { error, available_playbooks } => {
                assert_eq!(error, "Playbook 'nonexistent' not found");
                assert_eq!(available_playbooks, registry.ids());
            }
            other => panic!("expected not-found, got {other:?}"),
        }
    }

    #[test]
    fn not_found_serializes_with_error_field() {
        let value = serde_json::to_value(get_playbook(&builtin(), "missing")).unwrap();
        assert!(value.get("error").is_some());
        assert_eq!(value["available_playbooks"].as_array().map(Vec::len), Some(6));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn wiki_gets_folder_structure_and_own_instructions() {
        let registry = builtin();
        let detail = found(get_playbook(&registry, "comprehensive_wiki"));
        assert_eq!(detail.usage_instructions.len(), 6);
        assert_eq!(
            detail.folder_structure.as_ref(),
            detail.template.get("folder_structure")
        );
        let generic = found(get_playbook(&registry, "documentation"));
        assert_ne!(detail.usage_instructions, generic.usage_instructions);
    }

    #[test]
    fn wiki_without_folder_structure_gets_empty_object() {
        let registry = Registry::new(vec![PlaybookRecord {
            id: "comprehensive_wiki".to_string(),
            name: "Wiki".to_string(),
            description: "Bare".to_string(),
            category: "Documentation".to_string(),
            template: json!({ "title": "x" }),
        }])
        .unwrap();
        let detail = found(get_playbook(&registry, "comprehensive_wiki"));
        assert_eq!(detail.folder_structure, Some(json!({})));
    }

    #[test]
    fn epic_story_review_instructions_are_distinct() {
        let registry = builtin();
        let review = found(get_playbook(&registry, "epic_story_review"));
        let wiki = found(get_playbook(&registry, "comprehensive_wiki"));
        let generic = found(get_playbook(&registry, "code_review"));
        assert_eq!(review.usage_instructions.len(), 6);
        assert_ne!(review.usage_instructions, wiki.usage_instructions);
        assert_ne!(review.usage_instructions, generic.usage_instructions);
        assert!(review.folder_structure.is_none());
    }

    #[test]
    fn other_ids_get_generic_instructions() {
        let detail = found(get_playbook(&builtin(), "code_review"));
        assert_eq!(
            detail.usage_instructions,
            vec![
                "Copy the template sections",
                "Fill in the placeholders with your specific content",
                "Customize sections as needed for your use case",
                "Remove sections that don't apply",
            ]
        );
        let value = serde_json::to_value(&detail).unwrap();
        assert!(value.get("folder_structure").is_none());
    }

    #[test]
    fn listing_matches_registry() {
        let registry = builtin();
        let listing = list_playbooks(&registry);
        assert_eq!(listing.total_playbooks, listing.playbooks.len());
        assert_eq!(listing.total_playbooks, registry.len());

        let ids: BTreeSet<_> = listing.playbooks.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, registry.ids().into_iter().collect::<BTreeSet<_>>());

        let expected: BTreeSet<String> = ["Development", "Documentation", "Product Management"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(listing.categories, expected);
    }

    #[test]
    fn listing_summary_mirrors_record() {
        let listing = list_playbooks(&builtin());
        let review = listing
            .playbooks
            .iter()
            .find(|p| p.id == "code_review")
            .unwrap();
        assert_eq!(
            review,
            &PlaybookSummary {
                id: "code_review".to_string(),
                name: "Code Review".to_string(),
                description: "Senior code reviewer ensuring high standards of code quality and security"
                    .to_string(),
                category: "Development".to_string(),
            }
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let registry = builtin();
        assert_eq!(list_playbooks(&registry), list_playbooks(&registry));
        assert_eq!(
            get_playbook(&registry, "comprehensive_wiki"),
            get_playbook(&registry, "comprehensive_wiki")
        );
        assert_eq!(get_playbook(&registry, "nope"), get_playbook(&registry, "nope"));
    }
}
