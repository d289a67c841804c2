//! Library catalog types
//!
//! The catalog is the ordered list of collections (and their stories) that
//! the terminal lets the visitor browse. It is loaded once per boot and
//! never mutated during a session.

use serde::{Deserialize, Serialize};

/// Reference to a single story inside a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRef {
    pub id: String,
    pub title: String,
    pub selection: String,
}

/// One browsable collection of stories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub selection: String,
    pub title: String,
    pub items: Vec<StoryRef>,
}

impl CollectionEntry {
    /// Find a story by its selection key (case-sensitive)
    pub fn find_story(&self, selection: &str) -> Option<&StoryRef> {
        self.items.iter().find(|s| s.selection == selection)
    }
}

/// The full library catalog, in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub collections: Vec<CollectionEntry>,
}

impl Catalog {
    pub fn new(collections: Vec<CollectionEntry>) -> Self {
        Self { collections }
    }

    /// Find a collection by its selection key (case-sensitive) and return
    /// its index alongside the entry
    pub fn find_collection(&self, selection: &str) -> Option<(usize, &CollectionEntry)> {
        self.collections
            .iter()
            .enumerate()
            .find(|(_, c)| c.selection == selection)
    }

    pub fn get(&self, index: usize) -> Option<&CollectionEntry> {
        self.collections.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// Resolve a story id to its data filename.
///
/// A handful of early stories shipped under fixed filenames that never
/// matched their ids; everything newer follows the `<id>.json` rule.
pub fn story_filename(id: &str) -> String {
    match id {
        "story_binary" => "the_story_of_lost_knowledge.json".to_string(),
        "story_lawithanx" => "story_lawithanx.json".to_string(),
        "story_light" => "story_light.json".to_string(),
        _ => format!("{id}.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![CollectionEntry {
            selection: "1".to_string(),
            title: "Archive A".to_string(),
            items: vec![StoryRef {
                id: "x".to_string(),
                title: "Story X".to_string(),
                selection: "1".to_string(),
            }],
        }])
    }

    #[test]
    fn find_collection_matches_selection_key() {
        let catalog = sample_catalog();
        let (idx, entry) = catalog.find_collection("1").unwrap();
        assert_eq!(idx, 0);
        assert_eq!(entry.title, "Archive A");
        assert!(catalog.find_collection("2").is_none());
    }

    #[test]
    fn selection_matching_is_case_sensitive() {
        let catalog = Catalog::new(vec![CollectionEntry {
            selection: "A".to_string(),
            title: "Upper".to_string(),
            items: vec![],
        }]);
        assert!(catalog.find_collection("A").is_some());
        assert!(catalog.find_collection("a").is_none());
    }

    #[test]
    fn legacy_ids_map_to_fixed_filenames() {
        assert_eq!(
            story_filename("story_binary"),
            "the_story_of_lost_knowledge.json"
        );
        assert_eq!(story_filename("story_lawithanx"), "story_lawithanx.json");
        assert_eq!(story_filename("story_light"), "story_light.json");
    }

    #[test]
    fn other_ids_map_to_id_json() {
        assert_eq!(story_filename("x"), "x.json");
        assert_eq!(story_filename("story_new"), "story_new.json");
    }

    #[test]
    fn catalog_deserializes_from_flat_array() {
        let json = r#"[
            {"selection": "1", "title": "Archive A", "items": [
                {"id": "x", "title": "Story X", "selection": "1"}
            ]}
        ]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.collections.len(), 1);
        assert_eq!(catalog.collections[0].items[0].id, "x");
    }
}
