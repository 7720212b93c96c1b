//! Store fixtures backed by a temp directory.

use std::path::PathBuf;

use tempfile::TempDir;

use tagtree::domain::entities::{AttributeDef, ClassificationType};
use tagtree::infrastructure::{JsonStore, SessionNavigator};
use tagtree::ui::widgets::TreeMenu;
use tagtree::{ClassificationTreeUseCase, TreeOptions};

use super::fakes::RecordingNotifier;

pub type TestTree =
    ClassificationTreeUseCase<JsonStore, JsonStore, SessionNavigator, TreeMenu, RecordingNotifier>;

/// `Sensitive` (attribute `level`) with sub-type `PII`, plus an unrelated `Finance`
pub fn sample_types() -> Vec<ClassificationType> {
    vec![
        ClassificationType::new("Sensitive", "guid-sensitive")
            .with_sub_types(["PII"])
            .with_attribute(AttributeDef::new("level", "int")),
        ClassificationType::new("PII", "guid-pii").with_super_types(["Sensitive"]),
        ClassificationType::new("Finance", "guid-finance"),
    ]
}

pub fn sample_counts() -> Vec<(&'static str, u64)> {
    vec![("Sensitive", 3), ("PII", 2), ("Finance", 0)]
}

/// A JSON store file in its own temp directory
pub struct TestStore {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tagtree.json");
        Self { _dir: dir, path }
    }

    pub fn seeded(types: Vec<ClassificationType>, counts: &[(&str, u64)]) -> Self {
        let store = Self::new();
        store
            .store()
            .update(|file| {
                file.classification_defs = types;
                for (name, count) in counts {
                    file.tag_entities.set(*name, *count);
                }
                Ok(())
            })
            .unwrap();
        store
    }

    pub fn sample() -> Self {
        Self::seeded(sample_types(), &sample_counts())
    }

    pub fn store(&self) -> JsonStore {
        JsonStore::new(&self.path)
    }

    pub fn set_search_url(&self, url: &str) {
        self.store().set_search_url(Some(url.to_string())).unwrap();
    }

    /// Fresh use case over this store, initialized
    pub async fn open(&self, options: TreeOptions, notifier: RecordingNotifier) -> TestTree {
        let navigator = SessionNavigator::new(self.store()).unwrap();
        let mut tree = ClassificationTreeUseCase::new(
            self.store(),
            self.store(),
            navigator,
            TreeMenu::new(),
            notifier,
        )
        .with_options(options);
        tree.initialize().await;
        tree
    }
}
