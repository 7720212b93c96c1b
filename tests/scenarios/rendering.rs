//! Tree shapes produced from stored data.

use tagtree::domain::entities::ClassificationType;
use tagtree::infrastructure::SessionNavigator;
use tagtree::ui::widgets::TreeMenu;
use tagtree::{ClassificationTreeUseCase, TreeDiagnostic, TreeOptions};

use crate::common::{RecordingNotifier, TestStore};

#[tokio::test]
async fn cycle_under_unused_root_renders_nothing() {
    let store = TestStore::seeded(
        vec![
            ClassificationType::new("A", "guid-a").with_sub_types(["B"]),
            ClassificationType::new("B", "guid-b").with_super_types(["A"]),
        ],
        &[("A", 0), ("B", 5)],
    );

    let tree = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;

    assert!(tree.widget().nodes().is_empty());
    assert!(tree.notifier().errors().is_empty());
}

#[tokio::test]
async fn cyclic_sub_types_are_reported_not_followed() {
    let store = TestStore::seeded(
        vec![
            ClassificationType::new("A", "guid-a").with_sub_types(["B"]),
            ClassificationType::new("B", "guid-b")
                .with_super_types(["A"])
                .with_sub_types(["A"]),
        ],
        &[("A", 1)],
    );

    let tree = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;

    assert_eq!(tree.widget().nodes().len(), 1);
    assert_eq!(
        tree.diagnostics(),
        &[TreeDiagnostic::Cycle {
            path: vec!["A".to_string(), "B".to_string(), "A".to_string()]
        }]
    );
}

#[tokio::test]
async fn toggles_switch_between_views() {
    let store = TestStore::sample();
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;
    assert_eq!(tree.widget().nodes().len(), 1);

    tree.toggle_group_view();
    let names: Vec<&str> = tree.widget().nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Sensitive", "PII"]);

    tree.toggle_show_empty();
    assert_eq!(tree.widget().nodes().len(), 3);
    let finance = tree.widget().nodes().iter().find(|n| n.name == "Finance").unwrap();
    assert!(finance.state.disabled);
}

#[tokio::test]
async fn corrupted_store_is_reported_once_per_fetch() {
    let store = TestStore::new();
    std::fs::write(&store.path, "{ not json").unwrap();

    let mut tree = ClassificationTreeUseCase::new(
        store.store(),
        store.store(),
        SessionNavigator::in_memory(),
        TreeMenu::new(),
        RecordingNotifier::default(),
    );
    tree.initialize().await;

    assert!(tree.widget().nodes().is_empty());
    assert_eq!(
        tree.notifier().errors(),
        vec!["Something went wrong".to_string(); 2]
    );
}
