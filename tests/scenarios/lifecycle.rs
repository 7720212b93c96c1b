//! Creating and deleting classifications against the JSON store.

use tagtree::domain::entities::{AttributeDef, ClassificationType};
use tagtree::domain::ports::{Navigator, Notice, TreeWidget, SEARCH_RESULT_ROUTE, SEARCH_ROUTE};
use tagtree::{CreateRequest, SearchParams, TagTreeError, TreeOptions};

use crate::common::{RecordingNotifier, TestStore};

#[tokio::test]
async fn duplicate_inherited_attribute_is_rejected_before_saving() {
    let store = TestStore::seeded(
        vec![ClassificationType::new("Sensitive", "guid-sensitive")
            .with_attribute(AttributeDef::new("level", "int"))],
        &[("Sensitive", 1)],
    );
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;

    let request = CreateRequest::new("PII")
        .with_super_type("Sensitive")
        .with_attribute(AttributeDef::new("Level", "string"));
    let result = tree.create_classification(request).await;

    assert!(matches!(result, Err(TagTreeError::Validation(_))));
    assert_eq!(
        tree.notifier().errors(),
        vec!["Attribute Level is duplicate !".to_string()]
    );
    let file = store.store().load().unwrap();
    assert_eq!(file.classification_defs.len(), 1);
    assert!(tree.navigator().history().is_empty());
}

#[tokio::test]
async fn create_links_parent_and_opens_detail_page() {
    let store = TestStore::sample();
    let mut tree = store
        .open(
            TreeOptions::group().with_show_empty(true),
            RecordingNotifier::default(),
        )
        .await;

    let request = CreateRequest::new("  Passport  ")
        .with_super_type("PII")
        .with_description("travel documents")
        .with_attribute(AttributeDef::new("country", "string"));
    let created = tree.create_classification(request).await.unwrap();

    assert_eq!(created.name, "Passport");
    assert!(!created.guid.is_empty());
    assert!(tree
        .notifier()
        .notices()
        .contains(&Notice::Success(
            "Classification Passport was created successfully".to_string()
        )));
    assert_eq!(
        tree.navigator().current().unwrap().url,
        "#!/tag/tagAttribute/Passport"
    );

    let file = store.store().load().unwrap();
    let pii = file
        .classification_defs
        .iter()
        .find(|t| t.name == "PII")
        .unwrap();
    assert_eq!(pii.sub_types, vec!["Passport".to_string()]);

    let sensitive = tree.widget().nodes().iter().find(|n| n.name == "Sensitive").unwrap();
    assert_eq!(sensitive.children[0].children[0].name, "Passport");
}

#[tokio::test]
async fn deleting_the_active_tag_keeps_other_search_constraints() {
    let store = TestStore::sample();
    store.set_search_url("#!/search/searchResult?type=DataSet&tag=PII&searchType=basic");
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::answering(true))
        .await;
    let url = tree.navigator().tab_search_url().unwrap();
    tree.manual_render(SearchParams::from_url(&url));
    assert_eq!(tree.tag_id(), Some("guid-pii"));

    tree.request_delete().await.unwrap();

    let request = tree.navigator().current().unwrap();
    assert_eq!(request.url, SEARCH_RESULT_ROUTE);
    let params = request.params.unwrap();
    assert_eq!(params.tag, None);
    assert_eq!(params.type_name.as_deref(), Some("DataSet"));

    let persisted = store.store().search_url().unwrap().unwrap();
    assert!(!persisted.contains("tag="));
    assert!(persisted.contains("type=DataSet"));

    let file = store.store().load().unwrap();
    assert!(file.classification_defs.iter().all(|t| t.name != "PII"));
    let sensitive = file
        .classification_defs
        .iter()
        .find(|t| t.name == "Sensitive")
        .unwrap();
    assert!(sensitive.sub_types.is_empty());
    assert!(tree.widget().selected().is_none());
}

#[tokio::test]
async fn deleting_the_only_constraint_returns_to_search_page() {
    let store = TestStore::sample();
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::answering(true))
        .await;
    tree.manual_render(SearchParams::with_tag("Sensitive"));

    tree.request_delete().await.unwrap();

    assert_eq!(tree.navigator().current().unwrap().url, SEARCH_ROUTE);
    assert!(tree
        .notifier()
        .notices()
        .contains(&Notice::Success(
            "Classification Sensitive was deleted successfully".to_string()
        )));
}

#[tokio::test]
async fn declined_delete_changes_nothing() {
    let store = TestStore::sample();
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::answering(false))
        .await;
    tree.manual_render(SearchParams::with_tag("PII"));

    let result = tree.request_delete().await;

    assert!(matches!(result, Err(TagTreeError::Cancelled)));
    assert_eq!(tree.notifier().confirmations().len(), 1);
    assert!(tree.notifier().errors().is_empty());
    assert_eq!(store.store().load().unwrap().classification_defs.len(), 3);
}
