//! Selection reconciliation between the widget and the router.

use tagtree::domain::ports::{Navigator, TreeWidget, SEARCH_RESULT_ROUTE, SEARCH_ROUTE};
use tagtree::{SearchParams, TreeOptions};

use crate::common::{RecordingNotifier, TestStore, TestTree};

fn click(tree: &mut TestTree, guid: &str) {
    assert!(tree.widget_mut().select_node(guid));
    tree.handle_widget_events();
}

#[tokio::test]
async fn click_then_click_again_clears_the_tag() {
    let store = TestStore::sample();
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;

    click(&mut tree, "guid-pii");
    assert_eq!(tree.tag_id(), Some("guid-pii"));
    assert_eq!(tree.value().tag.as_deref(), Some("PII"));
    let request = tree.navigator().current().unwrap();
    assert_eq!(request.url, SEARCH_RESULT_ROUTE);
    assert_eq!(
        request.full_url(),
        "#!/search/searchResult?searchType=basic&dslChecked=false&tag=PII"
    );

    click(&mut tree, "guid-pii");
    assert_eq!(tree.tag_id(), None);
    assert_eq!(tree.value().tag, None);
    assert!(tree.widget().selected().is_none());
    assert_eq!(tree.navigator().current().unwrap().url, SEARCH_ROUTE);
}

#[tokio::test]
async fn clearing_an_unset_tag_is_a_no_op() {
    let store = TestStore::sample();
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;

    tree.manual_render(SearchParams::new());

    assert_eq!(tree.tag_id(), None);
    assert!(tree.widget().selected().is_none());
    assert!(tree.navigator().history().is_empty());
}

#[tokio::test]
async fn manual_render_selects_without_navigating() {
    let store = TestStore::sample();
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;

    tree.manual_render(SearchParams::with_tag("PII"));

    assert_eq!(tree.tag_id(), Some("guid-pii"));
    assert_eq!(tree.widget().selected().unwrap().name, "PII");
    assert!(tree.navigator().history().is_empty());
    assert!(!tree.flags().is_pending());

    // The next click is the user's again.
    click(&mut tree, "guid-sensitive");
    assert_eq!(tree.navigator().history().len(), 1);
    assert_eq!(tree.value().tag.as_deref(), Some("Sensitive"));
}

#[tokio::test]
async fn refresh_keeps_selection_without_navigating() {
    let store = TestStore::sample();
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;
    tree.manual_render(SearchParams::with_tag("PII"));

    tree.refresh().await;

    assert_eq!(tree.widget().selected().unwrap().id, "guid-pii");
    assert!(tree.navigator().history().is_empty());
}

#[tokio::test]
async fn search_navigation_is_persisted_for_the_next_session() {
    let store = TestStore::sample();
    let mut tree = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;

    click(&mut tree, "guid-sensitive");

    let reopened = store
        .open(TreeOptions::group(), RecordingNotifier::default())
        .await;
    let url = reopened.navigator().tab_search_url().unwrap();
    assert_eq!(SearchParams::from_url(&url).tag.as_deref(), Some("Sensitive"));
}
