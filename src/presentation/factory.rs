//! Use Case Factory
//!
//! Creates the tree use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::ClassificationTreeUseCase;
use crate::config::Config;
use crate::domain::ports::{Navigator, Notifier};
use crate::domain::value_objects::SearchParams;
use crate::error::TagTreeResult;
use crate::infrastructure::{ConsoleNotifier, JsonNotifier, JsonStore, SessionNavigator};
use crate::ui::widgets::TreeMenu;
use crate::ui::UiContext;

/// Type alias for the concrete tree use case with all dependencies
pub type ConcreteTreeUseCase =
    ClassificationTreeUseCase<JsonStore, JsonStore, SessionNavigator, TreeMenu, Box<dyn Notifier>>;

/// Notifier matching the output mode: NDJSON on stdout or console on stderr
pub fn create_notifier(ui: &UiContext, assume_yes: bool) -> Box<dyn Notifier> {
    if ui.json {
        Box::new(JsonNotifier::stdout().assume_yes(assume_yes))
    } else {
        Box::new(ConsoleNotifier::stderr(ui.color, ui.unicode).assume_yes(assume_yes))
    }
}

/// Create a tree use case over the configured JSON store
///
/// Nothing is fetched yet; see [`open_tree_use_case`].
pub fn create_tree_use_case(
    config: &Config,
    notifier: Box<dyn Notifier>,
) -> TagTreeResult<ConcreteTreeUseCase> {
    let path = &config.store.path;
    let navigator = SessionNavigator::new(JsonStore::new(path))?;

    Ok(ClassificationTreeUseCase::new(
        JsonStore::new(path),
        JsonStore::new(path),
        navigator,
        TreeMenu::new(),
        notifier,
    )
    .with_options(config.tree_options()))
}

/// Create, load and sync a tree use case with the session's search state.
///
/// The persisted search URL is replayed as a manual render, the same way
/// the router pushes its state into the tree after navigation.
pub async fn open_tree_use_case(
    config: &Config,
    notifier: Box<dyn Notifier>,
) -> TagTreeResult<ConcreteTreeUseCase> {
    let mut use_case = create_tree_use_case(config, notifier)?;
    use_case.initialize().await;

    if let Some(url) = use_case.navigator().tab_search_url() {
        log::debug!("restoring search state from {}", url);
        use_case.manual_render(SearchParams::from_url(&url));
    }
    Ok(use_case)
}
