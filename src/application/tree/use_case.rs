//! Classification Tree Use Case
//!
//! Binds widget notifications, manual renders, count updates and
//! refreshes to the tree builder and the navigator.

use crate::domain::entities::{ClassificationRegistry, DisplayNode, EntityCountIndex};
use crate::domain::ports::{
    ClassificationRepository, FetchMode, MetricsRepository, Navigator, Notifier, TreeWidget,
    UrlRequest, WidgetEvent, SEARCH_RESULT_ROUTE, SEARCH_ROUTE,
};
use crate::domain::services::{build_tree, TreeDiagnostic};
use crate::domain::value_objects::{SearchParams, TreeOptions};
use crate::error::{TagTreeError, TagTreeResult, ValidationError};

use super::state::{CountUpdate, SelectionFlags};

/// Controller of the classification tree
pub struct ClassificationTreeUseCase<CR, MR, NV, W, NT>
where
    CR: ClassificationRepository,
    MR: MetricsRepository,
    NV: Navigator,
    W: TreeWidget,
    NT: Notifier,
{
    pub(super) classifications: CR,
    pub(super) metrics: MR,
    pub(super) navigator: NV,
    pub(super) widget: W,
    pub(super) notifier: NT,
    pub(super) registry: ClassificationRegistry,
    pub(super) counts: EntityCountIndex,
    pub(super) options: TreeOptions,
    /// Current search parameters, owned by the router
    pub(super) value: SearchParams,
    pub(super) tag_id: Option<String>,
    pub(super) flags: SelectionFlags,
    pub(super) diagnostics: Vec<TreeDiagnostic>,
}

impl<CR, MR, NV, W, NT> ClassificationTreeUseCase<CR, MR, NV, W, NT>
where
    CR: ClassificationRepository,
    MR: MetricsRepository,
    NV: Navigator,
    W: TreeWidget,
    NT: Notifier,
{
    pub fn new(classifications: CR, metrics: MR, navigator: NV, widget: W, notifier: NT) -> Self {
        Self {
            classifications,
            metrics,
            navigator,
            widget,
            notifier,
            registry: ClassificationRegistry::new(),
            counts: EntityCountIndex::new(),
            options: TreeOptions::default(),
            value: SearchParams::new(),
            tag_id: None,
            flags: SelectionFlags::default(),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }

    /// Start from known data instead of fetching it
    pub fn with_data(mut self, registry: ClassificationRegistry, counts: EntityCountIndex) -> Self {
        self.registry = registry;
        self.counts = counts;
        self
    }

    pub fn with_value(mut self, value: SearchParams) -> Self {
        self.value = value;
        self
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn registry(&self) -> &ClassificationRegistry {
        &self.registry
    }

    pub fn counts(&self) -> &EntityCountIndex {
        &self.counts
    }

    pub fn options(&self) -> TreeOptions {
        self.options
    }

    pub fn value(&self) -> &SearchParams {
        &self.value
    }

    pub fn tag_id(&self) -> Option<&str> {
        self.tag_id.as_deref()
    }

    pub fn flags(&self) -> SelectionFlags {
        self.flags
    }

    /// Diagnostics of the last build
    pub fn diagnostics(&self) -> &[TreeDiagnostic] {
        &self.diagnostics
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn navigator(&self) -> &NV {
        &self.navigator
    }

    pub fn notifier(&self) -> &NT {
        &self.notifier
    }

    pub fn classifications(&self) -> &CR {
        &self.classifications
    }

    pub fn metrics(&self) -> &MR {
        &self.metrics
    }

    // ---------------------------------------------------------------------
    // Building
    // ---------------------------------------------------------------------

    /// Fetch the registry and the counts, then load the widget.
    ///
    /// Failures are notified; whatever was fetched successfully is kept.
    pub async fn initialize(&mut self) {
        self.fetch_all(FetchMode::Default).await;
        self.render();
    }

    /// Build the nodes for the current state and adopt the matched guid.
    pub fn build_nodes(&mut self) -> Vec<DisplayNode> {
        let build = build_tree(
            &self.registry,
            &self.counts,
            self.options,
            self.value.tag.as_deref(),
        );

        for diagnostic in &build.diagnostics {
            match diagnostic {
                TreeDiagnostic::Cycle { path } => {
                    log::warn!("classification hierarchy cycle: {}", path.join(" -> "))
                }
            }
        }
        self.diagnostics = build.diagnostics;

        if self.tag_id.is_none() {
            self.tag_id = build.matched_guid;
        }
        build.nodes
    }

    /// Load freshly built nodes into the widget. Emits no selection events.
    pub fn render(&mut self) {
        let nodes = self.build_nodes();
        self.widget.load(nodes);
        self.handle_widget_events();
    }

    /// Refresh the widget after the data changed underneath it.
    ///
    /// The widget re-announces a kept selection; the tree-update flag
    /// swallows that notification.
    pub(super) fn rebuild(&mut self) {
        let nodes = self.build_nodes();
        if !self.widget.is_loaded() {
            self.widget.load(nodes);
        } else {
            self.flags.tree_update = true;
            self.widget.refresh(nodes);
        }
        self.handle_widget_events();
    }

    /// Fetch the registry and the counts concurrently.
    async fn fetch_all(&mut self, mode: FetchMode) {
        let (types, counts) = futures::join!(
            self.classifications.fetch_all(mode),
            self.metrics.fetch_counts(mode)
        );

        match types {
            Ok(types) => self.registry.replace_all(types),
            Err(err) => self.fetch_failed(mode, TagTreeError::from(err)),
        }
        match counts {
            Ok(counts) => self.counts = counts,
            Err(err) => self.fetch_failed(mode, TagTreeError::from(err)),
        }
    }

    fn fetch_failed(&self, mode: FetchMode, err: TagTreeError) {
        if mode.is_silent() {
            log::warn!("silent fetch failed, keeping last data: {}", err);
        } else {
            self.report(&err);
        }
    }

    /// Log the error and show its user-facing message
    pub(super) fn report(&self, err: &TagTreeError) {
        log::warn!("{}", err);
        self.notifier.error(&err.user_message());
    }

    // ---------------------------------------------------------------------
    // Selection reconciliation
    // ---------------------------------------------------------------------

    /// Dispatch everything the widget queued.
    ///
    /// Flags left unconsumed once the queue is empty are cleared; the
    /// notification they were meant for will not come.
    pub fn handle_widget_events(&mut self) {
        for event in self.widget.drain_events() {
            match event {
                WidgetEvent::SelectNode { id, name } => {
                    if let Err(err) = self.on_select_node(&id, &name) {
                        self.report(&err);
                    }
                }
                WidgetEvent::OpenNode { id } => log::debug!("opened node {}", id),
                WidgetEvent::Search { text, matches } => {
                    log::debug!("tree search '{}' matched {} nodes", text, matches)
                }
            }
        }

        if self.flags.is_pending() {
            log::debug!("clearing unconsumed selection flags {:?}", self.flags);
            self.flags.clear();
        }
    }

    /// Selection notification from the widget
    pub fn on_select_node(&mut self, id: &str, name: &str) -> TagTreeResult<()> {
        if self.flags.consume() {
            log::debug!("selection of {} caused by the controller, ignored", name);
            return Ok(());
        }
        self.on_node_activated(id, name)
    }

    /// A user click on a node.
    ///
    /// Clicking the selected node clears the tag filter; clicking any other
    /// node filters the search by it.
    pub fn on_node_activated(&mut self, id: &str, name: &str) -> TagTreeResult<()> {
        let mut params = self.value.clone().into_basic();
        params.tag_filters = None;
        params.is_cf = None;

        if self.tag_id.as_deref() != Some(id) {
            self.tag_id = Some(id.to_string());
            params.tag = Some(name.to_string());
            self.value = params.clone();
            self.navigator
                .set_url(UrlRequest::search(SEARCH_RESULT_ROUTE, params))?;
            return Ok(());
        }

        self.tag_id = None;
        params.tag = None;
        self.value = params.clone();
        self.widget.deselect_all();

        if params.has_non_tag_constraint() {
            self.navigator
                .set_url(UrlRequest::search(SEARCH_RESULT_ROUTE, params))?;
        } else {
            self.navigator.set_url(UrlRequest::route(SEARCH_ROUTE))?;
        }
        Ok(())
    }

    /// The router pushed new search parameters.
    pub fn manual_render(&mut self, value: SearchParams) {
        self.value = value;

        let Some(tag) = self.value.tag.clone() else {
            self.widget.deselect_all();
            self.tag_id = None;
            return;
        };

        let Some(guid) = self.registry.get(&tag).map(|ty| ty.guid.clone()) else {
            log::debug!("manual render: no classification named {}", tag);
            return;
        };

        if self.tag_id.as_deref() == Some(guid.as_str()) {
            return;
        }

        if let Some(old) = self.tag_id.take() {
            self.widget.deselect_node(&old);
        }
        self.tag_id = Some(guid.clone());
        if self.widget.select_node(&guid) {
            self.flags.from_manual_render = true;
        }
        self.handle_widget_events();
    }

    /// New entity counts are available or need fetching.
    pub async fn update_counts(&mut self, update: CountUpdate) {
        match update {
            CountUpdate::Fresh(counts) => self.counts = counts,
            CountUpdate::Refetch => match self.metrics.fetch_counts(FetchMode::Silent).await {
                Ok(counts) => self.counts = counts,
                Err(err) => log::warn!("count refresh failed, keeping last counts: {}", err),
            },
        }
        self.rebuild();
    }

    /// Refetch everything silently, sort the registry by name and rebuild.
    pub async fn refresh(&mut self) {
        self.fetch_all(FetchMode::Silent).await;
        self.registry.sort_by_name_ci();
        self.rebuild();
    }

    // ---------------------------------------------------------------------
    // Display toggles
    // ---------------------------------------------------------------------

    pub fn toggle_show_empty(&mut self) {
        let show_empty = !self.options.show_empty;
        self.set_show_empty(show_empty);
    }

    /// Set the empty filter from outside, e.g. a sibling view's toggle
    pub fn set_show_empty(&mut self, show_empty: bool) {
        self.options.show_empty = show_empty;
        self.render();
    }

    pub fn toggle_group_view(&mut self) {
        self.options.group_view = !self.options.group_view;
        self.render();
    }

    // ---------------------------------------------------------------------
    // Searches
    // ---------------------------------------------------------------------

    /// Search entities by a tag pattern typed by the user (wildcards allowed).
///
/// The other constraints of the current search are kept.
    pub fn wildcard_search(&mut self, pattern: &str) -> TagTreeResult<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            let err = ValidationError::EmptySearch;
            self.notifier.info(&err.to_string());
            return Err(err.into());
        }

        let mut params = self.value.clone().into_basic();
        params.tag = Some(pattern.to_string());
        self.value = params.clone();
        self.navigator
            .set_url(UrlRequest::search(SEARCH_RESULT_ROUTE, params))?;
        Ok(())
    }

    /// Show the detail page of the widget's selected node
    pub fn view_edit_selected(&mut self) -> TagTreeResult<()> {
        let Some(name) = self.widget.selected().map(|n| n.name.clone()) else {
            log::debug!("view/edit requested with nothing selected");
            return Ok(());
        };
        self.navigator.set_url(UrlRequest::tag_detail(&name))?;
        Ok(())
    }

    /// Re-issue the search for the current tag
    pub fn search_selected(&mut self) -> TagTreeResult<()> {
        let tag = self
            .value
            .tag
            .clone()
            .or_else(|| self.widget.selected().map(|n| n.name.clone()));
        let Some(tag) = tag else {
            log::debug!("search requested with nothing selected");
            return Ok(());
        };

        let params = SearchParams::with_tag(tag).into_basic();
        self.navigator
            .set_url(UrlRequest::search(SEARCH_RESULT_ROUTE, params))?;
        Ok(())
    }

    /// Filter the widget to nodes matching `text`. Returns the match count.
    pub fn search_tree(&mut self, text: &str) -> usize {
        let matches = self.widget.search(text);
        self.handle_widget_events();
        matches
    }
}
