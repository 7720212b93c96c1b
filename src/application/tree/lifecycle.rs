//! Create and delete of classifications.

use crate::domain::entities::{ClassificationType, CLASSIFICATION_CATEGORY};
use crate::domain::ports::{
    ClassificationRepository, MetricsRepository, Navigator, Notifier, RepositoryError,
    TreeWidget, TypeDefsPayload, UrlRequest, SEARCH_RESULT_ROUTE, SEARCH_ROUTE,
};
use crate::domain::services::{normalize_attributes, validate_new_classification};
use crate::domain::value_objects::SearchParams;
use crate::error::{TagTreeError, TagTreeResult};

use super::state::CreateRequest;
use super::use_case::ClassificationTreeUseCase;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete the classification";

impl<CR, MR, NV, W, NT> ClassificationTreeUseCase<CR, MR, NV, W, NT>
where
    CR: ClassificationRepository,
    MR: MetricsRepository,
    NV: Navigator,
    W: TreeWidget,
    NT: Notifier,
{
    /// Validate, save and insert a new classification, then open its detail page.
    pub async fn create_classification(
        &mut self,
        request: CreateRequest,
    ) -> TagTreeResult<ClassificationType> {
        let result = self.try_create(request).await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    async fn try_create(&mut self, request: CreateRequest) -> TagTreeResult<ClassificationType> {
        let name = request.name.trim().to_string();
        let attributes = normalize_attributes(request.attributes);

        let super_types: Vec<&ClassificationType> = request
            .super_types
            .iter()
            .filter_map(|s| self.registry.get(s))
            .collect();
        validate_new_classification(&name, &attributes, &super_types)?;

        if let Some(missing) = request
            .super_types
            .iter()
            .find(|s| !self.registry.contains(s))
        {
            return Err(TagTreeError::NotFound {
                what: format!("super-type {}", missing),
            });
        }

        let def = ClassificationType {
            name: name.clone(),
            guid: String::new(),
            category: CLASSIFICATION_CATEGORY.to_string(),
            description: request.description.trim().to_string(),
            super_types: request.super_types,
            sub_types: Vec::new(),
            attribute_defs: attributes,
        };

        let response = self
            .classifications
            .save(TypeDefsPayload::classification(def))
            .await?;
        let saved = response
            .classification_defs
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::unavailable("create", "empty response"))?;

        for parent in &saved.super_types {
            self.registry.link_sub_type(parent, &saved.name);
        }
        self.registry.upsert(saved.clone());
        log::debug!("created classification {} ({})", saved.name, saved.guid);

        self.notifier.success(&format!(
            "Classification {} was created successfully",
            saved.name
        ));
        if let Err(err) = self.classifications.reload_type_headers().await {
            log::warn!("type header reload failed: {}", err);
        }

        self.rebuild();
        self.navigator
            .set_url(UrlRequest::tag_detail(&saved.name))?;
        Ok(saved)
    }

    /// Ask for confirmation, then delete the selected classification.
    ///
    /// Returns `Cancelled` when the user declines.
    pub async fn request_delete(&mut self) -> TagTreeResult<()> {
        if !self.notifier.confirm(DELETE_CONFIRMATION) {
            log::debug!("delete cancelled");
            return Err(TagTreeError::Cancelled);
        }
        self.confirm_delete().await
    }

    /// Delete the selected classification without asking.
    pub async fn confirm_delete(&mut self) -> TagTreeResult<()> {
        let result = self.try_delete().await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    async fn try_delete(&mut self) -> TagTreeResult<()> {
        let Some(tag_id) = self.tag_id.clone() else {
            log::debug!("delete requested with nothing selected");
            return Ok(());
        };
        let Some(name) = self.registry.find_by_guid(&tag_id).map(|t| t.name.clone()) else {
            return Err(TagTreeError::NotFound {
                what: format!("classification {}", tag_id),
            });
        };

        self.classifications.delete_by_name(&name).await?;
        self.notifier
            .success(&format!("Classification {} was deleted successfully", name));

        let mut params = self
            .navigator
            .tab_search_url()
            .map(|url| SearchParams::from_url(&url))
            .unwrap_or_default();
        params.tag = None;

        self.registry.remove_by_guid(&tag_id);
        self.counts.remove(&name);
        self.tag_id = None;
        self.value = params.clone();
        self.widget.deselect_all();
        self.rebuild();

        if params.has_non_tag_constraint() {
            self.navigator
                .set_url(UrlRequest::search(SEARCH_RESULT_ROUTE, params))?;
        } else {
            self.navigator.set_url(UrlRequest::route(SEARCH_ROUTE))?;
        }
        Ok(())
    }
}
