//! Browser controller transitions
//!
//! Folder navigation, search, metadata editing and paste-upload expressed as
//! state transitions on `Model`. Each operation updates the UI regions it owns
//! and returns the backend requests to issue; response handlers apply the
//! outcome and may return a follow-up request (a refresh).

use anyhow::Error;

use super::navigation::NO_FOLDER_SELECTED;
use super::types::{
    BreadcrumbBar, Card, CardAction, EditField, EditModalState, GridView, Pane, Request,
};
use super::Model;
use crate::api::{Acknowledgement, Breadcrumb, FolderResponse, Item, SearchResponse};
use crate::logic::clipboard::{image_blobs, ClipboardItem};
use crate::logic::edit::{build_update, tags_for_form};
use crate::logic::errors::{classify_error, describe_error, format_error_message};
use crate::logic::path::{normalize_path, parent_path};

pub const NO_ITEMS: &str = "No items found in this folder.";
pub const NO_RESULTS: &str = "No items match your search.";
pub const LOAD_ERROR: &str = "Error loading items.";
pub const SEARCH_ERROR: &str = "Error searching items.";
pub const BLANK_QUERY: &str = "Please enter a search query.";
pub const NO_UPLOAD_FOLDER: &str = "No folder selected for upload.";
pub const UPDATE_OK: &str = "File updated successfully.";
pub const UPLOAD_OK: &str = "Image uploaded successfully.";

/// Result of handling a paste
#[derive(Debug, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Nothing in the paste was an image
    NoImages,
    /// Images were pasted but no folder is open; the warning is already shown
    NoFolder,
    Upload(Vec<Request>),
}

/// Empty list, or the backend's single `"error"` sentinel item
fn is_empty_listing(items: &[Item]) -> bool {
    match items {
        [] => true,
        [only] => only.item_type == "error",
        _ => false,
    }
}

impl Model {
    fn is_stale(&self, request_id: u64) -> bool {
        request_id != self.navigation.latest_view_request
    }

    fn clear_view(&mut self, grid: GridView) {
        self.navigation.set_grid(grid);
        self.navigation.set_breadcrumbs(BreadcrumbBar::Empty);
    }

    // ============================================
    // FOLDER NAVIGATOR
    // ============================================

    /// Navigate to a folder
    ///
    /// An empty path shows the "No folder selected" placeholder and clears the
    /// breadcrumbs without any request. It still supersedes in-flight views.
    pub fn navigate(&mut self, folder_path: &str) -> Option<Request> {
        let path = normalize_path(folder_path);
        if path.is_empty() {
            let request_id = self.next_request_id();
            self.navigation.latest_view_request = request_id;
            self.navigation.current_folder = None;
            self.clear_view(GridView::Placeholder(NO_FOLDER_SELECTED.to_string()));
            return None;
        }

        let request_id = self.next_request_id();
        self.navigation.latest_view_request = request_id;
        self.navigation.set_grid(GridView::Loading);
        tracing::debug!(request_id, %path, "navigate");

        Some(Request::ListFolder { request_id, path })
    }

    /// Apply the outcome of a folder listing; returns false if it was stale
    pub fn apply_folder_response(
        &mut self,
        request_id: u64,
        path: &str,
        result: Result<FolderResponse, Error>,
    ) -> bool {
        if self.is_stale(request_id) {
            tracing::debug!(request_id, %path, "dropping stale folder response");
            return false;
        }

        match result {
            Err(e) => {
                tracing::warn!(
                    %path,
                    error_type = ?classify_error(&e),
                    error = %format_error_message(&e),
                    "error fetching items"
                );
                self.navigation.current_folder = None;
                self.clear_view(GridView::Error(LOAD_ERROR.to_string()));
            }
            Ok(FolderResponse::Failure { error }) => {
                self.navigation.current_folder = None;
                self.clear_view(GridView::Error(error));
            }
            Ok(FolderResponse::Listing { items, breadcrumbs }) => {
                let grid = if is_empty_listing(&items) {
                    GridView::Message(NO_ITEMS.to_string())
                } else {
                    GridView::Cards(items.iter().map(Card::from_listing).collect())
                };

                let crumbs: Vec<Breadcrumb> = breadcrumbs
                    .into_iter()
                    .map(|crumb| Breadcrumb {
                        name: crumb.name,
                        path: normalize_path(&crumb.path),
                    })
                    .collect();
                let bar = if crumbs.is_empty() {
                    BreadcrumbBar::Empty
                } else {
                    BreadcrumbBar::Trail(crumbs)
                };

                self.navigation.current_folder = Some(normalize_path(path));
                self.navigation.set_grid(grid);
                self.navigation.set_breadcrumbs(bar);
            }
        }

        true
    }

    /// Re-navigate to the current folder
    pub fn refresh(&mut self) -> Option<Request> {
        let current = self.navigation.current_folder.clone()?;
        self.navigate(&current)
    }

    /// Navigate to the parent of the current folder
    pub fn navigate_up(&mut self) -> Option<Request> {
        let current = self.navigation.current_folder.clone()?;
        let parent = parent_path(&current);
        if parent.is_empty() {
            return None;
        }
        self.navigate(&parent)
    }

    /// Activate a breadcrumb; the last crumb is the current marker and inert
    pub fn activate_breadcrumb(&mut self, index: usize) -> Option<Request> {
        let crumbs = self.navigation.breadcrumbs.crumbs();
        if index + 1 >= crumbs.len() {
            return None;
        }
        let path = crumbs[index].path.clone();
        self.navigate(&path)
    }

    /// Activate a card: folders navigate, everything else opens the edit modal
    pub fn activate_card(&mut self, index: usize) -> Option<Request> {
        let card = self.navigation.grid.cards().get(index)?.clone();
        match card.action {
            CardAction::Navigate => self.navigate(&card.path),
            CardAction::Edit => {
                self.open_edit_modal(
                    &card.path,
                    &card.name,
                    card.tags.as_deref(),
                    card.description.as_deref(),
                );
                None
            }
        }
    }

    /// Activate whatever is selected in the focused pane
    pub fn activate_selected(&mut self) -> Option<Request> {
        match self.navigation.focus {
            Pane::Tree => {
                let path = self.navigation.selected_tree_entry()?.path.clone();
                self.navigate(&path)
            }
            Pane::Breadcrumbs => {
                let index = self.navigation.crumb_selection?;
                self.activate_breadcrumb(index)
            }
            Pane::Grid => {
                let index = self.navigation.grid_selection?;
                self.activate_card(index)
            }
        }
    }

    // ============================================
    // SEARCH CONTROLLER
    // ============================================

    /// Search the vault; a blank query only warns
    pub fn search(&mut self, query: &str) -> Option<Request> {
        let query = query.trim();
        if query.is_empty() {
            self.ui.show_warning(BLANK_QUERY);
            return None;
        }

        let request_id = self.next_request_id();
        self.navigation.latest_view_request = request_id;
        self.navigation.set_grid(GridView::Loading);
        self.navigation.set_breadcrumbs(BreadcrumbBar::SearchResults);
        tracing::debug!(request_id, %query, "search");

        Some(Request::Search {
            request_id,
            query: query.to_string(),
        })
    }

    /// Apply search results; returns false if they were stale
    pub fn apply_search_response(
        &mut self,
        request_id: u64,
        result: Result<SearchResponse, Error>,
    ) -> bool {
        if self.is_stale(request_id) {
            tracing::debug!(request_id, "dropping stale search response");
            return false;
        }

        match result {
            Err(e) => {
                tracing::warn!(
                    error_type = ?classify_error(&e),
                    error = %format_error_message(&e),
                    "error searching items"
                );
                self.clear_view(GridView::Error(SEARCH_ERROR.to_string()));
            }
            Ok(SearchResponse::Failure { error }) => {
                self.clear_view(GridView::Error(error));
            }
            Ok(SearchResponse::Results(items)) => {
                let grid = if is_empty_listing(&items) {
                    GridView::Message(NO_RESULTS.to_string())
                } else {
                    GridView::Cards(items.iter().map(Card::from_search).collect())
                };
                self.navigation.set_grid(grid);
                self.navigation.set_breadcrumbs(BreadcrumbBar::SearchResults);
            }
        }

        true
    }

    // ============================================
    // EDIT MODAL CONTROLLER
    // ============================================

    /// Show the edit modal populated with an item's metadata
    pub fn open_edit_modal(
        &mut self,
        path: &str,
        name: &str,
        tags: Option<&str>,
        description: Option<&str>,
    ) {
        self.ui.edit_modal = Some(EditModalState {
            path: normalize_path(path),
            name: name.to_string(),
            tags: tags_for_form(tags),
            description: description.unwrap_or_default().to_string(),
            focused: EditField::Name,
            submitting: None,
        });
    }

    /// Hide the edit modal; a submit still in flight no longer touches it
    pub fn close_modal(&mut self) {
        self.ui.edit_modal = None;
    }

    /// Submit the edit form; ignored while a submit is already in flight
    pub fn submit_edit(&mut self) -> Option<Request> {
        let can_submit = self
            .ui
            .edit_modal
            .as_ref()
            .is_some_and(|modal| modal.submitting.is_none());
        if !can_submit {
            return None;
        }

        let request_id = self.next_request_id();
        let modal = self.ui.edit_modal.as_mut()?;
        modal.submitting = Some(request_id);

        let update = build_update(&modal.name, &modal.tags, &modal.description);
        tracing::debug!(request_id, path = %modal.path, "submit edit");

        Some(Request::UpdateFile {
            request_id,
            path: modal.path.clone(),
            update,
        })
    }

    /// Apply the outcome of a metadata update
    ///
    /// On success the modal closes and the parent folder is refreshed.
    pub fn apply_update_result(
        &mut self,
        request_id: u64,
        path: &str,
        result: Result<Acknowledgement, Error>,
    ) -> Option<Request> {
        let owns_modal = self
            .ui
            .edit_modal
            .as_ref()
            .is_some_and(|modal| modal.submitting == Some(request_id));

        let failure = match result {
            Err(e) => {
                let detail = describe_error(&e);
                tracing::warn!(%path, error = %detail, "error updating file");
                Some(format!("Error updating file: {}", detail))
            }
            Ok(Acknowledgement { error: Some(error) }) => Some(error),
            Ok(Acknowledgement { error: None }) => None,
        };

        if let Some(message) = failure {
            self.ui.show_error(message);
            if owns_modal {
                if let Some(modal) = self.ui.edit_modal.as_mut() {
                    modal.submitting = None;
                }
            }
            return None;
        }

        self.ui.show_toast(UPDATE_OK);
        if owns_modal {
            self.close_modal();
        }
        self.navigate(&parent_path(path))
    }

    // ============================================
    // PASTE-UPLOAD CONTROLLER
    // ============================================

    /// Handle a paste: every image item becomes an upload to the current folder
    ///
    /// Non-image items are ignored. With images but no current folder, a
    /// warning is shown and nothing is uploaded.
    pub fn paste_images(&mut self, items: Vec<ClipboardItem>) -> PasteOutcome {
        let blobs = image_blobs(items);
        if blobs.is_empty() {
            return PasteOutcome::NoImages;
        }

        let Some(folder) = self.navigation.current_folder.clone() else {
            self.ui.show_warning(NO_UPLOAD_FOLDER);
            return PasteOutcome::NoFolder;
        };

        tracing::debug!(%folder, count = blobs.len(), "uploading pasted images");
        PasteOutcome::Upload(
            blobs
                .into_iter()
                .map(|blob| Request::UploadImage {
                    folder: folder.clone(),
                    blob,
                })
                .collect(),
        )
    }

    /// Apply the outcome of an upload; success refreshes the folder
    pub fn apply_upload_result(
        &mut self,
        folder: &str,
        result: Result<Acknowledgement, Error>,
    ) -> Option<Request> {
        match result {
            Err(e) => {
                let detail = describe_error(&e);
                tracing::warn!(%folder, error = %detail, "error uploading image");
                self.ui.show_error(format!("Error uploading image: {}", detail));
                None
            }
            Ok(Acknowledgement { error: Some(error) }) => {
                self.ui.show_error(error);
                None
            }
            Ok(Acknowledgement { error: None }) => {
                self.ui.show_toast(UPLOAD_OK);
                self.navigate(folder)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToastLevel;

    fn item(name: &str, path: &str, item_type: &str) -> Item {
        Item {
            name: name.to_string(),
            path: path.to_string(),
            item_type: item_type.to_string(),
            tags: None,
            description: None,
        }
    }

    fn crumb(name: &str, path: &str) -> Breadcrumb {
        Breadcrumb {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    fn request_id(request: &Option<Request>) -> u64 {
        match request {
            Some(Request::ListFolder { request_id, .. })
            | Some(Request::Search { request_id, .. })
            | Some(Request::UpdateFile { request_id, .. }) => *request_id,
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_navigate_empty_path_shows_placeholder() {
        let mut model = Model::new(vec![], false);
        model.navigation.set_breadcrumbs(BreadcrumbBar::Trail(vec![crumb("a", "a")]));

        assert!(model.navigate("").is_none());
        assert_eq!(
            model.navigation.grid,
            GridView::Placeholder(NO_FOLDER_SELECTED.to_string())
        );
        assert_eq!(model.navigation.breadcrumbs, BreadcrumbBar::Empty);
    }

    #[test]
    fn test_navigate_normalizes_path() {
        let mut model = Model::new(vec![], false);
        match model.navigate("root\\sub") {
            Some(Request::ListFolder { path, .. }) => assert_eq!(path, "root/sub"),
            other => panic!("unexpected request {:?}", other),
        }
        assert_eq!(model.navigation.grid, GridView::Loading);
    }

    #[test]
    fn test_sentinel_error_item_is_empty() {
        let mut model = Model::new(vec![], false);
        let id = request_id(&model.navigate("root"));
        let response = FolderResponse::Listing {
            items: vec![item("", "", "error")],
            breadcrumbs: vec![],
        };

        assert!(model.apply_folder_response(id, "root", Ok(response)));
        assert_eq!(model.navigation.grid, GridView::Message(NO_ITEMS.to_string()));
    }

    #[test]
    fn test_transport_error_clears_breadcrumbs() {
        let mut model = Model::new(vec![], false);
        model.navigation.set_breadcrumbs(BreadcrumbBar::Trail(vec![crumb("a", "a")]));
        let id = request_id(&model.navigate("root"));

        model.apply_folder_response(id, "root", Err(anyhow::anyhow!("connection refused")));
        assert_eq!(model.navigation.grid, GridView::Error(LOAD_ERROR.to_string()));
        assert_eq!(model.navigation.breadcrumbs, BreadcrumbBar::Empty);
        assert!(model.current_folder().is_none());
    }

    #[test]
    fn test_breadcrumb_last_is_inert() {
        let mut model = Model::new(vec![], false);
        let id = request_id(&model.navigate("root/sub"));
        let response = FolderResponse::Listing {
            items: vec![item("x.jpg", "root/sub/x.jpg", "image")],
            breadcrumbs: vec![crumb("root", "root"), crumb("sub", "root\\sub")],
        };
        model.apply_folder_response(id, "root/sub", Ok(response));

        assert!(model.activate_breadcrumb(1).is_none());
        match model.activate_breadcrumb(0) {
            Some(Request::ListFolder { path, .. }) => assert_eq!(path, "root"),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_navigate_up() {
        let mut model = Model::new(vec![], false);
        assert!(model.navigate_up().is_none());

        model.navigation.current_folder = Some("root/sub".to_string());
        match model.navigate_up() {
            Some(Request::ListFolder { path, .. }) => assert_eq!(path, "root"),
            other => panic!("unexpected request {:?}", other),
        }

        model.navigation.current_folder = Some("root".to_string());
        assert!(model.navigate_up().is_none());
    }

    #[test]
    fn test_search_blank_query_warns() {
        let mut model = Model::new(vec![], false);
        assert!(model.search("   ").is_none());
        let toast = model.ui.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Warning);
        assert_eq!(toast.message, BLANK_QUERY);
        assert_eq!(model.navigation.latest_view_request, 0);
    }

    #[test]
    fn test_search_results_open_edit_modal() {
        let mut model = Model::new(vec![], false);
        let id = request_id(&model.search(" rocket "));
        let response = SearchResponse::Results(vec![item("sub", "photos/sub", "folder")]);
        model.apply_search_response(id, Ok(response));

        assert_eq!(model.navigation.breadcrumbs, BreadcrumbBar::SearchResults);
        assert!(model.activate_card(0).is_none());
        assert_eq!(model.ui.edit_modal.as_ref().unwrap().path, "photos/sub");
    }

    #[test]
    fn test_search_server_error() {
        let mut model = Model::new(vec![], false);
        let id = request_id(&model.search("rocket"));
        model.apply_search_response(
            id,
            Ok(SearchResponse::Failure {
                error: "Index offline".to_string(),
            }),
        );
        assert_eq!(model.navigation.grid, GridView::Error("Index offline".to_string()));
        assert_eq!(model.navigation.breadcrumbs, BreadcrumbBar::Empty);
    }

    #[test]
    fn test_open_edit_modal_hides_untagged() {
        let mut model = Model::new(vec![], false);
        model.open_edit_modal("a\\x.jpg", "x.jpg", Some("untagged"), None);
        let modal = model.ui.edit_modal.as_ref().unwrap();
        assert_eq!(modal.path, "a/x.jpg");
        assert_eq!(modal.tags, "");
        assert_eq!(modal.description, "");
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let mut model = Model::new(vec![], false);
        model.open_edit_modal("a/x.jpg", "x.jpg", None, None);
        assert!(model.submit_edit().is_some());
        assert!(model.submit_edit().is_none());
    }

    #[test]
    fn test_update_error_keeps_modal_open() {
        let mut model = Model::new(vec![], false);
        model.open_edit_modal("a/x.jpg", "x.jpg", None, None);
        let id = request_id(&model.submit_edit());

        let follow_up = model.apply_update_result(
            id,
            "a/x.jpg",
            Ok(Acknowledgement {
                error: Some("Name already exists".to_string()),
            }),
        );
        assert!(follow_up.is_none());
        let modal = model.ui.edit_modal.as_ref().unwrap();
        assert!(modal.submitting.is_none());
        assert_eq!(model.ui.toast.as_ref().unwrap().message, "Name already exists");
    }

    #[test]
    fn test_update_after_close_does_not_reopen() {
        let mut model = Model::new(vec![], false);
        model.open_edit_modal("a/x.jpg", "x.jpg", None, None);
        let id = request_id(&model.submit_edit());
        model.close_modal();

        let follow_up = model.apply_update_result(id, "a/x.jpg", Ok(Acknowledgement::default()));
        assert!(model.ui.edit_modal.is_none());
        assert!(matches!(follow_up, Some(Request::ListFolder { .. })));
    }

    #[test]
    fn test_upload_result_error_field() {
        let mut model = Model::new(vec![], false);
        let follow_up = model.apply_upload_result(
            "root",
            Ok(Acknowledgement {
                error: Some("Unsupported format".to_string()),
            }),
        );
        assert!(follow_up.is_none());
        let toast = model.ui.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(toast.message, "Unsupported format");
    }

    #[test]
    fn test_paste_without_images_is_ignored() {
        let mut model = Model::new(vec![], false);
        let outcome = model.paste_images(vec![ClipboardItem {
            source_name: None,
            bytes: b"just text".to_vec(),
        }]);
        assert_eq!(outcome, PasteOutcome::NoImages);
        assert!(model.ui.toast.is_none());
    }

    #[test]
    fn test_paste_without_folder_reports_warning() {
        let mut model = Model::new(vec![], false);
        model.ui.show_toast(UPDATE_OK);
        let outcome = model.paste_images(vec![ClipboardItem {
            source_name: None,
            bytes: b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec(),
        }]);
        assert_eq!(outcome, PasteOutcome::NoFolder);
        let toast = model.ui.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Warning);
        assert_eq!(toast.message, NO_UPLOAD_FOLDER);
    }

    #[test]
    fn test_clearing_view_drops_pending_listing() {
        let mut model = Model::new(vec![], false);
        let id = request_id(&model.navigate("root"));
        assert!(model.navigate("").is_none());

        let response = FolderResponse::Listing {
            items: vec![],
            breadcrumbs: vec![crumb("root", "root")],
        };
        assert!(!model.apply_folder_response(id, "root", Ok(response)));
        assert_eq!(
            model.navigation.grid,
            GridView::Placeholder(NO_FOLDER_SELECTED.to_string())
        );
        assert!(model.current_folder().is_none());
    }

    #[test]
    fn test_update_transport_error_names_kind() {
        let mut model = Model::new(vec![], false);
        model.open_edit_modal("a/x.jpg", "x.jpg", None, None);
        let id = request_id(&model.submit_edit());

        let error = anyhow::Error::new(crate::api::ApiError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        })
        .context("Failed to update file");
        assert!(model.apply_update_result(id, "a/x.jpg", Err(error)).is_none());

        let toast = model.ui.toast.as_ref().unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(
            toast.message,
            "Error updating file: server error (HTTP 502: bad gateway)"
        );
    }

    #[test]
    fn test_upload_transport_error_names_kind() {
        let mut model = Model::new(vec![], false);
        let follow_up =
            model.apply_upload_result("root", Err(anyhow::anyhow!("operation timed out")));
        assert!(follow_up.is_none());
        assert_eq!(
            model.ui.toast.as_ref().unwrap().message,
            "Error uploading image: request timed out (operation timed out)"
        );
    }
}
