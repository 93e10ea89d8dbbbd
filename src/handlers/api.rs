//! API Response Handler
//!
//! Applies results from the background service to the model and dispatches
//! any follow-up refresh the model asks for.

use crate::services::ApiResponse;
use crate::App;

/// Handle a result from the background service
///
/// Response types:
/// - FolderResult / SearchResult: replace the grid and breadcrumb regions
///   (stale results are dropped by the model)
/// - UpdateResult / UploadResult: toast, then refresh the affected folder
/// - ImageResolved: open the URL
/// - ClipboardResult: upload pasted images
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::FolderResult {
            request_id,
            path,
            result,
        } => {
            app.model.apply_folder_response(request_id, &path, result);
        }

        ApiResponse::SearchResult { request_id, result } => {
            app.model.apply_search_response(request_id, result);
        }

        ApiResponse::UpdateResult {
            request_id,
            path,
            result,
        } => {
            let refresh = app.model.apply_update_result(request_id, &path, result);
            app.dispatch(refresh);
        }

        ApiResponse::UploadResult { folder, result } => {
            let refresh = app.model.apply_upload_result(&folder, result);
            app.dispatch(refresh);
        }

        ApiResponse::ImageResolved { url } => app.open_url(url),

        ApiResponse::ClipboardResult { explicit, items } => {
            app.handle_clipboard_items(explicit, items);
        }
    }
}
