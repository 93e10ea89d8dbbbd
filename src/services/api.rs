use anyhow::{Context, Result};
use tokio::process::Command;
use tokio::sync::mpsc;

use visionvault::api::{Acknowledgement, FolderResponse, SearchResponse, VaultClient};
use visionvault::logic::clipboard::{pasted_paths, ClipboardItem};
use visionvault::model::Request;

/// Results delivered back to the UI loop
#[derive(Debug)]
pub enum ApiResponse {
    FolderResult {
        request_id: u64,
        path: String,
        result: Result<FolderResponse>,
    },

    SearchResult {
        request_id: u64,
        result: Result<SearchResponse>,
    },

    UpdateResult {
        request_id: u64,
        path: String,
        result: Result<Acknowledgement>,
    },

    UploadResult {
        folder: String,
        result: Result<Acknowledgement>,
    },

    /// Image URL to open (the placeholder when the image is unavailable)
    ImageResolved { url: String },

    /// Clipboard content read for a paste
    ClipboardResult {
        /// Ctrl-V (as opposed to a bracketed paste of file paths)
        explicit: bool,
        items: Result<Vec<ClipboardItem>>,
    },
}

/// Background worker: each request runs as its own task and reports back over
/// the response channel. Nothing is cancelled or retried.
#[derive(Clone)]
pub struct ApiService {
    client: VaultClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl ApiService {
    pub fn new(client: VaultClient, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        Self {
            client,
            response_tx,
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = ApiResponse> + Send + 'static,
    {
        let tx = self.response_tx.clone();
        tokio::spawn(async move {
            let response = task.await;
            if tx.send(response).is_err() {
                tracing::debug!("response channel closed, dropping result");
            }
        });
    }

    pub fn dispatch(&self, request: Request) {
        let client = self.client.clone();
        self.spawn(async move { execute(&client, request).await });
    }

    pub fn resolve_image(&self, path: String) {
        let client = self.client.clone();
        self.spawn(async move {
            let url = client.resolve_image_url(&path).await;
            ApiResponse::ImageResolved { url }
        });
    }

    /// Read files named in bracketed-paste text
    pub fn read_pasted_files(&self, text: String) {
        self.spawn(async move {
            ApiResponse::ClipboardResult {
                explicit: false,
                items: Ok(read_files(&text).await),
            }
        });
    }

    /// Run the clipboard command and use its stdout as one clipboard item
    pub fn read_clipboard_command(&self, command: Vec<String>) {
        self.spawn(async move {
            ApiResponse::ClipboardResult {
                explicit: true,
                items: run_clipboard_command(&command).await,
            }
        });
    }
}

async fn execute(client: &VaultClient, request: Request) -> ApiResponse {
    match request {
        Request::ListFolder { request_id, path } => {
            let result = client.list_folder(&path).await;
            ApiResponse::FolderResult {
                request_id,
                path,
                result,
            }
        }
        Request::Search { request_id, query } => ApiResponse::SearchResult {
            request_id,
            result: client.search(&query).await,
        },
        Request::UpdateFile {
            request_id,
            path,
            update,
        } => {
            let result = client.update_file(&path, &update).await;
            ApiResponse::UpdateResult {
                request_id,
                path,
                result,
            }
        }
        Request::UploadImage { folder, blob } => {
            let result = client.upload_image(&folder, blob).await;
            ApiResponse::UploadResult { folder, result }
        }
    }
}

async fn read_files(text: &str) -> Vec<ClipboardItem> {
    let mut items = Vec::new();
    for path in pasted_paths(text) {
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            _ => continue,
        }
        match tokio::fs::read(&path).await {
            Ok(bytes) => items.push(ClipboardItem {
                source_name: Some(path.display().to_string()),
                bytes,
            }),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to read pasted file"),
        }
    }
    items
}

async fn run_clipboard_command(command: &[String]) -> Result<Vec<ClipboardItem>> {
    let (program, args) = command
        .split_first()
        .context("Clipboard command is empty")?;

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .with_context(|| format!("Failed to run clipboard command '{}'", program))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("'{}' exited with {}: {}", program, output.status, stderr.trim());
    }

    if output.stdout.is_empty() {
        return Ok(Vec::new());
    }

    Ok(vec![ClipboardItem {
        source_name: None,
        bytes: output.stdout,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_files_skips_missing_paths() {
        let dir = std::env::temp_dir().join(format!("vvault-paste-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let file = dir.join("shot.png");
        tokio::fs::write(&file, b"\x89PNG\r\n\x1a\n").await.unwrap();

        let text = format!("{}\n{}\n", file.display(), dir.join("missing.png").display());
        let items = read_files(&text).await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source_name.as_deref(), Some(file.display().to_string().as_str()));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_empty_clipboard_command_errors() {
        assert!(run_clipboard_command(&[]).await.is_err());
    }
}
