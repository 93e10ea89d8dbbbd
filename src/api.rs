use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{multipart, Client};
use serde::{Deserialize, Deserializer, Serialize};

use crate::logic::path::{encode_path, normalize_path};

/// Static asset served when an image cannot be loaded
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.jpg";

/// One file or folder entry returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type", default)]
    pub item_type: String, // "folder", "image", "error" or a bare extension
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    pub fn is_folder(&self) -> bool {
        self.item_type == "folder"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Response of `GET /api/files/{path}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FolderResponse {
    // Must stay first: a payload carrying `error` wins over any items it also has
    Failure {
        error: String,
    },
    Listing {
        #[serde(default, deserialize_with = "deserialize_null_default")]
        items: Vec<Item>,
        #[serde(default, deserialize_with = "deserialize_null_default")]
        breadcrumbs: Vec<Breadcrumb>,
    },
}

/// Response of `GET /api/search?q=`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Failure { error: String },
    Results(Vec<Item>),
}

/// Response of the update and upload endpoints: `{}` or `{error}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub error: Option<String>,
}

/// JSON body sent to `POST /api/update-file/{path}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileUpdate {
    pub name: String,
    pub tags: String,
    pub description: String,
}

/// Binary payload forwarded from the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Clone)]
pub struct VaultClient {
    base_url: String,
    client: Client,
}

impl VaultClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a server-relative path such as `/files/a.jpg`
    pub fn absolute_url(&self, relative: &str) -> String {
        format!("{}{}", self.base_url, relative)
    }

    /// Turn a non-2xx response into an `ApiError::Status`
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        }
        .into())
    }

    pub async fn list_folder(&self, folder_path: &str) -> Result<FolderResponse> {
        let url = format!(
            "{}/api/files/{}",
            self.base_url,
            encode_path(&normalize_path(folder_path))
        );
        tracing::debug!(%url, "list folder");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch folder")?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .context("Failed to parse folder response")
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = format!(
            "{}/api/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        tracing::debug!(%url, "search");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to search")?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .context("Failed to parse search response")
    }

    pub async fn update_file(&self, file_path: &str, update: &FileUpdate) -> Result<Acknowledgement> {
        let url = format!(
            "{}/api/update-file/{}",
            self.base_url,
            encode_path(&normalize_path(file_path))
        );
        tracing::debug!(%url, name = %update.name, "update file");

        let response = self
            .client
            .post(&url)
            .json(update)
            .send()
            .await
            .context("Failed to update file")?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .context("Failed to parse update response")
    }

    pub async fn upload_image(&self, folder_path: &str, blob: ImageBlob) -> Result<Acknowledgement> {
        let url = format!(
            "{}/api/update-tags/{}",
            self.base_url,
            encode_path(&normalize_path(folder_path))
        );
        tracing::debug!(%url, file = %blob.file_name, bytes = blob.bytes.len(), "upload image");

        let part = multipart::Part::bytes(blob.bytes)
            .file_name(blob.file_name)
            .mime_str(&blob.mime)
            .context("Invalid image media type")?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to upload image")?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .context("Failed to parse upload response")
    }

    /// Resolve the URL to show for an image, falling back to the placeholder
    /// asset when `/files/{path}` cannot be loaded
    pub async fn resolve_image_url(&self, image_path: &str) -> String {
        let src = crate::logic::path::image_src(image_path);
        let url = self.absolute_url(&src);

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => url,
            Ok(response) => {
                tracing::debug!(%url, status = %response.status(), "image unavailable, using placeholder");
                self.absolute_url(PLACEHOLDER_IMAGE)
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "image probe failed, using placeholder");
                self.absolute_url(PLACEHOLDER_IMAGE)
            }
        }
    }
}
