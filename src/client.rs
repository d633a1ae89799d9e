use crate::error::UploadError;
use crate::types::UploadRequest;
use reqwest::StatusCode;
use std::env;
use tracing::debug;
use url::Url;

pub(crate) const DEFAULT_API_URL: &str = "https://api.nft-maker.io/";

/// The main client for interacting with the NFT-MAKER API.
///
/// The API authenticates by embedding the key in the request path, so the key
/// is kept alongside the base URL and is never written to logs.
#[derive(Clone)]
pub struct NftMakerClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    project_id: String,
}

impl std::fmt::Debug for NftMakerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NftMakerClient")
            .field("base_url", &self.base_url.as_str())
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

impl NftMakerClient {
    /// Creates a new `NftMakerClient` for `project_id`.
    ///
    /// The API key is taken from `api_key`, falling back to the
    /// `NFTMAKER_API_KEY` environment variable. The base URL is taken from
    /// `NFTMAKER_API_URL` if set.
    ///
    /// # Errors
    ///
    /// - `UploadError::MissingApiKey` if the API key is not provided in either way.
    /// - `UploadError::RequestFailed` if the internal HTTP client fails to build.
    /// - `UploadError::UrlParseFailed` if the base URL is invalid.
    pub fn new(
        api_key: Option<String>,
        project_id: impl Into<String>,
    ) -> Result<Self, UploadError> {
        let api_key = api_key.or_else(|| env::var("NFTMAKER_API_KEY").ok());
        let Some(key) = api_key.filter(|key| !key.is_empty()) else {
            return Err(UploadError::MissingApiKey);
        };

        let base_url =
            env::var("NFTMAKER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new_with_url(key, project_id, &base_url)
    }

    /// Creates a new `NftMakerClient` with a custom base URL.
    ///
    /// This is useful for testing or for connecting to a different API endpoint.
    ///
    /// # Errors
    ///
    /// - `UploadError::RequestFailed` if the internal HTTP client fails to build.
    /// - `UploadError::UrlParseFailed` if the provided `base_url` is invalid.
    pub fn new_with_url(
        api_key: String,
        project_id: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder().build()?;
        let base_url = Url::parse(base_url)?;

        Ok(Self {
            client,
            base_url,
            api_key,
            project_id: project_id.into(),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Uploads a single NFT to the project.
    ///
    /// Any HTTP response, successful or not, is returned as its status code,
    /// even if its body cannot be read. The body is only logged.
    ///
    /// # Errors
    ///
    /// - `UploadError::RequestFailed` if the request could not be sent. The
    ///   request URL, which carries the API key, is stripped from the error.
    /// - `UploadError::UrlParseFailed` if the endpoint URL cannot be formed.
    pub async fn upload_nft(&self, request: &UploadRequest) -> Result<StatusCode, UploadError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                UploadError::UrlParseFailed(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .extend(["UploadNft", self.api_key.as_str(), self.project_id.as_str()]);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| UploadError::RequestFailed(e.without_url()))?;

        let status = response.status();
        match response.text().await {
            Ok(body) => debug!(
                asset = %request.asset_name,
                status = status.as_u16(),
                "UploadNft response: {}",
                body
            ),
            Err(e) => debug!(
                asset = %request.asset_name,
                status = status.as_u16(),
                error = %e.without_url(),
                "UploadNft response body could not be read"
            ),
        }

        Ok(status)
    }
}
