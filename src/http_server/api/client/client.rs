use reqwest::{header::HeaderMap, header::HeaderValue, Client};
use url::Url;

use super::error::ApiError;
use super::ApiRequest;
use crate::http_server::api::files::{ReadResponse, UpdateRequest};
use crate::http_server::api::files::update::UpdateResponse;

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub remote: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client);
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(response.json::<T::Response>().await?)
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Read a stored file's text content.
    pub async fn read_file(&self, filename: &str) -> Result<ReadResponse, ApiError> {
        let url = self.file_url(filename)?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.json::<ReadResponse>().await?)
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Overwrite an existing stored file.
    pub async fn update_file(
        &self,
        filename: &str,
        content: String,
    ) -> Result<UpdateResponse, ApiError> {
        let url = self.file_url(filename)?;
        let response = self
            .client
            .put(url)
            .json(&UpdateRequest { content })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<UpdateResponse>().await?)
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Delete a stored file.
    pub async fn delete_file(&self, filename: &str) -> Result<(), ApiError> {
        let url = self.file_url(filename)?;
        let response = self.client.delete(url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Fetch a stored file's raw bytes through the download route.
    pub async fn download_file(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        let url = self
            .remote
            .join(&format!("/api/files/{}/download", filename))?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    fn file_url(&self, filename: &str) -> Result<Url, ApiError> {
        Ok(self.remote.join(&format!("/api/files/{}", filename))?)
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }

    /// Get the underlying HTTP client for custom requests
    pub fn http_client(&self) -> &Client {
        &self.client
    }
}
