//! Client for the push API device-token collection.

use std::time::Duration;

use md5::{Digest, Md5};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::endpoint::{self, Operation};
use crate::error::{ApiError, ApiResult};
use crate::settings::Settings;

/// Pagination options recognized by the listing operations.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListParams {
    /// Append the set options to the URL query string. An empty set leaves
    /// the URL untouched, so no trailing `?` is produced.
    fn append_to(&self, url: &mut Url) {
        if self.page.is_none() && self.page_size.is_none() {
            return;
        }
        let mut pairs = url.query_pairs_mut();
        if let Some(page) = self.page {
            pairs.append_pair("page", &page.to_string());
        }
        if let Some(page_size) = self.page_size {
            pairs.append_pair("page_size", &page_size.to_string());
        }
    }
}

/// Body for registering a device token with the API.
#[derive(Clone, Debug, Serialize)]
pub struct CreateParams {
    /// The raw token issued by the device platform
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

/// Body for updating a stored token.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

/// An error returned by the push API
#[derive(Deserialize)]
struct ApiResponseError {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Derive the URL-safe token id for a raw device token.
///
/// The API addresses stored tokens by the lowercase MD5 hex digest of the
/// platform token rather than by the token itself.
pub fn token_id(device_token: &str) -> ApiResult<String> {
    if device_token.is_empty() {
        return Err(ApiError::InvalidArgument("device_token"));
    }
    Ok(hex::encode(Md5::digest(device_token.as_bytes())))
}

/// Client for the device-token operations of the push API. This client
/// resolves each operation to a verb and path, then hands the call to the
/// shared request helper.
pub struct DeviceTokens {
    base_url: Url,
    api_token: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl DeviceTokens {
    /// Create a `DeviceTokens` client from the provided settings
    pub fn new(settings: &Settings, http: reqwest::Client) -> Self {
        DeviceTokens {
            base_url: settings.base_url.clone(),
            api_token: settings.api_token.clone(),
            timeout: Duration::from_secs(settings.timeout as u64),
            http,
        }
    }

    /// Paginated listing of stored tokens.
    pub async fn list(&self, params: &ListParams) -> ApiResult<Value> {
        let (method, mut url) = self.resolve(Operation::List, &[])?;
        params.append_to(&mut url);
        let response = self.send_request(method, url, None).await?;
        response.json().await.map_err(ApiError::DeserializeResponse)
    }

    /// Save a device token that was previously generated by a device platform.
    pub async fn create(&self, params: &CreateParams) -> ApiResult<Value> {
        if params.token.is_empty() {
            return Err(ApiError::InvalidArgument("token"));
        }
        let (method, url) = self.resolve(Operation::Create, &[])?;
        let body = serde_json::to_value(params).map_err(ApiError::SerializeBody)?;
        let response = self.send_request(method, url, Some(body)).await?;
        response.json().await.map_err(ApiError::DeserializeResponse)
    }

    /// Get information about a specific token.
    pub async fn retrieve(&self, device_token: &str) -> ApiResult<Value> {
        let token_id = token_id(device_token)?;
        let (method, url) = self.resolve(Operation::Retrieve, &[(endpoint::TOKEN_ID, &token_id)])?;
        let response = self.send_request(method, url, None).await?;
        response.json().await.map_err(ApiError::DeserializeResponse)
    }

    /// Update a stored token.
    pub async fn update(&self, device_token: &str, params: &UpdateParams) -> ApiResult<Value> {
        let token_id = token_id(device_token)?;
        let (method, url) = self.resolve(Operation::Update, &[(endpoint::TOKEN_ID, &token_id)])?;
        let body = serde_json::to_value(params).map_err(ApiError::SerializeBody)?;
        let response = self.send_request(method, url, Some(body)).await?;
        response.json().await.map_err(ApiError::DeserializeResponse)
    }

    /// Delete the device related to the device token.
    pub async fn delete(&self, device_token: &str) -> ApiResult<()> {
        let token_id = token_id(device_token)?;
        let (method, url) = self.resolve(Operation::Delete, &[(endpoint::TOKEN_ID, &token_id)])?;
        self.send_request(method, url, None).await?;
        Ok(())
    }

    /// List users associated with the given token.
    pub async fn list_associated_users(
        &self,
        device_token: &str,
        params: &ListParams,
    ) -> ApiResult<Value> {
        let token_id = token_id(device_token)?;
        let (method, mut url) = self.resolve(
            Operation::ListAssociatedUsers,
            &[(endpoint::TOKEN_ID, &token_id)],
        )?;
        params.append_to(&mut url);
        let response = self.send_request(method, url, None).await?;
        response.json().await.map_err(ApiError::DeserializeResponse)
    }

    /// Associate the given user with the given device token.
    pub async fn associate_user(&self, device_token: &str, user_id: &str) -> ApiResult<Value> {
        if user_id.is_empty() {
            return Err(ApiError::InvalidArgument("user_id"));
        }
        let token_id = token_id(device_token)?;
        let (method, url) = self.resolve(
            Operation::AssociateUser,
            &[(endpoint::TOKEN_ID, &token_id), (endpoint::USER_ID, user_id)],
        )?;
        let response = self.send_request(method, url, None).await?;
        response.json().await.map_err(ApiError::DeserializeResponse)
    }

    /// Dissociate the given user from the given device token.
    pub async fn dissociate_user(&self, device_token: &str, user_id: &str) -> ApiResult<()> {
        if user_id.is_empty() {
            return Err(ApiError::InvalidArgument("user_id"));
        }
        let token_id = token_id(device_token)?;
        let (method, url) = self.resolve(
            Operation::DissociateUser,
            &[(endpoint::TOKEN_ID, &token_id), (endpoint::USER_ID, user_id)],
        )?;
        self.send_request(method, url, None).await?;
        Ok(())
    }

    /// Resolve an operation against the client's base URL
    fn resolve(
        &self,
        operation: Operation,
        fills: &[(&'static str, &str)],
    ) -> ApiResult<(Method, Url)> {
        let path = endpoint::resolve(operation.pattern(), fills)?;
        let url = self.base_url.join(&path)?;
        Ok((operation.method(), url))
    }

    /// Forward a resolved call to the push API and map transport failures.
    /// Successful responses are returned to the caller unparsed.
    async fn send_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> ApiResult<reqwest::Response> {
        trace!("Sending {} request to {}", method, url.path());
        let mut request = self
            .http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Accept", "application/json")
            .timeout(self.timeout);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::RequestTimeout
            } else {
                ApiError::Connect(e)
            }
        })?;

        // Handle error
        let status = response.status();
        if !status.is_success() {
            let response_error: ApiResponseError = response
                .json()
                .await
                .map_err(ApiError::DeserializeResponse)?;
            let message = response_error
                .error
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| "Unknown reason".to_string());

            return Err(match status {
                StatusCode::UNAUTHORIZED => ApiError::Authentication,
                StatusCode::NOT_FOUND => ApiError::NotFound,
                status => ApiError::Upstream {
                    status: status.to_string(),
                    message,
                },
            });
        }

        Ok(response)
    }
}
