//! The shared request pipeline.
//!
//! Every API call funnels through [`GuacamoleClient::execute`]:
//! 1. Serialize the body to JSON when present (bodyless requests carry no
//!    content-type header).
//! 2. Attach the stored auth token as the `Guacamole-Token` header when a
//!    session is held; omit it otherwise.
//! 3. Execute the request.
//! 4. Classify any non-2xx response into [`ClientError::Api`], parsing the
//!    `{message, type}` error body when present and falling back to the raw
//!    body text (or the status reason for an empty body).
//! 5. On success, the typed wrappers decode the JSON body; PUT/DELETE/PATCH
//!    responses are 204 No Content and are never decoded.
//!
//! No retries at any layer: transport failures and API errors alike are
//! surfaced to the caller on the first attempt.

use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::GuacamoleClient;
use crate::error::{ClientError, Result};
use crate::patch::PatchOperation;

/// Header carrying the session token on every authenticated request.
pub(crate) const AUTH_TOKEN_HEADER: &str = "Guacamole-Token";

/// Error response body shape used by the Guacamole API.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(rename = "type", default)]
    error_type: String,
}

/// Classify a non-2xx response into [`ClientError::Api`].
pub(crate) async fn classify_error(response: Response) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(&body) {
        return ClientError::Api {
            status: status.as_u16(),
            error_type: parsed.error_type,
            message: parsed.message,
        };
    }

    let message = if body.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        body
    };
    ClientError::Api {
        status: status.as_u16(),
        error_type: String::new(),
        message,
    }
}

impl GuacamoleClient {
    /// Execute a request against `path` (relative to the base URL),
    /// returning the raw response for 2xx statuses and a classified error
    /// otherwise.
    pub(crate) async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method.clone(), &url);

        if let Some(body) = body {
            // .json() serializes and sets Content-Type: application/json;
            // bodyless requests skip this branch and carry no content-type.
            builder = builder.json(body);
        }
        if let Some(session) = &self.session {
            builder = builder.header(AUTH_TOKEN_HEADER, session.token());
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let err = classify_error(response).await;
            debug!(%method, path, status = status.as_u16(), %err, "API request failed");
            return Err(err);
        }

        debug!(%method, path, status = status.as_u16(), "API request succeeded");
        Ok(response)
    }

    /// GET `path` and decode the JSON response body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute::<()>(Method::GET, path, None).await?;
        decode_json(response).await
    }

    /// POST a JSON body to `path` and decode the JSON response body.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        decode_json(response).await
    }

    /// PUT a JSON body to `path`. Guacamole answers successful updates with
    /// 204 No Content, so the response body is never decoded.
    pub(crate) async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    /// DELETE `path`. 204 expected; the response body is never decoded.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// PATCH `path` with a JSON array of edit descriptors. The server
    /// applies the batch all-or-nothing; a failed call leaves the target
    /// unmodified.
    pub(crate) async fn patch_ops(&self, path: &str, ops: &[PatchOperation]) -> Result<()> {
        self.execute(Method::PATCH, path, Some(ops)).await?;
        Ok(())
    }
}

/// Decode a successful response body, mapping malformed JSON to
/// [`ClientError::InvalidResponse`].
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("decode response body: {e}")))
}
