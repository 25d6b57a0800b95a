use crate::domain::{
    error_classification::{CaughtError, ErrorBody, ErrorResponse, GenericError, TransportError},
    logging::LogComponent,
};
use crate::{log_debug, log_warn};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;

impl TransportError {
    /// Transport error for a completed request with an error status.
    ///
    /// The body is kept only when it is a JSON object; its `message` field
    /// survives only when it is a string.
    pub fn from_response(status: u16, body_text: &str) -> Self {
        let body = serde_json::from_str::<serde_json::Value>(body_text)
            .ok()
            .filter(serde_json::Value::is_object)
            .and_then(|value| serde_json::from_value::<ErrorBody>(value).ok());

        TransportError::with_response(ErrorResponse { status: Some(status), body })
    }
}

impl CaughtError {
    /// Boundary conversion for gloo-net failures.
    ///
    /// `JsError` comes from a rejected `fetch` and `GlooError` from a request
    /// that could not be built or sent; neither has a response.
    pub fn from_gloo(error: &gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::JsError(_) | gloo_net::Error::GlooError(_) => {
                CaughtError::Transport(TransportError::without_response())
            }
            gloo_net::Error::SerdeError(e) => CaughtError::Generic(GenericError::new(e.to_string())),
        }
    }
}

impl From<gloo_net::Error> for CaughtError {
    fn from(error: gloo_net::Error) -> Self {
        CaughtError::from_gloo(&error)
    }
}

/// REST client for the practice backend.
///
/// Every failure comes back as a [`CaughtError`] ready for classification.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    default_headers: HashMap<String, String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn apply_headers(&self, mut builder: RequestBuilder) -> RequestBuilder {
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        builder
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CaughtError> {
        let url = self.url(path);
        log_debug!(LogComponent::Infrastructure("ApiClient"), "GET {}", url);

        let response = self.apply_headers(Request::get(&url)).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, CaughtError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log_debug!(LogComponent::Infrastructure("ApiClient"), "POST {}", url);

        let request = self.apply_headers(Request::post(&url)).json(body)?;
        let response = Self::check_status(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), CaughtError> {
        let url = self.url(path);
        log_debug!(LogComponent::Infrastructure("ApiClient"), "DELETE {}", url);

        let response = self.apply_headers(Request::delete(&url)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Turns non-2xx responses into transport errors
    async fn check_status(response: Response) -> Result<Response, CaughtError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        // An unreadable body still leaves the status to classify by.
        let body_text = response.text().await.unwrap_or_default();

        log_warn!(
            LogComponent::Infrastructure("ApiClient"),
            "HTTP {} from {}",
            status,
            response.url()
        );

        Err(CaughtError::Transport(TransportError::from_response(status, &body_text)))
    }
}
