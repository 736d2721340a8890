//! HTTP Field Config Adapter
//!
//! Fetches field schemas from the dashboard's configuration service:
//!
//! ```text
//! GET {base_url}/config/fields/{entity}
//! Authorization: Bearer {api_token}
//! ```
//!
//! The response body is a JSON `FieldSchema`. A 404 means the entity has no
//! configured fields.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use crate::domain::fields::{FieldEntity, FieldSchema};
use crate::ports::{FieldConfigError, FieldConfigSource};

/// Configuration for the HTTP field config adapter.
#[derive(Debug, Clone)]
pub struct HttpFieldConfigSettings {
    /// Base URL of the configuration service.
    pub base_url: String,
    /// Optional bearer token.
    api_token: Option<SecretString>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpFieldConfigSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timeout: Duration::from_secs(5),
        }
    }

    /// Sets the bearer token sent with each request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn schema_url(&self, entity: FieldEntity) -> String {
        format!(
            "{}/config/fields/{}",
            self.base_url.trim_end_matches('/'),
            entity.as_str()
        )
    }
}

/// Field schema source backed by the remote configuration service.
pub struct HttpFieldConfig {
    settings: HttpFieldConfigSettings,
    client: Client,
}

impl HttpFieldConfig {
    /// Creates the adapter.
    ///
    /// # Errors
    /// Returns `FieldConfigError::Transport` if the HTTP client cannot be built.
    pub fn new(settings: HttpFieldConfigSettings) -> Result<Self, FieldConfigError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| FieldConfigError::Transport(format!("failed to build client: {}", e)))?;

        Ok(Self { settings, client })
    }
}

#[async_trait]
impl FieldConfigSource for HttpFieldConfig {
    async fn load_schema(&self, entity: FieldEntity) -> Result<FieldSchema, FieldConfigError> {
        let url = self.settings.schema_url(entity);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.settings.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, url = %url, "Field config request failed");
            FieldConfigError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FieldConfigError::NotFound(entity));
        }
        if !status.is_success() {
            tracing::warn!(status = %status, url = %url, "Field config service returned error");
            return Err(FieldConfigError::Transport(format!(
                "unexpected status {}",
                status
            )));
        }

        let schema: FieldSchema = response
            .json()
            .await
            .map_err(|e| FieldConfigError::Parse(e.to_string()))?;

        if schema.entity != entity {
            return Err(FieldConfigError::Parse(format!(
                "requested {} schema but received {}",
                entity, schema.entity
            )));
        }

        tracing::debug!(entity = %entity, fields = schema.fields.len(), "Fetched field schema");
        Ok(schema)
    }
}
