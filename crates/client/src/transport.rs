//! Transport layer: the remote HTTP endpoint
//!
//! ## Design
//!
//! [`Transport`] is the seam between the fallback coordinator and the
//! wire. The production implementation, [`HttpTransport`], speaks the
//! remote endpoint's HTTP surface; tests substitute stubs that fail or
//! answer canned envelopes.
//!
//! ## Failure contract
//!
//! Two failure classes, both logged at `error!` (the user-visible
//! notification surface of a headless client) and both propagated for the
//! fallback coordinator to intercept:
//!
//! - physical: connect error, timeout, non-2xx status, undecodable body
//! - logical: a successful exchange whose envelope code is not 200
//!
//! No retries: one attempt per call, then the error propagates.

use crate::config::ClientConfig;
use async_trait::async_trait;
use datapanel_core::{
    ChartData, DataItem, Envelope, ItemId, ItemPatch, ListQuery, NewItem, Page, PanelError,
    PanelResult,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// Outbound surface of the remote data API
///
/// Mirrors the six facade operations one-to-one; every method resolves to
/// the remote envelope on success and a transport-class error otherwise.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `/data/list`
    async fn get_list(&self, query: &ListQuery) -> PanelResult<Envelope<Page<DataItem>>>;

    /// GET `/data/{id}`
    async fn get_detail(&self, id: &ItemId) -> PanelResult<Envelope<DataItem>>;

    /// POST `/data`
    async fn create(&self, fields: &NewItem) -> PanelResult<Envelope<DataItem>>;

    /// PUT `/data/{id}`
    async fn update(&self, id: &ItemId, patch: &ItemPatch) -> PanelResult<Envelope<DataItem>>;

    /// DELETE `/data/{id}`
    async fn delete(&self, id: &ItemId) -> PanelResult<Envelope<()>>;

    /// GET `/data/chart`
    async fn get_chart(&self) -> PanelResult<Envelope<ChartData>>;
}

/// HTTP implementation of [`Transport`] over `reqwest`
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    /// Build a transport from the client config
    ///
    /// # Errors
    ///
    /// `Transport` if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> PanelResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| PanelError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when the config carries one
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> PanelResult<Envelope<T>> {
        debug!("sending {} request", operation);

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "{} request failed", operation);
            PanelError::transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "{} returned unexpected HTTP status", operation);
            return Err(PanelError::transport(format!(
                "unexpected HTTP status {}",
                status
            )));
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            error!(error = %e, "{} response body could not be decoded", operation);
            PanelError::serialization(e.to_string())
        })?;

        if !envelope.is_success() {
            error!(
                code = envelope.code,
                message = %envelope.message,
                "{} rejected by remote", operation
            );
            return Err(PanelError::RemoteRejected {
                code: envelope.code,
                message: envelope.message,
            });
        }

        Ok(envelope)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_list(&self, query: &ListQuery) -> PanelResult<Envelope<Page<DataItem>>> {
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("pageSize", query.page_size.to_string()),
        ];
        if let Some(name) = &query.name {
            params.push(("name", name.clone()));
        }
        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }

        let request = self
            .authorize(self.client.get(self.url("/data/list")))
            .query(&params);
        self.execute("get_list", request).await
    }

    async fn get_detail(&self, id: &ItemId) -> PanelResult<Envelope<DataItem>> {
        let request = self.authorize(self.client.get(self.url(&format!("/data/{}", id))));
        self.execute("get_detail", request).await
    }

    async fn create(&self, fields: &NewItem) -> PanelResult<Envelope<DataItem>> {
        let request = self.authorize(self.client.post(self.url("/data"))).json(fields);
        self.execute("create", request).await
    }

    async fn update(&self, id: &ItemId, patch: &ItemPatch) -> PanelResult<Envelope<DataItem>> {
        let request = self
            .authorize(self.client.put(self.url(&format!("/data/{}", id))))
            .json(patch);
        self.execute("update", request).await
    }

    async fn delete(&self, id: &ItemId) -> PanelResult<Envelope<()>> {
        let request = self.authorize(self.client.delete(self.url(&format!("/data/{}", id))));
        self.execute("delete", request).await
    }

    async fn get_chart(&self) -> PanelResult<Envelope<ChartData>> {
        let request = self.authorize(self.client.get(self.url("/data/chart")));
        self.execute("get_chart", request).await
    }
}
