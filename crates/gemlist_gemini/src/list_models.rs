use std::collections::HashSet;

use anyhttp::HttpClient;
use bytes::Bytes;
use gemlist_core::{
    models::Model,
    providers::list_models::{ListModelsError, ListModelsProvider},
};
use http::Request;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::debug;

use crate::{GeminiProvider, PAGE_SIZE};

#[async_trait::async_trait]
impl<C: HttpClient> ListModelsProvider for GeminiProvider<C> {
    async fn list_models(&self) -> Result<Vec<Model>, ListModelsError> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();

        loop {
            let page = self.fetch_page(page_token.as_deref()).await?;
            debug!(count = page.models.len(), "fetched a page of models");

            models.extend(page.models.into_iter().map(Model::from));

            match page.next_page_token {
                // A token the service already handed out means the listing wrapped around.
                Some(next) if !next.is_empty() && seen_tokens.insert(next.clone()) => {
                    page_token = Some(next);
                }
                Some(next) if !next.is_empty() => {
                    debug!(token = %next, "page token repeated, stopping");
                    break;
                }
                _ => break,
            }
        }

        Ok(models)
    }
}

impl<C: HttpClient> GeminiProvider<C> {
    async fn fetch_page(
        &self,
        page_token: Option<&str>,
    ) -> Result<GeminiModelsResponse, ListModelsError> {
        let mut uri = format!("{}/v1beta/models?pageSize={}", self.url, PAGE_SIZE);
        if let Some(token) = page_token {
            uri.push_str("&pageToken=");
            uri.push_str(&urlencoding::encode(token));
        }

        debug!(%uri, "requesting models");

        let request = Request::get(uri)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .body(Vec::new())
            .map_err(|e| ListModelsError::RequestBuildFailed(anyhow::Error::new(e)))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ListModelsError::ResponseFetchFailed)?;

        let status = response.status();
        if !status.is_success() {
            let err_body = response
                .bytes()
                .await
                .unwrap_or_else(|_| Bytes::from_static(b"<failed to read>"));

            return Err(ListModelsError::RequestError {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&err_body).trim().to_owned(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(ListModelsError::ResponseFetchFailed)?;

        serde_json::from_slice(&body).map_err(|e| ListModelsError::ParseError(anyhow::Error::new(e)))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiModelsResponse {
    #[serde(default)]
    models: Vec<GeminiModel>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiModel {
    name: String,
    display_name: Option<String>,
    description: Option<String>,
    input_token_limit: Option<u64>,
    output_token_limit: Option<u64>,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

impl From<GeminiModel> for Model {
    fn from(m: GeminiModel) -> Self {
        Model {
            name: m.name,
            display_name: m.display_name,
            description: m.description,
            input_token_limit: m.input_token_limit,
            output_token_limit: m.output_token_limit,
            supported_actions: m.supported_generation_methods,
        }
    }
}
