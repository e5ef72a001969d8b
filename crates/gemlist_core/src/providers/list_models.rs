use thiserror::Error;

use crate::models::Model;

#[async_trait::async_trait]
pub trait ListModelsProvider: Send + Sync {
    /// Returns every model the service exposes, in service order.
    async fn list_models(&self) -> Result<Vec<Model>, ListModelsError>;
}

#[derive(Debug, Error)]
pub enum ListModelsError {
    #[error("Failed to build the request: {0}.")]
    RequestBuildFailed(#[source] anyhow::Error),

    #[error("Failed to retrieve the response: {0}.")]
    ResponseFetchFailed(#[source] anyhow::Error),

    #[error("The request failed with status {status}: {body}")]
    RequestError { status: u16, body: String },

    #[error("Failed to parse response: {0}.")]
    ParseError(#[source] anyhow::Error),
}
