use gemlist_core::{ListModelsError, ListModelsProvider, Model};

use crate::{Config, ListerError};

/// A source of model providers that may or may not be compiled in.
pub trait Backend {
    type Provider: ListModelsProvider;

    /// Checks that the remote client is usable. Runs before any
    /// configuration is read or network call is made.
    fn probe(&self) -> Result<(), ListerError>;

    /// Builds a provider authenticated with `config`.
    fn connect(self, config: Config) -> Result<Self::Provider, ListerError>;
}

/// Stands in for a client library this build was compiled without.
#[derive(Debug, Clone, Copy)]
pub struct MissingBackend {
    library: &'static str,
    feature: &'static str,
}

impl MissingBackend {
    pub fn new(library: &'static str, feature: &'static str) -> Self {
        Self { library, feature }
    }

    fn error(&self) -> ListerError {
        ListerError::Dependency {
            library: self.library,
            feature: self.feature,
        }
    }
}

/// Provider type of [`MissingBackend`]. It can never be constructed.
pub enum Unavailable {}

#[async_trait::async_trait]
impl ListModelsProvider for Unavailable {
    async fn list_models(&self) -> Result<Vec<Model>, ListModelsError> {
        match *self {}
    }
}

impl Backend for MissingBackend {
    type Provider = Unavailable;

    fn probe(&self) -> Result<(), ListerError> {
        Err(self.error())
    }

    fn connect(self, _config: Config) -> Result<Self::Provider, ListerError> {
        Err(self.error())
    }
}

#[cfg(feature = "gemini")]
pub use gemini::GeminiBackend;

#[cfg(feature = "gemini")]
mod gemini {
    use anyhttp::HttpClient;
    use gemlist_gemini::GeminiProvider;
    use tracing::debug;

    use super::Backend;
    use crate::{Config, ListerError};

    pub struct GeminiBackend<C: HttpClient> {
        client: C,
    }

    impl<C: HttpClient> GeminiBackend<C> {
        pub fn new(client: C) -> Self {
            Self { client }
        }
    }

    impl<C: HttpClient> Backend for GeminiBackend<C> {
        type Provider = GeminiProvider<C>;

        fn probe(&self) -> Result<(), ListerError> {
            Ok(())
        }

        fn connect(self, config: Config) -> Result<Self::Provider, ListerError> {
            let provider = GeminiProvider::new(self.client, config.api_key);

            Ok(match config.base_url {
                Some(url) => {
                    debug!(%url, "using custom base url");
                    provider.url(url)
                }
                None => provider,
            })
        }
    }
}

/// The backend the binary uses: Gemini over `reqwest` when the `gemini`
/// feature is enabled.
#[cfg(feature = "gemini")]
pub fn default_backend() -> GeminiBackend<reqwest::Client> {
    GeminiBackend::new(reqwest::Client::new())
}

#[cfg(not(feature = "gemini"))]
pub fn default_backend() -> MissingBackend {
    MissingBackend::new("gemlist_gemini", "gemini")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_backend_probe_fails() {
        let backend = MissingBackend::new("gemlist_gemini", "gemini");

        let err = backend.probe().unwrap_err();
        assert!(matches!(
            err,
            ListerError::Dependency {
                library: "gemlist_gemini",
                feature: "gemini"
            }
        ));
        assert_eq!(
            err.to_string(),
            "The 'gemlist_gemini' client library is not available. Rebuild with `--features gemini`."
        );
    }

    #[test]
    fn test_missing_backend_never_connects() {
        let backend = MissingBackend::new("gemlist_gemini", "gemini");

        assert!(backend.connect(Config::new("key")).is_err());
    }

    #[cfg(feature = "gemini")]
    #[tokio::test]
    async fn test_gemini_backend_applies_base_url() {
        use anyhttp::mock::{MockHttpClient, MockResponse};
        use http::StatusCode;

        let client = MockHttpClient::new()
            .with_response(MockResponse::new(StatusCode::OK).body(r#"{"models":[]}"#));

        let backend = GeminiBackend::new(client.clone());
        backend.probe().unwrap();

        let provider = backend
            .connect(Config::new("my-secret-key").base_url("http://localhost:9000"))
            .unwrap();
        provider.list_models().await.unwrap();

        let request = client.last_request().unwrap();
        assert_eq!(
            request.uri(),
            "http://localhost:9000/v1beta/models?pageSize=1000"
        );
        assert_eq!(
            request.headers().get("x-goog-api-key").unwrap(),
            "my-secret-key"
        );
    }
}
