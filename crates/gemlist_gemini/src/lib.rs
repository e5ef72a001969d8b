use std::borrow::Cow;

use anyhttp::HttpClient;
use secrecy::SecretString;

mod list_models;

const DEFAULT_URL: &str = "https://generativelanguage.googleapis.com";

/// Largest page the models endpoint will return.
const PAGE_SIZE: u32 = 1000;

pub struct GeminiProvider<C: HttpClient> {
    client: C,
    url: Cow<'static, str>,
    api_key: SecretString,
}

impl<C: HttpClient> GeminiProvider<C> {
    pub fn new(client: C, api_key: impl Into<SecretString>) -> Self {
        Self {
            client,
            url: Cow::Borrowed(DEFAULT_URL),
            api_key: api_key.into(),
        }
    }

    pub fn url(mut self, url: impl Into<Cow<'static, str>>) -> Self {
        let url = url.into();
        self.url = match url.strip_suffix('/') {
            Some(trimmed) => Cow::Owned(trimmed.to_owned()),
            None => url,
        };
        self
    }

    pub fn api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.api_key = api_key.into();
        self
    }
}
