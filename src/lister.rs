use std::borrow::Cow;
use std::io::Write;

use gemlist_core::{GENERATE_CONTENT, ListModelsProvider, Model};
use tracing::{debug, info};

use crate::{Backend, Config, ListerError};

/// Prints the models of a backend that support one capability.
pub struct ModelLister<B: Backend> {
    backend: B,
    capability: Cow<'static, str>,
}

impl<B: Backend> ModelLister<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            capability: Cow::Borrowed(GENERATE_CONTENT),
        }
    }

    /// Sets the supported action to filter on. Defaults to `generateContent`.
    pub fn capability(mut self, capability: impl Into<Cow<'static, str>>) -> Self {
        self.capability = capability.into();
        self
    }

    /// Runs one listing: probe the backend, read the credential through
    /// `lookup`, fetch every model, then write the header and one line per
    /// match to `out`.
    ///
    /// Nothing is written unless the fetch succeeds. Returns the number of
    /// matching models.
    pub async fn run<W: Write>(
        self,
        lookup: impl Fn(&str) -> Option<String>,
        out: &mut W,
    ) -> Result<usize, ListerError> {
        self.backend.probe()?;

        let config = Config::from_lookup(lookup)?;
        info!(key = %config.masked_key(), "credential found");

        let provider = self.backend.connect(config)?;
        let models = provider.list_models().await?;
        debug!(total = models.len(), "received models");

        writeln!(out, "{}", header(&self.capability))?;
        writeln!(out)?;

        let mut count = 0;
        for model in matching(&models, &self.capability) {
            writeln!(out, "{}", format_line(model))?;
            count += 1;
        }
        out.flush()?;

        debug!(count, capability = %self.capability, "listed matching models");
        Ok(count)
    }
}

pub fn header(capability: &str) -> String {
    format!("Available models that support {capability}:")
}

/// Models supporting `capability`, in the order given.
pub fn matching<'a>(
    models: &'a [Model],
    capability: &'a str,
) -> impl Iterator<Item = &'a Model> + 'a {
    models.iter().filter(move |model| model.supports(capability))
}

pub fn format_line(model: &Model) -> String {
    format!("- {model}")
}
