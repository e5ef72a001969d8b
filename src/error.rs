use std::io;

use gemlist_core::ListModelsError;
use thiserror::Error;

use crate::config::ConfigError;

/// Every way a listing run can end early. All of them are terminal.
#[derive(Debug, Error)]
pub enum ListerError {
    #[error("The '{library}' client library is not available. Rebuild with `--features {feature}`.")]
    Dependency {
        library: &'static str,
        feature: &'static str,
    },

    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] ListModelsError),

    #[error("Failed to write output: {0}.")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_reads_as_one_sentence() {
        let err = ListerError::from(ListModelsError::RequestError {
            status: 400,
            body: "API key not valid. Please pass a valid API key.".into(),
        });

        assert_eq!(
            err.to_string(),
            "The request failed with status 400: API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn test_configuration_error_is_transparent() {
        let err = ListerError::from(ConfigError::MissingCredential("GEMINI_API_KEY"));

        assert_eq!(err.to_string(), "GEMINI_API_KEY not found in environment.");
    }
}
