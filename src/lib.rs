pub mod backend;
pub mod config;
mod error;
pub mod lister;

pub use gemlist_core::*;

#[cfg(feature = "gemini")]
pub use gemlist_gemini::*;

#[cfg(feature = "gemini")]
pub use backend::GeminiBackend;
pub use backend::{Backend, MissingBackend, default_backend};
pub use config::{Config, ConfigError};
pub use error::ListerError;
pub use lister::ModelLister;
