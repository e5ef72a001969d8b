pub mod models;
pub mod providers;

pub use models::{GENERATE_CONTENT, Model};
pub use providers::{ListModelsError, ListModelsProvider};
