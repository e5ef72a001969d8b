pub mod list_models;

pub use list_models::{ListModelsError, ListModelsProvider};
