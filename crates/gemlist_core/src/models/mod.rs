mod model;

pub use model::{GENERATE_CONTENT, Model};
