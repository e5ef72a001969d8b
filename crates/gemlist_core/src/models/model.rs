use std::fmt;

/// Supported action advertised by models that can generate content.
pub const GENERATE_CONTENT: &str = "generateContent";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    /// Unique resource name, e.g. `models/gemini-2.5-flash`.
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub input_token_limit: Option<u64>,
    pub output_token_limit: Option<u64>,
    pub supported_actions: Vec<String>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the human-readable name of the model.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Adds an action the model supports.
    pub fn supported_action(mut self, action: impl Into<String>) -> Self {
        self.supported_actions.push(action.into());
        self
    }

    /// Returns the display name, or the resource name when the service
    /// did not provide one (or provided an empty one).
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(display_name) if !display_name.is_empty() => display_name,
            _ => &self.name,
        }
    }

    /// Exact, case-sensitive membership test against the supported actions.
    pub fn supports(&self, action: &str) -> bool {
        self.supported_actions.iter().any(|this| this == action)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefers_display_name() {
        let model = Model::new("models/a").display_name("Alpha");
        assert_eq!(model.label(), "Alpha");
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let model = Model::new("models/b");
        assert_eq!(model.label(), "models/b");

        let model = Model::new("models/c").display_name("");
        assert_eq!(model.label(), "models/c");
    }

    #[test]
    fn test_supports_is_exact() {
        let model = Model::new("models/a").supported_action("generateContent");

        assert!(model.supports(GENERATE_CONTENT));
        assert!(!model.supports("generatecontent"));
        assert!(!model.supports("generate"));
        assert!(!Model::new("models/b").supports(GENERATE_CONTENT));
    }

    #[test]
    fn test_display() {
        let model = Model::new("models/a").display_name("Alpha");
        assert_eq!(model.to_string(), "Alpha (models/a)");

        let model = Model::new("models/b");
        assert_eq!(model.to_string(), "models/b (models/b)");
    }
}
