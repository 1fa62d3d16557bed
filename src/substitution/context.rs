//! Launch context for managing configurations

use std::collections::HashMap;

/// Name-to-value store built up while a description is resolved.
///
/// Command-line overrides are seeded first; argument declarations fill in
/// defaults only for names still unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
}

impl LaunchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<&str> {
        self.configurations.get(name).map(String::as_str)
    }

    pub fn configurations(&self) -> &HashMap<String, String> {
        &self.configurations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_has_no_configurations() {
        let context = LaunchContext::new();
        assert!(context.get_configuration("port").is_none());
        assert!(context.configurations().is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let mut context = LaunchContext::new();
        context.set_configuration("port".to_string(), "9090".to_string());
        assert_eq!(context.get_configuration("port"), Some("9090"));
    }

    #[test]
    fn test_later_set_wins() {
        let mut context = LaunchContext::new();
        context.set_configuration("port".to_string(), "9090".to_string());
        context.set_configuration("port".to_string(), "8080".to_string());
        assert_eq!(context.get_configuration("port"), Some("8080"));
    }

    #[test]
    fn test_snapshot_reflects_all_entries() {
        let mut context = LaunchContext::new();
        context.set_configuration("port".to_string(), "9090".to_string());
        context.set_configuration("address".to_string(), "0.0.0.0".to_string());

        let configs = context.configurations();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs.get("port"), Some(&"9090".to_string()));
    }
}
