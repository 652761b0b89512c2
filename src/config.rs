//! Parser configuration.

use crate::messages::Severity;
use serde::Deserialize;

/// Configuration for a parse run.
///
/// Most callers can use [`Config::default`]. The struct derives
/// `Deserialize` so host tools can embed it in their own config files.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Minimum severity recorded in the flat messages list. Messages below
    /// this level are still placed in the tree but not in
    /// `Document::messages`.
    pub report_level: Severity,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            report_level: Severity::Info,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn report_level(mut self, level: Severity) -> Self {
        self.config.report_level = level;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::system_message_count;

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::builder().report_level(Severity::Error).build();
        assert_eq!(config.report_level, Severity::Error);
    }

    #[test]
    fn default_reports_everything() {
        assert_eq!(Config::default().report_level, Severity::Info);
    }

    #[test]
    fn report_level_filters_the_flat_list_only() {
        let config = Config::builder().report_level(Severity::Error).build();
        let doc = crate::parse_with_config("test", "Title\n===\n", config);
        // the warning still renders in the tree
        assert_eq!(system_message_count(&doc.nodes), 1);
        // but stays out of the flat list
        assert!(doc.messages.is_empty());
    }
}
