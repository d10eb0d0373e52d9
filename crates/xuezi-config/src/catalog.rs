use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Load the word list compiled into the binary
    #[serde(default = "default_enabled")]
    pub embedded: bool,
    /// Extra JSON word lists, merged by id in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            embedded: default_enabled(),
            additional_paths: vec![],
        }
    }
}
