//! record.json data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root structure for record.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub node: Vec<NodeRecord>,
    pub variables: HashMap<String, String>,
}

impl LaunchRecord {
    pub fn new() -> Self {
        Self {
            node: Vec::new(),
            variables: HashMap::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for LaunchRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully resolved record for one node process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub executable: String,
    pub package: String,
    pub name: Option<String>,
    pub output: Option<String>,
    pub params: Vec<(String, String)>,
    pub cmd: Vec<String>,
}
