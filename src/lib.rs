//! rosbridge_launch library
//!
//! Expresses the rosbridge websocket + rosapi launch description as plain
//! data, resolves it against command-line overrides, and emits a record of
//! the processes for the external launch runtime to spawn. Nothing here
//! opens a socket or starts a process.

pub mod actions;
pub mod bridge;
pub mod description;
pub mod error;
pub mod record;
pub mod substitution;

use description::{LaunchDescription, LaunchEntity};
use error::Result;
use record::{CommandGenerator, LaunchRecord};
use std::collections::HashMap;
use std::path::Path;
use substitution::LaunchContext;

/// Single-pass resolver turning a launch description into process records
pub struct LaunchResolver {
    context: LaunchContext,
    records: Vec<record::NodeRecord>,
}

impl LaunchResolver {
    pub fn new(cli_args: HashMap<String, String>) -> Self {
        let mut context = LaunchContext::new();
        // Apply CLI args as initial configurations
        for (k, v) in cli_args {
            context.set_configuration(k, v);
        }

        Self {
            context,
            records: Vec::new(),
        }
    }

    /// Walk the entities in declaration order. Arguments mutate the context,
    /// nodes are resolved against whatever the context holds at that point.
    pub fn resolve(&mut self, description: &LaunchDescription) -> Result<()> {
        for entity in &description.entities {
            self.resolve_entity(entity)?;
        }
        Ok(())
    }

    fn resolve_entity(&mut self, entity: &LaunchEntity) -> Result<()> {
        match entity {
            LaunchEntity::Argument(arg) => {
                arg.apply(&mut self.context);
            }
            LaunchEntity::Node(node) => {
                let record = CommandGenerator::generate_node_record(node, &self.context)?;
                log::debug!(
                    "Resolved node '{}' from package '{}'",
                    record.executable,
                    record.package
                );
                self.records.push(record);
            }
        }
        Ok(())
    }

    pub fn into_record(self) -> LaunchRecord {
        let LaunchResolver { context, records } = self;
        LaunchRecord {
            node: records,
            variables: context.configurations().clone(),
        }
    }
}

/// Resolve the rosbridge launch description with the given overrides
pub fn generate_record(cli_args: HashMap<String, String>) -> Result<LaunchRecord> {
    let mut resolver = LaunchResolver::new(cli_args);
    resolver.resolve(&bridge::description())?;
    Ok(resolver.into_record())
}

/// Write a record to disk as pretty-printed JSON
pub fn write_record(record: &LaunchRecord, path: &Path) -> Result<()> {
    let json = record.to_json()?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let record = generate_record(HashMap::new()).unwrap();

        assert_eq!(record.node.len(), 2);
        let bridge_node = &record.node[0];
        assert_eq!(bridge_node.executable, "rosbridge_websocket");
        assert!(bridge_node
            .params
            .contains(&("port".to_string(), "9090".to_string())));
    }

    #[test]
    fn test_port_override() {
        let mut cli_args = HashMap::new();
        cli_args.insert("port".to_string(), "8080".to_string());

        let record = generate_record(cli_args).unwrap();
        assert!(record.node[0]
            .params
            .contains(&("port".to_string(), "8080".to_string())));
    }

    #[test]
    fn test_variables_snapshot() {
        let record = generate_record(HashMap::new()).unwrap();
        assert_eq!(record.variables.get("port"), Some(&"9090".to_string()));
    }

    #[test]
    fn test_node_order_follows_declaration() {
        let record = generate_record(HashMap::new()).unwrap();
        assert_eq!(record.node[0].executable, "rosbridge_websocket");
        assert_eq!(record.node[1].executable, "rosapi_node");
    }
}
