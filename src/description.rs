//! Launch description model

use crate::actions::{DeclareArgument, Node};

/// One entity in a launch description, in declaration order
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchEntity {
    Argument(DeclareArgument),
    Node(Node),
}

/// An ordered list of launch entities
///
/// Order carries meaning: an argument must appear before any node whose
/// parameters reference it, so the single-pass evaluation walk sees the
/// declaration first.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDescription {
    pub entities: Vec<LaunchEntity>,
}

impl LaunchDescription {
    pub fn new(entities: Vec<LaunchEntity>) -> Self {
        Self { entities }
    }

    /// Collect all declared arguments, in declaration order
    pub fn arguments(&self) -> Vec<&DeclareArgument> {
        self.entities
            .iter()
            .filter_map(|entity| match entity {
                LaunchEntity::Argument(arg) => Some(arg),
                _ => None,
            })
            .collect()
    }

    /// Collect all nodes, in declaration order
    pub fn nodes(&self) -> Vec<&Node> {
        self.entities
            .iter()
            .filter_map(|entity| match entity {
                LaunchEntity::Node(node) => Some(node),
                _ => None,
            })
            .collect()
    }
}
