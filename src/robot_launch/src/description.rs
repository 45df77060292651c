//! Launch descriptions: the ordered list of processes handed to a launch runner

use crate::{
    actions::NodeAction,
    error::{ParseError, RemapError, Result},
    remap::BridgeRemap,
};
use std::collections::BTreeSet;

/// An ordered, immutable collection of node actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchDescription {
    actions: Vec<NodeAction>,
}

/// One bridge argument and the result of reading it as a remap expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeArgument<'a> {
    /// Position of the owning action in the description
    pub action_index: usize,
    pub node: &'a NodeAction,
    pub argument: &'a str,
    pub remap: std::result::Result<BridgeRemap, RemapError>,
}

impl LaunchDescription {
    pub fn new(actions: Vec<NodeAction>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[NodeAction] {
        &self.actions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeAction> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Distinct `(package, executable)` pairs declared by this description
    pub fn executables(&self) -> BTreeSet<(&str, &str)> {
        self.actions
            .iter()
            .map(|a| (a.package.as_str(), a.executable.as_str()))
            .collect()
    }

    /// Every argument of every bridge node, read as a remap expression.
    ///
    /// Parse failures are reported per argument; nothing here rejects the
    /// description itself.
    pub fn bridge_arguments(&self) -> Vec<BridgeArgument<'_>> {
        self.actions
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_bridge())
            .flat_map(|(action_index, node)| {
                node.arguments.iter().map(move |argument| BridgeArgument {
                    action_index,
                    node,
                    argument,
                    remap: argument.parse(),
                })
            })
            .collect()
    }

    /// Check that every action names a package and an executable
    pub fn validate(&self) -> Result<()> {
        for (index, action) in self.actions.iter().enumerate() {
            if action.package.is_empty() {
                return Err(ParseError::EmptyIdentifier {
                    index,
                    field: "package",
                });
            }
            if action.executable.is_empty() {
                return Err(ParseError::EmptyIdentifier {
                    index,
                    field: "executable",
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<NodeAction> for LaunchDescription {
    fn from_iter<I: IntoIterator<Item = NodeAction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LaunchDescription {
    type Item = &'a NodeAction;
    type IntoIter = std::slice::Iter<'a, NodeAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl IntoIterator for LaunchDescription {
    type Item = NodeAction;
    type IntoIter = std::vec::IntoIter<NodeAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}
