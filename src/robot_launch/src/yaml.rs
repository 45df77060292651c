//! YAML launch frontend
//!
//! Reads and writes the ROS 2 YAML launch syntax:
//!
//! ```yaml
//! launch:
//! - node:
//!     pkg: ros_gz_bridge
//!     exec: parameter_bridge
//!     args: /cmd_vel@geometry_msgs/msg/Twist@ignition.msgs.Twist
//! ```

use crate::{
    actions::{split_args, NodeAction, OutputMode},
    description::LaunchDescription,
    error::{GenerationError, ParseError, Result},
    xml::writer::join_args,
};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct YamlLaunch {
    #[serde(default)]
    launch: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct YamlNodeEntry {
    node: YamlNode,
}

#[derive(Debug, Serialize, Deserialize)]
struct YamlNode {
    pkg: Option<String>,
    exec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    args: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output: Option<OutputMode>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    emulate_tty: bool,
}

impl YamlNode {
    fn into_action(self) -> Result<NodeAction> {
        let missing = |attribute: &str| ParseError::MissingAttribute {
            element: "node".to_string(),
            attribute: attribute.to_string(),
        };
        let mut node = NodeAction::new(
            self.pkg.ok_or_else(|| missing("pkg"))?,
            self.exec.ok_or_else(|| missing("exec"))?,
        );
        node.name = self.name;
        node.namespace = self.namespace;
        node.arguments = self.args.as_deref().map(split_args).unwrap_or_default();
        node.output = self.output;
        node.emulate_tty = self.emulate_tty;
        Ok(node)
    }
}

pub fn parse_yaml_file(path: &Path) -> Result<LaunchDescription> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml_string(&content)
}

pub fn parse_yaml_string(content: &str) -> Result<LaunchDescription> {
    let doc: YamlLaunch = serde_yaml::from_str(content)?;

    let mut actions = Vec::new();
    for item in doc.launch {
        match item.get("node") {
            Some(node) => {
                let node: YamlNode = serde_yaml::from_value(node.clone())?;
                actions.push(node.into_action()?);
            }
            None => {
                let kind = item
                    .as_mapping()
                    .and_then(|m| m.keys().next())
                    .and_then(Value::as_str)
                    .unwrap_or("<unknown>");
                log::warn!("Unsupported action type: {}", kind);
            }
        }
    }

    Ok(LaunchDescription::new(actions))
}

/// Render a description as a ROS 2 `.launch.yaml` document
pub fn to_yaml_string(
    description: &LaunchDescription,
) -> std::result::Result<String, GenerationError> {
    let entries = description
        .iter()
        .map(|node| -> std::result::Result<YamlNodeEntry, GenerationError> {
            let args = if node.arguments.is_empty() {
                None
            } else {
                Some(join_args(&node.arguments)?)
            };
            Ok(YamlNodeEntry {
                node: YamlNode {
                    pkg: Some(node.package.clone()),
                    exec: Some(node.executable.clone()),
                    name: node.name.clone(),
                    namespace: node.namespace.clone(),
                    args,
                    output: node.output,
                    emulate_tty: node.emulate_tty,
                },
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    #[derive(Serialize)]
    struct Document {
        launch: Vec<YamlNodeEntry>,
    }

    Ok(serde_yaml::to_string(&Document { launch: entries })?)
}
