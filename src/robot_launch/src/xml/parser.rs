//! XML launch file reader

use crate::{
    actions::NodeAction,
    description::LaunchDescription,
    error::{ParseError, Result},
    xml::{Entity, XmlEntity},
};
use std::path::Path;

/// Attributes of `<node>` that are understood by [`NodeAction::from_entity`]
const NODE_ATTRIBUTES: &[&str] = &[
    "pkg",
    "exec",
    "name",
    "namespace",
    "ros_namespace",
    "args",
    "output",
    "emulate_tty",
];

pub fn parse_xml_file(path: &Path) -> Result<LaunchDescription> {
    let content = std::fs::read_to_string(path)?;
    parse_xml_string(&content)
}

pub fn parse_xml_string(content: &str) -> Result<LaunchDescription> {
    let doc = roxmltree::Document::parse(content)?;
    let root = XmlEntity::new(doc.root_element());
    if root.type_name() != "launch" {
        return Err(ParseError::UnexpectedRoot(root.type_name().to_string()));
    }

    let mut actions = Vec::new();
    for child in root.children() {
        match child.type_name() {
            "node" => {
                for (attr, _) in child.attributes() {
                    if !NODE_ATTRIBUTES.contains(&attr) {
                        log::debug!("Ignoring <node> attribute '{}'", attr);
                    }
                }
                actions.push(NodeAction::from_entity(&child)?);
            }
            other => {
                log::warn!("Unsupported action type: {}", other);
            }
        }
    }

    Ok(LaunchDescription::new(actions))
}
