//! XML launch file writer

use crate::{actions::NodeAction, description::LaunchDescription, error::GenerationError};
use std::fmt::Write;

/// Render a description as a ROS 2 `.launch.xml` document
pub fn to_xml_string(description: &LaunchDescription) -> Result<String, GenerationError> {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<launch>\n");
    for node in description {
        out.push_str("  <node");
        for (name, value) in node_attributes(node)? {
            // Writing to a String cannot fail
            let _ = write!(out, " {}=\"{}\"", name, escape(&value));
        }
        out.push_str("/>\n");
    }
    out.push_str("</launch>\n");
    Ok(out)
}

fn node_attributes(node: &NodeAction) -> Result<Vec<(&'static str, String)>, GenerationError> {
    let mut attrs = vec![
        ("pkg", node.package.clone()),
        ("exec", node.executable.clone()),
    ];
    if let Some(name) = &node.name {
        attrs.push(("name", name.clone()));
    }
    if let Some(namespace) = &node.namespace {
        attrs.push(("namespace", namespace.clone()));
    }
    if !node.arguments.is_empty() {
        attrs.push(("args", join_args(&node.arguments)?));
    }
    if let Some(output) = node.output {
        attrs.push(("output", output.to_string()));
    }
    if node.emulate_tty {
        attrs.push(("emulate_tty", "true".to_string()));
    }
    Ok(attrs)
}

/// Join arguments into a frontend `args` string.
///
/// The frontends split `args` on whitespace and expand `$(...)`, so an
/// argument containing either would not come back unchanged.
pub fn join_args(arguments: &[String]) -> Result<String, GenerationError> {
    if let Some(bad) = arguments.iter().find(|a| {
        a.is_empty() || a.contains("$(") || a.chars().any(char::is_whitespace)
    }) {
        return Err(GenerationError::UnrepresentableArgument(bad.clone()));
    }
    Ok(arguments.join(" "))
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            // Attribute normalization turns raw line breaks and tabs into spaces
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            c => escaped.push(c),
        }
    }
    escaped
}
