//! robot_launch library
//!
//! Launch descriptions for the Ignition/Gazebo robot workspaces. A launch
//! description is a fixed, ordered list of ROS 2 nodes: topic bridges plus the
//! package's own client and server executables. Nothing here starts a
//! process; descriptions are handed to an external runner as a ROS 2 XML or
//! YAML launch file, or as a play_launch `record.json`.

pub mod actions;
pub mod description;
pub mod error;
pub mod packages;
pub mod record;
pub mod remap;
pub mod xml;
pub mod yaml;

pub use actions::{NodeAction, OutputMode};
pub use description::LaunchDescription;
pub use error::{GenerationError, ParseError, RemapError, Result};
pub use record::{CommandGenerator, GeneratorConfig, RecordJson};
pub use remap::{BridgeDirection, BridgeRemap};

use std::path::Path;

/// Frontend syntaxes understood by the readers and writers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchFormat {
    Xml,
    Yaml,
}

impl LaunchFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("xml") => Some(LaunchFormat::Xml),
            Some("yaml") | Some("yml") => Some(LaunchFormat::Yaml),
            _ => None,
        }
    }
}

/// Build the description of a shipped launch file
pub fn generate_launch_description(package: &str, file: &str) -> Result<LaunchDescription> {
    let launch_file =
        packages::find_launch_file(package, file).ok_or_else(|| ParseError::LaunchFileNotFound {
            package: package.to_string(),
            file: file.to_string(),
        })?;
    Ok(launch_file.generate())
}

/// Read an XML or YAML launch file
pub fn parse_launch_file(path: &Path) -> Result<LaunchDescription> {
    match LaunchFormat::from_path(path) {
        Some(LaunchFormat::Xml) => xml::parse_xml_file(path),
        Some(LaunchFormat::Yaml) => yaml::parse_yaml_file(path),
        None => Err(ParseError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Render a description in the given frontend syntax
pub fn render_launch_file(
    description: &LaunchDescription,
    format: LaunchFormat,
) -> std::result::Result<String, GenerationError> {
    match format {
        LaunchFormat::Xml => xml::to_xml_string(description),
        LaunchFormat::Yaml => yaml::to_yaml_string(description),
    }
}
