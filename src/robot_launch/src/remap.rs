//! Bridge remap expressions
//!
//! The bridge executable takes one positional argument per bridged topic:
//!
//! ```text
//! <topic>@<ros message type><delimiter><gazebo message type>
//! ```
//!
//! where the delimiter selects the relay direction: `@` for both ways, `[`
//! for Gazebo to ROS only and `]` for ROS to Gazebo only. Launch descriptions
//! keep these arguments as opaque strings; [`BridgeRemap`] is a read-only view
//! used for reporting.

use crate::error::RemapError;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Executable name shared by the `ros_ign_bridge` and `ros_gz_bridge` packages
pub const BRIDGE_EXECUTABLE: &str = "parameter_bridge";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeDirection {
    Bidirectional,
    GzToRos,
    RosToGz,
}

impl BridgeDirection {
    fn from_delimiter(c: char) -> Option<Self> {
        match c {
            '@' => Some(BridgeDirection::Bidirectional),
            '[' => Some(BridgeDirection::GzToRos),
            ']' => Some(BridgeDirection::RosToGz),
            _ => None,
        }
    }

    pub fn delimiter(&self) -> char {
        match self {
            BridgeDirection::Bidirectional => '@',
            BridgeDirection::GzToRos => '[',
            BridgeDirection::RosToGz => ']',
        }
    }

    /// Arrow used in human-readable tables
    pub fn arrow(&self) -> &'static str {
        match self {
            BridgeDirection::Bidirectional => "<->",
            BridgeDirection::GzToRos => "<-",
            BridgeDirection::RosToGz => "->",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeRemap {
    pub topic: String,
    pub ros_type: String,
    pub gz_type: String,
    pub direction: BridgeDirection,
}

impl BridgeRemap {
    pub fn new(
        topic: impl Into<String>,
        ros_type: impl Into<String>,
        gz_type: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            ros_type: ros_type.into(),
            gz_type: gz_type.into(),
            direction: BridgeDirection::Bidirectional,
        }
    }

    pub fn with_direction(mut self, direction: BridgeDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Interface package of the ROS side, e.g. `sensor_msgs`
    pub fn ros_package(&self) -> &str {
        self.ros_type.split('/').next().unwrap_or_default()
    }

    /// Encode back into the bridge's argument syntax
    pub fn to_argument(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BridgeRemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}{}{}",
            self.topic,
            self.ros_type,
            self.direction.delimiter(),
            self.gz_type
        )
    }
}

impl FromStr for BridgeRemap {
    type Err = RemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (topic, types) = s
            .split_once('@')
            .ok_or_else(|| RemapError::MissingTopicDelimiter(s.to_string()))?;

        let split = types
            .char_indices()
            .find_map(|(i, c)| BridgeDirection::from_delimiter(c).map(|d| (i, d)));
        let (index, direction) =
            split.ok_or_else(|| RemapError::MissingTypeDelimiter(s.to_string()))?;
        let ros_type = &types[..index];
        let gz_type = &types[index + 1..];

        for (field, value) in [
            ("topic", topic),
            ("ROS message type", ros_type),
            ("Gazebo message type", gz_type),
        ] {
            if value.is_empty() {
                return Err(RemapError::EmptyField {
                    argument: s.to_string(),
                    field,
                });
            }
        }

        Ok(Self {
            topic: topic.to_string(),
            ros_type: ros_type.to_string(),
            gz_type: gz_type.to_string(),
            direction,
        })
    }
}
