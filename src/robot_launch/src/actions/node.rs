//! Node action implementation

use crate::{
    error::{ParseError, Result},
    remap::BRIDGE_EXECUTABLE,
    xml::{Entity, EntityExt, XmlEntity},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Where the launch runner sends a process's stdout and stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Screen,
    Log,
    Both,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Screen => "screen",
            OutputMode::Log => "log",
            OutputMode::Both => "both",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "screen" => Ok(OutputMode::Screen),
            "log" => Ok(OutputMode::Log),
            "both" => Ok(OutputMode::Both),
            other => Err(format!("unknown output mode '{}'", other)),
        }
    }
}

/// One ROS 2 node to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAction {
    pub package: String,
    pub executable: String,
    pub name: Option<String>,
    pub namespace: Option<String>,
    /// Passed to the executable verbatim, in order, before `--ros-args`
    pub arguments: Vec<String>,
    /// `None` leaves the choice to the launch runner
    pub output: Option<OutputMode>,
    pub emulate_tty: bool,
}

impl NodeAction {
    pub fn new(package: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            executable: executable.into(),
            name: None,
            namespace: None,
            arguments: Vec::new(),
            output: None,
            emulate_tty: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = Some(output);
        self
    }

    pub fn emulate_tty(mut self, emulate_tty: bool) -> Self {
        self.emulate_tty = emulate_tty;
        self
    }

    /// True for the bridge relay processes, whose arguments are remap expressions
    pub fn is_bridge(&self) -> bool {
        self.executable == BRIDGE_EXECUTABLE
    }

    pub fn from_entity(entity: &XmlEntity) -> Result<Self> {
        let package =
            entity
                .get_attr_str("pkg", true)?
                .ok_or_else(|| ParseError::MissingAttribute {
                    element: "node".to_string(),
                    attribute: "pkg".to_string(),
                })?;

        let executable =
            entity
                .get_attr_str("exec", true)?
                .ok_or_else(|| ParseError::MissingAttribute {
                    element: "node".to_string(),
                    attribute: "exec".to_string(),
                })?;

        // `ros_namespace` is the older spelling accepted by launch_ros
        let namespace = match entity.get_attr_str("namespace", true)? {
            Some(ns) => Some(ns),
            None => entity.get_attr_str("ros_namespace", true)?,
        };

        let arguments = entity
            .get_attr_str("args", true)?
            .map(|args| split_args(&args))
            .unwrap_or_default();

        if let Some(child) = entity.children().next() {
            return Err(ParseError::UnexpectedElement {
                parent: "node".to_string(),
                child: child.type_name().to_string(),
            });
        }

        Ok(Self {
            package,
            executable,
            name: entity.get_attr_str("name", true)?,
            namespace,
            arguments,
            output: entity.get_attr("output", true)?,
            emulate_tty: entity
                .get_attr_str("emulate_tty", true)?
                .map(|value| parse_bool("emulate_tty", &value))
                .transpose()?
                .unwrap_or(false),
        })
    }
}

/// Read a boolean attribute the way the launch frontends do, which accept
/// both `true` and `True`
fn parse_bool(attribute: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "True" => Ok(true),
        "false" | "False" => Ok(false),
        _ => Err(ParseError::TypeCoercion {
            attribute: attribute.to_string(),
            value: value.to_string(),
            expected_type: "bool",
        }),
    }
}

/// Split a frontend `args` string into individual arguments
pub fn split_args(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<NodeAction> {
        let doc = roxmltree::Document::parse(xml).unwrap();
        let entity = XmlEntity::new(doc.root_element());
        NodeAction::from_entity(&entity)
    }

    #[test]
    fn test_builder_defaults() {
        let node = NodeAction::new("topic_publisher_pkg", "move_robot");
        assert_eq!(node.package, "topic_publisher_pkg");
        assert_eq!(node.executable, "move_robot");
        assert!(node.arguments.is_empty());
        assert_eq!(node.output, None);
        assert!(!node.emulate_tty);
        assert!(!node.is_bridge());
    }

    #[test]
    fn test_builder_keeps_argument_order() {
        let node = NodeAction::new("ros_gz_bridge", "parameter_bridge")
            .argument("/a@std_msgs/msg/Bool@ignition.msgs.Boolean")
            .arguments(["--ros-args", "-p", "x:=1"]);
        assert_eq!(
            node.arguments,
            vec![
                "/a@std_msgs/msg/Bool@ignition.msgs.Boolean",
                "--ros-args",
                "-p",
                "x:=1"
            ]
        );
        assert!(node.is_bridge());
    }

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("screen".parse::<OutputMode>(), Ok(OutputMode::Screen));
        assert_eq!("log".parse::<OutputMode>(), Ok(OutputMode::Log));
        assert_eq!("both".parse::<OutputMode>(), Ok(OutputMode::Both));
        assert!("Screen".parse::<OutputMode>().is_err());
        assert_eq!(OutputMode::Both.to_string(), "both");
    }

    #[test]
    fn test_parse_simple_node() {
        let node = parse(r#"<node pkg="topic_publisher_pkg" exec="circle_wall" />"#).unwrap();
        assert_eq!(node, NodeAction::new("topic_publisher_pkg", "circle_wall"));
    }

    #[test]
    fn test_parse_node_with_all_attributes() {
        let node = parse(
            r#"<node pkg="tracking_robot_pkg" exec="tracking_robot_client"
                     name="tracker" namespace="/robot" output="screen" emulate_tty="true" />"#,
        )
        .unwrap();
        assert_eq!(node.name.as_deref(), Some("tracker"));
        assert_eq!(node.namespace.as_deref(), Some("/robot"));
        assert_eq!(node.output, Some(OutputMode::Screen));
        assert!(node.emulate_tty);
    }

    #[test]
    fn test_parse_node_args_split_on_whitespace() {
        let node = parse(
            r#"<node pkg="ros_ign_bridge" exec="parameter_bridge"
                     args="/cmd_vel@geometry_msgs/msg/Twist@ignition.msgs.Twist
                           /lidar@sensor_msgs/msg/LaserScan@ignition.msgs.LaserScan" />"#,
        )
        .unwrap();
        assert_eq!(node.arguments.len(), 2);
        assert_eq!(
            node.arguments[1],
            "/lidar@sensor_msgs/msg/LaserScan@ignition.msgs.LaserScan"
        );
    }

    #[test]
    fn test_parse_node_capitalized_bool() {
        let node = parse(r#"<node pkg="a" exec="b" emulate_tty="True" />"#).unwrap();
        assert!(node.emulate_tty);
        let node = parse(r#"<node pkg="a" exec="b" emulate_tty="False" />"#).unwrap();
        assert!(!node.emulate_tty);
    }

    #[test]
    fn test_parse_node_invalid_bool() {
        let err = parse(r#"<node pkg="a" exec="b" emulate_tty="TRUE" />"#).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TypeCoercion { ref attribute, .. } if attribute == "emulate_tty"
        ));
    }

    #[test]
    fn test_parse_node_ros_namespace_alias() {
        let node = parse(r#"<node pkg="a" exec="b" ros_namespace="/ns" />"#).unwrap();
        assert_eq!(node.namespace.as_deref(), Some("/ns"));
    }

    #[test]
    fn test_parse_node_missing_pkg() {
        let err = parse(r#"<node exec="move_robot" />"#).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingAttribute { ref attribute, .. } if attribute == "pkg"
        ));
    }

    #[test]
    fn test_parse_node_invalid_output() {
        let err = parse(r#"<node pkg="a" exec="b" output="terminal" />"#).unwrap_err();
        assert!(matches!(err, ParseError::TypeCoercion { .. }));
    }

    #[test]
    fn test_parse_node_rejects_children() {
        let err = parse(r#"<node pkg="a" exec="b"><param name="x" value="1" /></node>"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedElement { ref child, .. } if child == "param"
        ));
    }
}
