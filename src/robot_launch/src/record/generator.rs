//! Command-line and record generation

use crate::{
    actions::NodeAction,
    description::LaunchDescription,
    record::types::{NodeRecord, RecordJson},
};
use std::collections::HashMap;

pub const DEFAULT_INSTALL_PREFIX: &str = "/opt/ros/humble";

/// Settings for resolving executables into command lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Install prefix holding `lib/<package>/<executable>`
    pub install_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            install_prefix: DEFAULT_INSTALL_PREFIX.to_string(),
        }
    }
}

pub struct CommandGenerator;

impl CommandGenerator {
    pub fn generate_record(description: &LaunchDescription, config: &GeneratorConfig) -> RecordJson {
        // Processes are named `<executable>-<n>`, counted per executable
        let mut counters: HashMap<&str, usize> = HashMap::new();

        let node = description
            .iter()
            .map(|action| {
                let count = counters.entry(action.executable.as_str()).or_insert(0);
                *count += 1;
                let exec_name = format!("{}-{}", action.executable, count);
                Self::generate_node_record(action, exec_name, config)
            })
            .collect();

        RecordJson { node }
    }

    pub fn generate_node_record(
        node: &NodeAction,
        exec_name: String,
        config: &GeneratorConfig,
    ) -> NodeRecord {
        log::debug!(
            "Generating record for {}/{} ({})",
            node.package,
            node.executable,
            exec_name
        );

        NodeRecord {
            executable: node.executable.clone(),
            package: Some(node.package.clone()),
            name: Some(Self::node_name(node).to_string()),
            namespace: Some(Self::node_namespace(node).to_string()),
            exec_name: Some(exec_name),
            args: if node.arguments.is_empty() {
                None
            } else {
                Some(node.arguments.clone())
            },
            cmd: Self::generate_node_command(node, config),
            output: node.output,
            emulate_tty: node.emulate_tty,
        }
    }

    pub fn generate_node_command(node: &NodeAction, config: &GeneratorConfig) -> Vec<String> {
        // 1. Executable path
        let mut cmd = vec![Self::resolve_executable_path(
            &config.install_prefix,
            &node.package,
            &node.executable,
        )];

        // 2. User arguments, verbatim
        cmd.extend(node.arguments.iter().cloned());

        // 3. ROS args: node name and namespace
        cmd.push("--ros-args".to_string());
        cmd.push("-r".to_string());
        cmd.push(format!("__node:={}", Self::node_name(node)));
        cmd.push("-r".to_string());
        cmd.push(format!("__ns:={}", Self::node_namespace(node)));

        cmd
    }

    fn node_name(node: &NodeAction) -> &str {
        node.name.as_deref().unwrap_or(&node.executable)
    }

    fn node_namespace(node: &NodeAction) -> &str {
        node.namespace.as_deref().unwrap_or("/")
    }

    fn resolve_executable_path(prefix: &str, package: &str, executable: &str) -> String {
        format!(
            "{}/lib/{}/{}",
            prefix.trim_end_matches('/'),
            package,
            executable
        )
    }
}
