//! Launch descriptions shipped with the robot workspaces
//!
//! Each submodule mirrors one ROS 2 package and exposes one builder per
//! launch file. Builders take no input and always return the same list.

pub mod circle_wall_actions_pkg;
pub mod topic_publisher_pkg;
pub mod tracking_robot_pkg;

use crate::{actions::NodeAction, description::LaunchDescription, remap::BRIDGE_EXECUTABLE};

/// Suffix of the Python launch file names
pub const LAUNCH_FILE_SUFFIX: &str = ".launch.py";

/// A launch file known to this crate
#[derive(Debug, Clone, Copy)]
pub struct LaunchFile {
    pub package: &'static str,
    /// File name without the `.launch.py` suffix
    pub name: &'static str,
    build: fn() -> LaunchDescription,
}

impl LaunchFile {
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name, LAUNCH_FILE_SUFFIX)
    }

    pub fn generate(&self) -> LaunchDescription {
        (self.build)()
    }
}

static LAUNCH_FILES: &[LaunchFile] = &[
    LaunchFile {
        package: "circle_wall_actions_pkg",
        name: "circle_wall_actions",
        build: circle_wall_actions_pkg::circle_wall_actions,
    },
    LaunchFile {
        package: "topic_publisher_pkg",
        name: "circle_wall",
        build: topic_publisher_pkg::circle_wall,
    },
    LaunchFile {
        package: "topic_publisher_pkg",
        name: "move_robot",
        build: topic_publisher_pkg::move_robot,
    },
    LaunchFile {
        package: "tracking_robot_pkg",
        name: "tracking_robot",
        build: tracking_robot_pkg::tracking_robot,
    },
];

/// All shipped launch files, sorted by package then file name
pub fn launch_files() -> &'static [LaunchFile] {
    LAUNCH_FILES
}

/// Look up a launch file; `file` may carry the `.launch.py` suffix or not
pub fn find_launch_file(package: &str, file: &str) -> Option<&'static LaunchFile> {
    let name = file.strip_suffix(LAUNCH_FILE_SUFFIX).unwrap_or(file);
    LAUNCH_FILES
        .iter()
        .find(|f| f.package == package && f.name == name)
}

/// A bridge process relaying a single topic
fn bridge(package: &str, remap: &str) -> NodeAction {
    NodeAction::new(package, BRIDGE_EXECUTABLE).argument(remap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted() {
        let keys: Vec<_> = launch_files().iter().map(|f| (f.package, f.name)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_find_with_and_without_suffix() {
        let a = find_launch_file("topic_publisher_pkg", "move_robot").unwrap();
        let b = find_launch_file("topic_publisher_pkg", "move_robot.launch.py").unwrap();
        assert_eq!(a.file_name(), "move_robot.launch.py");
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_find_requires_matching_package() {
        assert!(find_launch_file("tracking_robot_pkg", "move_robot").is_none());
        assert!(find_launch_file("topic_publisher_pkg", "move_robot.launch.xml").is_none());
    }
}
