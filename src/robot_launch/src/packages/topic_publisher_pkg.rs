//! topic_publisher_pkg launch files
//!
//! Both descriptions bridge `/cmd_vel` and `/lidar` through `ros_ign_bridge`
//! and start one publisher node.

use super::bridge;
use crate::{
    actions::{NodeAction, OutputMode},
    description::LaunchDescription,
};

/// `move_robot.launch.py`
///
/// The lidar bridge names the interface package `snesor_msgs`. This is kept
/// as declared; the bridge reports it when it fails to resolve the type.
pub fn move_robot() -> LaunchDescription {
    LaunchDescription::new(vec![
        bridge(
            "ros_ign_bridge",
            "/cmd_vel@geometry_msgs/msg/Twist@ignition.msgs.Twist",
        ),
        bridge(
            "ros_ign_bridge",
            "/lidar@snesor_msgs/msg/LaserScan@ignition.msgs.LaserScan",
        ),
        NodeAction::new("topic_publisher_pkg", "move_robot").output(OutputMode::Screen),
    ])
}

/// `circle_wall.launch.py`
pub fn circle_wall() -> LaunchDescription {
    LaunchDescription::new(vec![
        bridge(
            "ros_ign_bridge",
            "/cmd_vel@geometry_msgs/msg/Twist@ignition.msgs.Twist",
        ),
        bridge(
            "ros_ign_bridge",
            "/lidar@sensor_msgs/msg/LaserScan@ignition.msgs.LaserScan",
        ),
        NodeAction::new("topic_publisher_pkg", "circle_wall").output(OutputMode::Screen),
    ])
}
