//! circle_wall_actions_pkg launch files

use super::bridge;
use crate::{
    actions::{NodeAction, OutputMode},
    description::LaunchDescription,
};

/// `circle_wall_actions.launch.py`: three topic bridges, then the action
/// client and server.
///
/// The bridges are split across `ros_gz_bridge` and `ros_ign_bridge` exactly
/// as declared; both packages install a `parameter_bridge`.
pub fn circle_wall_actions() -> LaunchDescription {
    LaunchDescription::new(vec![
        bridge(
            "ros_gz_bridge",
            "/cmd_vel@geometry_msgs/msg/Twist@ignition.msgs.Twist",
        ),
        bridge(
            "ros_ign_bridge",
            "/lidar@sensor_msgs/msg/LaserScan@ignition.msgs.LaserScan",
        ),
        bridge(
            "ros_gz_bridge",
            "/wall/touched@std_msgs/msg/Bool@ignition.msgs.Boolean",
        ),
        NodeAction::new("circle_wall_actions_pkg", "circle_wall_client")
            .output(OutputMode::Screen),
        NodeAction::new("circle_wall_actions_pkg", "circle_wall_server")
            .output(OutputMode::Screen),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_packages_in_order() {
        let packages: Vec<_> = circle_wall_actions()
            .iter()
            .filter(|n| n.is_bridge())
            .map(|n| n.package.clone())
            .collect();
        assert_eq!(packages, vec!["ros_gz_bridge", "ros_ign_bridge", "ros_gz_bridge"]);
    }

    #[test]
    fn test_client_before_server() {
        let description = circle_wall_actions();
        let executables: Vec<_> = description
            .iter()
            .skip(3)
            .map(|n| n.executable.as_str())
            .collect();
        assert_eq!(executables, vec!["circle_wall_client", "circle_wall_server"]);
    }

    #[test]
    fn test_every_bridge_argument_is_well_formed() {
        let description = circle_wall_actions();
        let arguments = description.bridge_arguments();
        assert_eq!(arguments.len(), 3);
        assert!(arguments.iter().all(|a| a.remap.is_ok()));
    }
}
