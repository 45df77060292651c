//! tracking_robot_pkg launch files

use crate::{
    actions::{NodeAction, OutputMode},
    description::LaunchDescription,
};

/// `tracking_robot.launch.py`: the tracking action client alone
pub fn tracking_robot() -> LaunchDescription {
    LaunchDescription::new(vec![NodeAction::new(
        "tracking_robot_pkg",
        "tracking_robot_client",
    )
    .output(OutputMode::Screen)
    .emulate_tty(true)])
}
