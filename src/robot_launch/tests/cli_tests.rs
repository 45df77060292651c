use robot_launch::{generate_launch_description, yaml::parse_yaml_string};
use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

const PREFIX_ENV: &str = "ROBOT_LAUNCH_INSTALL_PREFIX";

/// Helper to get fixture path from crate tests directory
fn get_fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/launch")
        .join(filename)
}

fn robot_launch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_robot_launch"));
    cmd.env_remove(PREFIX_ENV).env_remove("RUST_LOG");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_unknown_launch_file_exits_with_error() {
    let output = robot_launch()
        .args(["show", "turtlesim", "multisim"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Launch file 'multisim' not found in package 'turtlesim'"),
        "unexpected stderr: {}",
        stderr
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_list_prints_every_launch_file() {
    let output = run(robot_launch().arg("list"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "circle_wall_actions_pkg circle_wall_actions.launch.py",
            "topic_publisher_pkg circle_wall.launch.py",
            "topic_publisher_pkg move_robot.launch.py",
            "tracking_robot_pkg tracking_robot.launch.py",
        ]
    );
}

#[test]
fn test_export_yaml_to_stdout() {
    let output = run(robot_launch().args([
        "export",
        "topic_publisher_pkg",
        "move_robot",
        "--format",
        "yaml",
    ]));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed = parse_yaml_string(&stdout).unwrap();
    let built = generate_launch_description("topic_publisher_pkg", "move_robot").unwrap();
    assert_eq!(parsed, built);
}

#[test]
fn test_export_xml_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("circle_wall.launch.xml");

    let output = run(robot_launch()
        .args(["export", "topic_publisher_pkg", "circle_wall.launch.py", "-o"])
        .arg(&path));
    assert!(output.stdout.is_empty());

    let parsed = robot_launch::parse_launch_file(&path).unwrap();
    let built = generate_launch_description("topic_publisher_pkg", "circle_wall").unwrap();
    assert_eq!(parsed, built);
}

#[test]
fn test_record_uses_install_prefix_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");

    run(robot_launch()
        .env(PREFIX_ENV, "/home/robot/ros2_ws/install")
        .args(["record", "topic_publisher_pkg", "move_robot", "-o"])
        .arg(&path));

    let json = read_json(&path);
    let nodes = json["node"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(
        nodes[0]["cmd"][0],
        "/home/robot/ros2_ws/install/lib/ros_ign_bridge/parameter_bridge"
    );
    assert_eq!(
        nodes[2]["cmd"][0],
        "/home/robot/ros2_ws/install/lib/topic_publisher_pkg/move_robot"
    );
}

#[test]
fn test_record_flag_overrides_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");

    run(robot_launch()
        .env(PREFIX_ENV, "/from/env")
        .args([
            "record",
            "tracking_robot_pkg",
            "tracking_robot",
            "--install-prefix",
            "/from/flag",
            "-o",
        ])
        .arg(&path));

    let json = read_json(&path);
    assert_eq!(
        json["node"][0]["cmd"][0],
        "/from/flag/lib/tracking_robot_pkg/tracking_robot_client"
    );
}

#[test]
fn test_record_defaults_to_humble_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");

    run(robot_launch()
        .args(["record", "tracking_robot_pkg", "tracking_robot", "-o"])
        .arg(&path));

    let json = read_json(&path);
    assert_eq!(
        json["node"][0]["cmd"][0],
        "/opt/ros/humble/lib/tracking_robot_pkg/tracking_robot_client"
    );
}

#[test]
fn test_record_written_to_default_path() {
    let dir = tempfile::tempdir().unwrap();

    run(robot_launch()
        .current_dir(dir.path())
        .args(["record", "circle_wall_actions_pkg", "circle_wall_actions"]));

    let json = read_json(&dir.path().join("record.json"));
    assert_eq!(json["node"].as_array().unwrap().len(), 5);
}

#[test]
fn test_file_writes_record_from_xml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");

    run(robot_launch()
        .arg("file")
        .arg(get_fixture_path("tracking_robot_sim.launch.xml"))
        .arg("-o")
        .arg(&path));

    let json = read_json(&path);
    let nodes = json["node"].as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[1]["name"], "tracker");
    assert_eq!(nodes[1]["exec_name"], "tracking_robot_client-1");
}

#[test]
fn test_file_with_unsupported_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let launch = dir.path().join("robot.launch.py");
    std::fs::write(&launch, "from launch import LaunchDescription\n").unwrap();

    let output = robot_launch()
        .arg("file")
        .arg(&launch)
        .arg("-o")
        .arg(dir.path().join("record.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Unsupported launch file format"));
    assert!(!dir.path().join("record.json").exists());
}
