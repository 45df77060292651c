//! robot_launch CLI

use clap::{Parser, Subcommand, ValueEnum};
use robot_launch::{
    generate_launch_description, packages, parse_launch_file, record::DEFAULT_INSTALL_PREFIX,
    render_launch_file, CommandGenerator, GeneratorConfig, LaunchDescription, LaunchFormat,
};
use std::{
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "robot_launch")]
#[command(about = "Launch descriptions for the Ignition/Gazebo robot workspaces", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the shipped launch files
    List,

    /// Print the processes a launch file declares
    Show {
        /// Package name
        package: String,

        /// Launch file name
        file: String,
    },

    /// Print the topics relayed by a launch file's bridges
    Topics {
        /// Package name
        package: String,

        /// Launch file name
        file: String,
    },

    /// Write a launch file in a ROS 2 frontend syntax
    Export {
        /// Package name
        package: String,

        /// Launch file name
        file: String,

        #[arg(long, value_enum, default_value_t = Format::Xml)]
        format: Format,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate record.json for a shipped launch file
    Record {
        /// Package name
        package: String,

        /// Launch file name
        file: String,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,

        #[arg(long, env = "ROBOT_LAUNCH_INSTALL_PREFIX", default_value = DEFAULT_INSTALL_PREFIX)]
        install_prefix: String,
    },

    /// Generate record.json from an XML or YAML launch file
    File {
        /// Launch file path
        path: PathBuf,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,

        #[arg(long, env = "ROBOT_LAUNCH_INSTALL_PREFIX", default_value = DEFAULT_INSTALL_PREFIX)]
        install_prefix: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Xml,
    Yaml,
}

impl From<Format> for LaunchFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Xml => LaunchFormat::Xml,
            Format::Yaml => LaunchFormat::Yaml,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::List => {
            list();
            Ok(())
        }
        Commands::Show { package, file } => show(&package, &file),
        Commands::Topics { package, file } => topics(&package, &file),
        Commands::Export {
            package,
            file,
            format,
            output,
        } => export(&package, &file, format.into(), output.as_deref()),
        Commands::Record {
            package,
            file,
            output,
            install_prefix,
        } => {
            log::info!("Generating record for {} from package {}", file, package);
            generate_launch_description(&package, &file)
                .map_err(Into::into)
                .and_then(|d| write_record(&d, install_prefix, &output))
        }
        Commands::File {
            path,
            output,
            install_prefix,
        } => {
            log::info!("Parsing launch file: {}", path.display());
            parse_launch_file(&path)
                .map_err(Into::into)
                .and_then(|d| write_record(&d, install_prefix, &output))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn list() {
    for launch_file in packages::launch_files() {
        println!("{} {}", launch_file.package, launch_file.file_name());
    }
}

fn show(package: &str, file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let description = generate_launch_description(package, file)?;
    for (index, node) in description.iter().enumerate() {
        let output = node.output.map(|o| o.as_str()).unwrap_or("-");
        println!(
            "{:>2}  {}/{}  output={}{}  {}",
            index + 1,
            node.package,
            node.executable,
            output,
            if node.emulate_tty { " tty" } else { "" },
            node.arguments.join(" ")
        );
    }
    Ok(())
}

fn topics(package: &str, file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let description = generate_launch_description(package, file)?;
    for bridge in description.bridge_arguments() {
        match &bridge.remap {
            Ok(remap) => println!(
                "{}  {} {} {}  ({})",
                remap.topic,
                remap.ros_type,
                remap.direction.arrow(),
                remap.gz_type,
                bridge.node.package
            ),
            Err(e) => log::warn!("Action #{}: {}", bridge.action_index + 1, e),
        }
    }
    Ok(())
}

fn export(
    package: &str,
    file: &str,
    format: LaunchFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let description = generate_launch_description(package, file)?;
    let rendered = render_launch_file(&description, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            log::info!("Wrote launch file: {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn write_record(
    description: &LaunchDescription,
    install_prefix: String,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    description.validate()?;

    let config = GeneratorConfig { install_prefix };
    let record = CommandGenerator::generate_record(description, &config);

    let json = record.to_json()?;
    std::fs::write(output, json)?;

    log::info!("Generated record.json: {}", output.display());
    log::info!("  {} nodes", record.node.len());

    Ok(())
}
