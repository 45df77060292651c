//! Error types for robot_launch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("XML parsing error: {0}")]
    XmlError(#[from] roxmltree::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Missing required attribute '{attribute}' on element '<{element}>'")]
    MissingAttribute { element: String, attribute: String },

    #[error("Type coercion failed for attribute '{attribute}' with value '{value}' (expected {expected_type})")]
    TypeCoercion {
        attribute: String,
        value: String,
        expected_type: &'static str,
    },

    #[error("Unexpected element '<{child}>' in '<{parent}>'")]
    UnexpectedElement { parent: String, child: String },

    #[error("Expected root element '<launch>', found '<{0}>'")]
    UnexpectedRoot(String),

    #[error("Launch file '{file}' not found in package '{package}'")]
    LaunchFileNotFound { package: String, file: String },

    #[error("Unsupported launch file format: {0} (expected .xml, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Action #{index} has an empty {field} identifier")]
    EmptyIdentifier { index: usize, field: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemapError {
    #[error("Remap argument '{0}' has no '@' after the topic name")]
    MissingTopicDelimiter(String),

    #[error("Remap argument '{0}' has no '@', '[' or ']' between the message types")]
    MissingTypeDelimiter(String),

    #[error("Remap argument '{argument}' has an empty {field}")]
    EmptyField {
        argument: String,
        field: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Argument '{0}' cannot be written to a launch file verbatim")]
    UnrepresentableArgument(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;
