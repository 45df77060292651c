//! Record module for generating record.json

pub mod generator;
pub mod types;

pub use generator::{CommandGenerator, GeneratorConfig, DEFAULT_INSTALL_PREFIX};
pub use types::{NodeRecord, RecordJson};
