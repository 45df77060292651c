//! Action module

pub mod node;

pub use node::{split_args, NodeAction, OutputMode};
