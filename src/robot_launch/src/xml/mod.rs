//! XML launch frontend

pub mod entity;
pub mod parser;
pub mod writer;

pub use entity::{Entity, EntityExt, XmlEntity};
pub use parser::{parse_xml_file, parse_xml_string};
pub use writer::to_xml_string;
