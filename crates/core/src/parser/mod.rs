//! Objective-C source segmentation using tree-sitter

pub mod protocol_detector;
pub mod protocol_parser;
pub mod utils;

// Re-export commonly used items
pub use protocol_parser::ProtocolParser;
pub use utils::{first_identifier_text, node_to_range};
