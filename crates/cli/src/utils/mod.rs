pub mod file;
pub mod parser;

pub use file::line_content_offset;
pub use parser::{parse_filepath_with_line, parse_line_range};
