/// Byte offset of the first non-blank character on 0-based `line`, or
/// `None` when the line is blank or past the end
pub fn line_content_offset(source: &str, line: usize) -> Option<usize> {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index == line {
            let indent = text.len() - text.trim_start().len();
            if text.trim().is_empty() {
                return None;
            }
            return Some(offset + indent);
        }
        offset += text.len();
    }
    None
}
