use anyhow::{Context, Result, bail};
use fakesmith_core::services::LineRange;

pub fn parse_filepath_with_line(filepath_arg: &str) -> (String, Option<usize>) {
    if let Some(colon_pos) = filepath_arg.rfind(':') {
        let path_part = &filepath_arg[..colon_pos];
        let line_part = &filepath_arg[colon_pos + 1..];

        // Check if it's a valid line number
        if let Ok(line_num) = line_part.parse::<usize>() {
            // Convert 1-based to 0-based
            (path_part.to_string(), Some(line_num.saturating_sub(1)))
        } else {
            // Not a valid line number, treat the whole thing as a path
            (filepath_arg.to_string(), None)
        }
    } else {
        (filepath_arg.to_string(), None)
    }
}

/// Parse `START:END` (or a single `LINE`), 1-based and inclusive, into a
/// 0-based range
pub fn parse_line_range(range_arg: &str) -> Result<LineRange> {
    let (start, end) = match range_arg.split_once(':') {
        Some((start, end)) => (start, end),
        None => (range_arg, range_arg),
    };
    let start: usize = start
        .trim()
        .parse()
        .with_context(|| format!("Invalid start line in `{range_arg}`"))?;
    let end: usize = end
        .trim()
        .parse()
        .with_context(|| format!("Invalid end line in `{range_arg}`"))?;

    if start == 0 || end == 0 {
        bail!("Line numbers start at 1, got `{range_arg}`");
    }
    if start > end {
        bail!("Line range `{range_arg}` ends before it starts");
    }
    Ok(LineRange::new(start - 1, end - 1))
}
