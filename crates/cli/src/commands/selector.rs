use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use tracing::debug;

use fakesmith_core::{ProtocolParser, SelectorEdit};

use crate::display::{SelectorReport, print_selector};
use crate::utils::{line_content_offset, parse_filepath_with_line};

/// Arguments of the `selector` subcommand; at most one edit is set
#[derive(Debug, Default)]
pub struct SelectorArgs {
    pub location: String,
    pub delete: Option<usize>,
    pub insert: Option<usize>,
    pub swap: Option<Vec<usize>>,
    pub rename: Option<Vec<String>>,
    pub write: bool,
    pub json: bool,
}

impl SelectorArgs {
    pub fn edit(&self) -> Result<Option<SelectorEdit>> {
        if let Some(index) = self.delete {
            return Ok(Some(SelectorEdit::Delete { index }));
        }
        if let Some(index) = self.insert {
            return Ok(Some(SelectorEdit::Insert { index }));
        }
        if let Some(indices) = &self.swap {
            let &[index, other_index] = indices.as_slice() else {
                bail!("--swap takes exactly two indices");
            };
            return Ok(Some(SelectorEdit::Swap { index, other_index }));
        }
        if let Some(values) = &self.rename {
            let [index, keyword] = &values[..] else {
                bail!("--rename takes an index and a keyword");
            };
            let index = index
                .parse()
                .with_context(|| format!("Invalid component index `{index}`"))?;
            return Ok(Some(SelectorEdit::Rename {
                index,
                keyword: keyword.clone(),
            }));
        }
        Ok(None)
    }
}

pub fn selector_command(args: SelectorArgs) -> Result<()> {
    let (filepath, line) = parse_filepath_with_line(&args.location);
    let line = line.ok_or_else(|| anyhow!("Expected FILE:LINE, got `{}`", args.location))?;
    let edit = args.edit()?;

    let source =
        fs::read_to_string(&filepath).with_context(|| format!("Failed to read {filepath}"))?;
    let offset = line_content_offset(&source, line)
        .ok_or_else(|| anyhow!("Line {} of {} is blank or past the end", line + 1, filepath))?;

    let mut parser = ProtocolParser::new()?;
    let method = parser
        .method_at(&source, offset)
        .with_context(|| format!("No method declaration at {}:{}", filepath, line + 1))?;
    debug!("Found {} at {}", method.selector.selector_string(), method.range);

    let selector = match &edit {
        Some(edit) => method
            .selector
            .apply_edit(edit)
            .with_context(|| format!("Failed to {edit}"))?,
        None => method.selector.clone(),
    };

    if args.json {
        let report = SelectorReport::new(method.kind, &selector);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_selector(method.kind, &selector);
    }

    if args.write {
        let patched = selector
            .replacement_edit(method.kind)
            .apply(&source)
            .ok_or_else(|| anyhow!("Selector range no longer fits {filepath}"))?;
        fs::write(&filepath, patched).with_context(|| format!("Failed to write {filepath}"))?;
        if !args.json {
            println!("✅ Updated {}:{}", filepath, line + 1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_from_args() {
        let args = SelectorArgs {
            swap: Some(vec![0, 1]),
            ..Default::default()
        };
        assert_eq!(
            args.edit().unwrap(),
            Some(SelectorEdit::Swap {
                index: 0,
                other_index: 1
            })
        );

        let args = SelectorArgs {
            rename: Some(vec!["1".to_string(), "years".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            args.edit().unwrap(),
            Some(SelectorEdit::Rename {
                index: 1,
                keyword: "years".to_string()
            })
        );

        assert_eq!(SelectorArgs::default().edit().unwrap(), None);
    }

    #[test]
    fn test_rename_requires_numeric_index() {
        let args = SelectorArgs {
            rename: Some(vec!["first".to_string(), "years".to_string()]),
            ..Default::default()
        };
        assert!(args.edit().is_err());
    }
}
