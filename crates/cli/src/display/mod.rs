pub mod formatter;

pub use formatter::{SelectorReport, format_components, print_persisted_fake, print_selector};
