pub mod generate;
pub mod init;
pub mod selector;

pub use generate::generate_command;
pub use init::init_command;
pub use selector::{SelectorArgs, selector_command};
