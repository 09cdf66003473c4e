use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{SelectorArgs, generate_command, init_command, selector_command};

#[derive(Parser, Debug)]
#[command(name = "fakesmith")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fake for the protocol declared in a file
    #[command(visible_alias = "g")]
    Generate {
        /// Objective-C file containing the protocol
        file: String,

        /// Only read these lines (1-based, inclusive), e.g. 12:30
        #[arg(short, long)]
        lines: Option<String>,

        /// Directory for the generated files (overrides the config)
        #[arg(short, long)]
        out: Option<String>,

        /// Overwrite existing fake files
        #[arg(short, long)]
        force: bool,
    },
    /// Show or edit the method selector declared at a line
    #[command(visible_alias = "s")]
    Selector {
        /// Objective-C file with a line number (e.g., Greeter.h:12)
        location: String,

        /// Delete the component at INDEX
        #[arg(long, value_name = "INDEX", group = "edit")]
        delete: Option<usize>,

        /// Insert an empty component at INDEX
        #[arg(long, value_name = "INDEX", group = "edit")]
        insert: Option<usize>,

        /// Swap the components at two indices
        #[arg(long, num_args = 2, value_names = ["INDEX", "OTHER"], group = "edit")]
        swap: Option<Vec<usize>>,

        /// Give the component at INDEX a new keyword
        #[arg(long, num_args = 2, value_names = ["INDEX", "KEYWORD"], group = "edit")]
        rename: Option<Vec<String>>,

        /// Write the edited declaration back to the file
        #[arg(short, long)]
        write: bool,

        /// Print the selector model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Initialize fakesmith configuration
    Init {
        /// Specify the current working directory
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Generate {
                file,
                lines,
                out,
                force,
            } => generate_command(&file, lines.as_deref(), out.as_deref(), force),
            Commands::Selector {
                location,
                delete,
                insert,
                swap,
                rename,
                write,
                json,
            } => selector_command(SelectorArgs {
                location,
                delete,
                insert,
                swap,
                rename,
                write,
                json,
            }),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
