use anyhow::{Context, Result, bail};
use std::{env, path::PathBuf, sync::Arc};
use tracing::debug;

use fakesmith_core::{
    Config, FakeGenerator, GenerateFakeAction,
    services::{
        ConsoleAlerter, FileDocumentProxy, FileSelection, FileSystemFakePersister, TracingLogger,
    },
};

use crate::display::print_persisted_fake;
use crate::utils::parse_line_range;

pub fn generate_command(
    filepath: &str,
    lines: Option<&str>,
    out: Option<&str>,
    force: bool,
) -> Result<()> {
    let path = PathBuf::from(filepath);
    if !path.is_file() {
        bail!("No such file: {}", path.display());
    }
    let path = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve {filepath}"))?;
    let lines = lines.map(parse_line_range).transpose()?;

    let document_dir = path.parent().map(PathBuf::from).unwrap_or_default();
    let mut config = Config::discover(&document_dir)?;
    if let Some(out) = out {
        config.output.directory = env::current_dir()
            .context("Failed to get current directory")?
            .join(out);
    }
    if force {
        config.output.overwrite = true;
    }
    debug!("Generating fake for {} with {:?}", path.display(), config);

    let action = GenerateFakeAction::new(
        Arc::new(ConsoleAlerter::new()),
        Arc::new(TracingLogger::new()),
        Arc::new(FileSelection::new(&path, lines)),
        Arc::new(FileSystemFakePersister::new(config.output.overwrite)),
        Arc::new(FileDocumentProxy::new(&path, config.output.clone())),
    )
    .with_generator(FakeGenerator::new(config.fake));

    match action.safely_generate_fake_for_selected_protocol() {
        Some(persisted) => {
            print_persisted_fake(&persisted);
            Ok(())
        }
        // The alerter has already told the user what went wrong
        None => std::process::exit(1),
    }
}
