use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use tracing::info;

use fakesmith_core::Config;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    // Determine the project root
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(".fakesmith.json");
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote default config to {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Fakes are written to `fakes/` next to the protocol's file.");
    println!("   Edit the 'output' section to change that, and 'fake' to rename classes.");

    Ok(())
}
