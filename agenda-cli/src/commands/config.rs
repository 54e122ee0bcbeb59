use std::path::PathBuf;

use agenda_core::config::AgendaConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let config_path = AgendaConfig::config_path()?;
    let mut config = AgendaConfig::load()?;

    if let Some(dir) = data_dir {
        config.data_dir = dir;
        config.save()?;
        println!(
            "{}",
            format!("Data directory set to {}", config.display_path().display()).green()
        );
        return Ok(());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.display_path().display());

    Ok(())
}
