use agenda_core::config::AgendaConfig;
use agenda_core::storage::FileStore;
use agenda_core::theme::Theme;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::hex_color;

pub fn run(name: Option<String>) -> Result<()> {
    let config = AgendaConfig::load()?;
    let mut backend = FileStore::new(config.data_path());

    match name {
        Some(name) => {
            let theme: Theme = name.parse()?;
            theme.store(&mut backend)?;
            println!("{}", format!("Theme set to {}", theme).green());
        }
        None => {
            let current = Theme::load(&backend);

            println!("{}", "Themes".bold());
            for theme in Theme::ALL {
                let palette = theme.palette();
                let swatch: String = [
                    palette.primary_1,
                    palette.primary_2,
                    palette.primary_3,
                    palette.primary_4,
                    palette.primary_5,
                ]
                .iter()
                .map(|hex| "■".color(hex_color(hex)).to_string())
                .collect();

                let marker = if theme == current { "*" } else { " " };
                println!(" {} {:<8} {}", marker, theme.to_string(), swatch);
            }
        }
    }

    Ok(())
}
