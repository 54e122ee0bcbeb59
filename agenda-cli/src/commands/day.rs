use agenda_core::parse::parse_date;
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label};

pub fn run(date: Option<String>) -> Result<()> {
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => Local::now().date_naive(),
    };

    let store = super::open_store()?;
    let mut events = store.on_date(date);
    events.sort_by_key(|ev| ev.start_time);

    if events.is_empty() {
        println!("{}", "No events on this day".dimmed());
        return Ok(());
    }

    println!("{}", format_date_label(date).bold());
    for event in &events {
        println!("  {}", event.render());
    }

    Ok(())
}
