use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(query: &str) -> Result<()> {
    let store = super::open_store()?;
    let mut results = store.search(query);

    if results.is_empty() {
        println!("{}", format!("No events matching \"{}\"", query).dimmed());
        return Ok(());
    }

    results.sort_by_key(|ev| (ev.start_date, ev.start_time));

    for event in &results {
        println!("  {} {}", event.start_date.to_string().dimmed(), event.render());
    }

    Ok(())
}
