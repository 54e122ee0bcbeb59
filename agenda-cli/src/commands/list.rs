use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label};

pub fn run() -> Result<()> {
    let store = super::open_store()?;
    let mut events = store.all();

    if events.is_empty() {
        println!("{}", "No events yet".dimmed());
        return Ok(());
    }

    events.sort_by_key(|ev| (ev.start_date, ev.start_time));

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for event in &events {
        if current_date != Some(event.start_date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(event.start_date).bold());
            current_date = Some(event.start_date);
        }
        println!("  {}", event.render());
    }

    Ok(())
}
