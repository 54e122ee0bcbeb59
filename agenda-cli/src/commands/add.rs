use std::collections::HashSet;

use agenda_core::error::AgendaError;
use agenda_core::event::{EventTemplate, ICON_CHOICES, Repeat};
use agenda_core::parse::{parse_date, parse_exclude_weekdays, parse_time};
use agenda_core::recurrence::expand_series;
use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use dialoguer::Input;
use owo_colors::OwoColorize;

#[allow(clippy::too_many_arguments)]
pub fn run(
    title: String,
    start: String,
    end: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    location: Option<String>,
    icon: String,
    repeat: String,
    until: Option<String>,
    exclude: Option<String>,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(AgendaError::EmptyTitle.into());
    }

    let base_start = parse_date(&start)?;
    let base_end = match &end {
        Some(e) => parse_date(e)?,
        None => base_start,
    };

    let start_time = start_time.as_deref().map(parse_time).transpose()?;
    let end_time = end_time.as_deref().map(parse_time).transpose()?;

    let repeat: Repeat = repeat.parse()?;

    // Icon tags are advisory, so an unknown one only gets a hint
    if !ICON_CHOICES.contains(&icon.as_str()) {
        eprintln!(
            "  {}",
            format!("Unrecognized icon '{}' (known: {})", icon, ICON_CHOICES.join(", ")).dimmed()
        );
    }

    let template = EventTemplate {
        title: title.trim().to_string(),
        location: location.filter(|l| !l.trim().is_empty()),
        icon,
    };

    if repeat == Repeat::None {
        let records = expand_series(
            &template,
            base_start,
            base_end,
            start_time,
            end_time,
            Repeat::None,
            base_end,
            &HashSet::new(),
        );

        let mut store = super::open_store()?;
        store.add_all(records);

        println!("{}", format!("Created: {}", template.title).green());
        return Ok(());
    }

    // Repeating: where the series ends, prompted like the event dialog
    let until = match until {
        Some(u) => parse_date(&u)?,
        None => prompt_until(base_end)?,
    };

    if until < base_start {
        return Err(AgendaError::RepeatEndsBeforeStart.into());
    }

    let exclude_weekdays = match (repeat, exclude) {
        (Repeat::Daily, Some(ex)) => parse_exclude_weekdays(&ex),
        (Repeat::Daily, None) => prompt_exclusions()?,
        _ => HashSet::new(),
    };

    let occurrences = expand_series(
        &template,
        base_start,
        base_end,
        start_time,
        end_time,
        repeat,
        until,
        &exclude_weekdays,
    );

    if occurrences.is_empty() {
        return Err(AgendaError::EmptyExpansion.into());
    }

    let count = occurrences.len();
    let mut store = super::open_store()?;
    store.add_all(occurrences);

    println!(
        "{}",
        format!("Created {} occurrences of: {}", count, template.title).green()
    );
    Ok(())
}

/// Prompt for the series end date, retrying on parse errors.
fn prompt_until(default: NaiveDate) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Repeat until (YYYY-MM-DD)")
            .default(default.format("%Y-%m-%d").to_string())
            .interact_text()?;

        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for weekdays a daily series should skip. Empty means none;
/// tokens that don't name a weekday are dropped silently.
fn prompt_exclusions() -> Result<HashSet<Weekday>> {
    let input: String = Input::new()
        .with_prompt("  Skip weekdays? (\"Sun,Mon\" or 0-6, empty for none)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    Ok(parse_exclude_weekdays(&input))
}
