use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use owo_colors::OwoColorize;

use crate::render::hex_color;

pub fn run(month: Option<String>) -> Result<()> {
    let first = match month {
        Some(m) => parse_month(&m)?,
        None => {
            let today = Local::now().date_naive();
            month_start(today)
        }
    };

    let store = super::open_store()?;
    let theme = super::current_theme()?;
    let dot = hex_color(theme.palette().event_dot());

    let today = Local::now().date_naive();

    println!("{}", format!("{:^28}", first.format("%B %Y").to_string()).bold());
    println!("{}", "  Su  Mo  Tu  We  Th  Fr  Sa".dimmed());

    let mut cells: Vec<String> = Vec::new();
    for _ in 0..first.weekday().num_days_from_sunday() {
        cells.push("    ".to_string());
    }

    for day in 1..=days_in_month(first) {
        let Some(date) = first.with_day(day) else {
            continue;
        };
        let marker = if store.on_date(date).is_empty() {
            " ".to_string()
        } else {
            "•".color(dot).to_string()
        };

        let number = if date == today {
            format!("{:>3}", day).bold().to_string()
        } else {
            format!("{:>3}", day)
        };
        cells.push(format!("{}{}", number, marker));
    }

    for week in cells.chunks(7) {
        println!("{}", week.concat());
    }

    Ok(())
}

/// Parse YYYY-MM into the first day of that month.
fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month '{}'. Expected YYYY-MM", s))
}

fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };

    next_month
        .map(|next| (next - first).num_days() as u32)
        .unwrap_or(31)
}
