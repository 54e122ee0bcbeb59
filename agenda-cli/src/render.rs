//! Colored terminal rendering for agenda types.

use agenda_core::event::EventRecord;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Rgb};

/// Extension trait for colored rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let time = match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
            }
            (Some(start), None) => start.format("%H:%M").to_string(),
            _ => "all-day".to_string(),
        };

        let mut line = format!("{} {}", format!("{:>11}", time).dimmed(), self.title);

        if let Some(location) = &self.location {
            line.push_str(&format!(" {}", format!("@ {}", location).dimmed()));
        }
        if self.start_date != self.end_date {
            line.push_str(&format!(" {}", format!("(until {})", self.end_date).dimmed()));
        }
        if self.repeat.is_repeating() {
            line.push_str(&format!(" {}", format!("[{}]", self.repeat).dimmed()));
        }

        line
    }
}

/// Human date label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: NaiveDate) -> String {
    let today = chrono::Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Parse a palette "#RRGGBB" value for terminal use.
pub fn hex_color(hex: &str) -> Rgb {
    let hex = hex.trim_start_matches('#');
    let byte = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    Rgb(byte(0), byte(2), byte(4))
}
