//! Parsing for user-supplied field values.
//!
//! The presentation layer hands over raw strings (dates, times, weekday
//! exclusion lists); everything here turns them into the already-parsed
//! arguments the rest of the crate works with.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime, Weekday};

use crate::error::{AgendaError, AgendaResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Parse YYYY-MM-DD into a calendar date.
pub fn parse_date(s: &str) -> AgendaResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| AgendaError::InvalidDate(s.to_string()))
}

/// Parse HH:MM into a wall-clock time.
pub fn parse_time(s: &str) -> AgendaResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| AgendaError::InvalidTime(s.to_string()))
}

/// Parse a comma-separated weekday exclusion list.
///
/// Accepts weekday names ("Sun", "monday") and numbers 0-6 with 0 being
/// Sunday. Tokens that parse as neither are skipped rather than failing
/// the whole list.
pub fn parse_exclude_weekdays(input: &str) -> HashSet<Weekday> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(parse_weekday_token)
        .collect()
}

fn parse_weekday_token(token: &str) -> Option<Weekday> {
    if let Ok(n) = token.parse::<u32>() {
        return weekday_from_sunday_index(n);
    }
    token.parse::<Weekday>().ok()
}

/// Map 0-6 (0 = Sunday) onto a weekday.
fn weekday_from_sunday_index(n: u32) -> Option<Weekday> {
    match n {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- dates and times ---

    #[test]
    fn parses_valid_date() {
        assert_eq!(
            parse_date("2024-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn trims_date_input() {
        assert!(parse_date(" 2024-01-31 ").is_ok());
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(parse_date("31/01/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parses_valid_time() {
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn rejects_bad_times() {
        assert!(parse_time("9.30").is_err());
        assert!(parse_time("25:00").is_err());
    }

    // --- weekday exclusions ---

    #[test]
    fn parses_weekday_names() {
        let days = parse_exclude_weekdays("Sun,Mon");
        assert_eq!(days, HashSet::from([Weekday::Sun, Weekday::Mon]));
    }

    #[test]
    fn parses_numbers_with_sunday_as_zero() {
        let days = parse_exclude_weekdays("0,6");
        assert_eq!(days, HashSet::from([Weekday::Sun, Weekday::Sat]));
    }

    #[test]
    fn mixes_names_and_numbers() {
        let days = parse_exclude_weekdays("saturday, 0");
        assert_eq!(days, HashSet::from([Weekday::Sat, Weekday::Sun]));
    }

    #[test]
    fn skips_malformed_tokens() {
        let days = parse_exclude_weekdays("Sun, banana, 9, 6");
        assert_eq!(days, HashSet::from([Weekday::Sun, Weekday::Sat]));
    }

    #[test]
    fn empty_input_excludes_nothing() {
        assert!(parse_exclude_weekdays("").is_empty());
        assert!(parse_exclude_weekdays(" , ,").is_empty());
    }
}
