//! Repeat-rule expansion for agenda events.
//!
//! Expands a base event plus a repeat rule into the concrete dated records
//! that get stored. The scan walks forward one day at a time for every
//! rule, so the offset between an occurrence's start and end date never
//! drifts. Monthly and yearly rules match on the raw day-of-month: a
//! series anchored on the 31st contributes nothing to shorter months.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use uuid::Uuid;

use crate::event::{EventRecord, EventTemplate, Repeat};

/// Expand a base event into its dated occurrences.
///
/// `Repeat::None` yields exactly one record with no `series_id`, ignoring
/// `repeat_until` and `exclude_weekdays`. Every other rule scans day by
/// day from `base_start` up to and including `repeat_until`, emitting a
/// record wherever the rule matches; all emitted records share one fresh
/// `series_id`. `exclude_weekdays` only applies to `Repeat::Daily`.
///
/// A `repeat_until` before `base_start` produces an empty result; callers
/// decide whether that is worth reporting.
#[allow(clippy::too_many_arguments)]
pub fn expand_series(
    template: &EventTemplate,
    base_start: NaiveDate,
    base_end: NaiveDate,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    repeat: Repeat,
    repeat_until: NaiveDate,
    exclude_weekdays: &HashSet<Weekday>,
) -> Vec<EventRecord> {
    if repeat == Repeat::None {
        return vec![occurrence(
            template, base_start, base_end, start_time, end_time, repeat, None,
        )];
    }

    let series_id = Uuid::new_v4();
    let mut occurrences = Vec::new();

    let mut cur_start = base_start;
    let mut cur_end = base_end;

    while cur_start <= repeat_until {
        if rule_matches(repeat, cur_start, base_start, exclude_weekdays) {
            occurrences.push(occurrence(
                template,
                cur_start,
                cur_end,
                start_time,
                end_time,
                repeat,
                Some(series_id),
            ));
        }
        cur_start = cur_start + Duration::days(1);
        cur_end = cur_end + Duration::days(1);
    }

    occurrences
}

/// Whether the rule fires on `cur`, relative to the series anchor `base`.
fn rule_matches(
    repeat: Repeat,
    cur: NaiveDate,
    base: NaiveDate,
    exclude_weekdays: &HashSet<Weekday>,
) -> bool {
    match repeat {
        Repeat::None => true,
        Repeat::Daily => !exclude_weekdays.contains(&cur.weekday()),
        Repeat::Weekly => cur.weekday() == base.weekday(),
        Repeat::Monthly => cur.day() == base.day(),
        Repeat::Yearly => cur.day() == base.day() && cur.month() == base.month(),
    }
}

fn occurrence(
    template: &EventTemplate,
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    repeat: Repeat,
    series_id: Option<Uuid>,
) -> EventRecord {
    EventRecord {
        id: Uuid::new_v4(),
        title: template.title.clone(),
        location: template.location.clone(),
        start_date,
        end_date,
        icon: template.icon.clone(),
        start_time,
        end_time,
        repeat,
        series_id,
    }
}
