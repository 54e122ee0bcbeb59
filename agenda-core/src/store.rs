//! The persisted event collection.
//!
//! `EventStore` owns the canonical in-memory list of records, mirrors it
//! to a key-value collaborator on every mutation, and serves the read
//! queries the agenda views are built from. Loading tolerates a missing
//! or corrupt backing value: the session simply starts empty.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::event::EventRecord;
use crate::storage::KeyValueStore;

const EVENTS_KEY: &str = "events";

pub struct EventStore {
    events: Vec<EventRecord>,
    backend: Box<dyn KeyValueStore>,
}

impl EventStore {
    /// An empty store over `backend`. Call `load` to pick up whatever the
    /// collaborator already holds.
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        EventStore {
            events: Vec::new(),
            backend,
        }
    }

    /// Create a store and immediately load the persisted collection.
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        let mut store = EventStore::new(backend);
        store.load();
        store
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// An unreadable collaborator or a malformed payload degrades to an
    /// empty collection; the session continues without history.
    pub fn load(&mut self) {
        let raw = match self.backend.read(EVENTS_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("event storage unreadable, starting empty: {e}");
                self.events = Vec::new();
                return;
            }
        };

        self.events = match raw {
            Some(json) => match serde_json::from_str(&json) {
                Ok(events) => events,
                Err(e) => {
                    warn!("discarding malformed event collection: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
    }

    /// Persist the full collection, overwriting the previous value.
    ///
    /// Failures are logged and swallowed: persistence is best-effort and
    /// never takes the session down.
    pub fn save(&mut self) {
        let json = match serde_json::to_string(&self.events) {
            Ok(json) => json,
            Err(e) => {
                warn!("could not serialize event collection: {e}");
                return;
            }
        };

        match self.backend.write(EVENTS_KEY, &json) {
            Ok(()) => debug!(count = self.events.len(), "persisted event collection"),
            Err(e) => warn!("could not persist event collection: {e}"),
        }
    }

    /// All records, as a copy the caller can keep.
    pub fn all(&self) -> Vec<EventRecord> {
        self.events.clone()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Records whose start or end falls exactly on `date`. Days strictly
    /// inside a multi-day span do not count.
    pub fn on_date(&self, date: NaiveDate) -> Vec<EventRecord> {
        self.events
            .iter()
            .filter(|ev| ev.start_date == date || ev.end_date == date)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over title, location and dates.
    pub fn search(&self, query: &str) -> Vec<EventRecord> {
        self.events
            .iter()
            .filter(|ev| ev.matches_search(query))
            .cloned()
            .collect()
    }

    /// Append one record and persist.
    pub fn add(&mut self, record: EventRecord) {
        self.events.push(record);
        self.save();
    }

    /// Append a batch (typically a recurrence expansion) preserving its
    /// order, then persist once.
    pub fn add_all(&mut self, records: Vec<EventRecord>) {
        self.events.extend(records);
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventTemplate, Repeat};
    use crate::recurrence::expand_series;
    use crate::storage::{FileStore, MemoryStore};
    use std::collections::HashSet;
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn record(title: &str, location: Option<&str>, start: NaiveDate, end: NaiveDate) -> EventRecord {
        EventRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            location: location.map(String::from),
            start_date: start,
            end_date: end,
            icon: "event".to_string(),
            start_time: None,
            end_time: None,
            repeat: Repeat::None,
            series_id: None,
        }
    }

    fn memory_store() -> EventStore {
        EventStore::open(Box::new(MemoryStore::new()))
    }

    // --- load degradation ---

    #[test]
    fn missing_backing_value_loads_empty() {
        let store = memory_store();
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_backing_value_loads_empty() {
        let mut backend = MemoryStore::new();
        backend.write(EVENTS_KEY, "not json at all").unwrap();

        let store = EventStore::open(Box::new(backend));
        assert!(store.is_empty());
    }

    #[test]
    fn store_recovers_after_malformed_load() {
        let mut backend = MemoryStore::new();
        backend.write(EVENTS_KEY, "{broken").unwrap();

        let mut store = EventStore::open(Box::new(backend));
        store.add(record("Dentist", None, d(2024, 2, 1), d(2024, 2, 1)));

        store.load();
        assert_eq!(store.len(), 1);
    }

    // --- persistence round trip ---

    #[test]
    fn save_then_fresh_load_reproduces_collection() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = EventStore::open(Box::new(FileStore::new(dir.path())));
        let series = expand_series(
            &EventTemplate {
                title: "Standup".to_string(),
                location: Some("Paris Office".to_string()),
                icon: "work".to_string(),
            },
            d(2024, 1, 1),
            d(2024, 1, 1),
            None,
            None,
            Repeat::Daily,
            d(2024, 1, 3),
            &HashSet::new(),
        );
        store.add_all(series);
        store.add(record("Dentist", None, d(2024, 2, 1), d(2024, 2, 1)));

        let reloaded = EventStore::open(Box::new(FileStore::new(dir.path())));
        assert_eq!(reloaded.all(), store.all());
    }

    #[test]
    fn save_overwrites_whole_collection() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = EventStore::open(Box::new(FileStore::new(dir.path())));
        store.add(record("First", None, d(2024, 1, 1), d(2024, 1, 1)));

        let mut second = EventStore::open(Box::new(FileStore::new(dir.path())));
        second.add(record("Second", None, d(2024, 1, 2), d(2024, 1, 2)));

        // The second store rewrote the whole collection, first record included
        let reloaded = EventStore::open(Box::new(FileStore::new(dir.path())));
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.all()[1].title, "Second");
    }

    // --- queries ---

    #[test]
    fn on_date_matches_start_and_end_only() {
        let mut store = memory_store();
        let multi_day = record("Trip", None, d(2024, 1, 1), d(2024, 1, 3));
        let single = record("Call", None, d(2024, 1, 2), d(2024, 1, 2));
        store.add(multi_day.clone());
        store.add(single.clone());

        assert_eq!(store.on_date(d(2024, 1, 1)), vec![multi_day.clone()]);
        // The trip's interior day does not count
        assert_eq!(store.on_date(d(2024, 1, 2)), vec![single]);
        assert_eq!(store.on_date(d(2024, 1, 3)), vec![multi_day]);
        assert!(store.on_date(d(2024, 1, 4)).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_any_field() {
        let mut store = memory_store();
        store.add(record(
            "Quarterly review",
            Some("Paris Office"),
            d(2024, 3, 1),
            d(2024, 3, 1),
        ));
        store.add(record("Dentist", None, d(2024, 4, 2), d(2024, 4, 2)));

        let by_location = store.search("paris");
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].title, "Quarterly review");

        assert_eq!(store.search("DENTIST").len(), 1);
        assert_eq!(store.search("2024-04").len(), 1);
        assert!(store.search("zanzibar").is_empty());
    }

    #[test]
    fn all_returns_a_defensive_copy() {
        let mut store = memory_store();
        store.add(record("Call", None, d(2024, 1, 2), d(2024, 1, 2)));

        let mut copy = store.all();
        copy.clear();
        assert_eq!(store.len(), 1);
    }

    // --- appends ---

    #[test]
    fn add_all_preserves_input_order() {
        let mut store = memory_store();
        let records = vec![
            record("a", None, d(2024, 1, 3), d(2024, 1, 3)),
            record("b", None, d(2024, 1, 1), d(2024, 1, 1)),
            record("c", None, d(2024, 1, 2), d(2024, 1, 2)),
        ];
        store.add_all(records.clone());

        assert_eq!(store.all(), records);
    }

    #[test]
    fn add_appends_at_the_end_and_persists() {
        let mut store = memory_store();
        store.add(record("a", None, d(2024, 1, 1), d(2024, 1, 1)));
        store.add(record("b", None, d(2024, 1, 2), d(2024, 1, 2)));

        store.load();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[1].title, "b");
    }

    // --- end to end ---

    #[test]
    fn weekly_series_is_queryable_after_reload() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = EventStore::open(Box::new(FileStore::new(dir.path())));
        let series = expand_series(
            &EventTemplate {
                title: "Standup".to_string(),
                location: None,
                icon: "work".to_string(),
            },
            d(2024, 1, 1),
            d(2024, 1, 1),
            None,
            None,
            Repeat::Weekly,
            d(2024, 1, 22),
            &HashSet::new(),
        );
        assert_eq!(series.len(), 4);
        store.add_all(series);

        let reloaded = EventStore::open(Box::new(FileStore::new(dir.path())));
        assert_eq!(reloaded.on_date(d(2024, 1, 15)).len(), 1);
        assert_eq!(reloaded.search("standup").len(), 4);
    }
}
