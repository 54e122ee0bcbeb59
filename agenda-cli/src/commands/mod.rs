pub mod add;
pub mod config;
pub mod day;
pub mod list;
pub mod month;
pub mod search;
pub mod theme;

use agenda_core::config::AgendaConfig;
use agenda_core::storage::FileStore;
use agenda_core::store::EventStore;
use agenda_core::theme::Theme;
use anyhow::Result;

/// Open the event store over the configured data directory.
pub fn open_store() -> Result<EventStore> {
    let config = AgendaConfig::load()?;
    Ok(EventStore::open(Box::new(FileStore::new(config.data_path()))))
}

/// The persisted theme selection.
pub fn current_theme() -> Result<Theme> {
    let config = AgendaConfig::load()?;
    Ok(Theme::load(&FileStore::new(config.data_path())))
}
