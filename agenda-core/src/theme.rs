//! Color themes.
//!
//! Themes are a closed set: each name maps to a fixed record of named
//! colors, and the selection persists through the same key-value
//! collaborator as the events. An unknown or unreadable persisted value
//! falls back to the default instead of erroring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AgendaError, AgendaResult};
use crate::storage::KeyValueStore;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Purple,
    Green,
    Orange,
}

/// The fixed colors of one theme, hex-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary_1: &'static str,
    pub primary_2: &'static str,
    pub primary_3: &'static str,
    pub primary_4: &'static str,
    pub primary_5: &'static str,
    pub background_1: &'static str,
    pub background_2: &'static str,
    pub text: &'static str,
}

impl ThemePalette {
    /// Accent used to mark days that carry events.
    pub fn event_dot(&self) -> &'static str {
        self.primary_1
    }

    /// Wash behind the agenda grid.
    pub fn agenda_background(&self) -> &'static str {
        self.primary_5
    }
}

const PURPLE: ThemePalette = ThemePalette {
    primary_1: "#6B449B",
    primary_2: "#B281EE",
    primary_3: "#E3D2F7",
    primary_4: "#F0E3FF",
    primary_5: "#F2EAFB",
    background_1: "#FEFAFF",
    background_2: "#F3EDF7",
    text: "#000000",
};

const GREEN: ThemePalette = ThemePalette {
    primary_1: "#15C515",
    primary_2: "#95D795",
    primary_3: "#D4F7D2",
    primary_4: "#E5FFE3",
    primary_5: "#ECFBEA",
    background_1: "#FBFFFB",
    background_2: "#EDF7ED",
    text: "#000000",
};

const ORANGE: ThemePalette = ThemePalette {
    primary_1: "#F2932E",
    primary_2: "#F5B672",
    primary_3: "#F7E6D2",
    primary_4: "#FFF0E3",
    primary_5: "#FBF1EA",
    background_1: "#FFFCFA",
    background_2: "#F7F2ED",
    text: "#000000",
};

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Purple, Theme::Green, Theme::Orange];

    pub fn palette(self) -> &'static ThemePalette {
        match self {
            Theme::Purple => &PURPLE,
            Theme::Green => &GREEN,
            Theme::Orange => &ORANGE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Purple => "purple",
            Theme::Green => "green",
            Theme::Orange => "orange",
        }
    }

    /// The persisted selection, defaulting when absent or unreadable.
    pub fn load(backend: &dyn KeyValueStore) -> Theme {
        match backend.read(THEME_KEY) {
            Ok(Some(value)) => value.trim().parse().unwrap_or_else(|_| {
                warn!("unknown persisted theme '{}', using default", value.trim());
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("theme storage unreadable, using default: {e}");
                Theme::default()
            }
        }
    }

    /// Persist this selection.
    pub fn store(self, backend: &mut dyn KeyValueStore) -> AgendaResult<()> {
        backend.write(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "purple" => Ok(Theme::Purple),
            "green" => Ok(Theme::Green),
            "orange" => Ok(Theme::Orange),
            other => Err(AgendaError::UnknownTheme(other.to_string())),
        }
    }
}
