use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Identifier of the panel currently rendered by the shell
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Hero,
    Dashboard,
    Upload,
    Recommendations,
    Library,
}

impl Section {
    /// Sections reachable from the navigation bar, in display order
    pub fn navigable() -> impl Iterator<Item = Section> {
        Section::iter().filter(|s| *s != Section::Hero)
    }

    pub fn is_hero(&self) -> bool {
        *self == Section::Hero
    }

    /// Next navigation item, wrapping around. Hero enters at the first item.
    pub fn next(self) -> Section {
        let items: Vec<Section> = Section::navigable().collect();
        match items.iter().position(|s| *s == self) {
            Some(i) => items[(i + 1) % items.len()],
            None => items[0],
        }
    }

    /// Previous navigation item, wrapping around. Hero enters at the last item.
    pub fn prev(self) -> Section {
        let items: Vec<Section> = Section::navigable().collect();
        match items.iter().position(|s| *s == self) {
            Some(0) | None => items[items.len() - 1],
            Some(i) => items[i - 1],
        }
    }

    /// Human-readable title used by the navigation bar and status line
    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Dashboard => "Dashboard",
            Section::Upload => "Upload",
            Section::Recommendations => "AI Insights",
            Section::Library => "Library",
        }
    }
}
