use crate::{
    core::{cmd::Cmd, msg::nav::NavMsg},
    domain::{
        catalog::{LIBRARY, RECOMMENDATIONS},
        section::Section,
    },
};

/// Navigation shell state: which panel is shown and how it is scrolled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    /// Compact-layout menu visibility
    pub menu_open: bool,
    /// Number of leading cards skipped by scrollable panels
    pub scroll: u16,
}

impl NavState {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_hero(&self) -> bool {
        self.active.is_hero()
    }

    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        match msg {
            NavMsg::SelectSection(section) => self.select(section),
            NavMsg::NextSection => self.select(self.active.next()),
            NavMsg::PrevSection => self.select(self.active.prev()),
            NavMsg::EnterPlatform => {
                if self.is_hero() {
                    self.select(Section::Dashboard)
                } else {
                    vec![]
                }
            }
            NavMsg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                vec![Cmd::RequestRender]
            }
            NavMsg::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                vec![]
            }
            NavMsg::ScrollDown => {
                self.scroll = (self.scroll + 1).min(scroll_limit(self.active));
                vec![]
            }
        }
    }

    fn select(&mut self, section: Section) -> Vec<Cmd> {
        self.menu_open = false;
        if self.active == section {
            return vec![];
        }

        log::debug!("switching section {} -> {section}", self.active);
        self.active = section;
        self.scroll = 0;
        vec![Cmd::RequestRender]
    }
}

/// Largest scroll offset a panel accepts (one card must stay visible)
pub fn scroll_limit(section: Section) -> u16 {
    let cards = match section {
        // recommendation cards, then the tips card and the quick-actions card
        Section::Recommendations => RECOMMENDATIONS.len() + 2,
        Section::Library => LIBRARY.len(),
        Section::Hero | Section::Dashboard | Section::Upload => 0,
    };
    cards.saturating_sub(1) as u16
}
