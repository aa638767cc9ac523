use serde::{Deserialize, Serialize};

use crate::domain::section::Section;

/// Messages for the navigation shell (NavState)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    SelectSection(Section),
    NextSection,
    PrevSection,
    EnterPlatform,
    ToggleMenu,
    ScrollUp,
    ScrollDown,
}
