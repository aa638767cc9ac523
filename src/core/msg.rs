use serde::{Deserialize, Serialize};

pub mod nav;
pub mod system;
pub mod upload;

use nav::NavMsg;
use system::SystemMsg;
use upload::UploadMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Navigation (delegated to NavState)
    Nav(NavMsg),

    // Upload panel (delegated to UploadState)
    Upload(UploadMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Upload(msg) => msg.is_frequent(),
            Msg::Nav(_) => false,
        }
    }
}
