use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the host browser assigns to a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub i64);

/// Identifier the host browser assigns to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub i64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notifications delivered by the host's tab event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TabEvent {
    /// A tab became the active tab of its window.
    Activated { tab_id: TabId, window_id: WindowId },
    /// A tab was closed.
    Removed { tab_id: TabId },
    /// A tab was swapped for another one (prerender, discard and reload).
    Replaced { old_tab_id: TabId, new_tab_id: TabId },
    /// Window focus moved. `None` means no browser window has focus.
    WindowFocusChanged { window_id: Option<WindowId> },
}

/// Side effects the tracker asks the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostCommand {
    FocusWindow { window_id: WindowId },
    ActivateTab { tab_id: TabId },
}
