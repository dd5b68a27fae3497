//! Host browser capability: querying tabs and windows, activating tabs.
//!
//! `TabHost` is the seam between the recency tracker and whatever actually
//! owns the tabs. `RecordingHost` is the implementation used by the RPC
//! surface: it mirrors host state from the events it is shown and queues
//! activation requests for the transport to forward.

use std::collections::HashMap;

use tracing::trace;

use crate::types::tab::{HostCommand, TabEvent, TabId, WindowId};

/// Query and activation primitives the host browser provides.
pub trait TabHost {
    /// The active tab of `window_id`, if the window is known.
    fn query_active_tab(&self, window_id: WindowId) -> Option<TabId>;
    /// The window that owns `tab_id`, if known.
    fn window_of(&self, tab_id: TabId) -> Option<WindowId>;
    /// The currently focused browser window, if any.
    fn focused_window(&self) -> Option<WindowId>;
    /// Requests that `window_id` receive focus. Fire-and-forget.
    fn focus_window(&mut self, window_id: WindowId);
    /// Requests that `tab_id` become active. Fire-and-forget.
    fn activate_tab(&mut self, tab_id: TabId);
}

/// Host mirror that records outgoing commands instead of performing them.
///
/// Issuing a command never changes the mirror; only a later `TabEvent`
/// reported through [`RecordingHost::observe`] does.
#[derive(Debug, Default)]
pub struct RecordingHost {
    tab_windows: HashMap<TabId, WindowId>,
    active_by_window: HashMap<WindowId, TabId>,
    focused: Option<WindowId>,
    commands: Vec<HostCommand>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `tab_id` lives in `window_id` without activating it.
    pub fn track_tab(&mut self, tab_id: TabId, window_id: WindowId) {
        self.tab_windows.insert(tab_id, window_id);
    }

    /// Updates the mirror from a host notification.
    pub fn observe(&mut self, event: &TabEvent) {
        match *event {
            TabEvent::Activated { tab_id, window_id } => {
                self.tab_windows.insert(tab_id, window_id);
                self.active_by_window.insert(window_id, tab_id);
            }
            TabEvent::Removed { tab_id } => {
                self.tab_windows.remove(&tab_id);
                self.active_by_window.retain(|_, active| *active != tab_id);
            }
            TabEvent::Replaced { old_tab_id, new_tab_id } => {
                if let Some(window_id) = self.tab_windows.remove(&old_tab_id) {
                    self.tab_windows.insert(new_tab_id, window_id);
                }
                for active in self.active_by_window.values_mut() {
                    if *active == old_tab_id {
                        *active = new_tab_id;
                    }
                }
            }
            TabEvent::WindowFocusChanged { window_id } => {
                self.focused = window_id;
            }
        }
    }

    /// Commands issued since the last drain, oldest first.
    pub fn pending_commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Takes the queued commands, leaving the queue empty.
    pub fn drain_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl TabHost for RecordingHost {
    fn query_active_tab(&self, window_id: WindowId) -> Option<TabId> {
        self.active_by_window.get(&window_id).copied()
    }

    fn window_of(&self, tab_id: TabId) -> Option<WindowId> {
        self.tab_windows.get(&tab_id).copied()
    }

    fn focused_window(&self) -> Option<WindowId> {
        self.focused
    }

    fn focus_window(&mut self, window_id: WindowId) {
        trace!(window = %window_id, "queue focus_window");
        self.commands.push(HostCommand::FocusWindow { window_id });
    }

    fn activate_tab(&mut self, tab_id: TabId) {
        trace!(tab = %tab_id, "queue activate_tab");
        self.commands.push(HostCommand::ActivateTab { tab_id });
    }
}
