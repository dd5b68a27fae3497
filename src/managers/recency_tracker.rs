//! Recency Tracker for TabJump.
//!
//! Keeps a logical clock and the last credited visit of every tab, derives the
//! most-recently-used ranking from it, and owns at most one live jump list
//! for back/forward tab navigation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::managers::jump_list::JumpList;
use crate::services::tab_host::TabHost;
use crate::services::time_source::{SystemTimeSource, TimeSource};
use crate::types::settings::{TrackerSettings, DEFAULT_DEBOUNCE_MS};
use crate::types::tab::{TabEvent, TabId};

/// Trait defining the recency tracking interface.
pub trait RecencyTrackerTrait {
    fn register(&mut self, tab_id: TabId);
    fn deregister(&mut self, tab_id: TabId);
    fn replace(&mut self, old_tab_id: TabId, new_tab_id: TabId);
    fn get_ranking(&self) -> Vec<TabId>;
    fn jump_back(&mut self, host: &mut dyn TabHost) -> Option<TabId>;
    fn jump_forward(&mut self, host: &mut dyn TabHost) -> Option<TabId>;
    fn select_ranked(&mut self, index: usize, host: &mut dyn TabHost) -> Option<TabId>;
    fn handle_event(&mut self, event: &TabEvent, host: &dyn TabHost);
}

/// A visit that has started but not yet been credited.
#[derive(Debug, Clone, Copy)]
struct PendingVisit {
    tab_id: TabId,
    since: Instant,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Back,
    Forward,
}

/// In-memory recency tracker, driven by host tab events.
pub struct RecencyTracker<T: TimeSource = SystemTimeSource> {
    time: T,
    debounce: Duration,
    clock: u64,
    recency_by_tab: HashMap<TabId, u64>,
    current_tab: Option<TabId>,
    pending: Option<PendingVisit>,
    jump_list: Option<JumpList>,
}

impl<T: TimeSource> RecencyTracker<T> {
    pub fn new(debounce: Duration, time: T) -> Self {
        Self {
            time,
            debounce,
            clock: 1,
            recency_by_tab: HashMap::new(),
            current_tab: None,
            pending: None,
            jump_list: None,
        }
    }

    pub fn with_settings(settings: &TrackerSettings, time: T) -> Self {
        Self::new(Duration::from_millis(settings.debounce_ms), time)
    }

    pub fn current_tab(&self) -> Option<TabId> {
        self.current_tab
    }

    /// The tab whose visit is waiting for the debounce interval to pass.
    pub fn pending_tab(&self) -> Option<TabId> {
        self.pending.map(|p| p.tab_id)
    }

    /// Logical time of the tab's last credited visit.
    pub fn recency_of(&self, tab_id: TabId) -> Option<u64> {
        self.recency_by_tab.get(&tab_id).copied()
    }

    pub fn jump_list(&self) -> Option<&JumpList> {
        self.jump_list.as_ref()
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Changes the dwell threshold. Applies from the next registration on.
    pub fn set_debounce(&mut self, debounce: Duration) {
        self.debounce = debounce;
    }

    /// Credits the pending visit if it lasted at least the debounce interval.
    fn settle_pending(&mut self, now: Instant) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let dwell = now.saturating_duration_since(pending.since);
        if dwell >= self.debounce {
            self.clock += 1;
            self.recency_by_tab.insert(pending.tab_id, self.clock);
            debug!(tab = %pending.tab_id, clock = self.clock, "credited visit");
        } else {
            debug!(tab = %pending.tab_id, dwell_ms = dwell.as_millis() as u64, "dropped short visit");
        }
    }

    /// Oldest-first snapshot of the ranking with the current tab as the
    /// last element. No snapshot while the current tab is unknown, e.g.
    /// between closing it and the host activating a neighbour.
    fn build_jump_list(&self) -> Option<JumpList> {
        let current = self.current_tab?;
        let mut tabs = self.get_ranking();
        tabs.reverse();
        if tabs.last() != Some(&current) {
            tabs.retain(|t| *t != current);
            tabs.push(current);
        }
        let jump_list = JumpList::new(tabs)?;
        debug!(len = jump_list.len(), anchor = %jump_list.active_tab(), "created jump list");
        Some(jump_list)
    }

    fn jump(&mut self, direction: Direction, host: &mut dyn TabHost) -> Option<TabId> {
        if self.jump_list.is_none() {
            self.jump_list = self.build_jump_list();
        }
        let jump_list = self.jump_list.as_mut()?;
        let target = match direction {
            Direction::Back => jump_list.jump_back(),
            Direction::Forward => jump_list.jump_forward(),
        };
        match target {
            Some(tab_id) => {
                debug!(?direction, tab = %tab_id, index = jump_list.active_index(), "jump");
                activate(host, tab_id);
                Some(tab_id)
            }
            None => {
                debug!(?direction, "no jump target");
                None
            }
        }
    }
}

impl Default for RecencyTracker<SystemTimeSource> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS), SystemTimeSource)
    }
}

/// Focuses the tab's window when it is not already focused, then activates the tab.
fn activate(host: &mut dyn TabHost, tab_id: TabId) {
    if let Some(window_id) = host.window_of(tab_id) {
        if host.focused_window() != Some(window_id) {
            host.focus_window(window_id);
        }
    }
    host.activate_tab(tab_id);
}

impl<T: TimeSource> RecencyTrackerTrait for RecencyTracker<T> {
    /// Record that `tab_id` became the active tab.
    ///
    /// The previously pending visit is credited or dropped, and a jump list
    /// that does not expect this tab is discarded.
    fn register(&mut self, tab_id: TabId) {
        let now = self.time.now();
        trace!(tab = %tab_id, "register");
        self.settle_pending(now);

        if let Some(jump_list) = &self.jump_list {
            if !jump_list.is_coherent(tab_id) {
                debug!(tab = %tab_id, anchor = %jump_list.active_tab(), "discarded jump list");
                self.jump_list = None;
            }
        }

        self.current_tab = Some(tab_id);
        self.pending = Some(PendingVisit { tab_id, since: now });
    }

    /// Forget a closed tab. Unknown ids are ignored.
    fn deregister(&mut self, tab_id: TabId) {
        trace!(tab = %tab_id, "deregister");
        if self.pending_tab() == Some(tab_id) {
            self.pending = None;
        }
        if self.current_tab == Some(tab_id) {
            self.current_tab = None;
        }
        self.recency_by_tab.remove(&tab_id);

        if let Some(jump_list) = self.jump_list.as_mut() {
            if jump_list.deregister(tab_id) {
                debug!(tab = %tab_id, "jump list anchor closed");
                self.jump_list = None;
            }
        }
    }

    fn replace(&mut self, old_tab_id: TabId, new_tab_id: TabId) {
        self.deregister(old_tab_id);
        self.register(new_tab_id);
    }

    /// Tabs with a credited visit, most recent first.
    fn get_ranking(&self) -> Vec<TabId> {
        let mut entries: Vec<(TabId, u64)> =
            self.recency_by_tab.iter().map(|(id, at)| (*id, *at)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().map(|(id, _)| id).collect()
    }

    fn jump_back(&mut self, host: &mut dyn TabHost) -> Option<TabId> {
        self.jump(Direction::Back, host)
    }

    fn jump_forward(&mut self, host: &mut dyn TabHost) -> Option<TabId> {
        self.jump(Direction::Forward, host)
    }

    /// Activate the `index`-th most recently used tab. Out of range is a no-op.
    fn select_ranked(&mut self, index: usize, host: &mut dyn TabHost) -> Option<TabId> {
        let tab_id = self.get_ranking().get(index).copied()?;
        debug!(index, tab = %tab_id, "select ranked tab");
        activate(host, tab_id);
        Some(tab_id)
    }

    fn handle_event(&mut self, event: &TabEvent, host: &dyn TabHost) {
        match *event {
            TabEvent::Activated { tab_id, .. } => self.register(tab_id),
            TabEvent::Removed { tab_id } => self.deregister(tab_id),
            TabEvent::Replaced { old_tab_id, new_tab_id } => self.replace(old_tab_id, new_tab_id),
            TabEvent::WindowFocusChanged { window_id: Some(window_id) } => {
                match host.query_active_tab(window_id) {
                    Some(tab_id) => self.register(tab_id),
                    None => trace!(window = %window_id, "focused window has no known active tab"),
                }
            }
            TabEvent::WindowFocusChanged { window_id: None } => {}
        }
    }
}
