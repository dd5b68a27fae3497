//! Jump list: back/forward stepping over a frozen snapshot of the tab ranking.
//!
//! The snapshot is ordered oldest visit first, current tab last. Tabs closed
//! after the snapshot was taken are tombstoned and skipped instead of being
//! removed, so indices never shift.

use std::collections::HashSet;

use crate::types::tab::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpList {
    tabs: Vec<TabId>,
    active_index: usize,
    deleted_tabs: HashSet<TabId>,
}

impl JumpList {
    /// Builds a jump list anchored at the last element of `tabs`.
    ///
    /// Returns `None` for an empty snapshot, which has no anchor.
    pub fn new(tabs: Vec<TabId>) -> Option<Self> {
        let active_index = tabs.len().checked_sub(1)?;
        Some(Self {
            tabs,
            active_index,
            deleted_tabs: HashSet::new(),
        })
    }

    /// True when the jump list believes `tab_id` is the current tab.
    pub fn is_coherent(&self, tab_id: TabId) -> bool {
        self.active_tab() == tab_id
    }

    /// Forgets a closed tab. Returns `true` when the anchor itself was closed,
    /// in which case the jump list is meaningless and must be dropped.
    pub fn deregister(&mut self, tab_id: TabId) -> bool {
        if self.is_coherent(tab_id) {
            return true;
        }
        self.deleted_tabs.insert(tab_id);
        false
    }

    /// Steps to the nearest older live tab. At the oldest live tab this
    /// returns `None` and the position is left alone.
    pub fn jump_back(&mut self) -> Option<TabId> {
        let index = (0..self.active_index)
            .rev()
            .find(|&i| !self.deleted_tabs.contains(&self.tabs[i]))?;
        self.active_index = index;
        Some(self.tabs[index])
    }

    /// Steps to the nearest newer live tab. Symmetric to [`JumpList::jump_back`].
    pub fn jump_forward(&mut self) -> Option<TabId> {
        let index = (self.active_index + 1..self.tabs.len())
            .find(|&i| !self.deleted_tabs.contains(&self.tabs[i]))?;
        self.active_index = index;
        Some(self.tabs[index])
    }

    pub fn active_tab(&self) -> TabId {
        self.tabs[self.active_index]
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The frozen snapshot, tombstoned entries included.
    pub fn tabs(&self) -> &[TabId] {
        &self.tabs
    }

    pub fn is_deleted(&self, tab_id: TabId) -> bool {
        self.deleted_tabs.contains(&tab_id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
