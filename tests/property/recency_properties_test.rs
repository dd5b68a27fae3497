//! Property-based tests for the Recency Tracker.
//!
//! A simple model (a most-recent-first list plus the pending visit) is run
//! side by side with the tracker to check debouncing and ranking order, and
//! jump commands are mixed in to check that the jump list stays anchored at
//! the current tab.

use std::collections::HashSet;
use std::time::Duration;

use proptest::prelude::*;

use tabjump::managers::recency_tracker::{RecencyTracker, RecencyTrackerTrait};
use tabjump::services::tab_host::RecordingHost;
use tabjump::services::time_source::ManualTimeSource;
use tabjump::types::tab::TabId;

const DEBOUNCE_MS: u64 = 250;

#[derive(Debug, Clone)]
enum Op {
    Register(i64),
    Deregister(i64),
    Replace(i64, i64),
    Advance(u64),
    JumpBack,
    JumpForward,
}

fn arb_event_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0..6i64).prop_map(Op::Register),
            1 => (0..6i64).prop_map(Op::Deregister),
            1 => (0..6i64, 0..6i64).prop_map(|(old, new)| Op::Replace(old, new)),
            4 => (0..600u64).prop_map(Op::Advance),
        ],
        1..80,
    )
}

fn arb_ops_with_jumps() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0..6i64).prop_map(Op::Register),
            1 => (0..6i64).prop_map(Op::Deregister),
            1 => (0..6i64, 0..6i64).prop_map(|(old, new)| Op::Replace(old, new)),
            4 => (0..600u64).prop_map(Op::Advance),
            2 => Just(Op::JumpBack),
            2 => Just(Op::JumpForward),
        ],
        1..80,
    )
}

/// Reference model: credited tabs most recent first, plus the pending visit.
#[derive(Default)]
struct Model {
    now_ms: u64,
    ranking: Vec<TabId>,
    pending: Option<(TabId, u64)>,
}

impl Model {
    fn register(&mut self, tab: TabId) {
        if let Some((pending, since)) = self.pending.take() {
            if self.now_ms - since >= DEBOUNCE_MS {
                self.ranking.retain(|t| *t != pending);
                self.ranking.insert(0, pending);
            }
        }
        self.pending = Some((tab, self.now_ms));
    }

    fn deregister(&mut self, tab: TabId) {
        if matches!(self.pending, Some((pending, _)) if pending == tab) {
            self.pending = None;
        }
        self.ranking.retain(|t| *t != tab);
    }
}

fn new_tracker() -> (RecencyTracker<ManualTimeSource>, ManualTimeSource) {
    let time = ManualTimeSource::new();
    let tracker = RecencyTracker::new(Duration::from_millis(DEBOUNCE_MS), time.clone());
    (tracker, time)
}

// **Property: ranking matches the credited-visit model**
//
// *For any* sequence of registrations, removals and time steps, the ranking
// lists every credited tab exactly once, most recently credited first, and a
// visit shorter than the debounce interval never moves a tab.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ranking_matches_model(ops in arb_event_ops()) {
        let (mut tracker, time) = new_tracker();
        let mut model = Model::default();

        for op in &ops {
            match *op {
                Op::Register(id) => {
                    tracker.register(TabId(id));
                    model.register(TabId(id));
                }
                Op::Deregister(id) => {
                    tracker.deregister(TabId(id));
                    model.deregister(TabId(id));
                }
                Op::Replace(old, new) => {
                    tracker.replace(TabId(old), TabId(new));
                    model.deregister(TabId(old));
                    model.register(TabId(new));
                }
                Op::Advance(ms) => {
                    time.advance_ms(ms);
                    model.now_ms += ms;
                }
                Op::JumpBack | Op::JumpForward => unreachable!(),
            }

            prop_assert_eq!(tracker.get_ranking(), model.ranking.clone(), "after {:?}", op);
            prop_assert_eq!(tracker.pending_tab(), model.pending.map(|(t, _)| t));
        }
    }

    #[test]
    fn quick_visit_is_never_credited(first in 0..6i64, second in 0..6i64, gap in 0..DEBOUNCE_MS) {
        let (mut tracker, time) = new_tracker();
        tracker.register(TabId(first));
        time.advance_ms(gap);
        tracker.register(TabId(second));
        prop_assert_eq!(tracker.recency_of(TabId(first)), None);
    }

    #[test]
    fn long_visit_strictly_increases_timestamp(
        tab in 0..6i64,
        other in 6..12i64,
        dwell in DEBOUNCE_MS..5_000,
    ) {
        let (mut tracker, time) = new_tracker();
        tracker.register(TabId(tab));
        time.advance_ms(DEBOUNCE_MS);
        tracker.register(TabId(other));
        let before = tracker.recency_of(TabId(tab)).unwrap();

        tracker.register(TabId(tab));
        time.advance_ms(dwell);
        tracker.register(TabId(other));
        prop_assert!(tracker.recency_of(TabId(tab)).unwrap() > before);
    }
}

// **Property: jump list stays coherent with the current tab**
//
// *For any* sequence of events and jumps, where every successful jump is
// followed by the host's activation of the target, a live jump list is
// always anchored at the current tab and no jump lands on a closed tab.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn jump_list_anchor_is_current_tab(ops in arb_ops_with_jumps()) {
        let (mut tracker, time) = new_tracker();
        let mut host = RecordingHost::new();
        let mut open = HashSet::new();

        for op in &ops {
            let target = match *op {
                Op::Register(id) => {
                    tracker.register(TabId(id));
                    open.insert(TabId(id));
                    None
                }
                Op::Deregister(id) => {
                    tracker.deregister(TabId(id));
                    open.remove(&TabId(id));
                    None
                }
                Op::Replace(old, new) => {
                    tracker.replace(TabId(old), TabId(new));
                    open.remove(&TabId(old));
                    open.insert(TabId(new));
                    None
                }
                Op::Advance(ms) => {
                    time.advance_ms(ms);
                    None
                }
                Op::JumpBack => tracker.jump_back(&mut host),
                Op::JumpForward => tracker.jump_forward(&mut host),
            };
            if let Some(tab) = target {
                prop_assert!(open.contains(&tab), "jumped to closed tab {} after {:?}", tab, op);
                prop_assert_ne!(Some(tab), tracker.current_tab());
                tracker.register(tab);
            }

            if let Some(jump_list) = tracker.jump_list() {
                prop_assert_eq!(Some(jump_list.active_tab()), tracker.current_tab(), "after {:?}", op);
            }
        }
    }
}
