use tabjump::managers::jump_list::JumpList;
use tabjump::types::tab::TabId;

fn ids(raw: &[i64]) -> Vec<TabId> {
    raw.iter().copied().map(TabId).collect()
}

#[test]
fn test_empty_snapshot_has_no_jump_list() {
    assert!(JumpList::new(Vec::new()).is_none());
}

#[test]
fn test_new_anchors_at_last_tab() {
    let list = JumpList::new(ids(&[1, 2, 3])).unwrap();
    assert_eq!(list.active_index(), 2);
    assert_eq!(list.active_tab(), TabId(3));
    assert!(list.is_coherent(TabId(3)));
    assert!(!list.is_coherent(TabId(2)));
}

#[test]
fn test_jump_back_then_forward() {
    let mut list = JumpList::new(ids(&[1, 2, 3])).unwrap();
    assert_eq!(list.jump_back(), Some(TabId(2)));
    assert_eq!(list.jump_back(), Some(TabId(1)));
    assert_eq!(list.jump_forward(), Some(TabId(2)));
    assert_eq!(list.active_index(), 1);
    assert!(list.is_coherent(TabId(2)));
}

#[test]
fn test_back_at_oldest_is_idempotent() {
    let mut list = JumpList::new(ids(&[1, 2])).unwrap();
    assert_eq!(list.jump_back(), Some(TabId(1)));
    for _ in 0..3 {
        assert_eq!(list.jump_back(), None);
        assert_eq!(list.active_index(), 0);
    }
}

#[test]
fn test_forward_at_newest_returns_none() {
    let mut list = JumpList::new(ids(&[1, 2])).unwrap();
    assert_eq!(list.jump_forward(), None);
    assert_eq!(list.active_index(), 1);
}

#[test]
fn test_single_tab_list_never_moves() {
    let mut list = JumpList::new(ids(&[9])).unwrap();
    assert_eq!(list.jump_back(), None);
    assert_eq!(list.jump_forward(), None);
    assert_eq!(list.active_tab(), TabId(9));
}

#[test]
fn test_deregister_anchor_invalidates() {
    let mut list = JumpList::new(ids(&[1, 2, 3])).unwrap();
    assert!(list.deregister(TabId(3)));
}

#[test]
fn test_deregister_other_tab_tombstones() {
    let mut list = JumpList::new(ids(&[1, 2, 3])).unwrap();
    assert!(!list.deregister(TabId(2)));
    assert!(list.is_deleted(TabId(2)));
    // Indices are stable: the snapshot still holds the closed tab.
    assert_eq!(list.len(), 3);
    assert_eq!(list.active_index(), 2);
    assert_eq!(list.jump_back(), Some(TabId(1)));
    assert_eq!(list.active_index(), 0);
}

#[test]
fn test_forward_skips_tombstones() {
    let mut list = JumpList::new(ids(&[1, 2, 3, 4])).unwrap();
    list.jump_back();
    list.jump_back();
    list.jump_back();
    assert_eq!(list.active_tab(), TabId(1));
    list.deregister(TabId(2));
    list.deregister(TabId(3));
    assert_eq!(list.jump_forward(), Some(TabId(4)));
}

#[test]
fn test_back_with_only_tombstones_behind_is_noop() {
    let mut list = JumpList::new(ids(&[1, 2, 3])).unwrap();
    list.deregister(TabId(1));
    list.deregister(TabId(2));
    assert_eq!(list.jump_back(), None);
    assert_eq!(list.active_index(), 2);
}

#[test]
fn test_deregister_unknown_tab_does_not_invalidate() {
    let mut list = JumpList::new(ids(&[1, 2])).unwrap();
    assert!(!list.deregister(TabId(42)));
    assert_eq!(list.jump_back(), Some(TabId(1)));
}
