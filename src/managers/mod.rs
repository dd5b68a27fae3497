// TabJump state managers
// Managers hold the tracker's stateful structures: recency ranking and jump list.

pub mod jump_list;
pub mod recency_tracker;
