//! TabJump — most-recently-used tab ranking and back/forward tab jumping.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
