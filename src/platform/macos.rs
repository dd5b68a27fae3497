// TabJump config path for macOS: ~/Library/Application Support/TabJump

use std::env;
use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("TabJump")
}
