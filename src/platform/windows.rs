// TabJump config path for Windows: %APPDATA%/TabJump

use std::env;
use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("TabJump")
}
