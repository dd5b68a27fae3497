//! RPC method handler for the TabJump JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! Event methods feed host notifications to the tracker; command methods
//! return the host commands they caused under `"commands"`.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::time_source::TimeSource;
use crate::types::tab::{TabEvent, TabId, WindowId};

fn tab_param(params: &Value, name: &str) -> Result<TabId, String> {
    params
        .get(name)
        .and_then(|v| v.as_i64())
        .map(TabId)
        .ok_or_else(|| format!("missing {}", name))
}

fn window_param(params: &Value, name: &str) -> Result<WindowId, String> {
    params
        .get(name)
        .and_then(|v| v.as_i64())
        .map(WindowId)
        .ok_or_else(|| format!("missing {}", name))
}

/// Applies an event and replies `{"ok": true}`.
fn dispatch_event<T: TimeSource>(app: &Mutex<App<T>>, event: TabEvent) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;
    a.handle_event(&event);
    Ok(json!({"ok": true}))
}

/// Runs a navigation command and replies with the target and queued commands.
fn dispatch_command<T: TimeSource>(
    app: &Mutex<App<T>>,
    command: impl FnOnce(&mut App<T>) -> Option<TabId>,
) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;
    let target = command(&mut *a);
    let commands = a.take_commands();
    Ok(json!({"target": target, "commands": commands}))
}

/// Dispatch a JSON-RPC method call to the tracker.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method<T: TimeSource>(
    app: &Mutex<App<T>>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        // ─── Host events ───
        "tab.activated" => {
            let tab_id = tab_param(params, "tab_id")?;
            let window_id = window_param(params, "window_id")?;
            dispatch_event(app, TabEvent::Activated { tab_id, window_id })
        }
        "tab.removed" => {
            let tab_id = tab_param(params, "tab_id")?;
            dispatch_event(app, TabEvent::Removed { tab_id })
        }
        "tab.replaced" => {
            let old_tab_id = tab_param(params, "old_tab_id")?;
            let new_tab_id = tab_param(params, "new_tab_id")?;
            dispatch_event(app, TabEvent::Replaced { old_tab_id, new_tab_id })
        }
        "window.focused" => {
            // null (or absent) means focus left the browser
            let window_id = match params.get("window_id") {
                None | Some(Value::Null) => None,
                Some(v) => Some(WindowId(v.as_i64().ok_or("invalid window_id")?)),
            };
            dispatch_event(app, TabEvent::WindowFocusChanged { window_id })
        }

        // ─── Navigation commands ───
        "jump.back" => dispatch_command(app, |a| a.jump_back()),
        "jump.forward" => dispatch_command(app, |a| a.jump_forward()),
        "tab.select" => {
            let index = params
                .get("index")
                .and_then(|v| v.as_u64())
                .ok_or("missing index")?;
            let index = usize::try_from(index).map_err(|_| "index out of range".to_string())?;
            dispatch_command(app, move |a| a.select_ranked(index))
        }
        "ranking.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"tabs": a.ranking()}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.update_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
