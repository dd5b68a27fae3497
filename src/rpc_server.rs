//! TabJump RPC Server — JSON-RPC over stdin/stdout for the browser host.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"tab.activated", "params":{"tab_id":3,"window_id":1}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Logs go to stderr; stdout carries protocol lines only.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tabjump::app::App;
use tabjump::rpc_handler::handle_method;
use tabjump::services::settings_engine::SettingsEngineTrait;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn write_line(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() {
    let config_path = std::env::var("TAB_JUMP_CONFIG").ok();
    let app = match App::new(config_path) {
        Ok(app) => app,
        Err(e) => {
            init_tracing("info");
            error!(error = %e, "failed to initialize TabJump");
            std::process::exit(1);
        }
    };
    init_tracing(&app.settings_engine.get_settings().log_filter);
    let app = Mutex::new(app);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if write_line(&mut out, &ready).is_err() {
        return;
    }
    info!("tabjump-rpc ready");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));
                match handle_method(&app, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => {
                        warn!(method, error = %err, "rpc error");
                        json!({"id": id, "error": err})
                    }
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if write_line(&mut out, &response).is_err() {
            break;
        }
    }
}
