//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `vardef_core` linkage without a host UI.
//! - Optionally list the backend definition set: `vardef_cli <config.json>`.
//!
//! # Config file
//! `{"gateway": {"base_url": "...", "timeout_secs": 30},
//!   "log_level": "info", "log_dir": "/abs/path"}`; `log_dir` is optional
//! and file logging stays off without it.

use vardef_core::{init_logging, EditorConfig, EditorSession, HttpSyncGateway};

fn main() {
    println!("vardef_core ping={}", vardef_core::ping());
    println!("vardef_core version={}", vardef_core::core_version());

    let Some(config_path) = std::env::args().nth(1) else {
        return;
    };

    let raw = match std::fs::read_to_string(&config_path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("error: cannot read {config_path}: {err}");
            std::process::exit(2);
        }
    };
    let config = match EditorConfig::from_json_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let gateway = match HttpSyncGateway::try_new(&config.gateway) {
        Ok(gateway) => gateway,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let mut session = EditorSession::new();
    if let Err(fatal) = session.load(&gateway) {
        eprintln!("error: {}", fatal.message);
        for line in fatal.detail_lines() {
            eprintln!("  {line}");
        }
        std::process::exit(1);
    }

    for node in session.nodes() {
        let attrs = node.attributes;
        println!(
            "{} var_type={} unit={} threshold={} ttl={}",
            node.name, attrs.var_type, attrs.unit, attrs.threshold, attrs.ttl
        );
    }
}
