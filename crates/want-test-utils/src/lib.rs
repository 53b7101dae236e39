//! Testing utilities for Want workspace
//!
//! Shared fixtures: a request-parameter map, a small VM inventory for lookups
//! and a power-action coercer.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing_subscriber::EnvFilter;
use want_core::CoercionError;

/// Install a fmt subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `?vm=web1&locked&count=3&type=savestate`
pub fn sample_params() -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("vm".to_string(), json!("web1"));
    params.insert("locked".to_string(), Value::Null);
    params.insert("count".to_string(), json!("3"));
    params.insert("type".to_string(), json!("savestate"));
    params
}

pub fn params_from(pairs: &[(&str, Option<&str>)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.map_or(Value::Null, |s| json!(s))))
        .collect()
}

pub const VM_NAMES: &[&str] = &["db1", "db2", "web2"];

/// Finds a VM record by name; `web1` is deliberately absent
pub fn find_vm(name: &Value) -> Option<Value> {
    let name = name.as_str()?;
    VM_NAMES
        .iter()
        .position(|n| *n == name)
        .map(|i| json!({"id": i + 1, "name": name}))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerAction {
    Shutdown,
    SaveState,
    Poweroff,
}

/// Coerces `"shutdown" | "savestate" | "poweroff"` to a [`PowerAction`]
pub fn power_action(value: &Value) -> Result<Value, CoercionError> {
    let s = value
        .as_str()
        .ok_or_else(|| CoercionError::coercion(format!("expected a string, got {value}")))?;
    let action = match s {
        "shutdown" => PowerAction::Shutdown,
        "savestate" => PowerAction::SaveState,
        "poweroff" => PowerAction::Poweroff,
        other => return Err(CoercionError::constraint(format!("unknown power action '{other}'"))),
    };
    serde_json::to_value(action).map_err(CoercionError::other)
}

pub fn as_power_action(value: Value) -> PowerAction {
    serde_json::from_value(value).unwrap()
}
