// crates/ipgeo-core/src/metrics.rs
//! Named-counter registry.
//!
//! Callers use it to record hits and misses; the lookup engine itself never
//! touches it. Counters are created at zero the first time a name is used.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// Thread-safe registry of `i64` counters keyed by name.
///
/// Share it with `Arc<MetricRegistry>`; all operations take `&self`.
#[derive(Debug)]
pub struct MetricRegistry {
    app_name: String,
    node: String,
    counters: RwLock<HashMap<String, Arc<AtomicI64>>>,
}

/// Point-in-time copy of a registry, serialized as
/// `{"appname": .., "node": .., "metrics": {name: value}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricSnapshot {
    #[serde(rename = "appname")]
    pub app_name: String,
    pub node: String,
    pub metrics: BTreeMap<String, i64>,
}

impl MetricRegistry {
    /// New registry; `node` is `"<app>:<host>:<pid>"`.
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        let node = format!("{}:{}:{}", app_name, hostname(), std::process::id());
        Self {
            app_name,
            node,
            counters: RwLock::new(HashMap::new()),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    /// Returns the counter for `name`, creating it at zero if needed.
    pub fn counter(&self, name: &str) -> Arc<AtomicI64> {
        if let Some(c) = self
            .counters
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
        {
            return Arc::clone(c);
        }
        let mut map = self.counters.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(
            map.entry(name.to_string())
                .or_insert_with(|| Arc::new(AtomicI64::new(0))),
        )
    }

    pub fn incr(&self, name: &str) {
        self.counter(name).fetch_add(1, Ordering::Relaxed);
    }

    pub fn decr(&self, name: &str) {
        self.counter(name).fetch_sub(1, Ordering::Relaxed);
    }

    pub fn get(&self, name: &str) -> i64 {
        self.counter(name).load(Ordering::SeqCst)
    }

    pub fn reset(&self, name: &str) {
        self.counter(name).store(0, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        let metrics = self
            .counters
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(k, v)| (k.clone(), v.load(Ordering::SeqCst)))
            .collect();
        MetricSnapshot {
            app_name: self.app_name.clone(),
            node: self.node.clone(),
            metrics,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }
}

/// JSON rendering; empty string if serialization fails.
impl fmt::Display for MetricRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json().unwrap_or_default())
    }
}

static HOSTNAME: Lazy<String> = Lazy::new(|| host_or_localhost(gethostname::gethostname()));

fn hostname() -> &'static str {
    &HOSTNAME
}

fn host_or_localhost(raw: OsString) -> String {
    raw.into_string()
        .ok()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
