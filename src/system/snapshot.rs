use std::collections::BTreeMap;

use serde::Serialize;

pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiskStatus {
    Usage { used_gb: f64, free_gb: f64 },
    PermissionDenied,
}

/// Contents of the three rolling series at the time of a poll, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SeriesHistory {
    pub capacity: usize,
    pub cpu_frequency_mhz: Vec<f64>,
    pub cpu_usage_percent: Vec<f64>,
    pub ram_used_gb: Vec<f64>,
}

/// Everything one poll observed. Owned by whoever received it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub sequence: u64,
    pub cpu_frequency_mhz: f64,
    pub cpu_usage_percent: f64,
    pub ram_used_gb: f64,
    pub ram_available_gb: f64,
    pub ram_total_gb: f64,
    pub disks: BTreeMap<String, DiskStatus>,
    pub history: SeriesHistory,
}
