#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use telemon::driver::PresentationSink;
use telemon::system::snapshot::MetricSnapshot;
use telemon::system::source::{DiskUsage, MetricsSource, Partition, SourceError, VirtualMemory};

pub const GB: u64 = 1024 * 1024 * 1024;

#[derive(Debug, Default)]
pub struct FakeState {
    pub frequency: Option<f64>,
    pub usage: f64,
    pub memory: VirtualMemory,
    pub partitions: Vec<Partition>,
    pub disks: HashMap<PathBuf, DiskUsage>,
    pub denied: HashSet<PathBuf>,
    pub vanished: HashSet<PathBuf>,
    /// Number of upcoming CPU usage reads that fail.
    pub failing_reads: usize,
    pub usage_reads: Vec<tokio::time::Instant>,
}

/// Scriptable metrics source. Clones share state so a test can keep a handle
/// after moving one into the sampler.
#[derive(Clone, Debug, Default)]
pub struct FakeSource {
    state: Rc<RefCell<FakeState>>,
}

impl FakeSource {
    pub fn new() -> Self {
        let source = Self::default();
        source.with(|s| {
            s.frequency = Some(2400.0);
            s.usage = 12.5;
            s.memory = VirtualMemory {
                total_bytes: 16 * GB,
                used_bytes: 4 * GB,
                available_bytes: 12 * GB,
            };
        });
        source
    }

    pub fn with_disk(self, device: &str, mount: &str, used_gb: u64, free_gb: u64) -> Self {
        self.with(|s| {
            s.partitions.push(Partition {
                device: device.to_string(),
                mount_point: PathBuf::from(mount),
            });
            s.disks.insert(
                PathBuf::from(mount),
                DiskUsage {
                    used_bytes: used_gb * GB,
                    free_bytes: free_gb * GB,
                },
            );
        });
        self
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }
}

impl MetricsSource for FakeSource {
    fn cpu_frequency_mhz(&mut self) -> Result<Option<f64>, SourceError> {
        Ok(self.with(|s| s.frequency))
    }

    fn cpu_usage_percent(&mut self) -> Result<f64, SourceError> {
        self.with(|s| {
            s.usage_reads.push(tokio::time::Instant::now());
            if s.failing_reads > 0 {
                s.failing_reads -= 1;
                return Err(SourceError::Unavailable("cpu counters unreadable".to_string()));
            }
            Ok(s.usage)
        })
    }

    fn virtual_memory(&mut self) -> Result<VirtualMemory, SourceError> {
        Ok(self.with(|s| s.memory))
    }

    fn partitions(&mut self) -> Result<Vec<Partition>, SourceError> {
        Ok(self.with(|s| s.partitions.clone()))
    }

    fn disk_usage(&mut self, mount_point: &Path) -> Result<DiskUsage, SourceError> {
        self.with(|s| {
            if s.denied.contains(mount_point) {
                return Err(SourceError::PermissionDenied {
                    mount_point: mount_point.to_path_buf(),
                });
            }
            if s.vanished.contains(mount_point) {
                return Err(SourceError::MountUnavailable {
                    mount_point: mount_point.to_path_buf(),
                });
            }
            s.disks
                .get(mount_point)
                .copied()
                .ok_or_else(|| SourceError::MountUnavailable {
                    mount_point: mount_point.to_path_buf(),
                })
        })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub snapshots: Vec<MetricSnapshot>,
}

impl PresentationSink for RecordingSink {
    fn render(&mut self, snapshot: MetricSnapshot) {
        self.snapshots.push(snapshot);
    }
}
