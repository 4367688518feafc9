use std::collections::BTreeMap;

use super::history::History;
use super::registry::PartitionRegistry;
use super::snapshot::{DiskStatus, MetricSnapshot, SeriesHistory, bytes_to_gb};
use super::source::{MetricsSource, SourceError};

/// Turns raw source readings into snapshots and owns the rolling series.
pub struct Sampler<S> {
    source: S,
    registry: PartitionRegistry,
    ram_total_gb: f64,
    cpu_frequency: History,
    cpu_usage: History,
    ram_used: History,
    sequence: u64,
}

impl<S: MetricsSource> Sampler<S> {
    /// Captures RAM total and the partition list once; both stay fixed afterwards.
    pub fn new(mut source: S, capacity: usize) -> Result<Self, SourceError> {
        let ram_total_gb = bytes_to_gb(source.virtual_memory()?.total_bytes);
        let registry = PartitionRegistry::from_partitions(source.partitions()?);

        tracing::info!(
            ram_total_gb,
            partitions = registry.len(),
            capacity,
            "sampler initialized"
        );

        Ok(Sampler {
            source,
            registry,
            ram_total_gb,
            cpu_frequency: History::new(capacity),
            cpu_usage: History::new(capacity),
            ram_used: History::new(capacity),
            sequence: 0,
        })
    }

    pub fn registry(&self) -> &PartitionRegistry {
        &self.registry
    }

    pub fn ram_total_gb(&self) -> f64 {
        self.ram_total_gb
    }

    pub fn capacity(&self) -> usize {
        self.cpu_usage.capacity()
    }

    /// Run one poll. Buffers are only touched once every read has succeeded.
    pub fn poll(&mut self) -> Result<MetricSnapshot, SourceError> {
        let _span = tracing::debug_span!("sampler.poll", sequence = self.sequence).entered();

        let cpu_frequency_mhz = self.source.cpu_frequency_mhz()?.unwrap_or(0.0);
        let cpu_usage_percent = self.source.cpu_usage_percent()?;

        let memory = self.source.virtual_memory()?;
        let ram_used_gb = bytes_to_gb(memory.used_bytes);
        let ram_available_gb = bytes_to_gb(memory.available_bytes);

        let disks = self.read_disks()?;

        self.cpu_frequency.push(cpu_frequency_mhz);
        self.cpu_usage.push(cpu_usage_percent);
        self.ram_used.push(ram_used_gb);

        let snapshot = MetricSnapshot {
            sequence: self.sequence,
            cpu_frequency_mhz,
            cpu_usage_percent,
            ram_used_gb,
            ram_available_gb,
            ram_total_gb: self.ram_total_gb,
            disks,
            history: SeriesHistory {
                capacity: self.capacity(),
                cpu_frequency_mhz: self.cpu_frequency.values(),
                cpu_usage_percent: self.cpu_usage.values(),
                ram_used_gb: self.ram_used.values(),
            },
        };
        self.sequence += 1;
        Ok(snapshot)
    }

    fn read_disks(&mut self) -> Result<BTreeMap<String, DiskStatus>, SourceError> {
        let mut disks = BTreeMap::new();
        for (device, mount_point) in self.registry.iter() {
            let status = match self.source.disk_usage(mount_point) {
                Ok(usage) => DiskStatus::Usage {
                    used_gb: bytes_to_gb(usage.used_bytes),
                    free_gb: bytes_to_gb(usage.free_bytes),
                },
                Err(SourceError::PermissionDenied { .. }) => {
                    tracing::debug!(device, mount = %mount_point.display(), "disk usage permission denied");
                    DiskStatus::PermissionDenied
                }
                Err(err) => return Err(err),
            };
            disks.insert(device.to_string(), status);
        }
        Ok(disks)
    }
}
