use std::path::Path;

use sysinfo::{Disks, System};

use super::source::{DiskUsage, MetricsSource, Partition, SourceError, VirtualMemory};

/// `sysinfo`-backed metrics source for the local machine.
pub struct Collector {
    sys: System,
    disks: Disks,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        // CPU usage is a delta between refreshes; this one sets the baseline.
        sys.refresh_cpu_all();
        let disks = Disks::new_with_refreshed_list();
        Collector { sys, disks }
    }
}

impl MetricsSource for Collector {
    fn cpu_frequency_mhz(&mut self) -> Result<Option<f64>, SourceError> {
        self.sys.refresh_cpu_frequency();
        let readings: Vec<u64> = self
            .sys
            .cpus()
            .iter()
            .map(|cpu| cpu.frequency())
            .filter(|&mhz| mhz > 0)
            .collect();
        if readings.is_empty() {
            return Ok(None);
        }
        let sum: u64 = readings.iter().sum();
        Ok(Some(sum as f64 / readings.len() as f64))
    }

    fn cpu_usage_percent(&mut self) -> Result<f64, SourceError> {
        self.sys.refresh_cpu_usage();
        Ok(f64::from(self.sys.global_cpu_usage()))
    }

    fn virtual_memory(&mut self) -> Result<VirtualMemory, SourceError> {
        self.sys.refresh_memory();
        let total_bytes = self.sys.total_memory();
        if total_bytes == 0 {
            return Err(SourceError::Unavailable(
                "total memory reported as zero".to_string(),
            ));
        }
        Ok(VirtualMemory {
            total_bytes,
            used_bytes: self.sys.used_memory(),
            available_bytes: self.sys.available_memory(),
        })
    }

    fn partitions(&mut self) -> Result<Vec<Partition>, SourceError> {
        Ok(self
            .disks
            .list()
            .iter()
            .map(|disk| Partition {
                device: disk.name().to_string_lossy().to_string(),
                mount_point: disk.mount_point().to_path_buf(),
            })
            .collect())
    }

    fn disk_usage(&mut self, mount_point: &Path) -> Result<DiskUsage, SourceError> {
        // sysinfo swallows statvfs failures, so probe the path ourselves first.
        // A statvfs failure after a successful stat still goes unseen: on Linux
        // `Disk::refresh` keeps the previous totals and reports success.
        std::fs::metadata(mount_point).map_err(|err| SourceError::from_io(mount_point, err))?;

        let disk = self
            .disks
            .list_mut()
            .iter_mut()
            .find(|disk| disk.mount_point() == mount_point)
            .ok_or_else(|| SourceError::MountUnavailable {
                mount_point: mount_point.to_path_buf(),
            })?;
        let refreshed = disk.refresh();
        usage_after_refresh(
            mount_point,
            refreshed,
            disk.total_space(),
            disk.available_space(),
        )
    }
}

fn usage_after_refresh(
    mount_point: &Path,
    refreshed: bool,
    total_bytes: u64,
    free_bytes: u64,
) -> Result<DiskUsage, SourceError> {
    if !refreshed {
        return Err(SourceError::Unavailable(format!(
            "failed to refresh disk usage for {}",
            mount_point.display()
        )));
    }
    Ok(DiskUsage {
        used_bytes: total_bytes.saturating_sub(free_bytes),
        free_bytes,
    })
}
