use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("permission denied reading {}", mount_point.display())]
    PermissionDenied { mount_point: PathBuf },

    #[error("mount point {} is no longer available", mount_point.display())]
    MountUnavailable { mount_point: PathBuf },

    #[error("failed to read {}", mount_point.display())]
    Io {
        mount_point: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("metric unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    /// Classify an I/O failure on `mount_point`, keeping permission denials distinct.
    pub fn from_io(mount_point: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied {
                mount_point: mount_point.to_path_buf(),
            },
            io::ErrorKind::NotFound => SourceError::MountUnavailable {
                mount_point: mount_point.to_path_buf(),
            },
            _ => SourceError::Io {
                mount_point: mount_point.to_path_buf(),
                source: err,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VirtualMemory {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    pub device: String,
    pub mount_point: PathBuf,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiskUsage {
    pub used_bytes: u64,
    pub free_bytes: u64,
}

/// Raw OS-level readings consumed by the sampler.
///
/// Methods take `&mut self` because real backends refresh cached kernel
/// state before answering.
pub trait MetricsSource {
    /// Current clock speed in MHz, or `None` when no frequency sensor exists.
    fn cpu_frequency_mhz(&mut self) -> Result<Option<f64>, SourceError>;

    fn cpu_usage_percent(&mut self) -> Result<f64, SourceError>;

    fn virtual_memory(&mut self) -> Result<VirtualMemory, SourceError>;

    fn partitions(&mut self) -> Result<Vec<Partition>, SourceError>;

    /// Fails with [`SourceError::PermissionDenied`] for restricted mounts.
    fn disk_usage(&mut self, mount_point: &Path) -> Result<DiskUsage, SourceError>;
}
