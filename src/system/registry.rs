use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::source::Partition;

/// Device identifier to mount point, captured once at startup.
///
/// Partitions are assumed stable for the process lifetime; a device that
/// appears later is not picked up.
#[derive(Clone, Debug, Default)]
pub struct PartitionRegistry {
    mounts: BTreeMap<String, PathBuf>,
}

impl PartitionRegistry {
    pub fn from_partitions(partitions: Vec<Partition>) -> Self {
        let mut mounts = BTreeMap::new();
        for partition in partitions {
            let device = if partition.device.is_empty() {
                partition.mount_point.display().to_string()
            } else {
                partition.device
            };
            // Bind mounts and subvolumes repeat the device; keep the first mount.
            mounts.entry(device).or_insert(partition.mount_point);
        }
        Self { mounts }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.mounts
            .iter()
            .map(|(device, mount)| (device.as_str(), mount.as_path()))
    }

    pub fn mount_point(&self, device: &str) -> Option<&Path> {
        self.mounts.get(device).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}
