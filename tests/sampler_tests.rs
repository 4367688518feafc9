mod common;

use common::{FakeSource, GB};
use telemon::system::sampler::Sampler;
use telemon::system::snapshot::DiskStatus;
use telemon::system::source::SourceError;

fn two_disk_source() -> FakeSource {
    FakeSource::new()
        .with_disk("/dev/sda1", "/", 100, 400)
        .with_disk("/dev/x", "/restricted", 1, 1)
}

#[test]
fn snapshot_carries_converted_readings() {
    let source = two_disk_source();
    let mut sampler = Sampler::new(source, 30).unwrap();

    let snapshot = sampler.poll().unwrap();

    assert_eq!(snapshot.sequence, 0);
    assert_eq!(snapshot.cpu_frequency_mhz, 2400.0);
    assert_eq!(snapshot.cpu_usage_percent, 12.5);
    assert_eq!(snapshot.ram_total_gb, 16.0);
    assert_eq!(snapshot.ram_used_gb, 4.0);
    assert_eq!(snapshot.ram_available_gb, 12.0);
    assert_eq!(
        snapshot.disks["/dev/sda1"],
        DiskStatus::Usage {
            used_gb: 100.0,
            free_gb: 400.0
        }
    );
    assert_eq!(snapshot.history.capacity, 30);
    assert_eq!(snapshot.history.cpu_frequency_mhz, vec![2400.0]);
    assert_eq!(snapshot.history.cpu_usage_percent, vec![12.5]);
    assert_eq!(snapshot.history.ram_used_gb, vec![4.0]);
}

#[test]
fn missing_frequency_records_zero() {
    let source = FakeSource::new();
    source.with(|s| s.frequency = None);
    let mut sampler = Sampler::new(source, 30).unwrap();

    let snapshot = sampler.poll().unwrap();

    assert_eq!(snapshot.cpu_frequency_mhz, 0.0);
    assert_eq!(snapshot.history.cpu_frequency_mhz, vec![0.0]);
}

#[test]
fn permission_denied_is_isolated_to_one_device() {
    let source = two_disk_source();
    source.with(|s| {
        s.denied.insert("/restricted".into());
    });
    let mut sampler = Sampler::new(source, 30).unwrap();

    let snapshot = sampler.poll().unwrap();

    assert_eq!(snapshot.disks["/dev/x"], DiskStatus::PermissionDenied);
    assert_eq!(
        snapshot.disks["/dev/sda1"],
        DiskStatus::Usage {
            used_gb: 100.0,
            free_gb: 400.0
        }
    );
}

#[test]
fn every_registered_device_has_exactly_one_status() {
    let source = two_disk_source().with_disk("/dev/sdc1", "/media/backup", 0, 250);
    source.with(|s| {
        s.denied.insert("/media/backup".into());
    });
    let mut sampler = Sampler::new(source, 30).unwrap();
    let registered: Vec<String> = sampler
        .registry()
        .iter()
        .map(|(device, _)| device.to_string())
        .collect();

    for _ in 0..3 {
        let snapshot = sampler.poll().unwrap();
        let reported: Vec<String> = snapshot.disks.keys().cloned().collect();
        assert_eq!(reported, registered);
        for status in snapshot.disks.values() {
            if let DiskStatus::Usage { used_gb, free_gb } = status {
                assert!(*used_gb >= 0.0 && *free_gb >= 0.0);
            }
        }
    }
}

#[test]
fn ram_total_is_captured_once() {
    let source = FakeSource::new();
    let handle = source.clone();
    let mut sampler = Sampler::new(source, 30).unwrap();

    let first = sampler.poll().unwrap();
    handle.with(|s| {
        s.memory.total_bytes = 32 * GB;
        s.memory.used_bytes = 10 * GB;
        s.memory.available_bytes = 6 * GB;
    });
    let second = sampler.poll().unwrap();

    assert_eq!(first.ram_total_gb, 16.0);
    assert_eq!(second.ram_total_gb, 16.0);
    assert_eq!(second.ram_used_gb, 10.0);
    assert_eq!(second.ram_available_gb, 6.0);
    assert_eq!(second.history.ram_used_gb, vec![4.0, 10.0]);
}

#[test]
fn partitions_added_after_startup_are_ignored() {
    let source = FakeSource::new().with_disk("/dev/sda1", "/", 10, 10);
    let handle = source.clone();
    let mut sampler = Sampler::new(source, 30).unwrap();

    let _ = handle.clone().with_disk("/dev/sdz1", "/mnt/usb", 1, 1);
    let snapshot = sampler.poll().unwrap();

    assert_eq!(snapshot.disks.len(), 1);
    assert!(!snapshot.disks.contains_key("/dev/sdz1"));
}

#[test]
fn other_disk_errors_fail_the_poll_without_touching_buffers() {
    let source = two_disk_source();
    let handle = source.clone();
    let mut sampler = Sampler::new(source, 30).unwrap();

    handle.with(|s| {
        s.vanished.insert("/".into());
    });
    let err = sampler.poll().unwrap_err();
    assert!(matches!(err, SourceError::MountUnavailable { .. }));

    handle.with(|s| {
        s.vanished.clear();
    });
    let snapshot = sampler.poll().unwrap();
    assert_eq!(snapshot.sequence, 0);
    assert_eq!(snapshot.history.cpu_usage_percent.len(), 1);
}

#[test]
fn buffers_keep_only_the_latest_samples() {
    let source = FakeSource::new();
    let handle = source.clone();
    let mut sampler = Sampler::new(source, 3).unwrap();

    let mut last = None;
    for usage in [1.0, 2.0, 3.0, 4.0, 5.0] {
        handle.with(|s| s.usage = usage);
        last = Some(sampler.poll().unwrap());
    }

    let snapshot = last.unwrap();
    assert_eq!(snapshot.history.cpu_usage_percent, vec![3.0, 4.0, 5.0]);
    assert_eq!(snapshot.history.cpu_frequency_mhz.len(), 3);
    assert_eq!(snapshot.history.ram_used_gb.len(), 3);
    assert_eq!(snapshot.sequence, 4);
}

#[test]
fn snapshot_is_detached_from_sampler_state() {
    let source = FakeSource::new();
    let mut sampler = Sampler::new(source, 30).unwrap();

    let mut first = sampler.poll().unwrap();
    first.history.cpu_usage_percent.clear();
    let second = sampler.poll().unwrap();

    assert_eq!(second.history.cpu_usage_percent, vec![12.5, 12.5]);
}

#[test]
fn oversized_history_length_still_polls() {
    let mut sampler = Sampler::new(FakeSource::new(), usize::MAX).unwrap();

    let snapshot = sampler.poll().unwrap();

    assert_eq!(snapshot.history.capacity, usize::MAX);
    assert_eq!(snapshot.history.cpu_usage_percent, vec![12.5]);
}
