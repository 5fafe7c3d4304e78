use crate::capacity::{effective_capacity, overhead_percent};
use crate::layout::LayoutKind;

const DISKS: usize = 5;
const PER_DISK_BLOCKS: u64 = 10_000;

#[test]
fn effective_capacity_matches_layout_formulas() {
    assert_eq!(
        effective_capacity(LayoutKind::Striped, DISKS, PER_DISK_BLOCKS),
        50_000
    );
    assert_eq!(
        effective_capacity(LayoutKind::Mirrored, DISKS, PER_DISK_BLOCKS),
        10_000
    );
    assert_eq!(
        effective_capacity(LayoutKind::DedicatedParity, DISKS, PER_DISK_BLOCKS),
        40_000
    );
    assert_eq!(
        effective_capacity(LayoutKind::RotatingParity, DISKS, PER_DISK_BLOCKS),
        40_000
    );
}

#[test]
fn overhead_is_complement_of_effective_share() {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;

    assert!(close(
        overhead_percent(LayoutKind::Striped, DISKS, PER_DISK_BLOCKS),
        0.0
    ));
    assert!(close(
        overhead_percent(LayoutKind::Mirrored, DISKS, PER_DISK_BLOCKS),
        80.0
    ));
    assert!(close(
        overhead_percent(LayoutKind::DedicatedParity, DISKS, PER_DISK_BLOCKS),
        20.0
    ));
    assert!(close(
        overhead_percent(LayoutKind::RotatingParity, DISKS, PER_DISK_BLOCKS),
        20.0
    ));
}

#[test]
fn zero_raw_capacity_reports_zero_overhead() {
    assert!(overhead_percent(LayoutKind::Mirrored, 5, 0).abs() < f64::EPSILON);
}
