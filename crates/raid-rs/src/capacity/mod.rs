//! Usable-capacity and overhead formulas for each layout. Pure, no I/O.

#[cfg(test)]
mod capacity_tests;

use crate::layout::LayoutKind;

/// `effective_capacity` returns the usable block count of an array:
/// everything for striping, one disk's worth for mirroring, and all but one
/// disk's worth for the parity layouts.
#[must_use]
pub fn effective_capacity(kind: LayoutKind, disks: usize, per_disk_blocks: u64) -> u64 {
    match kind {
        LayoutKind::Striped => disks as u64 * per_disk_blocks,
        LayoutKind::Mirrored => per_disk_blocks,
        LayoutKind::DedicatedParity | LayoutKind::RotatingParity => {
            (disks as u64 - 1) * per_disk_blocks
        }
    }
}

/// `overhead_percent` returns the share of raw capacity spent on
/// redundancy, in percent of `disks * per_disk_blocks`.
#[must_use]
pub fn overhead_percent(kind: LayoutKind, disks: usize, per_disk_blocks: u64) -> f64 {
    let raw = disks as u64 * per_disk_blocks;
    if raw == 0 {
        return 0.0;
    }
    let effective = effective_capacity(kind, disks, per_disk_blocks);
    100.0 * (1.0 - effective as f64 / raw as f64)
}
