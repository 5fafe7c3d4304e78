//! Dedicated-parity layout: the last disk holds parity for every stripe.


use crate::capacity;
use crate::error::{Error, Result};
use crate::layout::stripe_locks::StripeLocks;
use crate::layout::traits::array::RaidArray;
use crate::layout::{ArrayConfig, LayoutKind, geometry};
use crate::parity;
use crate::retention::array::DiskArray;

/// DedicatedParity stripes data over the first N−1 disks and keeps the XOR
/// parity of each stripe on the fixed last disk. Every write touches the
/// parity disk, which makes it the array's throughput bottleneck.
pub struct DedicatedParity {
    config: ArrayConfig,
    disks: Option<DiskArray>,
    stripe_locks: StripeLocks,
}

impl DedicatedParity {
    /// # Panics
    /// Panics if the configuration has fewer than two disks; a parity
    /// layout needs at least one data disk next to the parity disk.
    #[must_use]
    pub fn new(config: ArrayConfig) -> Self {
        assert!(config.disks >= 2, "parity layouts need at least 2 disks");
        Self {
            config,
            disks: None,
            stripe_locks: StripeLocks::new(),
        }
    }

    const fn data_disks(&self) -> usize {
        self.config.disks - 1
    }

    const fn parity_disk(&self) -> usize {
        self.config.disks - 1
    }

    fn disks(&self) -> Result<&DiskArray> {
        self.disks.as_ref().ok_or(Error::NotInitialized)
    }
}

impl RaidArray for DedicatedParity {
    fn initialize(&mut self) -> Result<()> {
        self.disks = Some(DiskArray::create(&self.config)?);
        Ok(())
    }

    fn write(&self, block_num: u64, data: &[u8]) -> Result<()> {
        self.config.check_block(data)?;
        let disks = self.disks()?;

        let loc = geometry::dedicated_location(block_num, self.data_disks());
        let stripe = loc.offset;

        // The parity recompute below reads every sibling data disk; a
        // concurrent writer in the same stripe would race it and publish
        // stale parity. Hold the stripe guard across both phases.
        let guard = self.stripe_locks.guard(stripe);
        let _held = guard.lock();

        disks.disk(loc.disk).write_block(stripe, data)?;

        // Stripe parity = the just-written block (taken from the input, not
        // re-read) XOR the current content of every other data disk.
        let mut parity_block = data.to_vec();
        for i in (0..self.data_disks()).filter(|&i| i != loc.disk) {
            let sibling = disks.disk(i).read_block(stripe)?;
            parity::xor_into(&mut parity_block, &sibling);
        }
        disks.disk(self.parity_disk()).write_block(stripe, &parity_block)
    }

    fn read(&self, block_num: u64) -> Result<Vec<u8>> {
        // Parity is never consulted on the read path.
        let loc = geometry::dedicated_location(block_num, self.data_disks());
        self.disks()?.disk(loc.disk).read_block(loc.offset)
    }

    fn clean_up(&mut self) -> Result<()> {
        self.disks.take().ok_or(Error::NotInitialized)?.delete_all()
    }

    fn effective_capacity(&self) -> u64 {
        capacity::effective_capacity(
            LayoutKind::DedicatedParity,
            self.config.disks,
            self.config.per_disk_blocks,
        )
    }

    fn name(&self) -> &'static str {
        LayoutKind::DedicatedParity.name()
    }
}
