//! Rotating-parity layout: the parity disk changes from stripe to stripe.


use crate::capacity;
use crate::error::{Error, Result};
use crate::layout::stripe_locks::StripeLocks;
use crate::layout::traits::array::RaidArray;
use crate::layout::{ArrayConfig, LayoutKind, geometry};
use crate::parity;
use crate::retention::array::DiskArray;

/// RotatingParity stripes data like [`crate::layout::dedicated`] but moves
/// the parity block to a different disk on every stripe, spreading parity
/// write load across the whole array instead of funnelling it through one
/// disk.
pub struct RotatingParity {
    config: ArrayConfig,
    disks: Option<DiskArray>,
    stripe_locks: StripeLocks,
}

impl RotatingParity {
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

    fn disks(&self) -> Result<&DiskArray> {
        self.disks.as_ref().ok_or(Error::NotInitialized)
    }
}

impl RaidArray for RotatingParity {
    fn initialize(&mut self) -> Result<()> {
        self.disks = Some(DiskArray::create(&self.config)?);
        Ok(())
    }

    fn write(&self, block_num: u64, data: &[u8]) -> Result<()> {
        self.config.check_block(data)?;
        let disks = self.disks()?;
        let n = self.config.disks;

        let loc = geometry::rotating_location(block_num, n);
        let stripe = loc.offset;
        let parity_disk = geometry::rotating_parity_disk(stripe, n);

        // Same hazard as the dedicated layout: the recompute reads sibling
        // disks, so same-stripe writers must be serialized.
        let guard = self.stripe_locks.guard(stripe);
        let _held = guard.lock();

        disks.disk(loc.disk).write_block(stripe, data)?;

        // XOR the input block with every other disk in the stripe except
        // the one holding this stripe's parity.
        let mut parity_block = data.to_vec();
        for i in (0..n).filter(|&i| i != parity_disk && i != loc.disk) {
            let sibling = disks.disk(i).read_block(stripe)?;
            parity::xor_into(&mut parity_block, &sibling);
        }
        disks.disk(parity_disk).write_block(stripe, &parity_block)
    }

    fn read(&self, block_num: u64) -> Result<Vec<u8>> {
        let loc = geometry::rotating_location(block_num, self.config.disks);
        self.disks()?.disk(loc.disk).read_block(loc.offset)
    }

    fn clean_up(&mut self) -> Result<()> {
        self.disks.take().ok_or(Error::NotInitialized)?.delete_all()
    }

    fn effective_capacity(&self) -> u64 {
        capacity::effective_capacity(
            LayoutKind::RotatingParity,
            self.config.disks,
            self.config.per_disk_blocks,
        )
    }

    fn name(&self) -> &'static str {
        LayoutKind::RotatingParity.name()
    }
}
