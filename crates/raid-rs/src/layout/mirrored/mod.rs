//! Mirrored layout: every disk holds an identical copy of every block.


use crate::capacity;
use crate::error::{Error, Result};
use crate::layout::traits::array::RaidArray;
use crate::layout::{ArrayConfig, LayoutKind};
use crate::retention::array::DiskArray;

/// Reads are served from this disk; there is no read balancing and no
/// cross-mirror comparison.
const PRIMARY_DISK: usize = 0;

/// Mirrored duplicates each block onto every disk at the same offset.
pub struct Mirrored {
    config: ArrayConfig,
    disks: Option<DiskArray>,
}

impl Mirrored {
    #[must_use]
    pub fn new(config: ArrayConfig) -> Self {
        Self {
            config,
            disks: None,
        }
    }

    fn disks(&self) -> Result<&DiskArray> {
        self.disks.as_ref().ok_or(Error::NotInitialized)
    }
}

impl RaidArray for Mirrored {
    fn initialize(&mut self) -> Result<()> {
        self.disks = Some(DiskArray::create(&self.config)?);
        Ok(())
    }

    fn write(&self, block_num: u64, data: &[u8]) -> Result<()> {
        self.config.check_block(data)?;

        // Sequential copies; the first failure aborts and mirrors written
        // so far are left in place.
        for disk in self.disks()?.iter() {
            disk.write_block(block_num, data)?;
        }
        Ok(())
    }

    fn read(&self, block_num: u64) -> Result<Vec<u8>> {
        self.disks()?.disk(PRIMARY_DISK).read_block(block_num)
    }

    fn clean_up(&mut self) -> Result<()> {
        self.disks.take().ok_or(Error::NotInitialized)?.delete_all()
    }

    fn effective_capacity(&self) -> u64 {
        capacity::effective_capacity(
            LayoutKind::Mirrored,
            self.config.disks,
            self.config.per_disk_blocks,
        )
    }

    fn name(&self) -> &'static str {
        LayoutKind::Mirrored.name()
    }
}
