//! Striped layout: blocks fan out round-robin, no redundancy.


use crate::capacity;
use crate::error::{Error, Result};
use crate::layout::traits::array::RaidArray;
use crate::layout::{ArrayConfig, LayoutKind, geometry};
use crate::retention::array::DiskArray;

/// Striped spreads logical blocks across every disk in turn. All raw
/// capacity is usable; losing any disk loses data.
pub struct Striped {
    config: ArrayConfig,
    disks: Option<DiskArray>,
}

impl Striped {
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

impl RaidArray for Striped {
    fn initialize(&mut self) -> Result<()> {
        self.disks = Some(DiskArray::create(&self.config)?);
        Ok(())
    }

    fn write(&self, block_num: u64, data: &[u8]) -> Result<()> {
        self.config.check_block(data)?;
        let loc = geometry::striped_location(block_num, self.config.disks);
        self.disks()?.disk(loc.disk).write_block(loc.offset, data)
    }

    fn read(&self, block_num: u64) -> Result<Vec<u8>> {
        let loc = geometry::striped_location(block_num, self.config.disks);
        self.disks()?.disk(loc.disk).read_block(loc.offset)
    }

    fn clean_up(&mut self) -> Result<()> {
        self.disks.take().ok_or(Error::NotInitialized)?.delete_all()
    }

    fn effective_capacity(&self) -> u64 {
        capacity::effective_capacity(
            LayoutKind::Striped,
            self.config.disks,
            self.config.per_disk_blocks,
        )
    }

    fn name(&self) -> &'static str {
        LayoutKind::Striped.name()
    }
}
