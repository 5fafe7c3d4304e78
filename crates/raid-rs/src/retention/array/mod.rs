//! Device-set management shared by every array layout.


use crate::error::Result;
use crate::layout::ArrayConfig;
use crate::retention::disk::Disk;

/// DiskArray owns the set of simulated disks behind one array layout.
///
/// The set is created whole on `initialize` and consumed whole on
/// `clean_up`; a layout never shares its disks with anything else.
pub struct DiskArray(Vec<Disk>);

impl DiskArray {
    /// `create` opens one backing file per configured disk, named
    /// `disk{i}.dat` inside the configured directory.
    ///
    /// # Errors
    /// The first disk that cannot be created aborts the whole set; disks
    /// opened so far are closed but their files are left in place.
    pub fn create(config: &ArrayConfig) -> Result<Self> {
        let mut disks = Vec::with_capacity(config.disks);
        for i in 0..config.disks {
            disks.push(Disk::create(config.disk_path(i), config.block_size)?);
        }
        Ok(Self(disks))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `disk` returns the device at physical index `i`.
    ///
    /// # Panics
    /// Panics if `i` is outside the configured disk count.
    #[must_use]
    pub fn disk(&self, i: usize) -> &Disk {
        &self.0[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Disk> {
        self.0.iter()
    }

    /// `delete_all` removes every backing file. The first failure aborts
    /// and leaves the remaining files in place.
    ///
    /// # Errors
    /// Returns the first deletion error encountered.
    pub fn delete_all(self) -> Result<()> {
        for disk in self.0 {
            disk.delete()?;
        }
        Ok(())
    }
}
