//! Array layout implementations for the supported RAID modes.

pub mod dedicated;
pub mod geometry;
pub mod mirrored;
pub mod rotating;
pub mod stripe_locks;
pub mod striped;
pub mod traits;


use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::layout::traits::array::RaidArray;

/// Default block size in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// ArrayConfig fixes the shape of an array before initialization. It is
/// passed at construction and never changes afterwards.
#[derive(Clone, Debug)]
pub struct ArrayConfig {
    /// Directory that receives the `disk{i}.dat` backing files.
    pub disk_dir: PathBuf,
    /// Number of simulated disks in the array.
    pub disks: usize,
    /// Size of one block in bytes.
    pub block_size: usize,
    /// Usable blocks per disk, used by the capacity model.
    pub per_disk_blocks: u64,
}

impl ArrayConfig {
    /// `disk_path` returns the deterministic backing-file path for disk `i`.
    #[must_use]
    pub fn disk_path(&self, i: usize) -> PathBuf {
        self.disk_dir.join(format!("disk{i}.dat"))
    }

    /// `check_block` validates a write operand against the configured block
    /// size, before any disk is touched.
    pub(crate) fn check_block(&self, data: &[u8]) -> Result<()> {
        if data.len() == self.block_size {
            Ok(())
        } else {
            Err(Error::SizeMismatch {
                expected: self.block_size,
                actual: data.len(),
            })
        }
    }
}

/// LayoutKind selects one of the supported array layouts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LayoutKind {
    Striped,
    Mirrored,
    DedicatedParity,
    RotatingParity,
}

impl LayoutKind {
    pub const ALL: [Self; 4] = [
        Self::Striped,
        Self::Mirrored,
        Self::DedicatedParity,
        Self::RotatingParity,
    ];

    /// `name` identifies the layout in reports and device-file listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Striped => "striped",
            Self::Mirrored => "mirrored",
            Self::DedicatedParity => "dedicated-parity",
            Self::RotatingParity => "rotating-parity",
        }
    }

    /// `build` constructs the selected layout over the provided
    /// configuration. The array must still be initialized before use.
    #[must_use]
    pub fn build(self, config: ArrayConfig) -> Box<dyn RaidArray> {
        match self {
            Self::Striped => Box::new(striped::Striped::new(config)),
            Self::Mirrored => Box::new(mirrored::Mirrored::new(config)),
            Self::DedicatedParity => Box::new(dedicated::DedicatedParity::new(config)),
            Self::RotatingParity => Box::new(rotating::RotatingParity::new(config)),
        }
    }
}
