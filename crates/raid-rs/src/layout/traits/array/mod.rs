//! The uniform contract every array layout exposes to its callers.

use crate::error::Result;

/// RaidArray describes the read/write contract shared by all layouts.
///
/// Callers stay agnostic to which layout is active: a layout is selected at
/// construction (see [`crate::layout::LayoutKind`]) and driven exclusively
/// through this trait. Calls are synchronous and blocking; any failure
/// surfaces to the immediate caller with no retry.
pub trait RaidArray: Send + Sync {
    /// `initialize` creates and opens the array's backing disks, named
    /// `disk{0..N-1}.dat` in the configured directory.
    ///
    /// # Errors
    /// Returns the first disk-creation failure.
    fn initialize(&mut self) -> Result<()>;

    /// `write` stores one logical block. On parity layouts the stripe is
    /// fully consistent by the time the call returns.
    ///
    /// # Errors
    /// Returns [`crate::Error::SizeMismatch`] if `data` is not exactly one
    /// block long (checked before any disk I/O),
    /// [`crate::Error::NotInitialized`] before `initialize`, and disk
    /// failures unchanged. A failed multi-disk write leaves already
    /// completed sub-writes in place.
    fn write(&self, block_num: u64, data: &[u8]) -> Result<()>;

    /// `read` returns one logical block. Blocks never written read as
    /// zeros; reading past the end of a backing file is not an error.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotInitialized`] before `initialize`, and
    /// disk failures unchanged.
    fn read(&self, block_num: u64) -> Result<Vec<u8>>;

    /// `clean_up` closes every disk and removes its backing file.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotInitialized`] if the array was never
    /// initialized, and the first deletion failure otherwise.
    fn clean_up(&mut self) -> Result<()>;

    /// `effective_capacity` returns the usable block count after
    /// redundancy overhead.
    fn effective_capacity(&self) -> u64;

    /// `name` identifies the layout in reports.
    fn name(&self) -> &'static str;
}
