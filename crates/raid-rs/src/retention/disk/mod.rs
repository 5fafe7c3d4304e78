//! A single simulated disk backed by a regular file.


use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::Result;

/// Disk simulates one physical disk on top of a regular file.
///
/// Block `n` lives at byte offset `n * block_size`; the backing file stays
/// sparse beyond the highest block ever written. Every operation takes the
/// disk's lock first, so a seek and the read or write that follows it can
/// never interleave with another operation on the same disk.
pub struct Disk {
    path: PathBuf,
    file: Mutex<File>,
    block_size: usize,
}

impl Disk {
    /// `create` opens (or creates) the backing file for a simulated disk.
    ///
    /// # Errors
    /// Returns an error if the backing file cannot be created or opened.
    pub fn create(path: impl Into<PathBuf>, block_size: usize) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
            block_size,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// `read_block` returns exactly one block, zero-filling any region that
    /// was never written. Reading past the end of the backing file is not an
    /// error.
    ///
    /// # Errors
    /// Returns an error if seeking or reading the backing file fails.
    pub fn read_block(&self, block_num: u64) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.block_size];
        let mut file = self.file.lock();
        file.seek(SeekFrom::Start(block_num * self.block_size as u64))?;

        let mut filled = 0;
        while filled < buf.len() {
            let n = file.read(&mut buf[filled..])?;
            if n == 0 {
                // End of the backing file; the remainder reads as zeros.
                break;
            }
            filled += n;
        }
        Ok(buf)
    }

    /// `write_block` stores exactly one block, then forces it to stable
    /// storage before returning. The flush models the write latency of a
    /// real disk and guarantees the next read observes the write.
    ///
    /// # Errors
    /// Returns an error if seeking, writing, or syncing the backing file
    /// fails.
    pub fn write_block(&self, block_num: u64, data: &[u8]) -> Result<()> {
        debug_assert_eq!(data.len(), self.block_size);
        let mut file = self.file.lock();
        file.seek(SeekFrom::Start(block_num * self.block_size as u64))?;
        file.write_all(data)?;
        file.sync_all()?;
        Ok(())
    }

    /// `delete` closes the disk and removes its backing file.
    ///
    /// # Errors
    /// Returns an error if the backing file cannot be removed.
    pub fn delete(self) -> Result<()> {
        drop(self.file);
        std::fs::remove_file(&self.path)?;
        Ok(())
    }
}
