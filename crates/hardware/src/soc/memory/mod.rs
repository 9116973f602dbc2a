//! System Memory.
//!
//! This module implements the LS-8 main memory. It provides:
//! 1. **Storage:** 256 byte-wide cells addressed `0x00..=0xFF`, zero-filled at construction.
//! 2. **Validation:** Every access outside the address space fails with
//!    `CpuError::InvalidAddress` instead of wrapping.
//! 3. **Image loading:** Bulk placement of a decoded program at a base address.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::CpuError;

/// Flat LS-8 RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Creates a zero-filled RAM.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::InvalidAddress` if `addr >= 256`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, CpuError> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(CpuError::InvalidAddress { address: addr })
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::InvalidAddress` if `addr >= 256`.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), CpuError> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(CpuError::InvalidAddress { address: addr })?;
        *cell = val;
        Ok(())
    }

    /// Copies `data` into memory starting at `base`.
    ///
    /// Nothing is written if the image does not fit.
    ///
    /// # Errors
    ///
    /// Returns `CpuError::InvalidAddress` carrying the first address past the end of
    /// memory that the image would have touched.
    pub fn load_at(&mut self, base: usize, data: &[u8]) -> Result<(), CpuError> {
        let end = base + data.len();
        if end > MEMORY_SIZE {
            return Err(CpuError::InvalidAddress {
                address: base.max(MEMORY_SIZE),
            });
        }
        self.cells[base..end].copy_from_slice(data);
        Ok(())
    }

    /// The whole address space as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
