//! Main Memory.
//!
//! This module provides the flat 256-byte RAM the CPU fetches from and the
//! stack lives in. Every access is bounds-checked: an address past `0xFF`
//! raises [`Fault::AddressOutOfBounds`] instead of wrapping.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::{Fault, LoadError};

/// Byte-addressed main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    data: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates zero-filled memory.
    pub const fn new() -> Self {
        Self {
            data: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// [`Fault::AddressOutOfBounds`] when `addr` is past the end of memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::common::Fault;
    /// use ls8_core::soc::Memory;
    ///
    /// let mem = Memory::new();
    /// assert_eq!(mem.read(0xFF), Ok(0));
    /// assert_eq!(mem.read(0x100), Err(Fault::AddressOutOfBounds { addr: 0x100 }));
    /// ```
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.data
            .get(addr)
            .copied()
            .ok_or(Fault::AddressOutOfBounds { addr })
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// [`Fault::AddressOutOfBounds`] when `addr` is past the end of memory.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        let slot = self
            .data
            .get_mut(addr)
            .ok_or(Fault::AddressOutOfBounds { addr })?;
        *slot = val;
        Ok(())
    }

    /// Copies a program image to the start of memory and zeroes the rest.
    ///
    /// # Errors
    ///
    /// [`LoadError::TooLarge`] when the image does not fit; memory is left untouched.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > MEMORY_SIZE {
            return Err(LoadError::TooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            });
        }
        self.data = [0; MEMORY_SIZE];
        self.data[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// The whole of memory, address `0x00` first.
    pub const fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of addressable bytes.
    pub const fn len(&self) -> usize {
        MEMORY_SIZE
    }

    /// Always `false`; memory has a fixed, non-zero size.
    pub const fn is_empty(&self) -> bool {
        false
    }
}
