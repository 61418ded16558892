//! Target access port: the transport used to reach target memory.

mod image;

#[cfg(test)]
pub mod mock;

pub use image::ImageTap;

#[cfg(test)]
pub use mock::{MockTap, MockTapBuilder};

use crate::error::Result;

/// Raw memory access to a target device.
///
/// Implementations block until the read completes. Timeouts and retries
/// belong to the implementation, not to callers.
pub trait Tap {
    /// Fill `dest` with target memory starting at `address`.
    ///
    /// On error the contents of `dest` are unspecified.
    fn read(&mut self, address: u64, dest: &mut [u8]) -> Result<()>;
}

impl<T: Tap + ?Sized> Tap for &mut T {
    fn read(&mut self, address: u64, dest: &mut [u8]) -> Result<()> {
        (**self).read(address, dest)
    }
}

impl<T: Tap + ?Sized> Tap for Box<T> {
    fn read(&mut self, address: u64, dest: &mut [u8]) -> Result<()> {
        (**self).read(address, dest)
    }
}
