use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::Tap;
use crate::error::{Error, Result};

/// Tap backed by a raw memory image mapped at a fixed base address.
///
/// Stands in for a hardware target: reads inside `[base, base + len)` are
/// served from the image, anything else fails like an unmapped bus access.
#[derive(Debug, Clone)]
pub struct ImageTap {
    base: u64,
    image: Vec<u8>,
}

impl ImageTap {
    pub fn new(base: u64, image: Vec<u8>) -> Self {
        Self { base, image }
    }

    /// Load the image from a file
    pub fn open<P: AsRef<Path>>(path: P, base: u64) -> Result<Self> {
        let path = path.as_ref();
        let image = fs::read(path)?;
        info!(
            "Mapped {:?} at 0x{:X} ({} bytes)",
            path,
            base,
            image.len()
        );
        Ok(Self::new(base, image))
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.image.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }

    fn offset_of(&self, address: u64, len: usize) -> Option<usize> {
        let offset = usize::try_from(address.checked_sub(self.base)?).ok()?;
        let end = offset.checked_add(len)?;
        (end <= self.image.len()).then_some(offset)
    }
}

impl Tap for ImageTap {
    fn read(&mut self, address: u64, dest: &mut [u8]) -> Result<()> {
        let Some(offset) = self.offset_of(address, dest.len()) else {
            return Err(Error::Tap {
                address,
                len: dest.len(),
                message: format!(
                    "outside mapped image 0x{:X}..0x{:X}",
                    self.base,
                    self.base as u128 + self.image.len() as u128
                ),
            });
        };
        debug!("Image read at 0x{:X} ({} bytes)", address, dest.len());
        dest.copy_from_slice(&self.image[offset..offset + dest.len()]);
        Ok(())
    }
}
