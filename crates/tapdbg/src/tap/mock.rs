//! In-memory tap for tests.

use std::collections::BTreeMap;

use super::Tap;
use crate::error::{Error, Result};

/// Sparse fake target memory that records every read.
#[derive(Debug, Default)]
pub struct MockTap {
    memory: BTreeMap<u64, u8>,
    fill: u8,
    fail: bool,
    /// `(address, len)` of every read call, in order
    pub reads: Vec<(u64, usize)>,
}

impl MockTap {
    pub fn builder() -> MockTapBuilder {
        MockTapBuilder::default()
    }

    pub fn set_fail(&mut self, fail: bool) {
        self.fail = fail;
    }
}

impl Tap for MockTap {
    fn read(&mut self, address: u64, dest: &mut [u8]) -> Result<()> {
        self.reads.push((address, dest.len()));
        if self.fail {
            return Err(Error::Tap {
                address,
                len: dest.len(),
                message: "mock failure".to_string(),
            });
        }
        for (i, byte) in dest.iter_mut().enumerate() {
            let addr = address.wrapping_add(i as u64);
            *byte = self.memory.get(&addr).copied().unwrap_or(self.fill);
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockTapBuilder {
    memory: BTreeMap<u64, u8>,
    fill: u8,
    fail: bool,
}

impl MockTapBuilder {
    /// Place `bytes` starting at `address`
    pub fn region(mut self, address: u64, bytes: &[u8]) -> Self {
        for (i, b) in bytes.iter().enumerate() {
            self.memory.insert(address.wrapping_add(i as u64), *b);
        }
        self
    }

    /// Value returned for addresses no region covers
    pub fn fill(mut self, value: u8) -> Self {
        self.fill = value;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn build(self) -> MockTap {
        MockTap {
            memory: self.memory,
            fill: self.fill,
            fail: self.fail,
            reads: Vec::new(),
        }
    }
}
