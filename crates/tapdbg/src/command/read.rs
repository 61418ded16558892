//! `read <addr> [bytes]`: read target memory.

use tracing::{debug, warn};

use super::Command;
use super::hexdump::format_rows;
use crate::attribute::Attribute;
use crate::config::{DEFAULT_MAX_READ_BYTES, DEFAULT_SCRATCH_CAPACITY, DebuggerConfig};
use crate::error::{Error, Result};
use crate::invocation::Invocation;
use crate::tap::Tap;

/// Result value left in place when a read does not happen
pub const READ_FAILED: u64 = u64::MAX;

/// Byte count used when the invocation omits one
pub const DEFAULT_READ_BYTES: usize = 4;

/// Scratch headroom relative to the requested byte count
const SCRATCH_FACTOR: usize = 4;

const NAME: &str = "read";
const BRIEF: &str = "Read memory";
const DETAIL: &str = "\
Description:
    32-bits aligned memory reading. Default bytes = 4 bytes.
Usage:
    read <addr> <bytes>
Example:
    read 0xfffff004 16
    read 0xfffff004
";

/// Memory read command.
///
/// Owns a scratch buffer that is reused by every call and only ever grows.
/// Calls must not overlap, which `&mut self` on [`exec`](Command::exec)
/// already enforces.
pub struct CmdRead<T> {
    tap: T,
    scratch: Vec<u8>,
    max_bytes: usize,
}

impl<T: Tap> CmdRead<T> {
    pub fn new(tap: T) -> Self {
        Self::with_capacity(tap, DEFAULT_SCRATCH_CAPACITY)
    }

    pub fn with_capacity(tap: T, capacity: usize) -> Self {
        Self {
            tap,
            scratch: vec![0; capacity],
            max_bytes: DEFAULT_MAX_READ_BYTES,
        }
    }

    pub fn from_config(tap: T, config: &DebuggerConfig) -> Self {
        Self::with_capacity(tap, config.scratch_capacity).max_bytes(config.max_read_bytes)
    }

    /// Limit the byte count a single invocation may request
    pub fn max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Current scratch buffer size in bytes
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.len()
    }

    pub fn tap(&self) -> &T {
        &self.tap
    }

    pub fn tap_mut(&mut self) -> &mut T {
        &mut self.tap
    }

    pub fn into_tap(self) -> T {
        self.tap
    }

    /// Largest request served; never below what the scratch buffer already holds
    fn read_limit(&self) -> usize {
        self.max_bytes.max(self.scratch.len() / SCRATCH_FACTOR)
    }

    fn ensure_scratch(&mut self, bytes: usize) -> Result<()> {
        let limit = self.read_limit();
        if bytes > limit {
            return Err(Error::InvalidArgument(format!(
                "byte count {} exceeds the limit of {}",
                bytes, limit
            )));
        }
        let needed = bytes.checked_mul(SCRATCH_FACTOR).ok_or_else(|| {
            Error::InvalidArgument(format!("byte count {} is too large", bytes))
        })?;
        if needed > self.scratch.len() {
            debug!(
                "Growing read scratch buffer: {} -> {} bytes",
                self.scratch.len(),
                needed
            );
            self.scratch.resize(needed, 0);
        }
        Ok(())
    }

    fn invalid(args: &Invocation) -> Error {
        Error::InvalidInvocation {
            expected: "read <addr> [bytes]".to_string(),
            args: args.to_string(),
        }
    }
}

/// Address and byte count of a validated invocation
fn read_request(args: &Invocation) -> Result<(u64, usize)> {
    let addr = args[1].to_u64()?;
    let bytes = match args.get(2) {
        Some(count) => {
            let count = count.to_u64()?;
            usize::try_from(count).map_err(|_| {
                Error::InvalidArgument(format!("byte count {} is too large", count))
            })?
        }
        None => DEFAULT_READ_BYTES,
    };
    Ok((addr, bytes))
}

impl<T: Tap> Command for CmdRead<T> {
    fn name(&self) -> &str {
        NAME
    }

    fn brief(&self) -> &str {
        BRIEF
    }

    fn detail(&self) -> &str {
        DETAIL
    }

    fn is_valid(&self, args: &Invocation) -> bool {
        args.name() == Some(NAME) && matches!(args.len(), 2 | 3)
    }

    fn exec(&mut self, args: &Invocation, res: &mut Attribute) -> Result<()> {
        *res = Attribute::UInt64(READ_FAILED);
        if !self.is_valid(args) {
            return Err(Self::invalid(args));
        }

        let (addr, bytes) = read_request(args)?;
        self.ensure_scratch(bytes)?;

        debug!("Reading {} bytes at 0x{:X}", bytes, addr);
        let dest = &mut self.scratch[..bytes];
        if let Err(e) = self.tap.read(addr, dest) {
            warn!("Memory read failed: {}", e);
            return Err(e);
        }

        *res = Attribute::data(dest);
        Ok(())
    }

    fn format(&mut self, args: &Invocation, res: &Attribute) -> Result<String> {
        if !self.is_valid(args) {
            return Err(Self::invalid(args));
        }

        let (addr, bytes) = read_request(args)?;
        let data = res.as_data()?;
        if data.len() != bytes {
            return Err(Error::ResultLength {
                expected: bytes,
                actual: data.len(),
            });
        }
        Ok(format_rows(addr, data))
    }
}
