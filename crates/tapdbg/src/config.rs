//! Debugger configuration.
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! scratch_capacity = 1024
//! max_read_bytes = 1048576
//!
//! [target]
//! image = "firmware.bin"
//! base = 0xfffff000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Initial size of a command's scratch buffer
pub const DEFAULT_SCRATCH_CAPACITY: usize = 1024;

/// Largest byte count one `read` may request (1 MiB)
pub const DEFAULT_MAX_READ_BYTES: usize = 1 << 20;

/// Target the debugger attaches to
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Raw memory image served by the image tap
    pub image: Option<PathBuf>,
    /// Address the first image byte is mapped at
    pub base: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DebuggerConfig {
    pub scratch_capacity: usize,
    pub max_read_bytes: usize,
    pub target: TargetConfig,
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
            max_read_bytes: DEFAULT_MAX_READ_BYTES,
            target: TargetConfig::default(),
        }
    }
}

impl DebuggerConfig {
    pub fn builder() -> DebuggerConfigBuilder {
        DebuggerConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }
}

/// Builder for DebuggerConfig
#[derive(Debug, Clone, Default)]
pub struct DebuggerConfigBuilder {
    scratch_capacity: Option<usize>,
    max_read_bytes: Option<usize>,
    image: Option<PathBuf>,
    base: Option<u64>,
}

impl DebuggerConfigBuilder {
    pub fn scratch_capacity(mut self, bytes: usize) -> Self {
        self.scratch_capacity = Some(bytes);
        self
    }

    pub fn max_read_bytes(mut self, bytes: usize) -> Self {
        self.max_read_bytes = Some(bytes);
        self
    }

    pub fn image<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.image = Some(path.into());
        self
    }

    pub fn base(mut self, address: u64) -> Self {
        self.base = Some(address);
        self
    }

    pub fn build(self) -> DebuggerConfig {
        let default = DebuggerConfig::default();
        DebuggerConfig {
            scratch_capacity: self.scratch_capacity.unwrap_or(default.scratch_capacity),
            max_read_bytes: self.max_read_bytes.unwrap_or(default.max_read_bytes),
            target: TargetConfig {
                image: self.image.or(default.target.image),
                base: self.base.unwrap_or(default.target.base),
            },
        }
    }
}
