//! # tapdbg
//!
//! Target memory inspection for the `tapdbg` debugger.
//!
//! This crate provides:
//! - A typed value container for command arguments and results
//! - Command line parsing into invocations
//! - The [`Tap`] trait for reaching target memory, plus an image-backed tap
//! - The `read` command and its row-aligned hex dump
//! - Configuration loading

pub mod attribute;
pub mod command;
pub mod config;
pub mod error;
pub mod invocation;
pub mod prelude;
pub mod tap;

pub use attribute::{Attribute, AttributeKind};
pub use command::{CmdRead, Command, DEFAULT_READ_BYTES, HexDump, READ_FAILED, format_rows};
pub use config::{DebuggerConfig, DebuggerConfigBuilder, TargetConfig};
pub use error::{Error, Result};
pub use invocation::{Invocation, parse_u64};
pub use tap::{ImageTap, Tap};
