//! Prelude module for convenient imports
//!
//! ```ignore
//! use tapdbg::prelude::*;
//! ```

pub use crate::attribute::Attribute;
pub use crate::command::{CmdRead, Command};
pub use crate::config::DebuggerConfig;
pub use crate::error::{Error, Result};
pub use crate::invocation::Invocation;
pub use crate::tap::{ImageTap, Tap};
