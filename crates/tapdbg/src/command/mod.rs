//! Debugger commands.
//!
//! A command validates its own arguments, executes against the target, and
//! formats its result for display. Dispatch by name is left to the caller.

pub mod hexdump;
mod read;

pub use hexdump::{HexDump, format_rows};
pub use read::{CmdRead, DEFAULT_READ_BYTES, READ_FAILED};

use crate::attribute::Attribute;
use crate::error::Result;
use crate::invocation::Invocation;

/// Capability set of a single debugger command.
pub trait Command {
    /// Name the command is invoked by
    fn name(&self) -> &str;

    /// One-line description
    fn brief(&self) -> &str;

    /// Usage and examples
    fn detail(&self) -> &str;

    /// Check that `args` names this command and has an acceptable shape.
    fn is_valid(&self, args: &Invocation) -> bool;

    /// Execute the command, storing its result in `res`.
    ///
    /// `res` is always overwritten, with a failure value when this returns
    /// an error.
    fn exec(&mut self, args: &Invocation, res: &mut Attribute) -> Result<()>;

    /// Render a result produced by [`exec`](Command::exec) for display.
    fn format(&mut self, args: &Invocation, res: &Attribute) -> Result<String>;
}
