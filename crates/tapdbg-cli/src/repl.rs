//! Interactive command loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use tapdbg::Command;
use tracing::debug;

use crate::session::{Outcome, Session};

const PROMPT: &str = "tapdbg> ";

/// Read command lines from `input` until EOF or `quit`.
///
/// Command errors are printed and the loop continues.
pub fn run<C, R, W>(session: &mut Session<C>, input: R, mut out: W) -> Result<()>
where
    C: Command,
    R: BufRead,
    W: Write,
{
    debug!("Interactive session started");

    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        match session.handle_line(&line?) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Output(text)) => write!(out, "{}", text)?,
            Ok(Outcome::Empty) => {}
            Err(e) => writeln!(out, "Error: {:#}", e)?,
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    debug!("Interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::OutputMode;
    use tapdbg::{CmdRead, ImageTap};

    fn run_script(script: &str) -> String {
        let tap = ImageTap::new(0x0, vec![0x01, 0x02, 0x03, 0x04]);
        let mut session = Session::new(CmdRead::new(tap), OutputMode::Text);
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_script_until_eof() {
        let out = run_script("read 0x0 4\n\nread 0x0 0\n");
        assert_eq!(
            out,
            "tapdbg> [0000000000000000]:  .. .. .. .. 04 03 02 01\n\
             tapdbg> \
             tapdbg> [0000000000000000]:  .. .. .. .. .. .. .. ..\n\
             tapdbg> "
        );
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = run_script("quit\nread 0x0 4\n");
        assert_eq!(out, "tapdbg> ");
    }

    #[test]
    fn test_error_continues() {
        let out = run_script("read 0x100\nread 0x0 1\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("tapdbg> Error: Failed to read 4 bytes"));
        assert_eq!(lines[1], "tapdbg> [0000000000000000]:  .. .. .. .. .. .. .. 01");
    }
}
