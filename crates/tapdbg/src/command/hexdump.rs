//! Row-aligned hex dump of a memory window.
//!
//! # Output Format
//!
//! One line per 8-byte row. Bytes are shown in reverse address order within
//! the row, so the rightmost column is the lowest address. Addresses of the
//! row that lie outside the requested window print as `..`.
//!
//! ```text
//! [0000000000000000]:  .. .. .. .. 04 03 02 01
//! ```

use std::fmt;

/// Bytes per display row
pub const ROW_BYTES: u64 = 8;

/// Characters per formatted row: header, 8 cells, newline
pub const ROW_TEXT_LEN: usize = 20 + 3 * ROW_BYTES as usize + 1;

const MASK: u128 = ROW_BYTES as u128 - 1;

/// Display adapter rendering `data`, read from `addr`, as aligned rows.
///
/// Arithmetic is done in 128 bits so a window ending at the top of the
/// address space still gets its last row. Row headers wrap to 64 bits the
/// way target addresses do.
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a> {
    addr: u64,
    data: &'a [u8],
}

impl<'a> HexDump<'a> {
    pub fn new(addr: u64, data: &'a [u8]) -> Self {
        Self { addr, data }
    }

    /// Rounded-out row range `[row_start, row_end)`; never empty
    fn row_range(&self) -> (u128, u128) {
        let end = self.addr as u128 + self.data.len() as u128;
        let row_start = self.addr as u128 & !MASK;
        let row_end = (end + MASK) & !MASK;
        (row_start, row_end.max(row_start + ROW_BYTES as u128))
    }

    /// Number of rows the dump spans
    pub fn rows(&self) -> usize {
        let (row_start, row_end) = self.row_range();
        ((row_end - row_start) / ROW_BYTES as u128) as usize
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.addr as u128;
        let window = start..start + self.data.len() as u128;
        let (row_start, row_end) = self.row_range();

        for i in row_start..row_end {
            let pos = i & MASK;
            if pos == 0 {
                write!(f, "[{:016x}]: ", i as u64)?;
            }

            let inv_i = (i & !MASK) | (MASK - pos);
            if window.contains(&inv_i) {
                write!(f, " {:02x}", self.data[(inv_i - start) as usize])?;
            } else {
                f.write_str(" ..")?;
            }

            if pos == MASK {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Format `data`, read from `addr`, as a row-aligned hex dump
pub fn format_rows(addr: u64, data: &[u8]) -> String {
    HexDump::new(addr, data).to_string()
}
