//! Command line parsing into an ordered argument list.

use std::ops::Index;

use crate::attribute::Attribute;
use crate::error::{Error, Result};

/// Parse an unsigned 64-bit integer, hex with a `0x`/`0X` prefix or decimal.
///
/// `_` separators are ignored.
///
/// # Examples
///
/// ```
/// use tapdbg::parse_u64;
///
/// assert_eq!(parse_u64("0xfffff004").unwrap(), 0xfffff004);
/// assert_eq!(parse_u64("16").unwrap(), 16);
/// assert_eq!(parse_u64("0x1000_0000").unwrap(), 0x1000_0000);
/// ```
pub fn parse_u64(s: &str) -> Result<u64> {
    let cleaned = s.trim().replace('_', "");
    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => cleaned.parse::<u64>(),
    };
    parsed.map_err(|e| Error::InvalidArgument(format!("{:?} is not a number: {}", s, e)))
}

/// Ordered argument list of one command invocation.
///
/// Element 0 is the command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<Attribute>,
}

impl Invocation {
    pub fn new(args: Vec<Attribute>) -> Self {
        Self { args }
    }

    /// Split a command line on whitespace.
    ///
    /// Tokens after the first that parse as numbers become `UInt64`,
    /// everything else stays a `String`.
    pub fn parse(line: &str) -> Self {
        let args = line
            .split_whitespace()
            .enumerate()
            .map(|(i, token)| match parse_u64(token) {
                Ok(value) if i > 0 => Attribute::UInt64(value),
                _ => Attribute::from(token),
            })
            .collect();
        Self { args }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Attribute> {
        self.args.get(index)
    }

    /// Command name, if element 0 is a string
    pub fn name(&self) -> Option<&str> {
        self.args.first().and_then(|a| a.as_str().ok())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.args.iter()
    }
}

impl Index<usize> for Invocation {
    type Output = Attribute;

    fn index(&self, index: usize) -> &Self::Output {
        &self.args[index]
    }
}

impl From<Vec<Attribute>> for Invocation {
    fn from(args: Vec<Attribute>) -> Self {
        Self::new(args)
    }
}

impl<'a> IntoIterator for &'a Invocation {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}
