//! Typed value container shared by command arguments and command results.
//!
//! Every accessor checks the variant and fails with
//! [`Error::TypeMismatch`](crate::Error::TypeMismatch) instead of coercing.

use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::error::{Error, Result};

/// Variant tag of an [`Attribute`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum AttributeKind {
    Nil,
    String,
    UInt64,
    Data,
    List,
}

/// A single argument or result value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Attribute {
    #[default]
    Nil,
    String(String),
    UInt64(u64),
    Data(Vec<u8>),
    List(Vec<Attribute>),
}

impl Attribute {
    pub fn string<S: Into<String>>(value: S) -> Self {
        Self::String(value.into())
    }

    pub fn uint64(value: u64) -> Self {
        Self::UInt64(value)
    }

    /// Copy a raw byte buffer into a new `Data` attribute
    pub fn data(bytes: &[u8]) -> Self {
        Self::Data(bytes.to_vec())
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Nil => AttributeKind::Nil,
            Self::String(_) => AttributeKind::String,
            Self::UInt64(_) => AttributeKind::UInt64,
            Self::Data(_) => AttributeKind::Data,
            Self::List(_) => AttributeKind::List,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch(AttributeKind::String)),
        }
    }

    pub fn to_u64(&self) -> Result<u64> {
        match self {
            Self::UInt64(v) => Ok(*v),
            other => Err(other.mismatch(AttributeKind::UInt64)),
        }
    }

    pub fn as_data(&self) -> Result<&[u8]> {
        match self {
            Self::Data(bytes) => Ok(bytes),
            other => Err(other.mismatch(AttributeKind::Data)),
        }
    }

    pub fn as_list(&self) -> Result<&[Attribute]> {
        match self {
            Self::List(items) => Ok(items),
            other => Err(other.mismatch(AttributeKind::List)),
        }
    }

    /// True only for a `String` attribute holding exactly `text`
    pub fn is_equal(&self, text: &str) -> bool {
        matches!(self, Self::String(s) if s == text)
    }

    fn mismatch(&self, expected: AttributeKind) -> Error {
        Error::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<u64> for Attribute {
    fn from(value: u64) -> Self {
        Self::UInt64(value)
    }
}

impl From<Vec<u8>> for Attribute {
    fn from(value: Vec<u8>) -> Self {
        Self::Data(value)
    }
}

impl From<&[u8]> for Attribute {
    fn from(value: &[u8]) -> Self {
        Self::data(value)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::String(s) => write!(f, "{}", s),
            Self::UInt64(v) => write!(f, "{:#x}", v),
            Self::Data(bytes) => {
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Attribute::string("read"), Attribute::String("read".into()));
        assert_eq!(Attribute::uint64(4), Attribute::UInt64(4));
        assert_eq!(Attribute::data(&[1, 2]), Attribute::Data(vec![1, 2]));
        assert!(Attribute::default().is_nil());
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(Attribute::from("read").as_str().unwrap(), "read");
        assert_eq!(Attribute::from(0x1000u64).to_u64().unwrap(), 0x1000);
        assert_eq!(Attribute::from(vec![0xAA, 0xBB]).as_data().unwrap(), &[0xAA, 0xBB]);

        let list = Attribute::List(vec![Attribute::Nil, Attribute::uint64(1)]);
        assert_eq!(list.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_accessor_type_mismatch() {
        let err = Attribute::from("0x10").to_u64().unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: AttributeKind::UInt64,
                actual: AttributeKind::String,
            }
        ));

        let err = Attribute::uint64(u64::MAX).as_data().unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: AttributeKind::Data,
                actual: AttributeKind::UInt64,
            }
        ));

        assert!(Attribute::Nil.as_str().is_err());
    }

    #[test]
    fn test_is_equal() {
        assert!(Attribute::from("read").is_equal("read"));
        assert!(!Attribute::from("Read").is_equal("read"));
        assert!(!Attribute::uint64(0).is_equal("0"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(AttributeKind::UInt64.to_string(), "uint64");
        let name: &'static str = AttributeKind::Data.into();
        assert_eq!(name, "data");
    }

    #[test]
    fn test_display() {
        assert_eq!(Attribute::uint64(255).to_string(), "0xff");
        assert_eq!(Attribute::data(&[0x01, 0xab]).to_string(), "01 ab");
        let list = Attribute::List(vec![Attribute::from("read"), Attribute::uint64(4)]);
        assert_eq!(list.to_string(), "[read, 0x4]");
    }

    #[test]
    fn test_serialize_json() {
        assert_eq!(serde_json::to_string(&Attribute::data(&[1, 2, 255])).unwrap(), "[1,2,255]");
        assert_eq!(serde_json::to_string(&Attribute::uint64(u64::MAX)).unwrap(), "18446744073709551615");
        assert_eq!(serde_json::to_string(&Attribute::Nil).unwrap(), "null");
    }
}
