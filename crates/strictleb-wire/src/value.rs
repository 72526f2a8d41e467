use std::fmt;
use std::str::FromStr;

/// The four fixed-width integer types a LEB128 value can be decoded into.
///
/// ```text
/// ┌──────┬──────┬────────┬────────────┐
/// │ Type │ Bits │ Signed │ Max groups │
/// ├──────┼──────┼────────┼────────────┤
/// │ I32  │ 32   │ yes    │ 5          │
/// │ U32  │ 32   │ no     │ 5          │
/// │ I64  │ 64   │ yes    │ 10         │
/// │ U64  │ 64   │ no     │ 10         │
/// └──────┴──────┴────────┴────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LebType {
    I32,
    U32,
    I64,
    U64,
}

impl LebType {
    /// All types, in the order the conformance suite exercises them.
    pub const ALL: [Self; 4] = [Self::I32, Self::U32, Self::I64, Self::U64];

    pub fn bits(self) -> u32 {
        match self {
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Self::I32 | Self::I64)
    }

    /// Maximum number of groups a value of this type may occupy.
    pub fn max_groups(self) -> usize {
        crate::leb128::max_groups(self.bits())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
        }
    }
}

impl fmt::Display for LebType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name one of the four [`LebType`]s.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown LEB128 type {input:?}: expected one of i32, u32, i64, u64")]
pub struct ParseTypeError {
    pub input: String,
}

impl FromStr for LebType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTypeError {
                input: s.to_string(),
            })
    }
}

/// A decoded value whose type is only known at runtime.
///
/// Produced by [`decode_as`](crate::leb128::decode_as) and
/// [`LebReader::read_as`](crate::reader::LebReader::read_as) for callers that
/// pick the target type from data (a CLI flag, a test table) rather than
/// from a type parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LebValue {
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
}

impl LebValue {
    pub fn ty(self) -> LebType {
        match self {
            Self::I32(_) => LebType::I32,
            Self::U32(_) => LebType::U32,
            Self::I64(_) => LebType::I64,
            Self::U64(_) => LebType::U64,
        }
    }
}

impl fmt::Display for LebValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for LebValue {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<u32> for LebValue {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<i64> for LebValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u64> for LebValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_and_group_limits() {
        assert_eq!(LebType::I32.bits(), 32);
        assert_eq!(LebType::U64.bits(), 64);
        assert_eq!(LebType::U32.max_groups(), 5);
        assert_eq!(LebType::I64.max_groups(), 10);
        assert!(LebType::I32.is_signed());
        assert!(!LebType::U64.is_signed());
    }

    #[test]
    fn parse_type_names() {
        assert_eq!("i32".parse::<LebType>().unwrap(), LebType::I32);
        assert_eq!("U64".parse::<LebType>().unwrap(), LebType::U64);
        assert_eq!(" i64 ".parse::<LebType>().unwrap(), LebType::I64);
    }

    #[test]
    fn parse_unknown_type() {
        let err = "u16".parse::<LebType>().unwrap_err();
        assert_eq!(err.input, "u16");
        assert!(err.to_string().contains("u16"));
    }

    #[test]
    fn value_reports_its_type() {
        assert_eq!(LebValue::from(-1i32).ty(), LebType::I32);
        assert_eq!(LebValue::from(7u64).ty(), LebType::U64);
        assert_eq!(LebValue::I64(i64::MIN).to_string(), "-9223372036854775808");
    }
}
