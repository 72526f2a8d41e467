use crate::value::LebType;

/// Errors produced while decoding a LEB128 value.
///
/// Every variant carries the target type and the byte offset where decoding
/// stopped, so a caller parsing a larger binary format can point at the
/// offending byte. A failed decode never yields a partial value.
///
/// ```text
/// ┌───────────┬──────────────────────────────────────────────────────────┐
/// │ Variant   │ Cause                                                    │
/// ├───────────┼──────────────────────────────────────────────────────────┤
/// │ Truncated │ Input ended while the last byte's continuation bit was   │
/// │           │ still set (or the input was empty)                       │
/// │ TooLong   │ More than max_groups bytes without a terminating byte    │
/// │ Overflow  │ Terminating byte's out-of-width bits are not the zero    │
/// │           │ fill (unsigned) or sign fill (signed) pattern            │
/// └───────────┴──────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LebError {
    /// Input ended before a terminating byte was read.
    #[error("truncated {ty} LEB128: input ended at offset {offset} with continuation bit set")]
    Truncated { ty: LebType, offset: usize },

    /// The byte at `offset` would be one group past the type's limit.
    #[error("{ty} LEB128 too long: no terminating byte within {max} bytes (offset {offset})", max = .ty.max_groups())]
    TooLong { ty: LebType, offset: usize },

    /// The terminating byte at `offset` sets bits outside the type's width.
    #[error("{ty} LEB128 overflow: terminating byte {byte:#04X} at offset {offset} is out of range or non-canonical")]
    Overflow {
        ty: LebType,
        offset: usize,
        byte: u8,
    },
}

/// The failure category of a [`LebError`], without its context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Truncated,
    TooLong,
    Overflow,
}

impl LebError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Truncated { .. } => ErrorKind::Truncated,
            Self::TooLong { .. } => ErrorKind::TooLong,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    pub fn ty(&self) -> LebType {
        match *self {
            Self::Truncated { ty, .. } | Self::TooLong { ty, .. } | Self::Overflow { ty, .. } => ty,
        }
    }

    /// Byte offset at which decoding stopped, relative to the decoded slice.
    pub fn offset(&self) -> usize {
        match *self {
            Self::Truncated { offset, .. }
            | Self::TooLong { offset, .. }
            | Self::Overflow { offset, .. } => offset,
        }
    }

    /// Negative status code for callers that follow the "length ≤ 0 means
    /// failure" convention of C-style LEB128 decoders.
    ///
    /// | Kind      | Status |
    /// |-----------|--------|
    /// | Truncated | -1     |
    /// | TooLong   | -2     |
    /// | Overflow  | -3     |
    pub fn status(&self) -> isize {
        match self.kind() {
            ErrorKind::Truncated => -1,
            ErrorKind::TooLong => -2,
            ErrorKind::Overflow => -3,
        }
    }

    /// Shift the reported offset by `base`.
    ///
    /// Used when the decoded slice starts `base` bytes into a larger buffer.
    #[must_use]
    pub fn with_base(self, base: usize) -> Self {
        match self {
            Self::Truncated { ty, offset } => Self::Truncated {
                ty,
                offset: offset + base,
            },
            Self::TooLong { ty, offset } => Self::TooLong {
                ty,
                offset: offset + base,
            },
            Self::Overflow { ty, offset, byte } => Self::Overflow {
                ty,
                offset: offset + base,
                byte,
            },
        }
    }
}
