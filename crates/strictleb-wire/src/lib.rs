#![warn(clippy::pedantic)]

pub mod error;
pub mod leb128;
pub mod reader;
pub mod value;

pub use error::{ErrorKind, LebError};
pub use leb128::{
    LebInt, decode, decode_as, decode_i32, decode_i64, decode_u32, decode_u64, max_groups,
};
pub use reader::LebReader;
pub use value::{LebType, LebValue, ParseTypeError};
