//! Decoder/Encoder for the `carindex.def` file format.
//!
//! A file is a 200-byte head record, any number of 200-byte car records and
//! a 200-byte trailer record. There is no record count: the car list ends at
//! the first block whose first byte is zero. The [decode_file] and
//! [encode_file] functions convert between bytes and a [CarIndex](crate::CarIndex).

pub mod consts;
mod decode;
mod encode;
pub mod layout;

pub use decode::*;
pub use encode::*;
