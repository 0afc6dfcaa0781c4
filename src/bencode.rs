//! Bencode encoding and decoding ([BEP-3]).
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Canonical form
//!
//! The encoder only ever produces canonical bencode: dictionary keys in
//! ascending byte order, integers without leading zeros or `-0`. The decoder
//! holds input to the same standard by default, so that
//! `encode(&decode(input)?) == input` for every input it accepts. Out-of-order
//! dictionary keys can be tolerated with [`KeyOrder::Permissive`].
//!
//! ```
//! use bencodec::{decode, encode};
//!
//! let input = b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
//! let value = decode(input).unwrap();
//! assert_eq!(encode(&value), input);
//! ```
//!
//! # Error Handling
//!
//! Decoding stops at the first violation and reports it with its byte offset:
//!
//! - [`BencodeError::InvalidToken`] - A byte that cannot start a value
//! - [`BencodeError::FormatError`] - Malformed integer or length prefix
//! - [`BencodeError::TruncatedInput`] - Byte string longer than the input
//! - [`BencodeError::UnexpectedEnd`] - Missing terminator
//! - [`BencodeError::MalformedKey`] - Non-string or duplicate dictionary key
//! - [`BencodeError::NonCanonicalOrder`] - Keys not strictly ascending
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_prefix, DecodeOptions, Decoder, KeyOrder};
pub use encode::{encode, encode_bytes, encode_to};
pub use error::BencodeError;
pub use value::{Value, ValueKind};
