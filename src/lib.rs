//! bencodec - a strict, canonical bencode codec
//!
//! Converts between bencoded bytes and an in-memory [`Value`] tree. Transport,
//! file I/O, and interpretation of the decoded data (torrent metainfo, DHT
//! messages) are left to the caller.
//!
//! # Modules
//!
//! - [`bencode`] - Value model, encoder, and decoder
//! - [`constants`] - Wire tokens and decoder defaults
//!
//! # Example
//!
//! ```
//! use bencodec::{decode, encode, Value};
//!
//! let value = Value::dictionary([
//!     ("username", Value::string("bob")),
//!     ("password", Value::string("secret")),
//! ]);
//! let bytes = encode(&value);
//! assert_eq!(bytes, b"d8:password6:secret8:username3:bobe");
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

pub mod bencode;
pub mod constants;

pub use bencode::{
    decode, decode_prefix, encode, encode_bytes, encode_to, BencodeError, DecodeOptions, Decoder,
    KeyOrder, Value, ValueKind,
};
