//! Wire tokens and decoder defaults.
//!
//! The token bytes are fixed by the bencode format ([BEP-3]); the limits are
//! tuning parameters that [`DecodeOptions`](crate::DecodeOptions) starts from.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

// ============================================================================
// Wire tokens
// ============================================================================

/// Opens an integer: `i<digits>e`
pub const INTEGER_START: u8 = b'i';

/// Opens a list: `l<items>e`
pub const LIST_START: u8 = b'l';

/// Opens a dictionary: `d<key><value>...e`
pub const DICT_START: u8 = b'd';

/// Closes integers, lists and dictionaries
pub const END: u8 = b'e';

/// Separates a byte string's length prefix from its payload
pub const LENGTH_SEPARATOR: u8 = b':';

/// Sign prefix for negative integers
pub const MINUS: u8 = b'-';

// ============================================================================
// Decoder limits
// ============================================================================

/// Default maximum container nesting accepted by the decoder.
///
/// Large enough for any real torrent or DHT message (which rarely exceed a
/// handful of levels), small enough that hostile input cannot exhaust the
/// stack through recursion.
pub const DEFAULT_MAX_DEPTH: usize = 256;
