use super::error::BencodeError;
use super::value::{Value, ValueKind};
use crate::constants::{
    DEFAULT_MAX_DEPTH, DICT_START, END, INTEGER_START, LENGTH_SEPARATOR, LIST_START, MINUS,
};
use bytes::Bytes;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// How the decoder treats dictionary keys that are not in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Keys must be strictly ascending; anything else is
    /// [`BencodeError::NonCanonicalOrder`].
    #[default]
    Strict,
    /// Out-of-order keys are accepted and re-sorted. Duplicate keys are still
    /// rejected with [`BencodeError::MalformedKey`].
    Permissive,
}

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of nested lists/dictionaries. A top-level container is
    /// at depth 1.
    pub max_depth: usize,
    pub key_order: KeyOrder,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            key_order: KeyOrder::Strict,
        }
    }
}

/// A configured bencode decoder.
///
/// The decoder holds no state between calls; one instance can be shared
/// freely across threads.
///
/// # Examples
///
/// ```
/// use bencodec::{BencodeError, Decoder, KeyOrder};
///
/// let strict = Decoder::new();
/// assert!(matches!(
///     strict.decode(b"d3:fooi1e3:bari2ee"),
///     Err(BencodeError::NonCanonicalOrder { .. })
/// ));
///
/// let lenient = Decoder::new().with_key_order(KeyOrder::Permissive);
/// let value = lenient.decode(b"d3:fooi1e3:bari2ee").unwrap();
/// assert_eq!(value.get(b"bar").and_then(|v| v.as_integer()), Some(2));
///
/// let shallow = Decoder::new().with_max_depth(1);
/// assert!(matches!(
///     shallow.decode(b"llee"),
///     Err(BencodeError::NestingTooDeep { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.options.key_order = key_order;
        self
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes exactly one value spanning the whole input.
    ///
    /// # Errors
    ///
    /// Any grammar violation, or [`BencodeError::TrailingData`] if bytes
    /// remain after the value.
    pub fn decode(&self, data: &[u8]) -> Result<Value, BencodeError> {
        let (value, consumed) = self.decode_prefix(data)?;

        if consumed != data.len() {
            let err = BencodeError::TrailingData {
                consumed,
                remaining: data.len() - consumed,
            };
            trace!("bencode decode rejected: {}", err);
            return Err(err);
        }

        Ok(value)
    }

    /// Decodes one value from the start of the input and returns it with the
    /// number of bytes it occupied. Bytes after the value are left untouched.
    pub fn decode_prefix(&self, data: &[u8]) -> Result<(Value, usize), BencodeError> {
        let mut parser = Parser {
            data,
            pos: 0,
            options: &self.options,
        };

        match parser.decode_value(0) {
            Ok(value) => Ok((value, parser.pos)),
            Err(e) => {
                trace!("bencode decode failed on {} byte input: {}", data.len(), e);
                Err(e)
            }
        }
    }
}

/// Decodes a single value that must span the entire input.
///
/// Uses the default [`DecodeOptions`]: strict key order and a nesting limit
/// of [`DEFAULT_MAX_DEPTH`].
///
/// ```
/// use bencodec::{decode, Value};
///
/// let value = decode(b"ll9:chocolatei4eel5:candyi5eee").unwrap();
/// assert_eq!(
///     value,
///     Value::List(vec![
///         Value::List(vec![Value::string("chocolate"), Value::Integer(4)]),
///         Value::List(vec![Value::string("candy"), Value::Integer(5)]),
///     ])
/// );
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    Decoder::default().decode(data)
}

/// Decodes a value from the start of `data`, returning it with the number of
/// bytes consumed.
///
/// ```
/// use bencodec::{decode_prefix, Value};
///
/// let (value, consumed) = decode_prefix(b"i42eextra").unwrap();
/// assert_eq!(value, Value::Integer(42));
/// assert_eq!(consumed, 4);
/// ```
pub fn decode_prefix(data: &[u8]) -> Result<(Value, usize), BencodeError> {
    Decoder::default().decode_prefix(data)
}

struct Parser<'a> {
    data: &'a [u8],
    pos: usize,
    options: &'a DecodeOptions,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn unexpected_end(&self) -> BencodeError {
        BencodeError::UnexpectedEnd { position: self.pos }
    }

    fn decode_value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        match self.peek() {
            None => Err(self.unexpected_end()),
            Some(INTEGER_START) => self.decode_integer(),
            Some(LIST_START) => self.decode_list(depth + 1),
            Some(DICT_START) => self.decode_dict(depth + 1),
            Some(b'0'..=b'9') => self.decode_byte_string().map(Value::ByteString),
            Some(byte) => Err(BencodeError::InvalidToken {
                byte,
                position: self.pos,
            }),
        }
    }

    fn enter_container(&self, depth: usize) -> Result<(), BencodeError> {
        if depth > self.options.max_depth {
            return Err(BencodeError::NestingTooDeep {
                max_depth: self.options.max_depth,
                position: self.pos,
            });
        }
        Ok(())
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
    }

    fn decode_integer(&mut self) -> Result<Value, BencodeError> {
        self.pos += 1;
        let start = self.pos;

        let negative = self.peek() == Some(MINUS);
        if negative {
            self.pos += 1;
        }

        let digits_start = self.pos;
        self.skip_digits();

        match self.peek() {
            None => return Err(self.unexpected_end()),
            Some(END) => {}
            Some(_) => {
                return Err(BencodeError::FormatError {
                    reason: "unexpected character in integer",
                    position: self.pos,
                })
            }
        }

        let digits = &self.data[digits_start..self.pos];
        let format_error = |reason| BencodeError::FormatError {
            reason,
            position: start,
        };

        if digits.is_empty() {
            return Err(format_error("integer has no digits"));
        }
        if digits.len() > 1 && digits[0] == b'0' {
            return Err(format_error("leading zero in integer"));
        }
        if negative && digits == b"0" {
            return Err(format_error("negative zero"));
        }

        // Only ASCII sign and digits remain, so the only parse failure is overflow.
        let value = std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| format_error("integer out of 64-bit range"))?;

        self.pos += 1;
        Ok(Value::Integer(value))
    }

    fn decode_byte_string(&mut self) -> Result<Bytes, BencodeError> {
        let start = self.pos;
        self.skip_digits();

        match self.peek() {
            None => return Err(self.unexpected_end()),
            Some(LENGTH_SEPARATOR) => {}
            Some(_) => {
                return Err(BencodeError::FormatError {
                    reason: "unexpected character in byte string length",
                    position: self.pos,
                })
            }
        }

        let digits = &self.data[start..self.pos];
        if digits.len() > 1 && digits[0] == b'0' {
            return Err(BencodeError::FormatError {
                reason: "leading zero in byte string length",
                position: start,
            });
        }

        let len = digits
            .iter()
            .try_fold(0usize, |acc, &d| {
                acc.checked_mul(10)?.checked_add(usize::from(d - b'0'))
            })
            .ok_or(BencodeError::FormatError {
                reason: "byte string length out of range",
                position: start,
            })?;

        self.pos += 1;

        let available = self.data.len() - self.pos;
        if len > available {
            return Err(BencodeError::TruncatedInput {
                declared: len,
                available,
                position: start,
            });
        }

        let bytes = Bytes::copy_from_slice(&self.data[self.pos..self.pos + len]);
        self.pos += len;

        Ok(bytes)
    }

    fn decode_list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.enter_container(depth)?;
        self.pos += 1;
        let mut list = Vec::new();

        loop {
            match self.peek() {
                None => return Err(self.unexpected_end()),
                Some(END) => break,
                Some(_) => list.push(self.decode_value(depth)?),
            }
        }

        self.pos += 1;
        Ok(Value::List(list))
    }

    fn decode_dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.enter_container(depth)?;
        let start = self.pos;
        self.pos += 1;

        let mut dict = BTreeMap::new();
        let mut last_key: Option<Bytes> = None;
        let mut reordered = false;

        loop {
            let key_pos = self.pos;
            let key = match self.peek() {
                None => return Err(self.unexpected_end()),
                Some(END) => break,
                Some(b'0'..=b'9') => self.decode_byte_string()?,
                Some(byte) => return Err(non_key_error(byte, key_pos)),
            };

            let out_of_order = last_key.as_ref().is_some_and(|prev| key <= *prev);
            if out_of_order && self.options.key_order == KeyOrder::Strict {
                return Err(BencodeError::NonCanonicalOrder { position: key_pos });
            }
            // Only reachable in permissive mode: strictly ascending keys never repeat.
            if dict.contains_key(&key) {
                return Err(BencodeError::MalformedKey {
                    found: ValueKind::ByteString,
                    position: key_pos,
                });
            }
            reordered |= out_of_order;

            let value = self.decode_value(depth)?;
            dict.insert(key.clone(), value);
            last_key = Some(key);
        }

        self.pos += 1;

        if reordered {
            debug!(
                "Accepted dictionary with out-of-order keys at offset {} ({} entries)",
                start,
                dict.len()
            );
        }

        Ok(Value::Dictionary(dict))
    }
}

/// Error for a dictionary key slot holding something other than a byte string.
fn non_key_error(byte: u8, position: usize) -> BencodeError {
    let found = match byte {
        INTEGER_START => ValueKind::Integer,
        LIST_START => ValueKind::List,
        DICT_START => ValueKind::Dictionary,
        _ => return BencodeError::InvalidToken { byte, position },
    };
    BencodeError::MalformedKey { found, position }
}
