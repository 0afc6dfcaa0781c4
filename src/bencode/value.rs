use bytes::Bytes;
use std::collections::BTreeMap;
use std::fmt;

/// A bencode value.
///
/// The set of variants is closed: anything that can be expressed as a `Value`
/// can be encoded, so the encoder has no failure path. Dictionaries are kept
/// in a [`BTreeMap`] keyed by raw bytes, whose iteration order is ascending
/// byte order, which is exactly the canonical key order bencode requires.
///
/// # Examples
///
/// ```
/// use bencodec::Value;
///
/// let int = Value::Integer(42);
/// let string = Value::string("hello");
/// let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
///
/// let int2: Value = 42i64.into();
/// let string2: Value = "hello".into();
///
/// assert_eq!(int, int2);
/// assert_eq!(string.as_str(), Some("hello"));
/// assert_eq!(string, string2);
/// assert_eq!(list.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A length-prefixed byte string (not necessarily UTF-8).
    ByteString(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte string keys, iterated in ascending key order.
    Dictionary(BTreeMap<Bytes, Value>),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    ByteString,
    List,
    Dictionary,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::ByteString => "byte string",
            ValueKind::List => "list",
            ValueKind::Dictionary => "dictionary",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    pub fn string(s: &str) -> Self {
        Value::ByteString(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Creates a byte string value from arbitrary bytes.
    ///
    /// ```
    /// use bencodec::Value;
    ///
    /// let value = Value::bytes(vec![0u8, 0xff, b':']);
    /// assert_eq!(value.as_bytes().map(|b| b.len()), Some(3));
    /// assert_eq!(value.as_str(), None);
    /// ```
    pub fn bytes(b: impl Into<Bytes>) -> Self {
        Value::ByteString(b.into())
    }

    /// Builds a dictionary from key/value pairs given in any order.
    ///
    /// If a key appears more than once the last value wins.
    ///
    /// ```
    /// use bencodec::{encode, Value};
    ///
    /// let a = Value::dictionary([("b", Value::Integer(2)), ("a", Value::Integer(1))]);
    /// let b = Value::dictionary([("a", Value::Integer(1)), ("b", Value::Integer(2))]);
    /// assert_eq!(encode(&a), encode(&b));
    /// assert_eq!(encode(&a), b"d1:ai1e1:bi2ee");
    /// ```
    pub fn dictionary<K, I>(pairs: I) -> Self
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Dictionary(
            pairs
                .into_iter()
                .map(|(k, v)| (Bytes::copy_from_slice(k.as_ref()), v))
                .collect(),
        )
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::ByteString(_) => ValueKind::ByteString,
            Value::List(_) => ValueKind::List,
            Value::Dictionary(_) => ValueKind::Dictionary,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::ByteString(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::ByteString(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&BTreeMap<Bytes, Value>> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            Value::ByteString(b) => Some(b),
            _ => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    ///
    /// This avoids cloning the map when the caller needs ownership of it.
    pub fn into_dict(self) -> Option<BTreeMap<Bytes, Value>> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// ```
    /// use bencodec::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get(b"missing"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    /// Size in bytes of this value's canonical encoding.
    ///
    /// ```
    /// use bencodec::{encode, Value};
    ///
    /// let value = Value::List(vec![Value::Integer(-17), Value::string("spam")]);
    /// assert_eq!(value.encoded_len(), encode(&value).len());
    /// ```
    pub fn encoded_len(&self) -> usize {
        match self {
            Value::Integer(i) => 2 + integer_len(*i),
            Value::ByteString(b) => byte_string_len(b),
            Value::List(l) => 2 + l.iter().map(Value::encoded_len).sum::<usize>(),
            Value::Dictionary(d) => {
                2 + d
                    .iter()
                    .map(|(k, v)| byte_string_len(k) + v.encoded_len())
                    .sum::<usize>()
            }
        }
    }
}

fn byte_string_len(b: &[u8]) -> usize {
    decimal_digits(b.len() as u64) + 1 + b.len()
}

fn integer_len(i: i64) -> usize {
    let sign = usize::from(i < 0);
    sign + decimal_digits(i.unsigned_abs())
}

fn decimal_digits(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::ByteString(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::ByteString(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::ByteString(Bytes::from(b))
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::ByteString(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<Bytes, Value>> for Value {
    fn from(d: BTreeMap<Bytes, Value>) -> Self {
        Value::Dictionary(d)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

impl FromIterator<(Bytes, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (Bytes, Value)>>(iter: I) -> Self {
        Value::Dictionary(iter.into_iter().collect())
    }
}
