use super::value::Value;
use crate::constants::{DICT_START, END, INTEGER_START, LENGTH_SEPARATOR, LIST_START};
use bytes::{BufMut, Bytes, BytesMut};

/// Encodes a bencode value to a byte vector.
///
/// The output is the canonical encoding:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` with keys in ascending byte order
///
/// Encoding is total: every [`Value`] has exactly one encoding.
///
/// # Examples
///
/// ```
/// use bencodec::{encode, Value};
///
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// let dict = Value::dictionary([
///     ("username", Value::string("bob")),
///     ("password", Value::string("secret")),
/// ]);
/// assert_eq!(encode(&dict), b"d8:password6:secret8:username3:bobe");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.encoded_len());
    encode_to(value, &mut buf);
    buf
}

/// Encodes a value into a frozen [`Bytes`] buffer.
pub fn encode_bytes(value: &Value) -> Bytes {
    let mut buf = BytesMut::with_capacity(value.encoded_len());
    encode_to(value, &mut buf);
    buf.freeze()
}

/// Appends the encoding of `value` to any [`BufMut`] sink.
///
/// ```
/// use bencodec::{encode_to, Value};
/// use bytes::BytesMut;
///
/// let mut frame = BytesMut::new();
/// frame.extend_from_slice(b"prefix|");
/// encode_to(&Value::Integer(-3), &mut frame);
/// assert_eq!(&frame[..], b"prefix|i-3e");
/// ```
pub fn encode_to<B: BufMut>(value: &Value, buf: &mut B) {
    match value {
        Value::Integer(i) => {
            buf.put_u8(INTEGER_START);
            buf.put_slice(i.to_string().as_bytes());
            buf.put_u8(END);
        }
        Value::ByteString(b) => encode_byte_string(b, buf),
        Value::List(l) => {
            buf.put_u8(LIST_START);
            for item in l {
                encode_to(item, buf);
            }
            buf.put_u8(END);
        }
        Value::Dictionary(d) => {
            buf.put_u8(DICT_START);
            // BTreeMap iterates keys in ascending byte order.
            for (key, val) in d {
                encode_byte_string(key, buf);
                encode_to(val, buf);
            }
            buf.put_u8(END);
        }
    }
}

fn encode_byte_string<B: BufMut>(b: &[u8], buf: &mut B) {
    buf.put_slice(b.len().to_string().as_bytes());
    buf.put_u8(LENGTH_SEPARATOR);
    buf.put_slice(b);
}
