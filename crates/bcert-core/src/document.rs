//! # Document Serialization — Insertion-Order JSON Bytes
//!
//! Defines [`DocumentBytes`], the sole construction path for bytes used in
//! fingerprint computation.
//!
//! ## Serialization Rules
//!
//! - Compact separators, no whitespace.
//! - Struct fields in declaration order; map keys in insertion order
//!   (`serde_json` is built with `preserve_order`).
//! - Keys are **not** sorted. Two documents with the same content but a
//!   different field order produce different bytes and different digests.
//!   Certificate fingerprints are defined over the document as assembled,
//!   so this is a property of the format rather than something to normalize.
//! - Absent optional fields are omitted, not written as `null`.
//! - Floating-point numbers use the ECMAScript `Number::toString` layout:
//!   `1` rather than `1.0`, `1e+21` rather than `1e21`. Integers that fit
//!   in 64 bits are written exactly.
//!
//! With those rules the output matches `JSON.stringify(document)` for any
//! document built from parsed JSON input, except for integers above 2^53,
//! which a JavaScript client has already rounded before it serializes.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::error::SerializationError;

/// Compact formatter that writes floats the way JavaScript prints numbers.
#[derive(Debug, Clone, Copy, Default)]
struct JsNumberFormatter;

impl Formatter for JsNumberFormatter {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(format_js_number(value).as_bytes())
    }
}

/// Render a float as ECMAScript `Number.prototype.toString()` does.
///
/// Shortest round-trip digits; positional notation for decimal exponents
/// in `-7..21`, exponent notation with an explicit sign otherwise. Both
/// zeros render as `0`.
pub fn format_js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e4`.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let mut out = String::with_capacity(k as usize + 8);
    if value < 0.0 {
        out.push('-');
    }
    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-n) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if n > 0 { '+' } else { '-' });
        out.push_str(&(n - 1).abs().to_string());
    }
    out
}

/// Bytes of a document serialized as compact, insertion-ordered JSON.
///
/// The inner `Vec<u8>` is private; [`DocumentBytes::new()`] is the only
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentBytes(Vec<u8>);

impl DocumentBytes {
    /// Serialize any value into document bytes.
    pub fn new(obj: &impl Serialize) -> Result<Self, SerializationError> {
        let mut buf = Vec::with_capacity(256);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, JsNumberFormatter);
        obj.serialize(&mut ser)?;
        Ok(Self(buf))
    }

    /// Access the bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the serialized document in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for DocumentBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
