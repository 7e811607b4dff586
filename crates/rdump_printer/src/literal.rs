//! Literal text: integers, chars, floats and quoted strings.

use rdump_ast::CoreType;
use std::fmt::Write as _;

/// Render an integer literal according to its declared type.
///
/// Unsigned and not-yet-inferred integers print in uppercase hex, signed
/// ones in decimal, chars as char literals. Literals whose type makes no
/// sense for an integer keep their bits and gain a marker comment.
pub fn format_integer(value: u128, ty: CoreType) -> String {
    match ty {
        CoreType::Invalid => format!("0x{:X}_/*INVAL*/", value),
        CoreType::Bool | CoreType::Str => format!("0x{:X}_/*bool/str*/", value),
        CoreType::Char => format_char(value),
        CoreType::F32 | CoreType::F64 => format!("{}_{}", value, ty.name()),
        CoreType::I8
        | CoreType::I16
        | CoreType::I32
        | CoreType::I64
        | CoreType::I128
        | CoreType::Isize => (value as i128).to_string(),
        CoreType::Any
        | CoreType::U8
        | CoreType::U16
        | CoreType::U32
        | CoreType::U64
        | CoreType::U128
        | CoreType::Usize => format!("0x{:X}", value),
    }
}

/// Char literal for a code point. Only printable ASCII is written as is.
pub fn format_char(value: u128) -> String {
    if (0x20..0x80).contains(&value) {
        match value as u8 {
            b'\'' => "'\\''".to_string(),
            b'\\' => "'\\\\'".to_string(),
            c => format!("'{}'", c as char),
        }
    } else {
        format!("'\\u{{{:x}}}'", value)
    }
}

/// Render a float literal.
///
/// Typed floats use C `%g` layout with enough digits to round-trip the
/// value through its type (10 for `f32`, 18 for `f64`); untyped ones use
/// the shortest round-trip form. The text always re-parses as a float.
pub fn format_float(value: f64, ty: CoreType) -> String {
    let type_name = match ty {
        CoreType::F32 => "f32",
        _ => "f64",
    };
    if value.is_nan() {
        return format!("{}::NAN", type_name);
    }
    if value.is_infinite() {
        let name = if value > 0.0 { "INFINITY" } else { "NEG_INFINITY" };
        return format!("{}::{}", type_name, name);
    }
    match ty {
        CoreType::F32 => format_g(value, 10),
        CoreType::F64 => format_g(value, 18),
        _ => format!("{:?}", value),
    }
}

/// C `%.{precision}g`, with `.0` appended when the result would otherwise
/// read as an integer.
fn format_g(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        let fixed = format!("{:.*}", decimals, value);
        let mut text = trim_fraction(&fixed).to_string();
        if !text.contains('.') {
            text.push_str(".0");
        }
        text
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

// ============================================================================
// Strings
// ============================================================================

fn escape_char_into(c: char, out: &mut String) {
    match c {
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if (c as u32) < 0x20 || c as u32 == 0x7F => {
            let _ = write!(out, "\\x{:02x}", c as u32);
        }
        c => out.push(c),
    }
}

/// Append `s` escaped for use between double quotes.
pub fn escape_str(s: &str, out: &mut String) {
    for c in s.chars() {
        escape_char_into(c, out);
    }
}

/// Append `bytes` escaped for use in a `b"..."` literal.
pub fn escape_bytes(bytes: &[u8], out: &mut String) {
    for &b in bytes {
        if b < 0x80 {
            escape_char_into(b as char, out);
        } else {
            let _ = write!(out, "\\x{:02x}", b);
        }
    }
}

/// Escape text of an `asm!` template string, where braces are placeholders.
pub fn escape_asm_template(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '{' => out.push_str("{{"),
            '}' => out.push_str("}}"),
            c => escape_char_into(c, out),
        }
    }
}

pub fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    escape_str(s, &mut out);
    out.push('"');
    out
}

pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push_str("b\"");
    escape_bytes(bytes, &mut out);
    out.push('"');
    out
}
