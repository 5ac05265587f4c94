//! C string literal escaping
//!
//! Literals are emitted as raw UTF-8 wherever that is unambiguous to a C
//! compiler. Only the characters that would end the literal, start an escape
//! or a trigraph, or are invisible control codes get escaped. Control codes
//! use three-digit octal escapes, which unlike `\x` cannot swallow a following
//! digit.

use anyhow::Context;

/// Quote `value` as a C string literal, including the surrounding quotes
pub fn escape(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');

    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '?' => literal.push_str("\\?"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_ascii_control() => literal.push_str(&format!("\\{:03o}", c as u32)),
            c => literal.push(c),
        }
    }

    literal.push('"');
    literal
}

/// Decode a C string literal (with its quotes) back into the string it denotes
///
/// Accepts the escapes [`escape`] produces plus the remaining simple escapes
/// and `\x` sequences, so hand-edited headers still read back. Escapes that
/// yield bytes are collected and decoded as UTF-8 at the end.
pub fn unescape(literal: &str) -> anyhow::Result<String> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| anyhow::anyhow!("not a quoted C string literal: {literal}"))?;

    let mut bytes: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            anyhow::bail!("unescaped quote inside C string literal: {literal}");
        }

        if c != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let escaped = chars
            .next()
            .ok_or_else(|| anyhow::anyhow!("dangling backslash in C string literal: {literal}"))?;

        match escaped {
            '\\' | '"' | '\'' | '?' => bytes.push(escaped as u8),
            'n' => bytes.push(b'\n'),
            'r' => bytes.push(b'\r'),
            't' => bytes.push(b'\t'),
            'a' => bytes.push(0x07),
            'b' => bytes.push(0x08),
            'f' => bytes.push(0x0C),
            'v' => bytes.push(0x0B),
            '0'..='7' => {
                let mut value = escaped.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                let byte = u8::try_from(value).with_context(|| {
                    format!("octal escape \\{value:o} out of range in {literal}")
                })?;
                bytes.push(byte);
            }
            'x' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while let Some(digit) = chars.peek().and_then(|d| d.to_digit(16)) {
                    value = value * 16 + digit;
                    digits += 1;
                    chars.next();
                    if value > 0xFF {
                        anyhow::bail!("hex escape out of range in {literal}");
                    }
                }
                if digits == 0 {
                    anyhow::bail!("hex escape without digits in {literal}");
                }
                bytes.push(value as u8);
            }
            other => anyhow::bail!("unknown escape \\{other} in C string literal: {literal}"),
        }
    }

    String::from_utf8(bytes).with_context(|| format!("C string literal is not UTF-8: {literal}"))
}
