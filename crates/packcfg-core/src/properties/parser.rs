//! Line-oriented `key=value` property file parser
//!
//! Accepts the property-file dialect the Android toolchain reads: `#`/`!`
//! comments, `=`, `:` or whitespace separators, backslash line continuations
//! and backslash escapes including `\uXXXX`. Lines end at `\n`, `\r\n` or a
//! lone `\r`. The only malformed input is a bad `\uXXXX` escape.

/// A parse failure at a 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseError {
    pub line: usize,
    pub message: String,
}

/// Parse property text into entries in file order
///
/// Duplicate keys are all returned; the caller decides which one wins.
/// A line such as `=value` yields the empty key.
pub(crate) fn parse(text: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut entries = Vec::new();
    let mut lines = physical_lines(text).into_iter().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line_number = index + 1;
        let trimmed = raw.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while continues(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let entry = split_entry(&logical).map_err(|message| ParseError {
            line: line_number,
            message,
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Split on `\n`, `\r\n` and lone `\r`; a trailing terminator adds no line
fn physical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// A line continues when it ends in an odd number of backslashes
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> Result<(String, String), String> {
    let mut key_end = line.len();
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let raw_key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(|c: char| c == '=' || c == ':') {
        rest = stripped.trim_start_matches(is_blank);
    }

    let key = unescape(raw_key)?;
    let value = unescape(rest)?;
    Ok((key, value))
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_code_unit(&mut chars)?;
                out.push(decode_code_unit(unit, &mut chars)?);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Read the four hex digits of a `\uXXXX` escape
fn read_code_unit(chars: &mut std::str::Chars<'_>) -> Result<u16, String> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.chars().count() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid unicode escape '\\u{}'", hex));
    }
    u16::from_str_radix(&hex, 16).map_err(|_| format!("invalid unicode escape '\\u{}'", hex))
}

/// Turn a UTF-16 code unit into a char, pairing a high surrogate with the
/// `\uXXXX` escape that must follow it
fn decode_code_unit(unit: u16, chars: &mut std::str::Chars<'_>) -> Result<char, String> {
    if !(0xD800..0xDC00).contains(&unit) {
        return char::decode_utf16([unit])
            .next()
            .and_then(Result::ok)
            .ok_or_else(|| format!("unpaired surrogate '\\u{:04x}'", unit));
    }

    let low = match (chars.next(), chars.next()) {
        (Some('\\'), Some('u')) => read_code_unit(chars)?,
        _ => return Err(format!("unpaired surrogate '\\u{:04x}'", unit)),
    };
    char::decode_utf16([unit, low])
        .next()
        .and_then(Result::ok)
        .ok_or_else(|| format!("unpaired surrogate '\\u{:04x}'", unit))
}
