//! Logfmt tokenizer: splits one input line into `(key, value)` pairs.
//!
//! Follows the usual logfmt rules: tokens are whitespace-separated, a key
//! without `=` carries an empty value, and values starting with `"` run to
//! the closing quote and may contain spaces and backslash escapes. Malformed
//! quoting is a hard error; the stream pump treats it as fatal for the run.

use crate::error::LfmtError;

/// Scan a single line into its `(key, value)` pairs, in arrival order.
///
/// An empty or whitespace-only line yields an empty vector, not an error.
pub fn scan_line(line: &str) -> Result<Vec<(String, String)>, LfmtError> {
    let mut pairs = Vec::new();
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if matches!(bytes[i], b' ' | b'\t') {
            i += 1;
            continue;
        }

        // Key runs to '=', whitespace, or end of line.
        let key_start = i;
        while i < bytes.len() && !matches!(bytes[i], b'=' | b' ' | b'\t') {
            i += 1;
        }
        let key = &line[key_start..i];
        if key.is_empty() {
            return Err(LfmtError::Decode(format!(
                "empty key at column {}",
                i + 1
            )));
        }
        if key.contains('"') {
            return Err(LfmtError::Decode(format!("unexpected '\"' in key {key:?}")));
        }

        // Bare key: token without '=' carries an empty value.
        if i >= bytes.len() || bytes[i] != b'=' {
            pairs.push((key.to_string(), String::new()));
            continue;
        }
        i += 1;

        let value = if i < bytes.len() && bytes[i] == b'"' {
            i += 1;
            let (value, next) = scan_quoted(line, i)?;
            i = next;
            value
        } else {
            let value_start = i;
            while i < bytes.len() && !matches!(bytes[i], b' ' | b'\t') {
                i += 1;
            }
            line[value_start..i].to_string()
        };
        pairs.push((key.to_string(), value));
    }

    Ok(pairs)
}

/// Scan a quoted value starting just past the opening quote.
///
/// Returns the unescaped value and the byte offset just past the closing
/// quote. Only slices at ASCII delimiter positions, so multi-byte characters
/// pass through untouched.
fn scan_quoted(line: &str, start: usize) -> Result<(String, usize), LfmtError> {
    let bytes = line.as_bytes();
    let mut value = String::new();
    let mut seg_start = start;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                value.push_str(&line[seg_start..i]);
                let unescaped = match bytes.get(i + 1) {
                    Some(b'"') => '"',
                    Some(b'\\') => '\\',
                    Some(b'n') => '\n',
                    Some(b'r') => '\r',
                    Some(b't') => '\t',
                    _ => {
                        return Err(LfmtError::Decode(format!(
                            "invalid escape sequence at column {}",
                            i + 1
                        )));
                    }
                };
                value.push(unescaped);
                i += 2;
                seg_start = i;
            }
            b'"' => {
                value.push_str(&line[seg_start..i]);
                return Ok((value, i + 1));
            }
            _ => i += 1,
        }
    }

    Err(LfmtError::Decode("unterminated quoted value".to_string()))
}
