//! Helper utility functions

use crate::error::{BuildError, BuildResult};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// Split on `\r\n`, `\n` or a lone `\r`.
pub fn split_lines(s: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(s)
}

/// Text between the first `open` and the next `close` after it.
pub fn substring_between<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = s.find(open)? + open.len();
    let len = s[start..].find(close)?;
    Some(&s[start..start + len])
}

/// Replace only the first occurrence of `from`.
pub fn replace_once(s: &str, from: &str, to: &str) -> String {
    s.replacen(from, to, 1)
}

/// Escape a string for embedding in a JavaScript string literal.
///
/// Quotes, backslashes and `/` are backslash-escaped; control characters and
/// every non-ASCII UTF-16 unit become `\uXXXX`.
pub fn escape_javascript(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        match unit {
            0x08 => out.push_str("\\b"),
            0x09 => out.push_str("\\t"),
            0x0A => out.push_str("\\n"),
            0x0C => out.push_str("\\f"),
            0x0D => out.push_str("\\r"),
            0x22 => out.push_str("\\\""),
            0x27 => out.push_str("\\'"),
            0x2F => out.push_str("\\/"),
            0x5C => out.push_str("\\\\"),
            u if u < 0x20 || u > 0x7F => {
                let _ = write!(out, "\\u{:04X}", u);
            }
            u => out.push(u as u8 as char),
        }
    }
    out
}

/// Read a text file; invalid UTF-8 sequences become U+FFFD.
pub fn read_text(path: &Path) -> BuildResult<String> {
    let bytes = fs::read(path).map_err(|e| BuildError::io("read", path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a text file, creating missing parent directories.
pub fn write_text(path: &Path, content: &str) -> BuildResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io("create directory", parent, e))?;
    }
    fs::write(path, content).map_err(|e| BuildError::io("write", path, e))
}
