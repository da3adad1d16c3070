/*
 * decode.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::error::{IniError, IniResult, PathError};
use crate::mutate::update_mapping_at;
use crate::value::{Mapping, Value};

/// Parse INI text into a mapping.
///
/// Lines before the first header go into the root mapping. A `[a.b]` header
/// makes the mapping at `a.b` (created if needed) the target of the lines
/// that follow. Blank lines and lines starting with `;` or `#` are skipped.
/// Keys and header components may be double-quoted. Every value is kept as
/// a string.
pub fn decode(text: &str) -> IniResult<Mapping> {
    let mut root = Mapping::new();
    let mut section: Vec<String> = Vec::new();
    let mut sections = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            let name = rest.strip_suffix(']').ok_or_else(|| IniError::Parse {
                line,
                message: format!("unterminated section header {trimmed:?}"),
            })?;
            section = section_keys(line, name)?;
            root = update_mapping_at(root, &section, |_| {});
            sections += 1;
            continue;
        }

        let (key, value) = parse_assignment(trimmed).map_err(|message| IniError::Parse { line, message })?;
        root = update_mapping_at(root, &section, |map| {
            map.insert(key, Value::String(value));
        });
    }

    tracing::debug!(sections, keys = root.len(), "decoded INI");
    Ok(root)
}

/// Split a header name on `.` into keys.
///
/// Bare components are trimmed and must not be empty. Quoted components are
/// unescaped and kept exactly, dots and all.
fn section_keys(line: usize, name: &str) -> IniResult<Vec<String>> {
    let invalid = |source: PathError| IniError::InvalidSection {
        line,
        name: name.to_string(),
        source,
    };
    if name.trim().is_empty() {
        return Err(invalid(PathError::EmptyPath));
    }

    let mut keys = Vec::new();
    let mut rest = name.trim_start();
    loop {
        let (key, after) = match rest.strip_prefix('"') {
            Some(body) => split_quoted(body).map_err(|message| IniError::Parse { line, message })?,
            None => {
                let end = rest.find('.').unwrap_or(rest.len());
                let key = rest[..end].trim();
                if key.is_empty() {
                    return Err(invalid(PathError::EmptyPathElement { index: keys.len() }));
                }
                (key.to_string(), &rest[end..])
            }
        };
        keys.push(key);

        let after = after.trim_start();
        match after.strip_prefix('.') {
            Some(next) => rest = next.trim_start(),
            None if after.is_empty() => return Ok(keys),
            None => {
                return Err(IniError::Parse {
                    line,
                    message: format!("unexpected text {after:?} in section [{name}]"),
                });
            }
        }
    }
}

fn parse_assignment(line: &str) -> Result<(String, String), String> {
    let (key, value) = match line.strip_prefix('"') {
        Some(body) => {
            let (key, rest) = split_quoted(body)?;
            let value = rest
                .trim_start()
                .strip_prefix('=')
                .ok_or_else(|| format!("expected `=` after quoted key in {line:?}"))?;
            (key, value)
        }
        None => {
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| format!("expected `key = value` or `[section]`, found {line:?}"))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(format!("missing key in {line:?}"));
            }
            (key.to_string(), value)
        }
    };
    Ok((key, unquote(value.trim())?))
}

/// Strip the quoting from a value.
///
/// `"…"` is unescaped, `'…'` is taken verbatim, anything else is already
/// plain text.
fn unquote(raw: &str) -> Result<String, String> {
    if let Some(body) = raw.strip_prefix('"') {
        let (value, rest) = split_quoted(body)?;
        if !rest.trim().is_empty() {
            return Err(format!("unexpected text after closing quote: {rest:?}"));
        }
        return Ok(value);
    }
    if let Some(body) = raw.strip_prefix('\'') {
        return body
            .strip_suffix('\'')
            .map(str::to_string)
            .ok_or_else(|| format!("unterminated quoted value {raw:?}"));
    }
    Ok(raw.to_string())
}

/// Unescape the text after an opening `"` up to its closing quote, returning
/// it along with whatever follows the closing quote.
fn split_quoted(body: &str) -> Result<(String, &str), String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices();
    while let Some((at, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, '\\')) => out.push('\\'),
                Some((_, '"')) => out.push('"'),
                Some((_, 'n')) => out.push('\n'),
                Some((_, 't')) => out.push('\t'),
                Some((_, 'r')) => out.push('\r'),
                Some((_, other)) => return Err(format!("unknown escape sequence \\{other}")),
                None => break,
            },
            '"' => return Ok((out, &body[at + 1..])),
            _ => out.push(c),
        }
    }
    Err(format!("unterminated quoted value \"{body}"))
}
