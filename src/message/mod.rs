mod error;
mod types;

pub use error::{HeaderParseError, MessageError};
pub use types::RawMessage;

use std::fs;
use std::io;
use std::path::Path;

/// Lit et décode un fichier mail. Le corps est conservé mais ignoré.
pub fn load_message(path: impl AsRef<Path>) -> Result<RawMessage, MessageError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MessageError::not_found(path),
        _ => MessageError::read(path, source),
    })?;
    let msg = parse_message(&text).map_err(|source| MessageError::parse(path, source))?;

    #[cfg(feature = "with-tracing")]
    tracing::debug!(headers = msg.header_count(), "message loaded");

    Ok(msg)
}

/// Découpe `Name: value` jusqu'à la première ligne vide. Les lignes de
/// continuation (espace ou tabulation en tête) sont rattachées à la valeur
/// précédente, saut de ligne conservé.
pub fn parse_message(text: &str) -> Result<RawMessage, HeaderParseError> {
    let mut headers: Vec<(String, String)> = Vec::new();
    let mut body = String::new();
    let mut in_body = false;

    for (index, line) in text.lines().enumerate() {
        if in_body {
            body.push_str(line);
            body.push('\n');
            continue;
        }
        if line.is_empty() {
            in_body = true;
            continue;
        }
        if line.starts_with(' ') || line.starts_with('\t') {
            match headers.last_mut() {
                Some((_, value)) => {
                    value.push('\n');
                    value.push_str(line.trim_end());
                }
                None => return Err(malformed(index, line)),
            }
            continue;
        }
        match line.split_once(':') {
            Some((name, value)) => {
                headers.push((name.trim().to_string(), value.trim().to_string()));
            }
            None => return Err(malformed(index, line)),
        }
    }

    Ok(RawMessage::new(headers, body))
}

fn malformed(index: usize, line: &str) -> HeaderParseError {
    let mut chars = line.chars();
    let mut snippet: String = chars.by_ref().take(60).collect();
    if chars.next().is_some() {
        snippet.push_str("...");
    }
    HeaderParseError {
        line: index + 1,
        snippet,
    }
}
