//! File selection parsing
//!
//! Terminals deliver a drag & drop as pasted text. Depending on the emulator
//! that text is a shell-quoted path list, one path per line, or `file://`
//! URIs. The picker input accepts the same forms.

use std::path::PathBuf;

use percent_encoding::percent_decode_str;

const FILE_SCHEME: &str = "file://";

/// Split a selection string into file paths
pub fn parse_selection(input: &str) -> Vec<PathBuf> {
    tokenize(input)
        .into_iter()
        .filter(|token| !token.is_empty())
        .map(|token| to_path(&token))
        .collect()
}

fn to_path(token: &str) -> PathBuf {
    match token.strip_prefix(FILE_SCHEME) {
        Some(rest) => {
            let rest = rest.strip_prefix("localhost").unwrap_or(rest);
            PathBuf::from(percent_decode_str(rest).decode_utf8_lossy().into_owned())
        }
        None => PathBuf::from(token),
    }
}

fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_token = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('\''), _) => current.push(c),
            (Some(q), _) if c == q => quote = None,
            (_, '\\') => {
                match chars.peek() {
                    Some(&next) if escapes(quote, next) => {
                        current.push(next);
                        chars.next();
                    }
                    // a lone backslash is part of the path, e.g. `C:\Users`
                    _ => current.push(c),
                }
                in_token = true;
            }
            (None, '\'' | '"') => {
                quote = Some(c);
                in_token = true;
            }
            (None, _) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            _ => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}

/// Whether a backslash before `next` is a shell escape rather than a path separator
fn escapes(quote: Option<char>, next: char) -> bool {
    match quote {
        Some(_) => matches!(next, '"' | '\\' | '$' | '`'),
        None => !next.is_alphanumeric(),
    }
}
