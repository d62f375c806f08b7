//! Path string parsing.
//!
//! Grammar: keys are separated by `.`, `[` and `]`. Quoted keys (`"…"`,
//! `'…'` or `` `…` ``) are field names taken verbatim, except that a
//! backslash inside quotes takes the next character literally. Unquoted
//! runs of digits up to [`MAX_INDEX`] are indexes, anything else unquoted
//! is a field name. Empty keys are skipped, so `a..b` and `a[]b` both
//! address `a.b`.
//!
//! [`MAX_INDEX`]: super::MAX_INDEX

use super::key::Key;
use thiserror::Error;

/// PathError reports a path string the strict parser refuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("unterminated quote starting at byte {position}")]
    UnterminatedQuote { position: usize },

    #[error("unbalanced bracket at byte {position}")]
    UnbalancedBracket { position: usize },
}

/// Splits `input` into keys. With `strict` unset this never fails.
pub(crate) fn parse_keys(input: &str, strict: bool) -> Result<Vec<Key>, PathError> {
    let mut keys = Vec::new();
    let mut token = String::new();
    let mut open_bracket: Option<usize> = None;
    let mut chars = input.char_indices();

    while let Some((position, c)) = chars.next() {
        match c {
            '"' | '\'' | '`' => {
                flush(&mut token, &mut keys);
                let mut quoted = String::new();
                let mut closed = false;
                let mut escaped = false;
                for (_, q) in chars.by_ref() {
                    if escaped {
                        quoted.push(q);
                        escaped = false;
                    } else if q == '\\' {
                        escaped = true;
                    } else if q == c {
                        closed = true;
                        break;
                    } else {
                        quoted.push(q);
                    }
                }
                if !closed && strict {
                    return Err(PathError::UnterminatedQuote { position });
                }
                keys.push(Key::Field(quoted));
            }
            '.' => flush(&mut token, &mut keys),
            '[' => {
                flush(&mut token, &mut keys);
                if open_bracket.is_some() && strict {
                    return Err(PathError::UnbalancedBracket { position });
                }
                open_bracket = Some(position);
            }
            ']' => {
                flush(&mut token, &mut keys);
                if open_bracket.take().is_none() && strict {
                    return Err(PathError::UnbalancedBracket { position });
                }
            }
            _ => token.push(c),
        }
    }
    flush(&mut token, &mut keys);

    match open_bracket {
        Some(position) if strict => Err(PathError::UnbalancedBracket { position }),
        _ => Ok(keys),
    }
}

fn flush(token: &mut String, keys: &mut Vec<Key>) {
    if !token.is_empty() {
        keys.push(Key::from_token(std::mem::take(token)));
    }
}
