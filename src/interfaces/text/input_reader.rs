use crate::domain::dimensions::Dimensions;
use crate::error::{Result, StringCountError};

/// Parses raw input text into validated `Dimensions`.
///
/// The text must hold exactly two whitespace-separated tokens, N then K.
/// Each token is parsed strictly as a base-10 `i32`: an optional sign
/// followed by digits, nothing else. Values that overflow `i32` are
/// format errors, not range errors.
pub fn parse_input(text: &str) -> Result<Dimensions> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [length, alphabet] = tokens[..] else {
        return Err(StringCountError::TokenCount {
            found: tokens.len(),
        });
    };

    let length = parse_integer(length)?;
    let alphabet = parse_integer(alphabet)?;
    Dimensions::new(length, alphabet)
}

fn parse_integer(token: &str) -> Result<i32> {
    token.parse().map_err(|_| StringCountError::Format {
        token: token.to_string(),
    })
}
