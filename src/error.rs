use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum StringCountError {
    #[error("input must contain exactly two numbers, N and K (found {found} tokens)")]
    #[diagnostic(
        code(string_count::token_count),
        help("write N and K separated by whitespace, e.g. `2 3`")
    )]
    TokenCount { found: usize },

    #[error("inputs must be integers, got {token:?}")]
    #[diagnostic(code(string_count::format))]
    Format { token: String },

    #[error("{name} must be in the range 1 to 100 inclusive, got {value}")]
    #[diagnostic(code(string_count::range))]
    Range { name: char, value: i32 },

    #[error("IO error: {0}")]
    #[diagnostic(code(string_count::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StringCountError>;
