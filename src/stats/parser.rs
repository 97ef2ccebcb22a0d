use thiserror::Error;

/// Error produced when a token in the numbers field is not a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("could not convert string to float: '{0}'")]
    InvalidNumber(String),
}

pub struct NumberParser;

impl NumberParser {
    /// Parse a comma-separated list of numeric literals.
    ///
    /// Tokens are trimmed and empty tokens are skipped, so `""`, `" , "` and
    /// `"1,,2"` are all accepted. The first invalid token fails the whole list.
    pub fn parse(input: &str) -> Result<Vec<f64>, ParseError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Self::parse_token)
            .collect()
    }

    fn parse_token(token: &str) -> Result<f64, ParseError> {
        token
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber(token.to_string()))
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
