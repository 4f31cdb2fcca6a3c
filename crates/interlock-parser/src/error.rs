//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A closing delimiter has no opener to pair with
    #[error("Malformed expression at byte {position}: no opener for '{delimiter}' in '{fragment}'")]
    MalformedExpression {
        fragment: String,
        delimiter: String,
        position: usize,
    },

    /// Recursion limit exceeded
    #[error("Expression nested deeper than {limit} levels: '{fragment}'")]
    ExpressionTooDeep { limit: usize, fragment: String },
}

impl ParseError {
    /// The sub-expression the error refers to
    pub fn fragment(&self) -> &str {
        match self {
            ParseError::MalformedExpression { fragment, .. }
            | ParseError::ExpressionTooDeep { fragment, .. } => fragment,
        }
    }

    /// Byte offset of the offending delimiter, if known
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::MalformedExpression { position, .. } => Some(*position),
            ParseError::ExpressionTooDeep { .. } => None,
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let error = ParseError::MalformedExpression {
            fragment: "A}".to_string(),
            delimiter: "}".to_string(),
            position: 1,
        };
        assert!(error.to_string().contains("byte 1"));
        assert!(error.to_string().contains("'}'"));
        assert_eq!(error.fragment(), "A}");
        assert_eq!(error.position(), Some(1));
    }

    #[test]
    fn test_too_deep_display() {
        let error = ParseError::ExpressionTooDeep {
            limit: 4,
            fragment: "[[[[A]]]]".to_string(),
        };
        assert!(error.to_string().contains("4 levels"));
        assert_eq!(error.position(), None);
    }
}
