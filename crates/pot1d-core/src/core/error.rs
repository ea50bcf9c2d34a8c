use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PotentialError {
    #[error("Operation '{operation}' is not implemented for {potential}")]
    NotImplemented {
        operation: &'static str,
        potential: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Malformed position input '{input}': {source}")]
    MalformedInput {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}
