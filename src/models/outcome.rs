use std::io::{self, Write};

use thiserror::Error;

use crate::utils::constants::{ERROR_EXCERPT_CHARS, SUCCESS_LABEL, TRANSPORT_FAILURE_LABEL};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status.
    #[error("Request failed ({status})")]
    RemoteRejection { status: u16, body_excerpt: String },

    /// No response was obtained at all.
    #[error("{description}")]
    TransportFailure { description: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::TransportFailure {
            description: describe(&err),
        }
    }
}

/// Flattens an error and its sources into one line, e.g.
/// `error sending request for url (...): client error (Connect): Connection refused`.
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}

pub fn excerpt(body: &str) -> String {
    body.chars().take(ERROR_EXCERPT_CHARS).collect()
}

pub fn report<W: Write>(outcome: &Result<String, FetchError>, out: &mut W) -> io::Result<()> {
    match outcome {
        Ok(body) => {
            writeln!(out, "{}", SUCCESS_LABEL)?;
            writeln!(out, "{}", body)?;
        }
        Err(err @ FetchError::RemoteRejection { body_excerpt, .. }) => {
            writeln!(out, "{}", err)?;
            writeln!(out, "{}", body_excerpt)?;
        }
        Err(FetchError::TransportFailure { description }) => {
            writeln!(out, "{}", TRANSPORT_FAILURE_LABEL)?;
            writeln!(out, "{}", description)?;
        }
    }
    out.flush()
}
