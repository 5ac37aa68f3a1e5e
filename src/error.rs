use std::io;

use serde_json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input ended unexpectedly before line {line}")]
    UnexpectedEof { line: usize },

    #[error("line {line}: missing {what}")]
    MissingToken { line: usize, what: &'static str },

    #[error("line {line}: cannot parse {what} from {token:?}")]
    BadToken {
        line: usize,
        what: &'static str,
        token: String,
    },

    #[error("config key {key} has the wrong type")]
    Config { key: String },

    #[error("config is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("config must be a JSON object")]
    ConfigNotObject,

    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
