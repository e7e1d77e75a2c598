use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    IndexNotFound,
    RefNotFound,
    Parse,
    InvalidArgument,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ErrorKind::IndexNotFound => "index not found",
            ErrorKind::RefNotFound => "ref not found",
            ErrorKind::Parse => "parse error",
            ErrorKind::InvalidArgument => "invalid argument",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {context}")]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn index_not_found(name: &str) -> Self {
        Error::new(ErrorKind::IndexNotFound, format!("index '{}' does not exist", name))
    }

    pub fn ref_not_found(id: &str) -> Self {
        Error::new(ErrorKind::RefNotFound, format!("document '{}' does not exist", id))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Parse,
            context: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
