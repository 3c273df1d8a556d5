use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use std::result;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StatusCode {
    InvalidArgument,
    NotFound,
    IOError,
    ConfigError,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Status {
    pub code: StatusCode,
    pub msg: String,
}

impl Status {
    pub(crate) fn new(code: StatusCode, msg: &str) -> Self {
        let msg = if msg.is_empty() {
            format!("{:?}", code)
        } else {
            format!("{:?}: {}", code, msg)
        };
        Status { code, msg }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.msg)
    }
}

impl Error for Status {}

impl From<io::Error> for Status {
    fn from(e: io::Error) -> Self {
        let code = match e.kind() {
            io::ErrorKind::NotFound => StatusCode::NotFound,
            _ => StatusCode::IOError,
        };
        Status::new(code, &e.to_string())
    }
}

impl From<toml::de::Error> for Status {
    fn from(e: toml::de::Error) -> Self {
        Status::new(StatusCode::ConfigError, &e.to_string())
    }
}

impl From<chain_table::Status> for Status {
    fn from(e: chain_table::Status) -> Self {
        let code = match e.code {
            chain_table::StatusCode::InvalidArgument => StatusCode::InvalidArgument,
        };
        Status { code, msg: e.msg }
    }
}

pub type MyResult<T> = result::Result<T, Status>;

macro_rules! err {
    ($code:expr, $msg:expr) => {
        Err($crate::error::Status::new($code, $msg))
    };
}
