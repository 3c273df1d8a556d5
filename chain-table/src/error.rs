use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::result;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StatusCode {
    InvalidArgument,
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

pub type MyResult<T> = result::Result<T, Status>;

macro_rules! err {
    ($code:expr, $msg:expr) => {
        Err($crate::error::Status::new($code, $msg))
    };
}
