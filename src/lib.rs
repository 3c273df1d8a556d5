#[macro_use]
mod error;
mod book;
mod contact;
mod response;
mod session;
pub mod config;
pub mod logger;
pub mod options;
pub mod parser;

pub use crate::book::ContactBook;
pub use crate::contact::Contact;
pub use crate::error::{MyResult, Status, StatusCode};
pub use crate::options::Options;
pub use crate::parser::{parse, Command};
pub use crate::response::Response;
pub use crate::session::handle_session;
