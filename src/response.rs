use std::io::Write;

use crate::contact::Contact;
use crate::error::MyResult;

#[derive(Debug, PartialEq)]
pub enum Response<'a> {
    Stored,
    Found(Contact<'a>),
    NotFound,
    Dump(Vec<String>),
    Error,
    ClientError(&'static str),
    Nothing,
}

impl<'a> Response<'a> {
    pub fn write(&self, writer: &mut dyn Write) -> MyResult<()> {
        match self {
            Response::Stored => {
                writer.write_all(b"STORED\r\n")?;
            }
            Response::Found(contact) => {
                writer.write_all(format!("{}\r\n", contact).as_bytes())?;
            }
            Response::NotFound => {
                writer.write_all(b"NOT_FOUND\r\n")?;
            }
            Response::Dump(lines) => {
                for line in lines {
                    writer.write_all(line.as_bytes())?;
                    writer.write_all(b"\r\n")?;
                }
                writer.write_all(b"END\r\n")?;
            }
            Response::Error => {
                writer.write_all(b"ERROR\r\n")?;
            }
            Response::ClientError(e) => {
                writer.write_all(format!("CLIENT_ERROR {}\r\n", e).as_bytes())?;
            }
            Response::Nothing => {}
        }
        Ok(())
    }
}
