use std::io::{BufRead, Write};

use log::{debug, info};

use crate::book::ContactBook;
use crate::error::MyResult;
use crate::parser::parse;

/// Reads commands line by line until `reader` is exhausted, writing one
/// response per command.
pub fn handle_session<R: BufRead, W: Write>(
    book: &mut ContactBook,
    reader: R,
    writer: &mut W,
) -> MyResult<()> {
    let mut handled = 0;

    for line in reader.lines() {
        let line = line?;
        let command = parse(&line);
        debug!("command: {:?}", command);
        book.apply(command).write(writer)?;
        writer.flush()?;
        handled += 1;
    }

    info!("disconnected after {} lines, {} contacts stored", handled, book.length());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_session() {
        let input = "\
dump
set John 909-876-1234
set Rebecca 111-555-0002
get John
set Amy 111-222-3333
set May 222-333-1111
set Rebecca 999-444-9999
get Rebecca
get Chris

frobnicate
get
";
        let mut book = ContactBook::new(10).unwrap();
        let mut out = vec![];
        handle_session(&mut book, Cursor::new(input), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let mut expected: Vec<String> = (0..10).map(|i| format!("Index {}: Empty", i)).collect();
        expected.push("END".to_owned());
        for line in &[
            "STORED",
            "STORED",
            "John: 909-876-1234",
            "STORED",
            "STORED",
            "STORED",
            "Rebecca: 999-444-9999",
            "NOT_FOUND",
            "ERROR",
            "CLIENT_ERROR ARG COUNT ERROR",
        ] {
            expected.push(line.to_string());
        }
        let lines: Vec<_> = out.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(expected, lines);
        assert_eq!(4, book.length());
    }
}
