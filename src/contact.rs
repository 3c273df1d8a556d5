use std::fmt::{Display, Formatter, Result as FmtResult};

/// A stored contact, borrowed from the book that owns it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Contact<'a> {
    pub name: &'a str,
    pub number: &'a str,
}

impl<'a> Contact<'a> {
    pub fn new(name: &'a str, number: &'a str) -> Self {
        Contact { name, number }
    }
}

impl<'a> Display for Contact<'a> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}: {}", self.name, self.number)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_string() {
        let c = Contact::new("John", "909-876-1234");
        assert_eq!("John: 909-876-1234", c.to_string());
        assert_eq!(": ", Contact::new("", "").to_string());
    }
}
